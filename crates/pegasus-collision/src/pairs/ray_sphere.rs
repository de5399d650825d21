//! Ray/sphere intersection engine.

use crate::kernels;
use nalgebra::{Point3, Vector3};
use pegasus_core::shapes::{Ray, Sphere};

/// Scratch cache for the ray/sphere engine.
#[derive(Debug, Clone)]
pub struct Cache {
    pub(crate) intersection: bool,
    pub(crate) in_point: Point3<f64>,
    pub(crate) out_point: Point3<f64>,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            intersection: false,
            in_point: Point3::origin(),
            out_point: Point3::origin(),
        }
    }
}

/// Tests a ray against a sphere.
pub fn test(ray: &Ray, sphere: &Sphere, cache: &mut Cache) -> bool {
    cache.intersection = kernels::ray_sphere_intersection(
        sphere.center_of_mass - ray.center_of_mass,
        sphere.radius,
        ray.direction,
    );

    cache.intersection
}

/// Contact normal on the sphere at the ray's entry point.
pub fn contact_normal(ray: &Ray, sphere: &Sphere, cache: &mut Cache) -> Vector3<f64> {
    if cache.intersection {
        let factors = kernels::ray_sphere_intersection_factors(
            sphere.center_of_mass - ray.center_of_mass,
            sphere.radius,
            ray.direction,
        );

        cache.in_point = ray.center_of_mass + ray.direction * factors.t_min;
        cache.out_point = ray.center_of_mass + ray.direction * factors.t_max;
    }

    (cache.in_point - sphere.center_of_mass).normalize()
}

/// Chord length between the entry and exit points.
pub fn penetration(_ray: &Ray, _sphere: &Sphere, cache: &mut Cache) -> f64 {
    (cache.in_point - cache.out_point).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_through_sphere() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);

        assert!(test(&ray, &sphere, &mut cache));

        let normal = contact_normal(&ray, &sphere, &mut cache);
        assert_relative_eq!(normal, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-9);
        assert_relative_eq!(cache.in_point, Point3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(cache.out_point, Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(penetration(&ray, &sphere, &mut cache), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_ray_misses() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(0.0, 2.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);

        assert!(!test(&ray, &sphere, &mut cache));
    }

    #[test]
    fn test_tangent_ray_grazes() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(0.0, 1.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);

        assert!(test(&ray, &sphere, &mut cache));
        contact_normal(&ray, &sphere, &mut cache);
        assert_relative_eq!(penetration(&ray, &sphere, &mut cache), 0.0, epsilon = 1e-9);
    }
}
