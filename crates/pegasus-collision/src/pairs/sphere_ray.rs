//! Sphere/ray intersection engine: delegates to [`ray_sphere`](super::ray_sphere).

use super::ray_sphere;
use nalgebra::Vector3;
use pegasus_core::shapes::{Ray, Sphere};

/// Scratch cache wrapping the canonical ray/sphere cache.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub(crate) ray_sphere: ray_sphere::Cache,
}

/// Tests with the canonical engine and swapped arguments.
pub fn test(sphere: &Sphere, ray: &Ray, cache: &mut Cache) -> bool {
    ray_sphere::test(ray, sphere, &mut cache.ray_sphere)
}

/// Contact normal on the ray, opposite its direction.
///
/// Runs the canonical normal computation first so the entry and exit
/// points are cached for the penetration phase.
pub fn contact_normal(sphere: &Sphere, ray: &Ray, cache: &mut Cache) -> Vector3<f64> {
    ray_sphere::contact_normal(ray, sphere, &mut cache.ray_sphere);
    -ray.direction
}

/// Penetration from the canonical engine.
pub fn penetration(sphere: &Sphere, ray: &Ray, cache: &mut Cache) -> f64 {
    ray_sphere::penetration(ray, sphere, &mut cache.ray_sphere)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_delegates_through_canonical_cache() {
        let mut cache = Cache::default();
        let sphere = Sphere::new(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(test(&sphere, &ray, &mut cache));
        assert_relative_eq!(
            contact_normal(&sphere, &ray, &mut cache),
            Vector3::new(0.0, 0.0, -1.0)
        );
        assert_relative_eq!(penetration(&sphere, &ray, &mut cache), 2.0, epsilon = 1e-9);
    }
}
