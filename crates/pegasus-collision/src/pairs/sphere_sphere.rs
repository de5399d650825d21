//! Sphere/sphere intersection engine.

use nalgebra::Vector3;
use pegasus_core::shapes::Sphere;

/// Scratch cache for the sphere/sphere engine.
#[derive(Debug, Clone)]
pub struct Cache {
    pub(crate) ba_vector: Vector3<f64>,
    pub(crate) radius_sum: f64,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            ba_vector: Vector3::zeros(),
            radius_sum: 0.0,
        }
    }
}

/// Two spheres overlap when their center distance is below the radius
/// sum.
pub fn test(a: &Sphere, b: &Sphere, cache: &mut Cache) -> bool {
    cache.ba_vector = a.center_of_mass - b.center_of_mass;
    cache.radius_sum = a.radius + b.radius;

    cache.radius_sum * cache.radius_sum > cache.ba_vector.norm_squared()
}

/// Contact normal on the second sphere, along the center line.
pub fn contact_normal(_a: &Sphere, _b: &Sphere, cache: &mut Cache) -> Vector3<f64> {
    cache.ba_vector.normalize()
}

/// Overlap of the two radii along the center line.
pub fn penetration(_a: &Sphere, _b: &Sphere, cache: &mut Cache) -> f64 {
    cache.radius_sum - cache.ba_vector.norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_overlapping_spheres() {
        let mut cache = Cache::default();
        let a = Sphere::new(Point3::origin(), 1.0);
        let b = Sphere::new(Point3::new(1.5, 0.0, 0.0), 1.0);

        assert!(test(&a, &b, &mut cache));
        assert_relative_eq!(
            contact_normal(&a, &b, &mut cache),
            Vector3::new(-1.0, 0.0, 0.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(penetration(&a, &b, &mut cache), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_separated_spheres_miss() {
        let mut cache = Cache::default();
        let a = Sphere::new(Point3::origin(), 1.0);
        let b = Sphere::new(Point3::new(3.0, 0.0, 0.0), 1.0);

        assert!(!test(&a, &b, &mut cache));
    }

    #[test]
    fn test_touching_spheres_miss() {
        // Strict inequality: exact touching is not an overlap.
        let mut cache = Cache::default();
        let a = Sphere::new(Point3::origin(), 1.0);
        let b = Sphere::new(Point3::new(2.0, 0.0, 0.0), 1.0);

        assert!(!test(&a, &b, &mut cache));
    }
}
