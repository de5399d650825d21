//! Ray/ray intersection engine.

use nalgebra::{Matrix3, Point3, Vector3};
use pegasus_core::shapes::Ray;
use tracing::debug;

/// Squared closest-approach distance below which skew rays intersect.
const CLOSEST_APPROACH_EPSILON: f64 = 1e-10;

/// Scratch cache for the ray/ray engine.
#[derive(Debug, Clone)]
pub struct Cache {
    pub(crate) denominator: f64,
    pub(crate) a_closest_approach: Point3<f64>,
    pub(crate) b_closest_approach: Point3<f64>,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            denominator: 0.0,
            a_closest_approach: Point3::origin(),
            b_closest_approach: Point3::origin(),
        }
    }
}

/// Tests two rays for intersection.
///
/// Solves for the closest points of the two lines with Cramer's rule;
/// the rays intersect when those points (nearly) coincide. Parallel
/// rays are reported as a miss.
pub fn test(a: &Ray, b: &Ray, cache: &mut Cache) -> bool {
    let origin_delta = b.center_of_mass - a.center_of_mass;
    let normal = a.direction.cross(&b.direction);
    cache.denominator = normal.norm_squared();

    if cache.denominator == 0.0 {
        debug!("ray/ray: parallel directions, reporting miss");
        return false;
    }

    let t_a = Matrix3::from_columns(&[origin_delta, b.direction, normal]).determinant()
        / cache.denominator;
    let t_b = Matrix3::from_columns(&[origin_delta, a.direction, normal]).determinant()
        / cache.denominator;

    cache.a_closest_approach = a.center_of_mass + a.direction * t_a;
    cache.b_closest_approach = b.center_of_mass + b.direction * t_b;

    (cache.a_closest_approach - cache.b_closest_approach).norm_squared()
        < CLOSEST_APPROACH_EPSILON
}

/// Contact normal on the second ray.
pub fn contact_normal(a: &Ray, b: &Ray, _cache: &mut Cache) -> Vector3<f64> {
    b.direction.cross(&a.direction).cross(&b.direction).normalize()
}

/// Rays have no volume, so the penetration depth is zero.
pub fn penetration(_a: &Ray, _b: &Ray, _cache: &mut Cache) -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crossing_rays_intersect() {
        let mut cache = Cache::default();
        let a = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
        let b = Ray::new(Point3::new(1.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0));

        assert!(test(&a, &b, &mut cache));
        assert_relative_eq!(cache.a_closest_approach, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(cache.b_closest_approach, Point3::new(1.0, 0.0, 0.0));

        let normal = contact_normal(&a, &b, &mut cache);
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(penetration(&a, &b, &mut cache), 0.0);
    }

    #[test]
    fn test_parallel_rays_miss() {
        let mut cache = Cache::default();
        let a = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
        let b = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

        assert!(!test(&a, &b, &mut cache));
    }

    #[test]
    fn test_skew_rays_miss() {
        let mut cache = Cache::default();
        let a = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
        let b = Ray::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0));

        assert!(!test(&a, &b, &mut cache));
    }
}
