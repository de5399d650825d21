//! Box/plane intersection engine: delegates to [`plane_box`](super::plane_box).

use super::plane_box;
use nalgebra::Vector3;
use pegasus_core::shapes::{Box, Plane};

/// Scratch cache wrapping the canonical plane/box cache.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub(crate) plane_box: plane_box::Cache,
}

/// Tests with the canonical engine and swapped arguments.
pub fn test(box_: &Box, plane: &Plane, cache: &mut Cache) -> bool {
    plane_box::test(plane, box_, &mut cache.plane_box)
}

/// Contact normal on the plane: its own normal.
pub fn contact_normal(_box: &Box, plane: &Plane, _cache: &mut Cache) -> Vector3<f64> {
    plane.normal
}

/// Penetration from the canonical engine.
pub fn penetration(box_: &Box, plane: &Plane, cache: &mut Cache) -> f64 {
    plane_box::penetration(plane, box_, &mut cache.plane_box)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_normal_is_plane_normal() {
        let mut cache = Cache::default();
        let box_ = Box::new(
            Point3::new(0.0, 0.5, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));

        assert!(test(&box_, &plane, &mut cache));
        assert_relative_eq!(
            contact_normal(&box_, &plane, &mut cache),
            Vector3::new(0.0, 1.0, 0.0)
        );
        assert_relative_eq!(penetration(&box_, &plane, &mut cache), 0.5, epsilon = 1e-9);
    }
}
