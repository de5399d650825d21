//! Plane/box intersection engine.

use nalgebra::Vector3;
use pegasus_core::math;
use pegasus_core::shapes::{Box, Plane};

/// Scratch cache for the plane/box engine.
#[derive(Debug, Clone)]
pub struct Cache {
    pub(crate) box_faces: [Vector3<f64>; 6],
    pub(crate) box_face_distances: [f64; 6],
    pub(crate) box_penetrations: [f64; 8],
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            box_faces: [Vector3::zeros(); 6],
            box_face_distances: [0.0; 6],
            box_penetrations: [0.0; 8],
        }
    }
}

/// The box overlaps the plane when at least one vertex is on the back
/// side.
pub fn test(plane: &Plane, box_: &Box, cache: &mut Cache) -> bool {
    cache.box_faces = [
        box_.i_axis,
        box_.j_axis,
        box_.k_axis,
        -box_.i_axis,
        -box_.j_axis,
        -box_.k_axis,
    ];

    let vertices = math::box_vertices(box_.i_axis, box_.j_axis, box_.k_axis);
    let plane_distance = plane.center_of_mass.coords.dot(&plane.normal);
    for (penetration, offset) in cache.box_penetrations.iter_mut().zip(vertices) {
        let vertex = box_.center_of_mass + offset;
        *penetration = plane_distance - vertex.coords.dot(&plane.normal);
    }
    cache.box_penetrations.sort_by(f64::total_cmp);

    cache.box_penetrations[7] >= 0.0
}

/// Contact normal on the box: the half-axis facing most against the
/// plane normal.
pub fn contact_normal(plane: &Plane, _box: &Box, cache: &mut Cache) -> Vector3<f64> {
    for (distance, face) in cache.box_face_distances.iter_mut().zip(cache.box_faces) {
        *distance = face.dot(&plane.normal);
    }

    let mut min_index = 0;
    for (index, distance) in cache.box_face_distances.iter().enumerate() {
        if *distance < cache.box_face_distances[min_index] {
            min_index = index;
        }
    }

    cache.box_faces[min_index].normalize()
}

/// Deepest vertex penetration behind the plane.
pub fn penetration(_plane: &Plane, _box: &Box, cache: &mut Cache) -> f64 {
    cache.box_penetrations[7]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn unit_box_at(center: Point3<f64>) -> Box {
        Box::new(
            center,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_box_cutting_plane() {
        let mut cache = Cache::default();
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        let box_ = unit_box_at(Point3::new(0.0, 0.5, 0.0));

        assert!(test(&plane, &box_, &mut cache));
        assert_relative_eq!(
            contact_normal(&plane, &box_, &mut cache),
            Vector3::new(0.0, -1.0, 0.0),
            epsilon = 1e-9
        );
        // The lowest vertices sit at y = -0.5.
        assert_relative_eq!(penetration(&plane, &box_, &mut cache), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_box_above_plane_misses() {
        let mut cache = Cache::default();
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        let box_ = unit_box_at(Point3::new(0.0, 3.0, 0.0));

        assert!(!test(&plane, &box_, &mut cache));
    }

    #[test]
    fn test_box_touching_plane_hits() {
        let mut cache = Cache::default();
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        let box_ = unit_box_at(Point3::new(0.0, 1.0, 0.0));

        assert!(test(&plane, &box_, &mut cache));
        assert_relative_eq!(penetration(&plane, &box_, &mut cache), 0.0, epsilon = 1e-9);
    }
}
