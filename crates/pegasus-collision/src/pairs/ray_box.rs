//! Ray/box intersection engine.
//!
//! The oriented box is turned into an AABB by moving the ray into box
//! space: the model matrix's columns are the normalized half-axes, and
//! the AABB comes from the raw half-axes.

use crate::kernels;
use nalgebra::{Matrix3, Point3, Vector3};
use pegasus_core::math;
use pegasus_core::shapes::{Box, Ray};

/// Scratch cache for the ray/box engine.
#[derive(Debug, Clone)]
pub struct Cache {
    pub(crate) ray_direction_box_space: Vector3<f64>,
    pub(crate) ray_origin_box_space: Vector3<f64>,
    pub(crate) box_model_matrix: Matrix3<f64>,
    pub(crate) aabb_min: Vector3<f64>,
    pub(crate) aabb_max: Vector3<f64>,
    pub(crate) in_point_box_space: Vector3<f64>,
    pub(crate) out_point_box_space: Vector3<f64>,
    pub(crate) in_point: Point3<f64>,
    pub(crate) out_point: Point3<f64>,
    pub(crate) box_contact_normal: Vector3<f64>,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            ray_direction_box_space: Vector3::zeros(),
            ray_origin_box_space: Vector3::zeros(),
            box_model_matrix: Matrix3::zeros(),
            aabb_min: Vector3::zeros(),
            aabb_max: Vector3::zeros(),
            in_point_box_space: Vector3::zeros(),
            out_point_box_space: Vector3::zeros(),
            in_point: Point3::origin(),
            out_point: Point3::origin(),
            box_contact_normal: Vector3::zeros(),
        }
    }
}

/// Tests a ray against an oriented box with the slab test in box space.
pub fn test(ray: &Ray, box_: &Box, cache: &mut Cache) -> bool {
    cache.box_model_matrix = Matrix3::from_columns(&[
        box_.i_axis.normalize(),
        box_.j_axis.normalize(),
        box_.k_axis.normalize(),
    ]);
    // Collinear axes leave no inverse; the zero fallback degrades to a
    // miss through the slab test.
    let inverse = cache
        .box_model_matrix
        .try_inverse()
        .unwrap_or_else(Matrix3::zeros);

    cache.ray_direction_box_space = inverse * ray.direction;
    cache.ray_origin_box_space = inverse * (ray.center_of_mass - box_.center_of_mass);

    let aabb = math::extremal_vertices_aabb(box_.i_axis, box_.j_axis, box_.k_axis);
    cache.aabb_min = aabb.min;
    cache.aabb_max = aabb.max;

    let factors = kernels::ray_aabb_intersection_factors(
        cache.aabb_min,
        cache.aabb_max,
        cache.ray_direction_box_space,
        cache.ray_origin_box_space,
    );

    cache.in_point_box_space =
        cache.ray_origin_box_space + cache.ray_direction_box_space * factors.t_min;
    cache.out_point_box_space =
        cache.ray_origin_box_space + cache.ray_direction_box_space * factors.t_max;

    kernels::ray_aabb_intersection(factors.t_min, factors.t_max)
}

/// Contact normal of the box face containing the entry point.
///
/// Also lifts the cached entry and exit points into world space for the
/// penetration phase.
pub fn contact_normal(_ray: &Ray, box_: &Box, cache: &mut Cache) -> Vector3<f64> {
    let faces = [
        cache.aabb_max.x,
        cache.aabb_max.y,
        cache.aabb_max.z,
        cache.aabb_min.x,
        cache.aabb_min.y,
        cache.aabb_min.z,
    ];
    let deltas = [
        faces[0] - cache.in_point_box_space.x,
        faces[1] - cache.in_point_box_space.y,
        faces[2] - cache.in_point_box_space.z,
        faces[3] - cache.in_point_box_space.x,
        faces[4] - cache.in_point_box_space.y,
        faces[5] - cache.in_point_box_space.z,
    ];

    let mut contact_face = 0;
    for (index, delta) in deltas.iter().enumerate() {
        if delta.abs() < deltas[contact_face].abs() {
            contact_face = index;
        }
    }

    cache.in_point = box_.center_of_mass + cache.box_model_matrix * cache.in_point_box_space;
    cache.out_point = box_.center_of_mass + cache.box_model_matrix * cache.out_point_box_space;

    let mut normal = Vector3::zeros();
    normal[contact_face % 3] = faces[contact_face];
    cache.box_contact_normal = (cache.box_model_matrix * normal).normalize();

    cache.box_contact_normal
}

/// World-space distance between the entry and exit points.
pub fn penetration(_ray: &Ray, _box: &Box, cache: &mut Cache) -> f64 {
    (cache.out_point - cache.in_point).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Box {
        Box::new(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_ray_through_box() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
        let box_ = unit_box();

        assert!(test(&ray, &box_, &mut cache));

        let normal = contact_normal(&ray, &box_, &mut cache);
        assert_relative_eq!(normal, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-9);
        assert_relative_eq!(cache.in_point, Point3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(cache.out_point, Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(penetration(&ray, &box_, &mut cache), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ray_hits_side_face() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(10.0, 0.5, 0.0), Vector3::new(-1.0, 0.0, 0.0));
        let box_ = unit_box();

        assert!(test(&ray, &box_, &mut cache));

        let normal = contact_normal(&ray, &box_, &mut cache);
        assert_relative_eq!(normal, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_offset_ray_misses() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(3.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(!test(&ray, &unit_box(), &mut cache));
    }

    #[test]
    fn test_box_behind_ray_misses() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(!test(&ray, &unit_box(), &mut cache));
    }

    #[test]
    fn test_translated_box_hit() {
        let mut cache = Cache::default();
        let ray = Ray::new(Point3::new(5.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
        let box_ = Box::new(
            Point3::new(5.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );

        assert!(test(&ray, &box_, &mut cache));
        contact_normal(&ray, &box_, &mut cache);
        assert_relative_eq!(penetration(&ray, &box_, &mut cache), 2.0, epsilon = 1e-9);
    }
}
