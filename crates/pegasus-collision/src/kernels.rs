//! Analytic intersection kernels shared by the pair engines.

use nalgebra::Vector3;

/// Ray factors of the entry and exit intersection points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayIntersectionFactors {
    /// Factor of the entry point.
    pub t_min: f64,
    /// Factor of the exit point.
    pub t_max: f64,
}

/// Tests whether a ray intersects a sphere.
///
/// `ray_sphere` is the vector from the ray origin to the sphere center;
/// `direction` must be unit length.
pub fn ray_sphere_intersection(
    ray_sphere: Vector3<f64>,
    sphere_radius: f64,
    direction: Vector3<f64>,
) -> bool {
    let t_center = ray_sphere.dot(&direction);
    let distance_square = ray_sphere.dot(&ray_sphere) - t_center * t_center;

    sphere_radius * sphere_radius - distance_square >= 0.0
}

/// Ray factors of the two sphere intersection points.
///
/// Precondition: [`ray_sphere_intersection`] returned `true` for the
/// same arguments.
pub fn ray_sphere_intersection_factors(
    ray_sphere: Vector3<f64>,
    sphere_radius: f64,
    direction: Vector3<f64>,
) -> RayIntersectionFactors {
    let t_center = ray_sphere.dot(&direction);
    let distance_square = ray_sphere.dot(&ray_sphere) - t_center * t_center;
    let t_delta = (sphere_radius * sphere_radius - distance_square).sqrt();

    RayIntersectionFactors {
        t_min: t_center - t_delta,
        t_max: t_center + t_delta,
    }
}

/// Slab-test factors for a ray against an axis-aligned box.
///
/// Zero direction components divide to IEEE infinities; the min/max
/// folding is written to keep that behavior intact.
pub fn ray_aabb_intersection_factors(
    box_min: Vector3<f64>,
    box_max: Vector3<f64>,
    direction: Vector3<f64>,
    origin: Vector3<f64>,
) -> RayIntersectionFactors {
    let t1 = (box_min.x - origin.x) / direction.x;
    let t2 = (box_max.x - origin.x) / direction.x;
    let t3 = (box_min.y - origin.y) / direction.y;
    let t4 = (box_max.y - origin.y) / direction.y;
    let t5 = (box_min.z - origin.z) / direction.z;
    let t6 = (box_max.z - origin.z) / direction.z;

    RayIntersectionFactors {
        t_min: t1.min(t2).max(t3.min(t4)).max(t5.min(t6)),
        t_max: t1.max(t2).min(t3.max(t4)).min(t5.max(t6)),
    }
}

/// Tests whether slab factors indicate an intersection.
///
/// `t_max <= 0` places the box behind the ray; `t_min >= t_max` means
/// the per-axis intervals do not overlap.
pub fn ray_aabb_intersection(t_min: f64, t_max: f64) -> bool {
    t_max > 0.0 && t_min < t_max
}
