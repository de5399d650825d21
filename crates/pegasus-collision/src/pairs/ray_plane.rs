//! Ray/plane intersection engine.

use nalgebra::{Point3, Vector3};
use pegasus_core::math::HyperPlane;
use pegasus_core::shapes::{Plane, Ray};

/// Scratch cache for the ray/plane engine.
#[derive(Debug, Clone)]
pub struct Cache {
    pub(crate) contact: Point3<f64>,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            contact: Point3::origin(),
        }
    }
}

/// Tests a ray against a plane, caching the contact point on a hit.
pub fn test(ray: &Ray, plane: &Plane, cache: &mut Cache) -> bool {
    let hyper_plane = HyperPlane::new(plane.normal, plane.center_of_mass);

    match hyper_plane.ray_intersection(ray.direction, ray.center_of_mass) {
        Some(contact) => {
            cache.contact = contact;
            true
        }
        None => false,
    }
}

/// The contact normal carries the ray direction: a ray that hits a plane
/// stays inside it past the contact point.
pub fn contact_normal(ray: &Ray, _plane: &Plane, _cache: &mut Cache) -> Vector3<f64> {
    ray.direction
}

/// A plane has no finite penetrable depth.
pub fn penetration(_ray: &Ray, _plane: &Plane, _cache: &mut Cache) -> f64 {
    f64::MAX
}
