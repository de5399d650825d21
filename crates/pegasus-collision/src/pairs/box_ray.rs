//! Box/ray intersection engine: delegates to [`ray_box`](super::ray_box).

use super::ray_box;
use nalgebra::Vector3;
use pegasus_core::shapes::{Box, Ray};

/// Scratch cache wrapping the canonical ray/box cache.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub(crate) ray_box: ray_box::Cache,
}

/// Tests with the canonical engine and swapped arguments.
pub fn test(box_: &Box, ray: &Ray, cache: &mut Cache) -> bool {
    ray_box::test(ray, box_, &mut cache.ray_box)
}

/// Contact normal on the ray: its direction.
///
/// Runs the canonical normal computation first so the world-space entry
/// and exit points are cached for the penetration phase.
pub fn contact_normal(box_: &Box, ray: &Ray, cache: &mut Cache) -> Vector3<f64> {
    ray_box::contact_normal(ray, box_, &mut cache.ray_box);
    ray.direction
}

/// Penetration from the canonical engine.
pub fn penetration(box_: &Box, ray: &Ray, cache: &mut Cache) -> f64 {
    ray_box::penetration(ray, box_, &mut cache.ray_box)
}
