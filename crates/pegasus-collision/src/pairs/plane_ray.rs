//! Plane/ray intersection engine: delegates to [`ray_plane`](super::ray_plane).

use super::ray_plane;
use nalgebra::Vector3;
use pegasus_core::shapes::{Plane, Ray};

/// Scratch cache wrapping the canonical ray/plane cache.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub(crate) ray_plane: ray_plane::Cache,
}

/// Tests with the canonical engine and swapped arguments.
pub fn test(plane: &Plane, ray: &Ray, cache: &mut Cache) -> bool {
    ray_plane::test(ray, plane, &mut cache.ray_plane)
}

/// Contact normal on the ray, opposite its direction.
pub fn contact_normal(_plane: &Plane, ray: &Ray, _cache: &mut Cache) -> Vector3<f64> {
    -ray.direction
}

/// Penetration from the canonical engine.
pub fn penetration(plane: &Plane, ray: &Ray, cache: &mut Cache) -> f64 {
    ray_plane::penetration(ray, plane, &mut cache.ray_plane)
}
