//! Sphere/plane intersection engine: delegates to
//! [`plane_sphere`](super::plane_sphere).

use super::plane_sphere;
use nalgebra::Vector3;
use pegasus_core::shapes::{Plane, Sphere};

/// Scratch cache wrapping the canonical plane/sphere cache.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub(crate) plane_sphere: plane_sphere::Cache,
}

/// Tests with the canonical engine and swapped arguments.
pub fn test(sphere: &Sphere, plane: &Plane, cache: &mut Cache) -> bool {
    plane_sphere::test(plane, sphere, &mut cache.plane_sphere)
}

/// Contact normal on the plane: the canonical normal, negated.
pub fn contact_normal(sphere: &Sphere, plane: &Plane, cache: &mut Cache) -> Vector3<f64> {
    -plane_sphere::contact_normal(plane, sphere, &mut cache.plane_sphere)
}

/// Penetration from the canonical engine.
pub fn penetration(sphere: &Sphere, plane: &Plane, cache: &mut Cache) -> f64 {
    plane_sphere::penetration(plane, sphere, &mut cache.plane_sphere)
}
