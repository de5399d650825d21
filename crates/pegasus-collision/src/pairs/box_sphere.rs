//! Box/sphere intersection engine: delegates to
//! [`sphere_box`](super::sphere_box).

use super::sphere_box;
use nalgebra::Vector3;
use pegasus_core::shapes::{Box, Sphere};

/// Scratch cache wrapping the canonical sphere/box cache.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub(crate) sphere_box: sphere_box::Cache,
}

/// Tests with the canonical engine and swapped arguments.
pub fn test(box_: &Box, sphere: &Sphere, cache: &mut Cache) -> bool {
    sphere_box::test(sphere, box_, &mut cache.sphere_box)
}

/// Contact normal on the sphere's surface, pointing at the box contact
/// point.
///
/// Runs the canonical normal computation first; it also settles the
/// deep-interior contact points the penetration phase reads.
pub fn contact_normal(box_: &Box, sphere: &Sphere, cache: &mut Cache) -> Vector3<f64> {
    sphere_box::contact_normal(sphere, box_, &mut cache.sphere_box);
    cache.sphere_box.sphere_contact_normal
}

/// Penetration from the canonical engine.
pub fn penetration(box_: &Box, sphere: &Sphere, cache: &mut Cache) -> f64 {
    sphere_box::penetration(sphere, box_, &mut cache.sphere_box)
}
