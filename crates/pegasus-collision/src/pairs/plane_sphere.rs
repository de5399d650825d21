//! Plane/sphere intersection engine.

use nalgebra::Vector3;
use pegasus_core::shapes::{Plane, Sphere};

/// Scratch cache for the plane/sphere engine.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    pub(crate) penetration: f64,
}

/// The sphere overlaps the plane when its center is within one radius of
/// the back side.
pub fn test(plane: &Plane, sphere: &Sphere, cache: &mut Cache) -> bool {
    cache.penetration = sphere.radius
        - (sphere.center_of_mass.coords.dot(&plane.normal)
            - plane.center_of_mass.coords.dot(&plane.normal));

    cache.penetration >= 0.0
}

/// Contact normal on the sphere, opposite the plane normal.
pub fn contact_normal(plane: &Plane, _sphere: &Sphere, _cache: &mut Cache) -> Vector3<f64> {
    -plane.normal
}

/// Depth of the sphere below the plane surface.
pub fn penetration(_plane: &Plane, _sphere: &Sphere, cache: &mut Cache) -> f64 {
    cache.penetration
}
