//! Plane/plane intersection engine.

use nalgebra::Vector3;
use pegasus_core::shapes::Plane;
use tracing::debug;

/// Scratch cache for the plane/plane engine.
///
/// Two planes intersect or they do not; nothing carries between phases.
#[derive(Debug, Clone, Default)]
pub struct Cache;

/// Two planes intersect unless their normals are parallel.
pub fn test(a: &Plane, b: &Plane, _cache: &mut Cache) -> bool {
    let intersecting = a.normal.cross(&b.normal).norm_squared() != 0.0;
    if !intersecting {
        debug!("plane/plane: parallel normals, reporting miss");
    }

    intersecting
}

/// The second plane's normal, carried as a direction.
pub fn contact_normal(_a: &Plane, b: &Plane, _cache: &mut Cache) -> Vector3<f64> {
    b.normal
}

/// A plane has no finite penetrable depth.
pub fn penetration(_a: &Plane, _b: &Plane, _cache: &mut Cache) -> f64 {
    f64::MAX
}
