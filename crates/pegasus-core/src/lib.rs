//! Pegasus Core - Shared Foundation of the Pegasus Physics Sandbox
//!
//! This crate provides the geometric foundation the collision engine is
//! built on:
//!
//! - **Shape Model**: Tagged primitive shapes (ray, plane, triangle,
//!   sphere, cone, cylinder, capsule, box), each carrying its center of
//!   mass
//! - **Math Primitives**: Oriented hyperplanes, box-vertex enumeration,
//!   and extremal-vertex bounding boxes
//! - **Error Handling**: A central error type with a crate-wide `Result`
//!   alias
//! - **Traits**: State validation for geometric inputs
//!
//! # Example
//!
//! ```
//! use pegasus_core::math::HyperPlane;
//! use nalgebra::{Point3, Vector3};
//!
//! let ground = HyperPlane::new(Vector3::new(0.0, 1.0, 0.0), Point3::origin());
//! assert_eq!(ground.signed_distance(Point3::new(0.0, 2.0, 0.0)), 2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod math;
pub mod shapes;
pub mod traits;

pub use error::{PegasusError, Result};

/// Commonly used imports.
///
/// `shapes::Box` is left out on purpose: glob-importing it would shadow
/// the standard library's `Box`.
pub mod prelude {
    pub use crate::error::{PegasusError, Result};
    pub use crate::math::{box_vertices, extremal_vertices_aabb, AabbExtremalVertices, HyperPlane};
    pub use crate::shapes::{
        Capsule, Cone, Cylinder, Plane, Ray, Shape, ShapeType, Sphere, Triangle,
    };
    pub use crate::traits::Validatable;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Returns version information.
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(v.contains("pegasus-core"));
        assert!(v.contains("0.1.0"));
    }
}
