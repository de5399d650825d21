//! Pegasus Collision - Narrow-Phase Collision Engine
//!
//! This crate decides whether two rigid shapes in world space intersect
//! and, if so, reports a contact manifold of a surface contact normal on
//! the second shape and a scalar penetration depth. It includes:
//!
//! - **Pair Engines**: One specialized three-phase routine per ordered
//!   shape pair, each owning a typed scratch cache
//! - **Dispatcher**: Routes `test`, `contact_normal`, and `penetration`
//!   to the right engine and cache
//! - **Analytic Kernels**: Ray/sphere and ray/AABB slab intersection
//! - **GJK Support**: Support points, Minkowski-difference support,
//!   tetrahedron point test, and nearest-simplex reduction
//! - **Bounding Volumes**: Axis-aligned and PCA-oriented bounding boxes
//!   over vertex clouds
//!
//! # Example
//!
//! ```
//! use pegasus_collision::shapes::{Shape, Sphere};
//! use pegasus_collision::Dispatcher;
//! use nalgebra::Point3;
//!
//! let mut dispatcher = Dispatcher::new();
//! let a = Shape::Sphere(Sphere::new(Point3::origin(), 1.0));
//! let b = Shape::Sphere(Sphere::new(Point3::new(1.5, 0.0, 0.0), 1.0));
//!
//! let contact = dispatcher.detect(&a, &b).unwrap().expect("spheres overlap");
//! assert!((contact.penetration - 0.5).abs() < 1e-9);
//! ```
//!
//! The engine is purely geometric: no I/O, no persisted state, no
//! background work. One dispatcher must not be shared across threads;
//! callers that want parallelism shard pairs across per-thread
//! dispatchers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bounding;
pub mod dispatcher;
pub mod gjk;
pub mod kernels;
pub mod pairs;

pub use dispatcher::{Contact, Dispatcher};
pub use gjk::{minkowski_support, nearest_simplex, tetrahedron_contains, NearestSimplex, Support};

// Re-export the foundation for convenience.
pub use pegasus_core::error::{PegasusError, Result};
pub use pegasus_core::{math, shapes, traits};
