//! Per-pair intersection engines.
//!
//! Each submodule owns the typed scratch cache for one ordered shape
//! pair and the three-phase protocol over it: `test` repopulates the
//! cache and decides overlap, `contact_normal` may extend the cache and
//! returns the unit normal on the second shape's surface pointing toward
//! the first, and `penetration` consumes the cache and returns the
//! non-negative overlap depth along that normal.
//!
//! The phases are ordered: `contact_normal` without a preceding `test`
//! that returned `true`, or `penetration` without a preceding
//! `contact_normal`, is undefined. Recomputing `test` resets the
//! protocol. Caches are never read before being written within one
//! call chain.
//!
//! Reversed pairs delegate to the canonical engine through a nested
//! cache, negating or substituting the contact normal where the
//! convention requires it.

pub mod box_box;
pub mod box_plane;
pub mod box_ray;
pub mod box_sphere;
pub mod plane_box;
pub mod plane_plane;
pub mod plane_ray;
pub mod plane_sphere;
pub mod ray_box;
pub mod ray_plane;
pub mod ray_ray;
pub mod ray_sphere;
pub mod sphere_box;
pub mod sphere_plane;
pub mod sphere_ray;
pub mod sphere_sphere;
