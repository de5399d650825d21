//! Shared analytic-geometry primitives.

mod hyperplane;

pub use hyperplane::HyperPlane;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Minimum and maximum corners of an axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AabbExtremalVertices {
    /// Minimum corner.
    pub min: Vector3<f64>,
    /// Maximum corner.
    pub max: Vector3<f64>,
}

/// Enumerates the eight vertices of a box with half-axes `i`, `j`, `k`.
///
/// Vertices are offsets from the box center; callers translate by the
/// center themselves. The ordering is fixed: bit 0 of the index selects
/// the sign of `i` (positive when set), bit 1 the sign of `j`, bit 2 the
/// sign of `k`. Index 0 is `-i - j - k`, index 7 is `i + j + k`.
pub fn box_vertices(i: Vector3<f64>, j: Vector3<f64>, k: Vector3<f64>) -> [Vector3<f64>; 8] {
    let mut vertices = [Vector3::zeros(); 8];
    for (index, vertex) in vertices.iter_mut().enumerate() {
        let si = if index & 1 != 0 { 1.0 } else { -1.0 };
        let sj = if index & 2 != 0 { 1.0 } else { -1.0 };
        let sk = if index & 4 != 0 { 1.0 } else { -1.0 };
        *vertex = i * si + j * sj + k * sk;
    }
    vertices
}

/// Extremal vertices of the axis-aligned bounding box spanned by the
/// half-axes `i`, `j`, `k`.
///
/// Each component of the maximum corner is the largest coordinate any
/// vertex combination can reach, `|i_c| + |j_c| + |k_c|`; the minimum
/// corner is its negation. Axes are taken as given: the ray/box engine
/// feeds world-space half-axes here and reads the result in box-local
/// space, which is exact for world-aligned boxes and conservative
/// otherwise.
pub fn extremal_vertices_aabb(
    i: Vector3<f64>,
    j: Vector3<f64>,
    k: Vector3<f64>,
) -> AabbExtremalVertices {
    let max = i.abs() + j.abs() + k.abs();
    AabbExtremalVertices { min: -max, max }
}
