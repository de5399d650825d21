//! Box/box intersection engine (separating-axis test).
//!
//! Candidate axes are the six normalized face axes of the two boxes
//! plus the nine raw cross products of their half-axes. A zero cross
//! product of parallel edges projects every vertex to zero and cannot
//! separate, so it needs no explicit skip.

use nalgebra::{Point3, Vector3};
use pegasus_core::math;
use pegasus_core::shapes::Box;

/// Scratch cache for the box/box engine.
#[derive(Debug, Clone)]
pub struct Cache {
    pub(crate) a_vertices: [Point3<f64>; 8],
    pub(crate) b_vertices: [Point3<f64>; 8],
    pub(crate) a_axes: [Vector3<f64>; 6],
    pub(crate) b_axes: [Vector3<f64>; 6],
    pub(crate) a_face_centers: [Point3<f64>; 6],
    pub(crate) b_face_centers: [Point3<f64>; 6],
    pub(crate) separating_axes: Vec<Vector3<f64>>,
    pub(crate) a_projections: [f64; 8],
    pub(crate) b_projections: [f64; 8],
    pub(crate) contact_normal: Vector3<f64>,
    pub(crate) penetration: f64,
}

impl Default for Cache {
    fn default() -> Self {
        Self {
            a_vertices: [Point3::origin(); 8],
            b_vertices: [Point3::origin(); 8],
            a_axes: [Vector3::zeros(); 6],
            b_axes: [Vector3::zeros(); 6],
            a_face_centers: [Point3::origin(); 6],
            b_face_centers: [Point3::origin(); 6],
            separating_axes: Vec::with_capacity(15),
            a_projections: [0.0; 8],
            b_projections: [0.0; 8],
            contact_normal: Vector3::zeros(),
            penetration: 0.0,
        }
    }
}

/// Tests two oriented boxes with the separating-axis theorem.
pub fn test(a: &Box, b: &Box, cache: &mut Cache) -> bool {
    cache.a_axes = [
        a.i_axis, a.j_axis, a.k_axis, -a.i_axis, -a.j_axis, -a.k_axis,
    ];
    cache.b_axes = [
        b.i_axis, b.j_axis, b.k_axis, -b.i_axis, -b.j_axis, -b.k_axis,
    ];

    for (vertex, offset) in cache
        .a_vertices
        .iter_mut()
        .zip(math::box_vertices(a.i_axis, a.j_axis, a.k_axis))
    {
        *vertex = a.center_of_mass + offset;
    }
    for (vertex, offset) in cache
        .b_vertices
        .iter_mut()
        .zip(math::box_vertices(b.i_axis, b.j_axis, b.k_axis))
    {
        *vertex = b.center_of_mass + offset;
    }

    for index in 0..6 {
        cache.a_face_centers[index] = a.center_of_mass + cache.a_axes[index];
        cache.b_face_centers[index] = b.center_of_mass + cache.b_axes[index];
    }

    cache.separating_axes.clear();
    for index in 0..3 {
        cache.separating_axes.push(cache.a_axes[index].normalize());
    }
    for index in 0..3 {
        cache.separating_axes.push(cache.b_axes[index].normalize());
    }
    for i in 0..3 {
        for j in 0..3 {
            cache
                .separating_axes
                .push(cache.a_axes[i].cross(&cache.b_axes[j]));
        }
    }

    for axis_index in 0..cache.separating_axes.len() {
        let axis = cache.separating_axes[axis_index];

        for (projection, vertex) in cache.a_projections.iter_mut().zip(cache.a_vertices) {
            *projection = vertex.coords.dot(&axis);
        }
        for (projection, vertex) in cache.b_projections.iter_mut().zip(cache.b_vertices) {
            *projection = vertex.coords.dot(&axis);
        }
        cache.a_projections.sort_by(f64::total_cmp);
        cache.b_projections.sort_by(f64::total_cmp);

        if cache.a_projections[7] < cache.b_projections[7] {
            if cache.a_projections[7] < cache.b_projections[0] {
                return false;
            }
        } else if cache.b_projections[7] < cache.a_projections[0] {
            return false;
        }
    }

    true
}

/// Contact normal on the second box: the face whose center is nearest
/// the first box's center.
///
/// This heuristic does not always coincide with the SAT axis of minimum
/// overlap; consumers that need the true minimum translation vector
/// should derive it from the separating axis with minimum positive
/// overlap instead.
pub fn contact_normal(a: &Box, _b: &Box, cache: &mut Cache) -> Vector3<f64> {
    let mut distances = [0.0; 6];
    for (distance, face_center) in distances.iter_mut().zip(cache.b_face_centers) {
        *distance = (a.center_of_mass - face_center).norm();
    }

    let mut min_index = 0;
    for (index, distance) in distances.iter().enumerate() {
        if *distance < distances[min_index] {
            min_index = index;
        }
    }
    cache.contact_normal = cache.b_axes[min_index].normalize();

    cache.contact_normal
}

/// Overlap extent of the two vertex sets along the contact normal.
pub fn penetration(_a: &Box, _b: &Box, cache: &mut Cache) -> f64 {
    let axis = cache.contact_normal;

    for (projection, vertex) in cache.a_projections.iter_mut().zip(cache.a_vertices) {
        *projection = vertex.coords.dot(&axis);
    }
    for (projection, vertex) in cache.b_projections.iter_mut().zip(cache.b_vertices) {
        *projection = vertex.coords.dot(&axis);
    }

    let b_max = cache
        .b_projections
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let a_min = cache
        .a_projections
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    cache.penetration = b_max - a_min;

    cache.penetration
}
