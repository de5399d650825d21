//! GJK support primitives and the nearest-simplex reduction.
//!
//! These routines are the inner pieces of a GJK driver: support points
//! over the convex primitives, Minkowski-difference support, an exact
//! tetrahedron containment test, and the simplex reduction that yields
//! the next search direction. The outer iteration and EPA refinement
//! live with their consumers.

use crate::kernels;
use nalgebra::{Matrix3, Point3, Vector3};
use pegasus_core::math::{self, HyperPlane};
use pegasus_core::shapes::{Box, Sphere};

/// Shapes that can answer support-point queries.
pub trait Support {
    /// Furthest point of the shape along `direction`.
    fn support(&self, direction: Vector3<f64>) -> Point3<f64>;
}

impl Support for Sphere {
    fn support(&self, direction: Vector3<f64>) -> Point3<f64> {
        self.center_of_mass + direction.normalize() * self.radius
    }
}

impl Support for Box {
    /// Casts a ray at the box from just outside along `direction` and
    /// takes the exit point of the slab test.
    fn support(&self, direction: Vector3<f64>) -> Point3<f64> {
        let direction = direction.normalize();
        let origin = self.center_of_mass - direction;

        // Same box-space transform as the ray/box engine.
        let model = Matrix3::from_columns(&[
            self.i_axis.normalize(),
            self.j_axis.normalize(),
            self.k_axis.normalize(),
        ]);
        let inverse = model.try_inverse().unwrap_or_else(Matrix3::zeros);
        let aabb = math::extremal_vertices_aabb(self.i_axis, self.j_axis, self.k_axis);

        let factors = kernels::ray_aabb_intersection_factors(
            aabb.min,
            aabb.max,
            inverse * direction,
            inverse * (origin - self.center_of_mass),
        );

        origin + direction * factors.t_max
    }
}

/// Support point of the Minkowski difference `A - B` along `direction`.
pub fn minkowski_support<A, B>(a: &A, b: &B, direction: Vector3<f64>) -> Vector3<f64>
where
    A: Support,
    B: Support,
{
    a.support(direction) - b.support(-direction)
}

/// Tests whether `point` lies inside the tetrahedron `vertices`.
///
/// Each face hyperplane is oriented with the opposite vertex as the
/// below-reference, so "inside" means a non-positive signed distance
/// against all four faces.
pub fn tetrahedron_contains(vertices: &[Vector3<f64>; 4], point: Vector3<f64>) -> bool {
    let [a, b, c, d] = vertices.map(Point3::from);
    let point = Point3::from(point);

    HyperPlane::from_points(a, b, c, Some(d)).signed_distance(point) <= 0.0
        && HyperPlane::from_points(b, c, d, Some(a)).signed_distance(point) <= 0.0
        && HyperPlane::from_points(a, c, d, Some(b)).signed_distance(point) <= 0.0
        && HyperPlane::from_points(a, b, d, Some(c)).signed_distance(point) <= 0.0
}

/// Reduced simplex size and the next search direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestSimplex {
    /// Number of vertices kept in the simplex.
    pub size: usize,
    /// Direction in which to search for the next support point.
    pub direction: Vector3<f64>,
}

/// Reduces a 2-, 3-, or 4-vertex simplex to the feature nearest the
/// origin.
///
/// The newest vertex is stored last (`simplex[size - 1]`). Kept
/// vertices are compacted to the front with the newest vertex still
/// last; slots past the returned size are stale.
pub fn nearest_simplex(simplex: &mut [Vector3<f64>; 4], size: usize) -> NearestSimplex {
    match size {
        2 => nearest_simplex_segment(simplex),
        3 => nearest_simplex_triangle(simplex),
        _ => nearest_simplex_tetrahedron(simplex),
    }
}

fn nearest_simplex_segment(simplex: &mut [Vector3<f64>; 4]) -> NearestSimplex {
    let a = simplex[1];
    let b = simplex[0];
    let ab = b - a;
    let ao = -a;

    if ab.dot(&ao) > 0.0 {
        // The origin projects into the segment.
        return NearestSimplex {
            size: 2,
            direction: ab.cross(&ao).cross(&ab),
        };
    }

    simplex[0] = a;
    NearestSimplex {
        size: 1,
        direction: ao,
    }
}

fn nearest_simplex_triangle(simplex: &mut [Vector3<f64>; 4]) -> NearestSimplex {
    let a = simplex[2];
    let b = simplex[1];
    let c = simplex[0];

    let ab = b - a;
    let ac = c - a;
    let abc = ab.cross(&ac);
    let ao = -a;

    if abc.cross(&ac).dot(&ao) > 0.0 {
        if ac.dot(&ao) > 0.0 {
            simplex[0] = c;
            simplex[1] = a;
            return NearestSimplex {
                size: 2,
                direction: ac.cross(&ao).cross(&ac),
            };
        }
        return reduce_to_edge_or_vertex(simplex, a, b, ab, ao);
    }

    if ab.cross(&abc).dot(&ao) > 0.0 {
        return reduce_to_edge_or_vertex(simplex, a, b, ab, ao);
    }

    if abc.dot(&ao) > 0.0 {
        return NearestSimplex {
            size: 3,
            direction: abc,
        };
    }

    // Origin below the face: re-wind so the kept normal faces it.
    simplex[0] = b;
    simplex[1] = c;
    simplex[2] = a;
    NearestSimplex {
        size: 3,
        direction: -abc,
    }
}

fn reduce_to_edge_or_vertex(
    simplex: &mut [Vector3<f64>; 4],
    a: Vector3<f64>,
    b: Vector3<f64>,
    ab: Vector3<f64>,
    ao: Vector3<f64>,
) -> NearestSimplex {
    if ab.dot(&ao) > 0.0 {
        simplex[0] = b;
        simplex[1] = a;
        return NearestSimplex {
            size: 2,
            direction: ab.cross(&ao).cross(&ab),
        };
    }

    simplex[0] = a;
    NearestSimplex {
        size: 1,
        direction: ao,
    }
}

fn nearest_simplex_tetrahedron(simplex: &mut [Vector3<f64>; 4]) -> NearestSimplex {
    // The three faces adjacent to the newest vertex, each paired with
    // its opposite vertex as the orientation reference.
    const FACES: [[usize; 3]; 3] = [[0, 1, 3], [1, 2, 3], [0, 2, 3]];
    const OPPOSITE: [usize; 3] = [2, 0, 1];

    let mut closest_face = 0;
    let mut closest_distance = f64::INFINITY;
    for (face_index, face) in FACES.iter().enumerate() {
        let plane = HyperPlane::from_points(
            Point3::from(simplex[face[0]]),
            Point3::from(simplex[face[1]]),
            Point3::from(simplex[face[2]]),
            Some(Point3::from(simplex[OPPOSITE[face_index]])),
        );
        let distance = plane.distance(Point3::origin());
        if distance < closest_distance {
            closest_distance = distance;
            closest_face = face_index;
        }
    }

    let face = FACES[closest_face];
    let reduced = [simplex[face[0]], simplex[face[1]], simplex[face[2]]];
    simplex[0] = reduced[0];
    simplex[1] = reduced[1];
    simplex[2] = reduced[2];

    nearest_simplex_triangle(simplex)
}
