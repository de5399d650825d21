//! Oriented hyperplane with a unit normal.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Slope magnitude below which a ray counts as parallel to the plane.
const RAY_SLOPE_EPSILON: f64 = 1e-12;

/// Oriented plane defined by a unit normal and a point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperPlane {
    normal: Vector3<f64>,
    point: Point3<f64>,
}

impl HyperPlane {
    /// Creates a hyperplane from a normal and a point on the plane.
    ///
    /// The normal is normalized on construction.
    pub fn new(normal: Vector3<f64>, point: Point3<f64>) -> Self {
        Self {
            normal: normal.normalize(),
            point,
        }
    }

    /// Creates a hyperplane through three points.
    ///
    /// The normal is the normalized cross product of the edges `b - a`
    /// and `c - a`. When `below` is supplied the normal is flipped so
    /// that the signed distance of `below` is non-positive.
    pub fn from_points(
        a: Point3<f64>,
        b: Point3<f64>,
        c: Point3<f64>,
        below: Option<Point3<f64>>,
    ) -> Self {
        let mut normal = (b - a).cross(&(c - a)).normalize();
        if let Some(reference) = below {
            if normal.dot(&(reference - a)) > 0.0 {
                normal = -normal;
            }
        }
        Self { normal, point: a }
    }

    /// Unit normal of the plane.
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Point on the plane.
    pub fn point(&self) -> Point3<f64> {
        self.point
    }

    /// Signed distance of `q` from the plane, positive on the normal side.
    pub fn signed_distance(&self, q: Point3<f64>) -> f64 {
        self.normal.dot(&(q - self.point))
    }

    /// Unsigned distance of `q` from the plane.
    pub fn distance(&self, q: Point3<f64>) -> f64 {
        self.signed_distance(q).abs()
    }

    /// Intersects the ray `origin + t * direction`, `t >= 0`, with the
    /// plane.
    ///
    /// Returns the intersection point, or `None` when the ray is parallel
    /// to the plane or points away from it.
    pub fn ray_intersection(
        &self,
        direction: Vector3<f64>,
        origin: Point3<f64>,
    ) -> Option<Point3<f64>> {
        let slope = self.normal.dot(&direction);
        if slope.abs() < RAY_SLOPE_EPSILON {
            return None;
        }

        let t = self.normal.dot(&(self.point - origin)) / slope;
        (t >= 0.0).then(|| origin + direction * t)
    }
}
