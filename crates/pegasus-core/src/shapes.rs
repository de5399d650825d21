//! Tagged primitive shapes of the collision core.
//!
//! Every shape carries a center of mass, the origin reference of its
//! local frame. Only rays, planes, spheres, and boxes participate in the
//! intersection engines; the remaining variants exist in the model but
//! have no registered engine.

use crate::error::{PegasusError, Result};
use crate::traits::Validatable;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Squared-length floor below which axes count as degenerate.
const DEGENERACY_EPSILON: f64 = 1e-12;

/// Tag identifying a shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// Half-line with an origin and a unit direction.
    Ray,
    /// Infinite plane.
    Plane,
    /// Three world-space vertices with a cached face normal.
    Triangle,
    /// Center and radius.
    Sphere,
    /// Base center, apex, and base radius.
    Cone,
    /// Center, half-height vector, and radius.
    Cylinder,
    /// Center, half-height vector, and radius.
    Capsule,
    /// Oriented box encoded by three half-axis vectors.
    Box,
}

/// Half-line with an origin (center of mass) and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin of the ray.
    pub center_of_mass: Point3<f64>,
    /// Unit direction of the ray.
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Creates a ray, normalizing the direction.
    pub fn new(center_of_mass: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self {
            center_of_mass,
            direction: direction.normalize(),
        }
    }
}

impl Validatable for Ray {
    fn validate(&self) -> Result<()> {
        if !self.direction.iter().all(|c| c.is_finite())
            || self.direction.norm_squared() < DEGENERACY_EPSILON
        {
            return Err(PegasusError::Validation(
                "ray direction must be a non-zero finite vector".into(),
            ));
        }
        Ok(())
    }
}

/// Infinite plane through a point (center of mass) with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Point on the plane.
    pub center_of_mass: Point3<f64>,
    /// Unit normal of the plane.
    pub normal: Vector3<f64>,
}

impl Plane {
    /// Creates a plane, normalizing the normal so returned contact
    /// normals are unit length.
    pub fn new(center_of_mass: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            center_of_mass,
            normal: normal.normalize(),
        }
    }
}

impl Validatable for Plane {
    fn validate(&self) -> Result<()> {
        if !self.normal.iter().all(|c| c.is_finite())
            || self.normal.norm_squared() < DEGENERACY_EPSILON
        {
            return Err(PegasusError::Validation(
                "plane normal must be a non-zero finite vector".into(),
            ));
        }
        Ok(())
    }
}

/// Triangle with three world-space vertices and a cached face normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Center of mass of the triangle.
    pub center_of_mass: Point3<f64>,
    /// First vertex.
    pub a: Point3<f64>,
    /// Second vertex.
    pub b: Point3<f64>,
    /// Third vertex.
    pub c: Point3<f64>,
    /// Face normal, `(b - a) x (c - a)`, kept consistent with the
    /// vertex winding.
    pub normal: Vector3<f64>,
}

impl Triangle {
    /// Creates a triangle and computes its face normal.
    pub fn new(center_of_mass: Point3<f64>, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        let mut triangle = Self {
            center_of_mass,
            a,
            b,
            c,
            normal: Vector3::zeros(),
        };
        triangle.calculate_normal();
        triangle
    }

    /// Replaces the vertices and recomputes the face normal.
    pub fn set_vertices(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.calculate_normal();
    }

    fn calculate_normal(&mut self) {
        self.normal = (self.b - self.a).cross(&(self.c - self.a));
    }
}

impl Validatable for Triangle {
    fn validate(&self) -> Result<()> {
        if self.normal.norm_squared() < DEGENERACY_EPSILON {
            return Err(PegasusError::Validation(
                "triangle vertices must not be collinear".into(),
            ));
        }
        Ok(())
    }
}

/// Sphere with a center (center of mass) and a radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub center_of_mass: Point3<f64>,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere.
    pub fn new(center_of_mass: Point3<f64>, radius: f64) -> Self {
        Self {
            center_of_mass,
            radius,
        }
    }
}

impl Validatable for Sphere {
    fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(PegasusError::Validation(
                "sphere radius must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Cone with a base center (center of mass), an apex, and a base radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    /// Center of the base disc.
    pub center_of_mass: Point3<f64>,
    /// Apex of the cone.
    pub apex: Point3<f64>,
    /// Radius of the base disc.
    pub radius: f64,
}

impl Cone {
    /// Creates a cone.
    pub fn new(center_of_mass: Point3<f64>, apex: Point3<f64>, radius: f64) -> Self {
        Self {
            center_of_mass,
            apex,
            radius,
        }
    }
}

/// Cylinder with a center (center of mass), a half-height vector, and a
/// radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// Center of the cylinder.
    pub center_of_mass: Point3<f64>,
    /// Vector from the center to the center of one end cap.
    pub half_height: Vector3<f64>,
    /// Radius of the cylinder.
    pub radius: f64,
}

impl Cylinder {
    /// Creates a cylinder.
    pub fn new(center_of_mass: Point3<f64>, half_height: Vector3<f64>, radius: f64) -> Self {
        Self {
            center_of_mass,
            half_height,
            radius,
        }
    }
}

/// Capsule with a center (center of mass), a half-height vector, and a
/// radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    /// Center of the capsule.
    pub center_of_mass: Point3<f64>,
    /// Vector from the center to one hemisphere center.
    pub half_height: Vector3<f64>,
    /// Radius of the capsule.
    pub radius: f64,
}

impl Capsule {
    /// Creates a capsule.
    pub fn new(center_of_mass: Point3<f64>, half_height: Vector3<f64>, radius: f64) -> Self {
        Self {
            center_of_mass,
            half_height,
            radius,
        }
    }
}

/// Oriented box encoded by a center (center of mass) and three half-axis
/// vectors.
///
/// The box is the set of points `center + a*i + b*j + c*k` with
/// `a, b, c` in `[-1, 1]`; each axis length is the half-extent along
/// that axis. The axes must be linearly independent but need not be
/// mutually orthogonal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box {
    /// Center of the box.
    pub center_of_mass: Point3<f64>,
    /// First half-axis.
    pub i_axis: Vector3<f64>,
    /// Second half-axis.
    pub j_axis: Vector3<f64>,
    /// Third half-axis.
    pub k_axis: Vector3<f64>,
}

impl Box {
    /// Creates a box from its center and three half-axes.
    pub fn new(
        center_of_mass: Point3<f64>,
        i_axis: Vector3<f64>,
        j_axis: Vector3<f64>,
        k_axis: Vector3<f64>,
    ) -> Self {
        Self {
            center_of_mass,
            i_axis,
            j_axis,
            k_axis,
        }
    }
}

impl Validatable for Box {
    fn validate(&self) -> Result<()> {
        let volume = self.i_axis.dot(&self.j_axis.cross(&self.k_axis)).abs();
        if !volume.is_finite() || volume < DEGENERACY_EPSILON {
            return Err(PegasusError::Validation(
                "box half-axes must be linearly independent".into(),
            ));
        }
        Ok(())
    }
}

/// A primitive shape, tagged by variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// See [`Ray`].
    Ray(Ray),
    /// See [`Plane`].
    Plane(Plane),
    /// See [`Triangle`].
    Triangle(Triangle),
    /// See [`Sphere`].
    Sphere(Sphere),
    /// See [`Cone`].
    Cone(Cone),
    /// See [`Cylinder`].
    Cylinder(Cylinder),
    /// See [`Capsule`].
    Capsule(Capsule),
    /// See [`Box`].
    Box(Box),
}

impl Shape {
    /// Tag of this shape's variant.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Ray(_) => ShapeType::Ray,
            Shape::Plane(_) => ShapeType::Plane,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::Cone(_) => ShapeType::Cone,
            Shape::Cylinder(_) => ShapeType::Cylinder,
            Shape::Capsule(_) => ShapeType::Capsule,
            Shape::Box(_) => ShapeType::Box,
        }
    }

    /// Center of mass of the shape.
    pub fn center_of_mass(&self) -> Point3<f64> {
        match self {
            Shape::Ray(shape) => shape.center_of_mass,
            Shape::Plane(shape) => shape.center_of_mass,
            Shape::Triangle(shape) => shape.center_of_mass,
            Shape::Sphere(shape) => shape.center_of_mass,
            Shape::Cone(shape) => shape.center_of_mass,
            Shape::Cylinder(shape) => shape.center_of_mass,
            Shape::Capsule(shape) => shape.center_of_mass,
            Shape::Box(shape) => shape.center_of_mass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, 10.0));
        assert_relative_eq!(ray.direction, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_triangle_normal_follows_winding() {
        let mut triangle = Triangle::new(
            Point3::origin(),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(triangle.normal, Vector3::new(0.0, 0.0, 1.0));

        triangle.set_vertices(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        );
        assert_relative_eq!(triangle.normal, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_box_validation_rejects_collinear_axes() {
        let degenerate = Box::new(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        assert!(!degenerate.is_valid());

        let skewed = Box::new(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        assert!(skewed.is_valid());
    }

    #[test]
    fn test_sphere_validation_rejects_negative_radius() {
        assert!(!Sphere::new(Point3::origin(), -1.0).is_valid());
        assert!(Sphere::new(Point3::origin(), 0.0).is_valid());
    }

    #[test]
    fn test_shape_type_tags() {
        let shape = Shape::Sphere(Sphere::new(Point3::origin(), 1.0));
        assert_eq!(shape.shape_type(), ShapeType::Sphere);
        assert_eq!(shape.center_of_mass(), Point3::origin());
    }
}
