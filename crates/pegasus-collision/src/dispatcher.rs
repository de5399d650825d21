//! Shape-pair dispatch for the three-phase intersection protocol.

use crate::pairs::{
    box_box, box_plane, box_ray, box_sphere, plane_box, plane_plane, plane_ray, plane_sphere,
    ray_box, ray_plane, ray_ray, ray_sphere, sphere_box, sphere_plane, sphere_ray, sphere_sphere,
};
use nalgebra::Vector3;
use pegasus_core::error::{PegasusError, Result};
use pegasus_core::shapes::Shape;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Contact manifold reported for an intersecting shape pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unit normal on the second shape's surface, pointing toward the
    /// first.
    pub normal: Vector3<f64>,
    /// Minimum translation distance along the normal to remove the
    /// overlap.
    pub penetration: f64,
}

/// Scratch caches for every registered ordered pair.
#[derive(Debug, Default)]
struct PairCaches {
    ray_ray: ray_ray::Cache,
    ray_plane: ray_plane::Cache,
    ray_sphere: ray_sphere::Cache,
    ray_box: ray_box::Cache,
    plane_ray: plane_ray::Cache,
    plane_plane: plane_plane::Cache,
    plane_sphere: plane_sphere::Cache,
    plane_box: plane_box::Cache,
    sphere_ray: sphere_ray::Cache,
    sphere_plane: sphere_plane::Cache,
    sphere_sphere: sphere_sphere::Cache,
    sphere_box: sphere_box::Cache,
    box_ray: box_ray::Cache,
    box_plane: box_plane::Cache,
    box_sphere: box_sphere::Cache,
    box_box: box_box::Cache,
}

/// Routes the three-phase intersection protocol to the pair engines.
///
/// A dispatcher owns one scratch cache per registered ordered pair over
/// rays, planes, spheres, and boxes. Within one pair the calls must run
/// `test`, then `contact_normal`, then `penetration`, with no
/// interleaving call for the same pair of shape types; recomputing
/// `test` resets the protocol. Out-of-order calls are not detected and
/// their results are undefined.
///
/// A dispatcher must not be shared across threads: every call mutates
/// the pair's cache. Independent dispatchers are fully isolated, so
/// parallel callers shard their pairs across per-thread dispatchers.
/// Pairs involving triangles, cones, cylinders, or capsules have no
/// engine and surface [`PegasusError::UnsupportedShapePair`].
#[derive(Debug, Default)]
pub struct Dispatcher {
    caches: PairCaches,
}

impl Dispatcher {
    /// Creates a dispatcher with caches for every registered pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests two shapes for intersection, repopulating the pair's cache.
    pub fn test(&mut self, a: &Shape, b: &Shape) -> Result<bool> {
        let caches = &mut self.caches;
        match (a, b) {
            (Shape::Ray(a), Shape::Ray(b)) => Ok(ray_ray::test(a, b, &mut caches.ray_ray)),
            (Shape::Ray(a), Shape::Plane(b)) => Ok(ray_plane::test(a, b, &mut caches.ray_plane)),
            (Shape::Ray(a), Shape::Sphere(b)) => {
                Ok(ray_sphere::test(a, b, &mut caches.ray_sphere))
            }
            (Shape::Ray(a), Shape::Box(b)) => Ok(ray_box::test(a, b, &mut caches.ray_box)),
            (Shape::Plane(a), Shape::Ray(b)) => Ok(plane_ray::test(a, b, &mut caches.plane_ray)),
            (Shape::Plane(a), Shape::Plane(b)) => {
                Ok(plane_plane::test(a, b, &mut caches.plane_plane))
            }
            (Shape::Plane(a), Shape::Sphere(b)) => {
                Ok(plane_sphere::test(a, b, &mut caches.plane_sphere))
            }
            (Shape::Plane(a), Shape::Box(b)) => Ok(plane_box::test(a, b, &mut caches.plane_box)),
            (Shape::Sphere(a), Shape::Ray(b)) => {
                Ok(sphere_ray::test(a, b, &mut caches.sphere_ray))
            }
            (Shape::Sphere(a), Shape::Plane(b)) => {
                Ok(sphere_plane::test(a, b, &mut caches.sphere_plane))
            }
            (Shape::Sphere(a), Shape::Sphere(b)) => {
                Ok(sphere_sphere::test(a, b, &mut caches.sphere_sphere))
            }
            (Shape::Sphere(a), Shape::Box(b)) => {
                Ok(sphere_box::test(a, b, &mut caches.sphere_box))
            }
            (Shape::Box(a), Shape::Ray(b)) => Ok(box_ray::test(a, b, &mut caches.box_ray)),
            (Shape::Box(a), Shape::Plane(b)) => Ok(box_plane::test(a, b, &mut caches.box_plane)),
            (Shape::Box(a), Shape::Sphere(b)) => {
                Ok(box_sphere::test(a, b, &mut caches.box_sphere))
            }
            (Shape::Box(a), Shape::Box(b)) => Ok(box_box::test(a, b, &mut caches.box_box)),
            _ => Err(Self::unsupported(a, b)),
        }
    }

    /// Contact normal on the second shape's surface, pointing toward
    /// the first.
    ///
    /// Must follow a [`test`](Self::test) for the same pair that
    /// returned `true`.
    pub fn contact_normal(&mut self, a: &Shape, b: &Shape) -> Result<Vector3<f64>> {
        let caches = &mut self.caches;
        match (a, b) {
            (Shape::Ray(a), Shape::Ray(b)) => {
                Ok(ray_ray::contact_normal(a, b, &mut caches.ray_ray))
            }
            (Shape::Ray(a), Shape::Plane(b)) => {
                Ok(ray_plane::contact_normal(a, b, &mut caches.ray_plane))
            }
            (Shape::Ray(a), Shape::Sphere(b)) => {
                Ok(ray_sphere::contact_normal(a, b, &mut caches.ray_sphere))
            }
            (Shape::Ray(a), Shape::Box(b)) => {
                Ok(ray_box::contact_normal(a, b, &mut caches.ray_box))
            }
            (Shape::Plane(a), Shape::Ray(b)) => {
                Ok(plane_ray::contact_normal(a, b, &mut caches.plane_ray))
            }
            (Shape::Plane(a), Shape::Plane(b)) => {
                Ok(plane_plane::contact_normal(a, b, &mut caches.plane_plane))
            }
            (Shape::Plane(a), Shape::Sphere(b)) => Ok(plane_sphere::contact_normal(
                a,
                b,
                &mut caches.plane_sphere,
            )),
            (Shape::Plane(a), Shape::Box(b)) => {
                Ok(plane_box::contact_normal(a, b, &mut caches.plane_box))
            }
            (Shape::Sphere(a), Shape::Ray(b)) => {
                Ok(sphere_ray::contact_normal(a, b, &mut caches.sphere_ray))
            }
            (Shape::Sphere(a), Shape::Plane(b)) => Ok(sphere_plane::contact_normal(
                a,
                b,
                &mut caches.sphere_plane,
            )),
            (Shape::Sphere(a), Shape::Sphere(b)) => Ok(sphere_sphere::contact_normal(
                a,
                b,
                &mut caches.sphere_sphere,
            )),
            (Shape::Sphere(a), Shape::Box(b)) => {
                Ok(sphere_box::contact_normal(a, b, &mut caches.sphere_box))
            }
            (Shape::Box(a), Shape::Ray(b)) => {
                Ok(box_ray::contact_normal(a, b, &mut caches.box_ray))
            }
            (Shape::Box(a), Shape::Plane(b)) => {
                Ok(box_plane::contact_normal(a, b, &mut caches.box_plane))
            }
            (Shape::Box(a), Shape::Sphere(b)) => {
                Ok(box_sphere::contact_normal(a, b, &mut caches.box_sphere))
            }
            (Shape::Box(a), Shape::Box(b)) => {
                Ok(box_box::contact_normal(a, b, &mut caches.box_box))
            }
            _ => Err(Self::unsupported(a, b)),
        }
    }

    /// Penetration depth along the contact normal.
    ///
    /// Must follow a [`contact_normal`](Self::contact_normal) for the
    /// same pair.
    pub fn penetration(&mut self, a: &Shape, b: &Shape) -> Result<f64> {
        let caches = &mut self.caches;
        match (a, b) {
            (Shape::Ray(a), Shape::Ray(b)) => {
                Ok(ray_ray::penetration(a, b, &mut caches.ray_ray))
            }
            (Shape::Ray(a), Shape::Plane(b)) => {
                Ok(ray_plane::penetration(a, b, &mut caches.ray_plane))
            }
            (Shape::Ray(a), Shape::Sphere(b)) => {
                Ok(ray_sphere::penetration(a, b, &mut caches.ray_sphere))
            }
            (Shape::Ray(a), Shape::Box(b)) => Ok(ray_box::penetration(a, b, &mut caches.ray_box)),
            (Shape::Plane(a), Shape::Ray(b)) => {
                Ok(plane_ray::penetration(a, b, &mut caches.plane_ray))
            }
            (Shape::Plane(a), Shape::Plane(b)) => {
                Ok(plane_plane::penetration(a, b, &mut caches.plane_plane))
            }
            (Shape::Plane(a), Shape::Sphere(b)) => {
                Ok(plane_sphere::penetration(a, b, &mut caches.plane_sphere))
            }
            (Shape::Plane(a), Shape::Box(b)) => {
                Ok(plane_box::penetration(a, b, &mut caches.plane_box))
            }
            (Shape::Sphere(a), Shape::Ray(b)) => {
                Ok(sphere_ray::penetration(a, b, &mut caches.sphere_ray))
            }
            (Shape::Sphere(a), Shape::Plane(b)) => {
                Ok(sphere_plane::penetration(a, b, &mut caches.sphere_plane))
            }
            (Shape::Sphere(a), Shape::Sphere(b)) => {
                Ok(sphere_sphere::penetration(a, b, &mut caches.sphere_sphere))
            }
            (Shape::Sphere(a), Shape::Box(b)) => {
                Ok(sphere_box::penetration(a, b, &mut caches.sphere_box))
            }
            (Shape::Box(a), Shape::Ray(b)) => {
                Ok(box_ray::penetration(a, b, &mut caches.box_ray))
            }
            (Shape::Box(a), Shape::Plane(b)) => {
                Ok(box_plane::penetration(a, b, &mut caches.box_plane))
            }
            (Shape::Box(a), Shape::Sphere(b)) => {
                Ok(box_sphere::penetration(a, b, &mut caches.box_sphere))
            }
            (Shape::Box(a), Shape::Box(b)) => {
                Ok(box_box::penetration(a, b, &mut caches.box_box))
            }
            _ => Err(Self::unsupported(a, b)),
        }
    }

    /// Runs the three-phase protocol and packages the result.
    ///
    /// Returns `None` when the shapes do not intersect.
    pub fn detect(&mut self, a: &Shape, b: &Shape) -> Result<Option<Contact>> {
        if !self.test(a, b)? {
            return Ok(None);
        }

        let normal = self.contact_normal(a, b)?;
        let penetration = self.penetration(a, b)?;
        trace!(
            first = ?a.shape_type(),
            second = ?b.shape_type(),
            penetration,
            "contact detected"
        );

        Ok(Some(Contact {
            normal,
            penetration,
        }))
    }

    fn unsupported(a: &Shape, b: &Shape) -> PegasusError {
        PegasusError::UnsupportedShapePair {
            first: a.shape_type(),
            second: b.shape_type(),
        }
    }
}
