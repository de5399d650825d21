//! Bounding-volume builders over vertex clouds.
//!
//! Both builders yield the core's oriented-box shape: the axis-aligned
//! variant from componentwise extremal vertices, the oriented variant
//! from a principal-component analysis of the cloud.

use nalgebra::{Matrix3, Point3, Vector3};
use pegasus_core::error::{PegasusError, Result};
use pegasus_core::shapes::Box;

fn require_vertices(vertices: &[Point3<f64>]) -> Result<()> {
    if vertices.is_empty() {
        return Err(PegasusError::Validation(
            "bounding volume over an empty vertex set".into(),
        ));
    }
    Ok(())
}

/// Axis-aligned bounding box of `vertices`.
///
/// The box is centered at the extremal mean with world-axis-aligned
/// half-axes.
pub fn axis_aligned(vertices: &[Point3<f64>]) -> Result<Box> {
    require_vertices(vertices)?;

    let mut min = vertices[0];
    let mut max = vertices[0];
    for vertex in vertices {
        min = Point3::new(min.x.min(vertex.x), min.y.min(vertex.y), min.z.min(vertex.z));
        max = Point3::new(max.x.max(vertex.x), max.y.max(vertex.y), max.z.max(vertex.z));
    }

    let center = Point3::from((min.coords + max.coords) / 2.0);
    let half = (max - min) / 2.0;

    Ok(Box::new(
        center,
        Vector3::new(half.x, 0.0, 0.0),
        Vector3::new(0.0, half.y, 0.0),
        Vector3::new(0.0, 0.0, half.z),
    ))
}

/// PCA oriented bounding box of `vertices`.
///
/// The box axes are the eigenvectors of the vertex covariance matrix,
/// each scaled to the extremal projections of the cloud along it.
/// Rank-deficient clouds yield zero-length axes rather than an error.
pub fn oriented(vertices: &[Point3<f64>]) -> Result<Box> {
    require_vertices(vertices)?;

    let mut mean = Vector3::zeros();
    for vertex in vertices {
        mean += vertex.coords;
    }
    mean /= vertices.len() as f64;

    let mut covariance = Matrix3::zeros();
    for vertex in vertices {
        let centered = vertex.coords - mean;
        covariance += centered * centered.transpose();
    }
    covariance /= vertices.len() as f64;

    let eigen = covariance.symmetric_eigen();

    let mut center = Vector3::zeros();
    let mut axes = [Vector3::zeros(); 3];
    for index in 0..3 {
        let axis = eigen.eigenvectors.column(index).into_owned();

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for vertex in vertices {
            let projection = vertex.coords.dot(&axis);
            min = min.min(projection);
            max = max.max(projection);
        }

        center += axis * ((min + max) / 2.0);
        axes[index] = axis * ((max - min) / 2.0);
    }

    Ok(Box::new(Point3::from(center), axes[0], axes[1], axes[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pegasus_core::math;

    #[test]
    fn test_axis_aligned_unit_cube() {
        let vertices: Vec<Point3<f64>> = math::box_vertices(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
        .iter()
        .map(|offset| Point3::new(2.0, 0.0, 0.0) + offset)
        .collect();

        let box_ = axis_aligned(&vertices).unwrap();
        assert_relative_eq!(box_.center_of_mass, Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(box_.i_axis, Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(box_.j_axis, Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(box_.k_axis, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_oriented_follows_principal_axis() {
        // Points strung out along the x = y diagonal.
        let diagonal = Vector3::new(1.0, 1.0, 0.0).normalize();
        let vertices: Vec<Point3<f64>> = (0..10)
            .map(|step| Point3::origin() + diagonal * step as f64)
            .collect();

        let box_ = oriented(&vertices).unwrap();

        // The dominant half-axis must align with the diagonal and span
        // half the cloud's length.
        let mut axes = [box_.i_axis, box_.j_axis, box_.k_axis];
        axes.sort_by(|a, b| f64::total_cmp(&b.norm(), &a.norm()));
        let dominant = axes[0];

        assert_relative_eq!(
            dominant.normalize().dot(&diagonal).abs(),
            1.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(dominant.norm(), 4.5, epsilon = 1e-9);
        assert_relative_eq!(axes[1].norm(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(axes[2].norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_cloud_is_rejected() {
        assert!(axis_aligned(&[]).is_err());
        assert!(oriented(&[]).is_err());
    }
}
