use super::{Point3, Vector3, TOLERANCE};

/// Computes the (unnormalized) normal of a closed polygon using Newell's method.
///
/// The length of the result is twice the projected area, so a degenerate
/// loop yields a near-zero vector.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Returns the arithmetic mean of the points.
#[must_use]
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len() as f64;
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum * inv_n)
}

/// Largest distance of any point from the best-fit plane of the loop.
///
/// The plane passes through the centroid with the Newell normal. Returns
/// `None` when the loop is too degenerate to define a plane.
#[must_use]
pub fn planarity_deviation(points: &[Point3]) -> Option<f64> {
    if points.len() < 3 {
        return None;
    }
    let normal = newell_normal(points);
    let len = normal.norm();
    if len < TOLERANCE {
        return None;
    }
    let unit = normal / len;
    let origin = centroid(points);
    Some(
        points
            .iter()
            .map(|p| (p - origin).dot(&unit).abs())
            .fold(0.0, f64::max),
    )
}

/// Length of the longest closing-loop edge, used to scale tolerances.
#[must_use]
pub fn max_edge_length(points: &[Point3]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .fold(0.0, f64::max)
}
