use crate::geometry::Quad;
use crate::math::planar::rotate_around_center;
use crate::math::rotate_3d::{rotate_xyz, EulerAngles};
use crate::math::{Point3, PointSequence};

/// Rotates every point about `center` in the XY plane by `degrees`.
///
/// Order and length are preserved; Z coordinates are untouched.
#[must_use]
pub fn rotate_list(points: &[Point3], degrees: f64, center: &Point3) -> PointSequence {
    points
        .iter()
        .map(|p| rotate_around_center(center, p, degrees))
        .collect()
}

/// Rotates every quad about `center` in the XY plane by `degrees`.
#[must_use]
pub fn rotate_quads(quads: &[Quad], degrees: f64, center: &Point3) -> Vec<Quad> {
    quads
        .iter()
        .map(|q| q.map(|p| rotate_around_center(center, p, degrees)))
        .collect()
}

/// Rotates every quad about `center` by Euler angles (X, then Y, then Z).
#[must_use]
pub fn rotate_quads_xyz(quads: &[Quad], center: &Point3, angles: EulerAngles) -> Vec<Quad> {
    quads
        .iter()
        .map(|q| q.map(|p| rotate_xyz(center, p, angles)))
        .collect()
}
