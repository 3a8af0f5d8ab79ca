use crate::geometry::Quad;
use crate::math::{Point3, PointSequence, Vector3};

/// Moves a prefix of `points` so that `snap_hook` lands on `snap_target`.
///
/// The displacement `snap_hook - snap_target` is subtracted from each of the
/// first `segment_count + 1` points (or all of them, if fewer); the rest are
/// dropped. A rib built this way is one point longer than its segment count.
#[must_use]
pub fn snap_translate(
    points: &[Point3],
    snap_target: &Point3,
    snap_hook: &Point3,
    segment_count: usize,
) -> PointSequence {
    let displacement = snap_hook - snap_target;
    points
        .iter()
        .take(segment_count.saturating_add(1))
        .map(|p| p - displacement)
        .collect()
}

/// Moves every quad by the displacement that takes `snap_hook` onto
/// `snap_target`.
#[must_use]
pub fn snap_quads(quads: &[Quad], snap_target: &Point3, snap_hook: &Point3) -> Vec<Quad> {
    translate_quads(quads, &(snap_target - snap_hook))
}

/// Moves every quad by `offset`.
#[must_use]
pub fn translate_quads(quads: &[Quad], offset: &Vector3) -> Vec<Quad> {
    quads.iter().map(|q| q.map(|p| p + offset)).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-12;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn arm() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.5),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.5),
        ]
    }

    #[test]
    fn snap_moves_hook_onto_target_and_truncates() {
        let pts = arm();
        let rib = snap_translate(&pts, &p(5.0, 5.0, 5.0), &pts[0], 2);
        assert_eq!(rib.len(), 3);
        assert_abs_diff_eq!(rib[0], p(5.0, 5.0, 5.0), epsilon = TOL);
        assert_abs_diff_eq!(rib[2], p(6.0, 6.0, 6.0), epsilon = TOL);
    }

    #[test]
    fn snap_with_interior_hook() {
        let pts = arm();
        let rib = snap_translate(&pts, &p(0.0, 0.0, 0.0), &pts[2], 10);
        assert_eq!(rib.len(), 4);
        assert_abs_diff_eq!(rib[2], p(0.0, 0.0, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(rib[0], p(-1.0, -1.0, -1.0), epsilon = TOL);
    }

    #[test]
    fn snap_zero_segments_keeps_one_point() {
        let rib = snap_translate(&arm(), &p(1.0, 2.0, 3.0), &p(0.0, 0.0, 0.0), 0);
        assert_eq!(rib.len(), 1);
        assert_abs_diff_eq!(rib[0], p(1.0, 2.0, 3.0), epsilon = TOL);
    }

    #[test]
    fn snap_quads_shares_one_displacement() {
        let q = Quad::new([
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]);
        let moved = snap_quads(&[q, q], &p(2.0, 0.0, 1.0), &p(0.0, 0.0, 0.0));
        assert_eq!(moved.len(), 2);
        assert_abs_diff_eq!(moved[1].points()[2], p(3.0, 1.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn translate_quads_along_z() {
        let q = Quad::new([p(0.0, 0.0, 0.0); 4]);
        let moved = translate_quads(&[q], &Vector3::new(0.0, 0.0, 2.5));
        assert!(moved[0].points().iter().all(|pt| (pt.z - 2.5).abs() < TOL));
    }
}
