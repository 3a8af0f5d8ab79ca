use crate::error::{GeometryError, ParameterError, Result};
use crate::math::planar::rotate_around_center;
use crate::math::{Point3, PointSequence, Vector3};
use crate::params::Winding;

/// Builds one helical spiral arm.
///
/// A seed point at `center + (2 * radius, 0, 0)` is swept around a pivot at
/// `center + (radius, 0, 0)` in `segments` equal steps, rising by
/// `height / segments` per step. The arm therefore starts on the axis at
/// `center`, passes through the seed's position halfway, and ends back on
/// the axis `height` above the start.
pub struct SpiralArm {
    height: f64,
    radius: f64,
    center: Point3,
    segments: usize,
    winding: Winding,
}

impl SpiralArm {
    /// Creates a new `SpiralArm` operation.
    #[must_use]
    pub fn new(height: f64, radius: f64, center: Point3, segments: usize, winding: Winding) -> Self {
        Self {
            height,
            radius,
            center,
            segments,
            winding,
        }
    }

    /// Executes the operation, returning `segments + 1` points.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero, the radius is not a positive
    /// finite number, or the arm is too long to allocate.
    pub fn execute(&self) -> Result<PointSequence> {
        if self.segments == 0 {
            return Err(ParameterError::TooSmall {
                parameter: "segments",
                value: 0,
                min: 1,
            }
            .into());
        }
        if !self.radius.is_finite() {
            return Err(ParameterError::NotFinite { parameter: "radius" }.into());
        }
        if self.radius <= 0.0 {
            return Err(ParameterError::NotPositive {
                parameter: "radius",
                value: self.radius,
            }
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let segments = self.segments as f64;
        let step = 360.0 / segments;
        let rise = self.height / segments;
        let sign = self.winding.signum();

        let pivot = self.center + Vector3::new(self.radius, 0.0, 0.0);
        let mut seed = self.center + Vector3::new(2.0 * self.radius, 0.0, 0.0);

        let mut arm = Vec::new();
        self.segments
            .checked_add(1)
            .and_then(|len| arm.try_reserve_exact(len).ok())
            .ok_or_else(|| {
                GeometryError::Degenerate(format!(
                    "{} segments exceed the addressable point count",
                    self.segments
                ))
            })?;
        for i in 0..=self.segments {
            #[allow(clippy::cast_precision_loss)]
            let angle = 180.0 + sign * i as f64 * step;
            arm.push(rotate_around_center(&pivot, &seed, angle));
            #[allow(clippy::cast_precision_loss)]
            let climbed = (i + 1) as f64 * rise;
            seed.z = self.center.z + climbed;
        }
        Ok(arm)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::ZonoError;

    const TOL: f64 = 1e-9;

    fn arm(segments: usize, winding: Winding) -> PointSequence {
        SpiralArm::new(3.0, 1.0, Point3::new(0.5, -0.5, 1.0), segments, winding)
            .execute()
            .unwrap()
    }

    #[test]
    fn arm_has_segments_plus_one_points() {
        for n in [1, 3, 12, 31] {
            assert_eq!(arm(n, Winding::Clockwise).len(), n + 1);
        }
    }

    #[test]
    fn arm_starts_and_ends_on_axis() {
        let a = arm(12, Winding::CounterClockwise);
        let first = a[0];
        let last = a[12];
        assert_abs_diff_eq!(first, Point3::new(0.5, -0.5, 1.0), epsilon = TOL);
        assert_abs_diff_eq!(last, Point3::new(0.5, -0.5, 4.0), epsilon = TOL);
    }

    #[test]
    fn arm_rises_evenly() {
        let a = arm(8, Winding::Clockwise);
        for w in a.windows(2) {
            assert!((w[1].z - w[0].z - 3.0 / 8.0).abs() < TOL);
        }
    }

    #[test]
    fn arm_reaches_full_width_halfway() {
        let a = arm(12, Winding::Clockwise);
        // Seed sits 2 * radius along +X from the center.
        assert!((a[6].x - 2.5).abs() < TOL, "x={}", a[6].x);
        assert!((a[6].y + 0.5).abs() < TOL, "y={}", a[6].y);
    }

    #[test]
    fn segments_are_equal_chords() {
        let a = arm(10, Winding::CounterClockwise);
        let first = (a[1] - a[0]).xy().norm();
        for w in a.windows(2) {
            assert!(((w[1] - w[0]).xy().norm() - first).abs() < TOL);
        }
    }

    #[test]
    fn counter_clockwise_mirrors_clockwise() {
        let cw = arm(9, Winding::Clockwise);
        let ccw = arm(9, Winding::CounterClockwise);
        // Mirror plane: through the center (y = -0.5), containing Z.
        for (a, b) in cw.iter().zip(&ccw) {
            assert_abs_diff_eq!(*b, Point3::new(a.x, -1.0 - a.y, a.z), epsilon = TOL);
        }
        // Clockwise arms leave the axis towards +Y.
        assert!(cw[1].y > -0.5);
    }

    #[test]
    fn zero_segments_rejected() {
        let r = SpiralArm::new(1.0, 1.0, Point3::origin(), 0, Winding::Clockwise).execute();
        assert!(r.is_err());
    }

    #[test]
    fn unallocatable_segment_count_is_degenerate() {
        for segments in [usize::MAX, usize::MAX / 2] {
            let r = SpiralArm::new(1.0, 1.0, Point3::origin(), segments, Winding::Clockwise)
                .execute();
            assert!(
                matches!(r, Err(ZonoError::Geometry(GeometryError::Degenerate(_)))),
                "segments={segments}"
            );
        }
    }

    #[test]
    fn non_positive_radius_rejected() {
        for radius in [0.0, -1.0, f64::NAN] {
            let r = SpiralArm::new(1.0, radius, Point3::origin(), 4, Winding::Clockwise).execute();
            assert!(r.is_err(), "radius={radius}");
        }
    }
}
