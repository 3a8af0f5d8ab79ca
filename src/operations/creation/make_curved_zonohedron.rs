use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::Polyline;
use crate::operations::transform::rotate_list;
use crate::params::ShapeParameters;

use super::SpiralArm;

/// Creates the curved zonohedron wireframe.
///
/// Two arms of opposite winding, each `sides * detail` segments long, are
/// repeated at every side angle including the closing one, so the first and
/// last pair coincide.
pub struct MakeCurvedZonohedron {
    params: ShapeParameters,
}

impl MakeCurvedZonohedron {
    /// Creates a new `MakeCurvedZonohedron` operation.
    #[must_use]
    pub fn new(params: ShapeParameters) -> Self {
        Self { params }
    }

    /// Executes the operation, returning `2 * (sides + 1)` open polylines.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are out of range or the segment
    /// or polyline count overflows.
    pub fn execute(&self) -> Result<Vec<Polyline>> {
        let params = &self.params;
        params.validate()?;

        let detail = params.zone_detail();
        let segments = params.sides.checked_mul(detail).ok_or_else(|| {
            GeometryError::Degenerate(format!(
                "{} sides at detail {detail} overflows the segment count",
                params.sides
            ))
        })?;

        let line_count = params
            .sides
            .checked_add(1)
            .and_then(|copies| copies.checked_mul(2))
            .ok_or_else(|| {
                GeometryError::Degenerate(format!(
                    "{} sides overflow the polyline count",
                    params.sides
                ))
            })?;

        let center = params.center;
        let winding = params.winding();
        let step = winding.signum() * params.step_degrees();

        let leading =
            SpiralArm::new(params.height(), params.radius(), center, segments, winding).execute()?;
        let trailing = SpiralArm::new(
            params.height(),
            params.radius(),
            center,
            segments,
            winding.reversed(),
        )
        .execute()?;

        let mut lines = Vec::with_capacity(line_count);
        for i in 0..=params.sides {
            #[allow(clippy::cast_precision_loss)]
            let degrees = i as f64 * step;
            lines.push(Polyline::new(rotate_list(&leading, degrees, &center)));
            lines.push(Polyline::new(rotate_list(&trailing, degrees, &center)));
        }

        debug!(
            sides = params.sides,
            detail,
            polylines = lines.len(),
            "built curved wireframe"
        );
        Ok(lines)
    }
}
