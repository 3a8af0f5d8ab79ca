use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::Quad;
use crate::math::PointSequence;
use crate::operations::transform::{rotate_list, rotate_quads, snap_translate};
use crate::params::ShapeParameters;

use super::SpiralArm;

/// Creates a standard zonohedron or a rhombic spirallohedron.
///
/// One spiral arm of `sides * detail` segments is paired with a copy rotated
/// by one side. Prefixes of the first arm, snapped onto each point of the
/// second, form the ribs; neighbouring ribs bound the leaf quads. The leaf
/// set is then repeated once per side around the axis.
///
/// The standard kind always uses `detail = 1`, which yields the polar
/// zonohedron with `sides * (sides - 1)` rhombic faces.
pub struct MakeZonohedron {
    params: ShapeParameters,
}

impl MakeZonohedron {
    /// Creates a new `MakeZonohedron` operation.
    #[must_use]
    pub fn new(params: ShapeParameters) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the quads of the whole solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are out of range, or if the side
    /// and detail counts leave fewer than two ribs.
    pub fn execute(&self) -> Result<Vec<Quad>> {
        let params = &self.params;
        params.validate()?;

        let detail = params.zone_detail();
        let zone_sides = params.sides.checked_mul(detail).ok_or_else(|| {
            GeometryError::Degenerate(format!(
                "{} sides at detail {detail} overflows the segment count",
                params.sides
            ))
        })?;
        let rib_count = zone_sides - (detail - 1);
        if rib_count < 2 {
            return Err(GeometryError::Degenerate(format!(
                "{zone_sides} zone sides at detail {detail} leave {rib_count} rib(s)"
            ))
            .into());
        }

        let center = params.center;
        let step = params.step_degrees();
        let sign = params.winding().signum();

        let arm = SpiralArm::new(
            params.height(),
            params.radius(),
            center,
            zone_sides,
            params.winding(),
        )
        .execute()?;
        let second = rotate_list(&arm, sign * step, &center);

        let ribs: Vec<PointSequence> = second
            .iter()
            .take(rib_count)
            .map(|target| snap_translate(&arm, target, &arm[0], detail))
            .collect();

        let leaves = leaf_quads(&ribs);

        let mut quads = Vec::with_capacity(leaves.len() * params.sides);
        for i in 0..params.sides {
            #[allow(clippy::cast_precision_loss)]
            let degrees = sign * i as f64 * step + 180.0;
            quads.extend(rotate_quads(&leaves, degrees, &center));
        }

        debug_assert!(quads.iter().all(Quad::is_finite));
        debug!(
            kind = %params.kind,
            sides = params.sides,
            detail,
            ribs = rib_count,
            quads = quads.len(),
            "built zonohedron"
        );
        Ok(quads)
    }
}

/// Bridges each pair of neighbouring ribs with one quad per rib segment.
fn leaf_quads(ribs: &[PointSequence]) -> Vec<Quad> {
    let mut leaves = Vec::new();
    for pair in ribs.windows(2) {
        let (rib, next) = (&pair[0], &pair[1]);
        for j in 0..rib.len().min(next.len()).saturating_sub(1) {
            leaves.push(Quad::new([rib[j], rib[j + 1], next[j + 1], next[j]]));
        }
    }
    leaves
}
