use tracing::debug;

use crate::error::Result;
use crate::geometry::Quad;
use crate::math::rotate_3d::EulerAngles;
use crate::math::{Point3, Vector3};
use crate::operations::transform::{
    rotate_list, rotate_quads, rotate_quads_xyz, snap_quads, translate_quads,
};
use crate::params::ShapeParameters;

use super::SpiralArm;

/// Half turns about Y then Z: a half turn about the X axis through the pivot.
const SHELL_FLIP: EulerAngles = EulerAngles {
    x: 0.0,
    y: 180.0,
    z: 180.0,
};

/// Creates a spiral zonohedron.
///
/// The faces come in four groups, emitted in this order:
///
/// 1. **Top shell**: a staircase of leaf strips swept around the axis, each
///    strip one leaf shorter than the previous.
/// 2. **Spiral case**: the last strip doubled, then stepped around the base
///    spiral arm one side at a time.
/// 3. **Extensions**: for `spiral_count > 1`, copies of the spiral case raised
///    by one arm height per extra turn.
/// 4. **Bottom shell**: the top shell flipped over the end of the base arm.
///
/// The `detail` parameter is ignored; every rib is a single segment.
pub struct MakeSpiralZonohedron {
    params: ShapeParameters,
}

impl MakeSpiralZonohedron {
    /// Creates a new `MakeSpiralZonohedron` operation.
    #[must_use]
    pub fn new(params: ShapeParameters) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the quads of the whole solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are out of range.
    pub fn execute(&self) -> Result<Vec<Quad>> {
        let params = &self.params;
        params.validate()?;

        let sides = params.sides;
        let center = params.center;
        let height = params.height();
        let step = params.step_degrees();
        let winding = params.winding();
        let sign = winding.signum();

        let first = SpiralArm::new(height, params.radius(), center, sides, winding).execute()?;
        let counter =
            SpiralArm::new(height, params.radius(), center, sides, winding.reversed()).execute()?;
        let base = rotate_list(&counter, -180.0, &center);

        let second = rotate_list(&first, sign * step, &first[0]);
        let single_leaves: Vec<Quad> = (0..first.len() - 2)
            .map(|j| Quad::new([second[j], first[j + 1], first[j + 2], second[j + 1]]))
            .collect();

        let (top_shell, seed) = sweep_leaves(&single_leaves, sides, sign * step, &center);

        // The base arm starts at the arms' common origin, so every snap below
        // hooks on base[0].
        let hook = base[0];
        let mut double_leaf = seed.clone();
        double_leaf.extend(snap_quads(&seed, &base[1], &hook));

        let mut spiral_case = Vec::with_capacity(double_leaf.len() * (sides - 1));
        for i in 0..sides - 1 {
            #[allow(clippy::cast_precision_loss)]
            let degrees = -sign * (i + 1) as f64 * step;
            let turned = rotate_quads(&double_leaf, degrees, &center);
            spiral_case.extend(snap_quads(&turned, &base[i + 1], &hook));
        }

        let mut spiral_case_complete = double_leaf;
        spiral_case_complete.extend(spiral_case);

        let mut extensions = Vec::new();
        for turn in 1..params.spiral_count {
            #[allow(clippy::cast_precision_loss)]
            let lift = Vector3::new(0.0, 0.0, height * turn as f64);
            extensions.extend(translate_quads(&spiral_case_complete, &lift));
        }

        let pivot = base[base.len() - 1];
        #[allow(clippy::cast_precision_loss)]
        let bottom_lift = Vector3::new(0.0, 0.0, height * (params.spiral_count - 1) as f64);
        let bottom_shell = translate_quads(
            &rotate_quads_xyz(&top_shell, &pivot, SHELL_FLIP),
            &bottom_lift,
        );

        let mut quads = Vec::with_capacity(
            top_shell.len() + spiral_case_complete.len() + extensions.len() + bottom_shell.len(),
        );
        let top_len = top_shell.len();
        let case_len = spiral_case_complete.len();
        quads.extend(top_shell);
        quads.extend(spiral_case_complete);
        quads.extend(extensions);
        quads.extend(bottom_shell);

        debug_assert!(quads.iter().all(Quad::is_finite));
        debug!(
            sides,
            spiral_count = params.spiral_count,
            top_shell = top_len,
            spiral_case = case_len,
            quads = quads.len(),
            "built spiral zonohedron"
        );
        Ok(quads)
    }
}

/// Sweeps the single-leaf strip once per side around `center`.
///
/// Every copy but the last contributes a shrinking prefix to the top shell:
/// all leaves for the first copy, one fewer for each copy after it. The last
/// copy is returned whole as the double-leaf seed.
fn sweep_leaves(
    single_leaves: &[Quad],
    sides: usize,
    step: f64,
    center: &Point3,
) -> (Vec<Quad>, Vec<Quad>) {
    let mut top_shell = Vec::new();
    let mut seed = Vec::new();
    let mut count = single_leaves.len();
    for i in 0..sides {
        #[allow(clippy::cast_precision_loss)]
        let copy = rotate_quads(single_leaves, i as f64 * step, center);
        if i + 1 == sides {
            seed = copy;
        } else {
            top_shell.extend(copy.into_iter().take(count));
            count = count.saturating_sub(1);
        }
    }
    (top_shell, seed)
}
