use crate::error::Result;
use crate::geometry::ShapeOutput;
use crate::params::{ShapeKind, ShapeParameters};

use super::{MakeCurvedZonohedron, MakeSpiralZonohedron, MakeZonohedron};

/// Builds whichever family member `params.kind` names.
pub struct MakeShape {
    params: ShapeParameters,
}

impl MakeShape {
    /// Creates a new `MakeShape` operation.
    #[must_use]
    pub fn new(params: ShapeParameters) -> Self {
        Self { params }
    }

    /// Executes the operation.
    ///
    /// Standard, spirallohedra and spiral kinds return
    /// [`ShapeOutput::Faces`]; the curved kind returns
    /// [`ShapeOutput::Wireframe`].
    ///
    /// # Errors
    ///
    /// Returns an error if the selected builder rejects the parameters.
    pub fn execute(&self) -> Result<ShapeOutput> {
        match self.params.kind {
            ShapeKind::Standard | ShapeKind::Spirallohedra => {
                MakeZonohedron::new(self.params).execute().map(ShapeOutput::Faces)
            }
            ShapeKind::Spiral => MakeSpiralZonohedron::new(self.params)
                .execute()
                .map(ShapeOutput::Faces),
            ShapeKind::Curved => MakeCurvedZonohedron::new(self.params)
                .execute()
                .map(ShapeOutput::Wireframe),
        }
    }
}

/// Shorthand for `MakeShape::new(*params).execute()`.
///
/// ```
/// use zonohedra::{build_shape, ShapeParameters};
///
/// let shape = build_shape(&ShapeParameters::default().with_sides(6)).unwrap();
/// assert_eq!(shape.len(), 30);
/// ```
///
/// # Errors
///
/// Returns an error if the parameters are out of range.
pub fn build_shape(params: &ShapeParameters) -> Result<ShapeOutput> {
    MakeShape::new(*params).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, ParameterError, ZonoError};
    use crate::operations::query::{BoundingBox, IsValid};

    #[test]
    fn dispatches_on_kind() {
        let base = ShapeParameters::default().with_sides(6).with_detail(2);

        let standard = build_shape(&base).unwrap();
        assert_eq!(standard.faces().map(<[_]>::len), Some(30));

        let spirallohedra = build_shape(&base.with_kind(ShapeKind::Spirallohedra)).unwrap();
        assert_eq!(spirallohedra.faces().map(<[_]>::len), Some(120));

        let spiral = build_shape(&base.with_kind(ShapeKind::Spiral)).unwrap();
        assert_eq!(spiral.faces().map(<[_]>::len), Some(90));

        let curved = build_shape(&base.with_kind(ShapeKind::Curved)).unwrap();
        assert_eq!(curved.polylines().map(<[_]>::len), Some(14));
    }

    #[test]
    fn end_to_end_standard_twelve() {
        let params = ShapeParameters::default()
            .with_sides(12)
            .with_width(2.0)
            .with_clockwise(true);
        let shape = MakeShape::new(params).execute().unwrap();
        assert!(!shape.is_empty());
        assert!(IsValid::new(&shape).execute());

        let aabb = BoundingBox::new(&shape).execute().unwrap();
        assert!((aabb.min.x + 2.0).abs() < 1e-6);
        assert!((aabb.max.x - 2.0).abs() < 1e-6);
        assert!((aabb.min.y + 2.0).abs() < 1e-6);
        assert!((aabb.max.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn every_kind_builds_valid_output() {
        for kind in [
            ShapeKind::Standard,
            ShapeKind::Spirallohedra,
            ShapeKind::Spiral,
            ShapeKind::Curved,
        ] {
            let params = ShapeParameters::default()
                .with_kind(kind)
                .with_sides(9)
                .with_detail(2)
                .with_spiral_count(2);
            let shape = build_shape(&params).unwrap();
            assert!(IsValid::new(&shape).execute(), "kind={kind}");
        }
    }

    #[test]
    fn boundary_values_rejected() {
        let cases = [
            ShapeParameters::default().with_sides(2),
            ShapeParameters::default()
                .with_kind(ShapeKind::Spirallohedra)
                .with_detail(0),
            ShapeParameters::default().with_width(0.0),
        ];
        for params in cases {
            assert!(matches!(
                build_shape(&params),
                Err(ZonoError::InvalidParameter(
                    ParameterError::TooSmall { .. } | ParameterError::NotPositive { .. }
                ))
            ));
        }
    }

    #[test]
    fn maximal_side_count_is_degenerate_for_every_kind() {
        for kind in [
            ShapeKind::Standard,
            ShapeKind::Spirallohedra,
            ShapeKind::Spiral,
            ShapeKind::Curved,
        ] {
            let params = ShapeParameters::default()
                .with_kind(kind)
                .with_sides(usize::MAX);
            assert!(
                matches!(
                    build_shape(&params),
                    Err(ZonoError::Geometry(GeometryError::Degenerate(_)))
                ),
                "kind={kind}"
            );
        }
    }

    #[test]
    fn standard_kind_still_rejects_zero_detail() {
        let params = ShapeParameters::default().with_detail(0);
        assert!(build_shape(&params).is_err());
    }
}
