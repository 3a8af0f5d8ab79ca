use crate::geometry::{Quad, ShapeOutput};

/// Checks that a build's output is fit to hand to a mesh consumer: every
/// coordinate finite and every quad planar.
pub struct IsValid<'a> {
    shape: &'a ShapeOutput,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(shape: &'a ShapeOutput) -> Self {
        Self { shape }
    }

    /// Executes the validation, returning `true` if the output is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        match self.shape {
            ShapeOutput::Faces(quads) => first_invalid_quad(quads).is_none(),
            ShapeOutput::Wireframe(lines) => lines.iter().all(|l| l.is_finite()),
        }
    }
}

/// Index of the first quad that fails [`IsValid`], if any.
#[must_use]
pub fn first_invalid_quad(quads: &[Quad]) -> Option<usize> {
    quads.iter().position(|q| !(q.is_finite() && q.is_planar()))
}
