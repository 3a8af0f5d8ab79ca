use crate::math::Point3;

use super::{Polyline, Quad};

/// The artifact of one build: faces for solid kinds, polylines for the
/// curved wireframe.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutput {
    /// Planar quads in winding order (standard, spirallohedra, spiral).
    Faces(Vec<Quad>),
    /// Open polylines, one per arm copy (curved).
    Wireframe(Vec<Polyline>),
}

impl ShapeOutput {
    /// Number of quads or polylines.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Faces(quads) => quads.len(),
            Self::Wireframe(lines) => lines.len(),
        }
    }

    /// Returns `true` if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The quads, if this is a face output.
    #[must_use]
    pub fn faces(&self) -> Option<&[Quad]> {
        match self {
            Self::Faces(quads) => Some(quads),
            Self::Wireframe(_) => None,
        }
    }

    /// The polylines, if this is a wireframe output.
    #[must_use]
    pub fn polylines(&self) -> Option<&[Polyline]> {
        match self {
            Self::Faces(_) => None,
            Self::Wireframe(lines) => Some(lines),
        }
    }

    /// Iterates over every emitted point, in emission order.
    ///
    /// Points shared between adjacent faces are yielded once per face.
    pub fn points(&self) -> Box<dyn Iterator<Item = &Point3> + '_> {
        match self {
            Self::Faces(quads) => Box::new(quads.iter().flat_map(|q| q.points().iter())),
            Self::Wireframe(lines) => Box::new(lines.iter().flat_map(|l| l.points.iter())),
        }
    }

    /// Returns `true` if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn face_output_accessors() {
        let q = Quad::new([
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]);
        let out = ShapeOutput::Faces(vec![q, q]);
        assert_eq!(out.len(), 2);
        assert!(out.faces().is_some());
        assert!(out.polylines().is_none());
        assert_eq!(out.points().count(), 8);
        assert!(out.is_finite());
    }

    #[test]
    fn wireframe_output_accessors() {
        let line = Polyline::new(vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, f64::INFINITY)]);
        let out = ShapeOutput::Wireframe(vec![line]);
        assert_eq!(out.len(), 1);
        assert!(out.faces().is_none());
        assert_eq!(out.points().count(), 2);
        assert!(!out.is_finite());
    }

    #[test]
    fn empty_output() {
        assert!(ShapeOutput::Faces(Vec::new()).is_empty());
    }
}
