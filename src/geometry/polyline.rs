use crate::math::PointSequence;

/// An open polyline: one spiral arm copy of a curved wireframe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: PointSequence,
}

impl Polyline {
    /// Creates a polyline from its ordered vertices.
    #[must_use]
    pub fn new(points: PointSequence) -> Self {
        Self { points }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length of all segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Returns `true` if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
    }
}
