use crate::math::polygon_3d::{centroid, max_edge_length, newell_normal, planarity_deviation};
use crate::math::{Point3, Vector3, PLANARITY_TOLERANCE};

/// A planar quadrilateral face: four points in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    points: [Point3; 4],
}

impl Quad {
    /// Creates a quad from four points in winding order.
    #[must_use]
    pub fn new(points: [Point3; 4]) -> Self {
        Self { points }
    }

    /// The four corners in winding order.
    #[must_use]
    pub fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    /// Returns a new quad with `f` applied to every corner.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&Point3) -> Point3,
    {
        Self {
            points: [
                f(&self.points[0]),
                f(&self.points[1]),
                f(&self.points[2]),
                f(&self.points[3]),
            ],
        }
    }

    /// Unnormalized face normal (Newell's method), following the winding.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        newell_normal(&self.points)
    }

    /// Mean of the four corners.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        centroid(&self.points)
    }

    /// Largest distance of a corner from the quad's best-fit plane.
    ///
    /// Returns `None` for a collapsed quad.
    #[must_use]
    pub fn planarity_deviation(&self) -> Option<f64> {
        planarity_deviation(&self.points)
    }

    /// Returns `true` if the corners are coplanar within
    /// [`PLANARITY_TOLERANCE`] relative to the quad's longest edge.
    #[must_use]
    pub fn is_planar(&self) -> bool {
        let scale = max_edge_length(&self.points);
        self.planarity_deviation()
            .is_some_and(|d| d <= PLANARITY_TOLERANCE * scale)
    }

    /// Returns `true` if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.coords.iter().all(|c| c.is_finite()))
    }
}
