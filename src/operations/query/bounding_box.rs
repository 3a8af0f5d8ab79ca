use crate::error::{GeometryError, Result};
use crate::geometry::ShapeOutput;
use crate::math::Point3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> crate::math::Vector3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Computes the axis-aligned bounding box of a build's output.
pub struct BoundingBox<'a> {
    shape: &'a ShapeOutput,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(shape: &'a ShapeOutput) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the output has no points.
    pub fn execute(&self) -> Result<Aabb> {
        let mut points = self.shape.points();
        let first = points
            .next()
            .ok_or_else(|| GeometryError::Degenerate("empty shape has no bounds".into()))?;
        let (min, max) = points.fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Ok(Aabb { min, max })
    }
}
