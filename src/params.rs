//! Build parameters.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, Result};
use crate::math::Point3;

/// Rise of one spiral arm per unit of width.
pub const HEIGHT_PER_WIDTH: f64 = 1.8;

/// The family member to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    /// Polar zonohedron of rhombic faces.
    #[default]
    Standard,
    /// Rhombic spirallohedron; subdivides each zone by `detail`.
    Spirallohedra,
    /// Spiral zonohedron: two shells joined by a helical case.
    Spiral,
    /// Curved wireframe: spiral arms only, no faces.
    Curved,
}

impl ShapeKind {
    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Spirallohedra => "spirallohedra",
            Self::Spiral => "spiral",
            Self::Curved => "curved",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "zonohedron" => Ok(Self::Standard),
            "spirallohedra" | "spirallohedron" => Ok(Self::Spirallohedra),
            "spiral" => Ok(Self::Spiral),
            "curved" | "wireframe" => Ok(Self::Curved),
            _ => Err(ParameterError::UnknownKind(s.to_owned())),
        }
    }
}

/// Sweep direction of a spiral arm, viewed from +Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// `-1.0` for clockwise, `1.0` for counter-clockwise.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl From<bool> for Winding {
    /// `true` maps to [`Winding::Clockwise`].
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// Parameters of one build. Immutable for the duration of the build.
///
/// ```
/// use zonohedra::{ShapeKind, ShapeParameters};
///
/// let params = ShapeParameters::default()
///     .with_kind(ShapeKind::Spirallohedra)
///     .with_sides(8)
///     .with_detail(3)
///     .with_width(2.0);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.zone_detail(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeParameters {
    /// Rotational symmetry order (at least 3).
    pub sides: usize,
    /// Zone subdivision for spirallohedra and curved kinds (at least 1).
    pub detail: usize,
    /// Distance from the axis to the widest point of an arm.
    pub width: f64,
    /// Number of stacked helical turns for the spiral kind (at least 1).
    pub spiral_count: usize,
    /// Which builder runs.
    pub kind: ShapeKind,
    /// Arm sweep direction; `false` mirrors the shape.
    pub clockwise: bool,
    /// Point on the symmetry axis where the arms start.
    pub center: Point3,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            sides: 12,
            detail: 1,
            width: 1.0,
            spiral_count: 1,
            kind: ShapeKind::Standard,
            clockwise: false,
            center: Point3::origin(),
        }
    }
}

impl ShapeParameters {
    /// Sets the side count.
    #[must_use]
    pub fn with_sides(mut self, sides: usize) -> Self {
        self.sides = sides;
        self
    }

    /// Sets the detail level.
    #[must_use]
    pub fn with_detail(mut self, detail: usize) -> Self {
        self.detail = detail;
        self
    }

    /// Sets the width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the spiral count.
    #[must_use]
    pub fn with_spiral_count(mut self, spiral_count: usize) -> Self {
        self.spiral_count = spiral_count;
        self
    }

    /// Sets the shape kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the winding direction.
    #[must_use]
    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Sets the axis start point.
    #[must_use]
    pub fn with_center(mut self, center: Point3) -> Self {
        self.center = center;
        self
    }

    /// Checks the basic numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] naming the first field that fails: `sides`
    /// below 3, `detail` or `spiral_count` below 1, `width` not positive or
    /// not finite, or a non-finite `center`.
    pub fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            return Err(ParameterError::TooSmall {
                parameter: "sides",
                value: self.sides,
                min: 3,
            }
            .into());
        }
        if self.detail < 1 {
            return Err(ParameterError::TooSmall {
                parameter: "detail",
                value: self.detail,
                min: 1,
            }
            .into());
        }
        if !self.width.is_finite() {
            return Err(ParameterError::NotFinite { parameter: "width" }.into());
        }
        if self.width <= 0.0 {
            return Err(ParameterError::NotPositive {
                parameter: "width",
                value: self.width,
            }
            .into());
        }
        if self.spiral_count < 1 {
            return Err(ParameterError::TooSmall {
                parameter: "spiral_count",
                value: self.spiral_count,
                min: 1,
            }
            .into());
        }
        if !self.center.coords.iter().all(|c| c.is_finite()) {
            return Err(ParameterError::NotFinite { parameter: "center" }.into());
        }
        Ok(())
    }

    /// Sweep direction of the leading arm.
    #[must_use]
    pub fn winding(&self) -> Winding {
        Winding::from(self.clockwise)
    }

    /// Radius of the circle each arm is swept around.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }

    /// Rise of one full spiral arm.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.width * HEIGHT_PER_WIDTH
    }

    /// Detail level the builder actually uses.
    ///
    /// Standard and spiral kinds always build single-segment ribs.
    #[must_use]
    pub fn zone_detail(&self) -> usize {
        match self.kind {
            ShapeKind::Standard | ShapeKind::Spiral => 1,
            ShapeKind::Spirallohedra | ShapeKind::Curved => self.detail,
        }
    }

    /// Angle between neighbouring rotational copies, in degrees.
    #[must_use]
    pub fn step_degrees(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let sides = self.sides as f64;
        360.0 / sides
    }
}
