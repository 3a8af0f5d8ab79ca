pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;

pub use error::{Result, ZonoError};
pub use geometry::{Polyline, Quad, ShapeOutput};
pub use math::Point3;
pub use operations::creation::{build_shape, MakeShape};
pub use params::{ShapeKind, ShapeParameters, Winding};
