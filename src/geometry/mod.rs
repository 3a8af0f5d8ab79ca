pub mod polyline;
pub mod quad;
pub mod shape;

pub use polyline::Polyline;
pub use quad::Quad;
pub use shape::ShapeOutput;
