pub mod planar;
pub mod polygon_3d;
pub mod rotate_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Ordered run of points: one spiral arm, rib or polygon loop.
pub type PointSequence = Vec<Point3>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative tolerance for the coplanarity of emitted quads.
pub const PLANARITY_TOLERANCE: f64 = 1e-6;
