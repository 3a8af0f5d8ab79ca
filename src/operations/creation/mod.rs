mod make_curved_zonohedron;
mod make_shape;
mod make_spiral_zonohedron;
mod make_zonohedron;
mod spiral_arm;
#[cfg(test)]
mod test_support;

pub use make_curved_zonohedron::MakeCurvedZonohedron;
pub use make_shape::{build_shape, MakeShape};
pub use make_spiral_zonohedron::MakeSpiralZonohedron;
pub use make_zonohedron::MakeZonohedron;
pub use spiral_arm::SpiralArm;
