use super::{Point3, Vector3};

/// Rotation angles in degrees about the X, Y and Z axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerAngles {
    /// Creates a new set of angles, in degrees.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotates `point` about `center` by the given Euler angles.
///
/// The rotations are applied one after another in the center's frame:
/// first about X, then about Y on the X-rotated coordinates, then about Z on
/// the XY-rotated coordinates. Changing the order changes the result.
#[must_use]
pub fn rotate_xyz(center: &Point3, point: &Point3, angles: EulerAngles) -> Point3 {
    let local = point - center;
    let local = rotate_about_x(local, angles.x.to_radians());
    let local = rotate_about_y(local, angles.y.to_radians());
    let local = rotate_about_z(local, angles.z.to_radians());
    *center + local
}

fn rotate_about_x(v: Vector3, angle: f64) -> Vector3 {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c)
}

fn rotate_about_y(v: Vector3, angle: f64) -> Vector3 {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}

fn rotate_about_z(v: Vector3, angle: f64) -> Vector3 {
    let (s, c) = angle.sin_cos();
    Vector3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}
