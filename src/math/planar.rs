use super::Point3;

/// Returns the distance between two points measured in the XY plane.
///
/// The Z coordinates are ignored.
#[must_use]
pub fn distance_2d(p1: &Point3, p2: &Point3) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Returns the angle of the vector `p1 → p2` in the XY plane, in degrees.
///
/// Measured counter-clockwise from the positive X axis and normalized into
/// `[0, 360)`. Coincident points yield `0`.
#[must_use]
pub fn angle_degrees(p1: &Point3, p2: &Point3) -> f64 {
    let deg = (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees();
    let deg = deg.rem_euclid(360.0);
    // rem_euclid can round a tiny negative angle up to exactly 360.
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Rotates `point` about `center` in the XY plane by `degrees`.
///
/// The rotation is rebuilt from the point's polar angle and radius around
/// `center`, so any angle (negative or beyond a full turn) is accepted. The
/// Z coordinate of `point` is carried through unchanged.
#[must_use]
pub fn rotate_around_center(center: &Point3, point: &Point3, degrees: f64) -> Point3 {
    let length = distance_2d(center, point);
    let angle = angle_degrees(center, point);
    let total = (degrees + angle).to_radians();
    Point3::new(
        center.x + total.cos() * length,
        center.y + total.sin() * length,
        point.z,
    )
}
