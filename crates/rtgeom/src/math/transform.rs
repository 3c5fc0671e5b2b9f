use glam::Vec3;

use super::point::Point;

pub trait Transformer<T> {
    fn apply(&self, v: T) -> T;
}

/// Rotation about the Y axis, stored as its sine and cosine.
///
/// Maps `(x, y, z)` to `(cos·x + sin·z, y, -sin·x + cos·z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationY {
    pub sin_theta: f32,
    pub cos_theta: f32,
}

impl RotationY {
    pub fn from_degrees(angle: f32) -> Self {
        let (sin_theta, cos_theta) = f32::sin_cos(angle.to_radians());
        Self {
            sin_theta,
            cos_theta,
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            sin_theta: -self.sin_theta,
            cos_theta: self.cos_theta,
        }
    }
}

impl Transformer<Vec3> for RotationY {
    fn apply(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }
}

impl Transformer<Point> for RotationY {
    /// Rotates about the world Y axis, i.e. around the origin
    fn apply(&self, p: Point) -> Point {
        Point(self.apply(p.vec()))
    }
}
