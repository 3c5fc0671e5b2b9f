use std::ops::{Add, AddAssign, Sub};

use derive_more::Display;
use glam::Vec3;

/// A position in space.
///
/// Kept apart from [Vec3] so that translations only ever move points and never directions.
#[derive(Debug, Display, Clone, Copy, PartialEq, Default)]
#[display("{_0}")]
pub struct Point(pub Vec3);

impl Point {
    pub const ORIGIN: Point = Point(Vec3::ZERO);

    pub fn vec(self) -> Vec3 {
        self.0
    }

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Add<Vec3> for Point {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() + rhs)
    }
}

impl AddAssign<Vec3> for Point {
    fn add_assign(&mut self, rhs: Vec3) {
        self.0 += rhs;
    }
}

impl Sub<Vec3> for Point {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() - rhs)
    }
}

/// We can sub two points but not add them
impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.vec() - rhs.vec()
    }
}
