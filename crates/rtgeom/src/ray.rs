use glam::Vec3;

use crate::math::point::Point;

/// A ray, `origin + t * direction`, cast at a given `time`.
///
/// The direction is kept as given: decorators rely on `t` meaning the same thing in every frame,
/// so nothing here normalizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
    /// Used by animated shapes for motion blur
    pub time: f32,
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self::new_at_time(origin, direction, 0.0)
    }

    pub fn new_at_time(origin: Point, direction: Vec3, time: f32) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    pub fn at(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::math::point::Point;

    use super::Ray;

    #[test]
    fn ray() {
        let eps = 0.01;
        let ray = Ray::new(Point::new(1., 0., 0.), Vec3::new(-1., 1., 0.));

        assert!(ray.at(0.0).vec().distance_squared(ray.origin.vec()) < eps);
        assert!(
            ray.at(1.0)
                .vec()
                .distance_squared(ray.origin.vec() + ray.direction)
                < eps
        );
    }

    #[test]
    fn direction_is_not_normalized() {
        let ray = Ray::new_at_time(Point::ORIGIN, Vec3::new(0.0, 0.0, 2.0), 0.25);
        assert_eq!(ray.at(1.5), Point::new(0.0, 0.0, 3.0));
        assert_eq!(ray.time, 0.25);
    }
}
