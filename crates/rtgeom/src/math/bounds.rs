use std::ops::RangeInclusive;

use derive_more::Display;
use glam::Vec3;

use crate::ray::Ray;

use super::point::Point;

/// Axis Aligned Bounding Box
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display("[{min} .. {max}]")]
pub struct Bounds {
    /// Should be <= `max` on every axis
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Builds the box spanned by `min` and `max`, which are expected to already be ordered.
    pub fn new(min: Point, max: Point) -> Self {
        debug_assert!(min.vec().cmple(max.vec()).all());
        Self { min, max }
    }

    /// Builds the smallest box containing both points, whatever their order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn translated(&self, offset: Vec3) -> Bounds {
        Bounds {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// The 8 corners of the box. Bit `i` of the index selects `max` over `min` on axis `i`.
    pub fn corners(&self) -> [Point; 8] {
        let (min, max) = (self.min.vec(), self.max.vec());
        std::array::from_fn(|i| {
            Point::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        })
    }

    pub fn contains(&self, point: Point) -> bool {
        self.contains_with_tolerance(point, 0.0)
    }

    /// Same as [Bounds::contains] with the box grown by `eps` on every side.
    pub fn contains_with_tolerance(&self, point: Point, eps: f32) -> bool {
        let p = point.vec();
        (self.min.vec() - Vec3::splat(eps)).cmple(p).all()
            && p.cmple(self.max.vec() + Vec3::splat(eps)).all()
    }

    /// Slab test. Returns the part of `range` during which `ray` is inside the box, if any.
    pub fn ray_intersect(
        &self,
        ray: &Ray,
        range: RangeInclusive<f32>,
    ) -> Option<RangeInclusive<f32>> {
        // R(t) = ray.origin + t*ray.dir => t*ray_dir = R(t) - ray.origin
        // Solving for x y z and taking the intersection of results.
        // A zero direction component gives +-infty, which either accepts or rejects the whole axis.
        let inv_direction = ray.direction.recip();
        let ts_start = (self.min - ray.origin) * inv_direction;
        let ts_end = (self.max - ray.origin) * inv_direction;

        let t_min = Vec3::min(ts_start, ts_end)
            .max_element()
            .max(*range.start());
        let t_max = Vec3::max(ts_start, ts_end)
            .min_element()
            .min(*range.end());

        (t_min <= t_max).then_some(t_min..=t_max)
    }
}
