use std::ops::RangeInclusive;

use glam::Vec3;

use crate::{math::bounds::Bounds, ray::Ray};

use super::{Hit, Hitable};

/// Moves the wrapped shape by `offset`.
///
/// The ray is moved by `-offset` instead, which leaves `t` unchanged.
#[derive(Debug, Clone)]
pub struct Translate<H> {
    pub inner: H,
    pub offset: Vec3,
}

impl<H: Hitable> Translate<H> {
    pub fn new(inner: H, offset: Vec3) -> Self {
        Self { inner, offset }
    }
}

impl<H: Hitable> Hitable for Translate<H> {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        let moved = Ray {
            origin: ray.origin - self.offset,
            ..*ray
        };
        self.inner.hit(&moved, range).map(|mut record| {
            record.pos += self.offset;
            record
        })
    }

    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds> {
        self.inner
            .bounding_box(time)
            .map(|bounds| bounds.translated(self.offset))
    }
}
