use std::ops::RangeInclusive;

use crate::{math::bounds::Bounds, ray::Ray};

use super::{Hit, HitRecord, Hitable};

/// Shows the other side of a surface by negating the normals of the wrapped shape.
///
/// Used to get inward facing walls out of the same rectangles, e.g. for enclosures.
#[derive(Debug, Clone)]
pub struct FlipNormals<H> {
    pub inner: H,
}

impl<H: Hitable> FlipNormals<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Hitable> Hitable for FlipNormals<H> {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        self.inner.hit(ray, range).map(|record| HitRecord {
            normal: -record.normal,
            ..record
        })
    }

    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds> {
        self.inner.bounding_box(time)
    }
}
