use std::ops::RangeInclusive;

use crate::{
    math::bounds::Bounds,
    ray::Ray,
    shape::{Hit, Hitable},
};

/// A flat list of shapes, tested one after the other.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Hitable>>);

impl ShapeList {
    pub fn push<T: Hitable + 'static>(&mut self, shape: T) {
        self.0.push(Box::new(shape))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Hitable> {
        self.0.iter().map(|shape| &**shape)
    }
}

impl Hitable for ShapeList {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        let (start, mut end) = range.into_inner();
        let mut res = Hit::NoHit;

        for shape in self.0.iter() {
            // Only look for something closer than what was already found
            if let Hit::Hit(record) = shape.hit(ray, start..=end) {
                end = record.t;
                res = Hit::Hit(record);
            }
        }
        res
    }

    /// The union of every box, `None` if the list is empty or if any shape is unbounded.
    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds> {
        let mut shapes = self.0.iter();
        let first = shapes.next()?.bounding_box(time.clone())?;
        shapes.try_fold(first, |acc, shape| {
            shape
                .bounding_box(time.clone())
                .map(|bounds| acc.union(&bounds))
        })
    }

    fn occluded(&self, ray: &Ray, range: RangeInclusive<f32>) -> bool {
        self.0
            .iter()
            .any(|shape| shape.occluded(ray, range.clone()))
    }
}
