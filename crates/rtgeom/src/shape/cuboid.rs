use std::ops::RangeInclusive;

use crate::{
    aggregate::shapelist::ShapeList,
    material::MaterialId,
    math::{bounds::Bounds, point::Point},
    ray::Ray,
};

use super::{FlipNormals, Hit, Hitable, XyRect, XzRect, YzRect};

/// An axis aligned box made of six rectangles, all facing outwards.
///
/// Rotated and translated copies of it are obtained through [super::RotateY] and
/// [super::Translate].
pub struct Cuboid {
    bounds: Bounds,
    sides: ShapeList,
}

impl Cuboid {
    pub fn new(a: Point, b: Point, material: MaterialId) -> Self {
        let bounds = Bounds::from_points(a, b);
        let (p0, p1) = (bounds.min.vec(), bounds.max.vec());

        let mut sides = ShapeList::default();
        sides.push(XyRect::new(p0.x..=p1.x, p0.y..=p1.y, p1.z, material));
        sides.push(FlipNormals::new(XyRect::new(p0.x..=p1.x, p0.y..=p1.y, p0.z, material)));
        sides.push(XzRect::new(p0.x..=p1.x, p0.z..=p1.z, p1.y, material));
        sides.push(FlipNormals::new(XzRect::new(p0.x..=p1.x, p0.z..=p1.z, p0.y, material)));
        sides.push(YzRect::new(p0.y..=p1.y, p0.z..=p1.z, p1.x, material));
        sides.push(FlipNormals::new(YzRect::new(p0.y..=p1.y, p0.z..=p1.z, p0.x, material)));

        Self { bounds, sides }
    }
}

impl Hitable for Cuboid {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        self.sides.hit(ray, range)
    }

    fn bounding_box(&self, _time: RangeInclusive<f32>) -> Option<Bounds> {
        Some(self.bounds)
    }

    fn occluded(&self, ray: &Ray, range: RangeInclusive<f32>) -> bool {
        self.sides.occluded(ray, range)
    }
}
