pub mod examples;

use std::ops::RangeInclusive;

use crate::{
    aggregate::shapelist::ShapeList,
    material::{MaterialDescriptor, MaterialId},
    math::bounds::Bounds,
    ray::Ray,
    shape::{Hit, Hitable},
};

#[derive(Default)]
pub struct Scene {
    pub objects: ShapeList,
    pub materials: Vec<MaterialDescriptor>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object in the scene
    pub fn insert_object<T: Hitable + 'static>(&mut self, object: T) {
        self.objects.push(object)
    }

    /// Insert a material and returns the Material ID associated with this material
    pub fn insert_material(&mut self, label: Option<String>) -> MaterialId {
        self.materials.push(MaterialDescriptor { label });
        MaterialId(self.materials.len() - 1)
    }

    pub fn material(&self, id: MaterialId) -> Option<&MaterialDescriptor> {
        self.materials.get(id.0)
    }
}

impl Hitable for Scene {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        self.objects.hit(ray, range)
    }

    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds> {
        self.objects.bounding_box(time)
    }

    fn occluded(&self, ray: &Ray, range: RangeInclusive<f32>) -> bool {
        self.objects.occluded(ray, range)
    }
}
