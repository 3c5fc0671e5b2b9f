//! Contains the objects that are meant to be rendered and the contract they share.
//!
//! There are two sub-kinds of shapes:
//! - leaf shapes, for which the intersection is solved directly ([XyRect], [XzRect], [YzRect]),
//!   and compounds of those ([Cuboid]);
//! - decorators, which wrap any other [Hitable] and change how it is seen: [FlipNormals],
//!   [Translate] and [RotateY].
//!
//! Decorators never change the parametrization of the ray, a hit at `t` in the wrapped shape's
//! frame is a hit at the same `t` in the world. This is what lets them be stacked in any order.

pub mod cuboid;
pub mod flip;
pub mod rect;
pub mod rotate;
pub mod translate;

pub use cuboid::Cuboid;
pub use flip::FlipNormals;
pub use rect::{XyRect, XzRect, YzRect};
pub use rotate::RotateY;
pub use translate::Translate;

use std::{ops::RangeInclusive, sync::Arc};

use derive_more::Display;
use glam::Vec3;

use crate::{
    material::MaterialId,
    math::{bounds::Bounds, point::Point},
    ray::Ray,
};

/// Everything a shading stage needs to know about an intersection.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display("t={t} uv=({u}, {v}) pos={pos} normal={normal} {material}")]
pub struct HitRecord {
    pub t: f32,
    pub u: f32,
    pub v: f32,
    /// World space hit point
    pub pos: Point,
    /// Not renormalized by decorators
    pub normal: Vec3,
    pub material: MaterialId,
}

/// An `Option`-like type that holds the result of an intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Hit(HitRecord),
    NoHit,
}

impl Hit {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn record(&self) -> Option<&HitRecord> {
        match self {
            Self::Hit(record) => Some(record),
            Self::NoHit => None,
        }
    }

    pub fn into_record(self) -> Option<HitRecord> {
        match self {
            Self::Hit(record) => Some(record),
            Self::NoHit => None,
        }
    }

    pub fn unwrap(self) -> HitRecord {
        match self {
            Self::Hit(record) => record,
            Self::NoHit => panic!("Unwrapped a NoHit"),
        }
    }

    /// Applies `f` to the record, if any. This is how decorators post-process the wrapped result.
    pub fn map<F: FnOnce(HitRecord) -> HitRecord>(self, f: F) -> Self {
        match self {
            Self::Hit(record) => Self::Hit(f(record)),
            Self::NoHit => Self::NoHit,
        }
    }

    /// Keeps the closest of two results.
    pub fn min(self, other: Self) -> Self {
        let Self::Hit(HitRecord { t: t1, .. }) = self else {
            return other;
        };
        let Self::Hit(HitRecord { t: t2, .. }) = other else {
            return self;
        };

        if t1 <= t2 {
            self
        } else {
            other
        }
    }
}

impl From<Option<HitRecord>> for Hit {
    fn from(value: Option<HitRecord>) -> Self {
        value.map_or(Self::NoHit, Self::Hit)
    }
}

/// Something a ray can be tested against.
///
/// Implementations only read `self`, so any number of tests may run concurrently on the same
/// shape.
pub trait Hitable: Send + Sync {
    /// Returns the nearest intersection of `ray` whose `t` lies in the closed interval `range`.
    ///
    /// An intersection outside `range` is never reported, even if it is the only one.
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit;

    /// Returns a box containing the shape for every ray time in `time`,
    /// or `None` if the shape cannot be bounded.
    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds>;

    /// Same as [Hitable::hit] but writes into a caller owned record.
    ///
    /// `record` is only written when `true` is returned.
    fn hit_into(&self, ray: &Ray, range: RangeInclusive<f32>, record: &mut HitRecord) -> bool {
        match self.hit(ray, range) {
            Hit::Hit(new_record) => {
                *record = new_record;
                true
            }
            Hit::NoHit => false,
        }
    }

    /// Whether anything is hit in `range`. Used by shadow rays, which do not need the record.
    fn occluded(&self, ray: &Ray, range: RangeInclusive<f32>) -> bool {
        self.hit(ray, range).is_hit()
    }
}

impl<H: Hitable + ?Sized> Hitable for &H {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        (**self).hit(ray, range)
    }

    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds> {
        (**self).bounding_box(time)
    }

    fn occluded(&self, ray: &Ray, range: RangeInclusive<f32>) -> bool {
        (**self).occluded(ray, range)
    }
}

impl<H: Hitable + ?Sized> Hitable for Box<H> {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        (**self).hit(ray, range)
    }

    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds> {
        (**self).bounding_box(time)
    }

    fn occluded(&self, ray: &Ray, range: RangeInclusive<f32>) -> bool {
        (**self).occluded(ray, range)
    }
}

impl<H: Hitable + ?Sized> Hitable for Arc<H> {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        (**self).hit(ray, range)
    }

    fn bounding_box(&self, time: RangeInclusive<f32>) -> Option<Bounds> {
        (**self).bounding_box(time)
    }

    fn occluded(&self, ray: &Ray, range: RangeInclusive<f32>) -> bool {
        (**self).occluded(ray, range)
    }
}

/// Shapes shared by the tests of the shape modules.
#[cfg(test)]
pub(crate) mod test_shapes {
    use std::ops::RangeInclusive;

    use crate::{math::bounds::Bounds, ray::Ray};

    use super::{Hit, Hitable};

    /// A shape that reports no bounding box, like an infinite plane would.
    pub struct Unbounded<H>(pub H);

    impl<H: Hitable> Hitable for Unbounded<H> {
        fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
            self.0.hit(ray, range)
        }

        fn bounding_box(&self, _time: RangeInclusive<f32>) -> Option<Bounds> {
            None
        }
    }
}
