//! Rectangles lying in a coordinate plane.
//!
//! The three variants run the same algorithm with the axes permuted, see [hit_axis_rect].

use std::ops::RangeInclusive;

use glam::Vec3;

use crate::{
    counter,
    material::MaterialId,
    math::{bounds::Bounds, point::Point},
    ray::Ray,
    warn_once,
};

use super::{Hit, HitRecord, Hitable};

/// Half thickness given to the bounding box of a rectangle along its normal.
///
/// A flat box would have a zero volume, which some acceleration structures treat as never hit.
pub const RECT_BOX_PADDING: f32 = 1e-4;

/// Which world axes play the role of the normal and of the `u` and `v` directions.
#[derive(Debug, Clone, Copy)]
struct Axes {
    normal: usize,
    u: usize,
    v: usize,
}

const XY: Axes = Axes {
    normal: 2,
    u: 0,
    v: 1,
};
const XZ: Axes = Axes {
    normal: 1,
    u: 0,
    v: 2,
};
const YZ: Axes = Axes {
    normal: 0,
    u: 1,
    v: 2,
};

fn extent(range: RangeInclusive<f32>) -> [f32; 2] {
    let (lo, hi) = range.into_inner();
    if lo >= hi {
        warn_once!("degenerate rectangle extent {lo}..={hi}, uv will not be meaningful");
    }
    [lo, hi]
}

/// The shared intersection routine.
///
/// A zero direction component along the normal gives an infinite or NaN `t`, which fails the
/// range test on its own.
fn hit_axis_rect(
    axes: Axes,
    k: f32,
    u_extent: [f32; 2],
    v_extent: [f32; 2],
    material: MaterialId,
    ray: &Ray,
    range: RangeInclusive<f32>,
) -> Hit {
    counter!("Rectangle intersection tests");

    let origin = ray.origin.vec();
    let t = (k - origin[axes.normal]) / ray.direction[axes.normal];
    if !range.contains(&t) {
        return Hit::NoHit;
    }

    let a = origin[axes.u] + t * ray.direction[axes.u];
    let b = origin[axes.v] + t * ray.direction[axes.v];
    let [a0, a1] = u_extent;
    let [b0, b1] = v_extent;
    if a < a0 || a > a1 || b < b0 || b > b1 {
        return Hit::NoHit;
    }

    Hit::Hit(HitRecord {
        t,
        u: (a - a0) / (a1 - a0),
        v: (b - b0) / (b1 - b0),
        pos: ray.at(t),
        normal: Vec3::AXES[axes.normal],
        material,
    })
}

/// Extents are not validated, so the corners are sorted rather than trusted.
fn axis_rect_bounds(axes: Axes, k: f32, u_extent: [f32; 2], v_extent: [f32; 2]) -> Bounds {
    let mut a = Vec3::ZERO;
    let mut b = Vec3::ZERO;
    a[axes.normal] = k - RECT_BOX_PADDING;
    b[axes.normal] = k + RECT_BOX_PADDING;
    a[axes.u] = u_extent[0];
    b[axes.u] = u_extent[1];
    a[axes.v] = v_extent[0];
    b[axes.v] = v_extent[1];
    Bounds::from_points(Point(a), Point(b))
}

/// Rectangle `x0 <= x <= x1, y0 <= y <= y1` in the plane `z = k`. Its normal is `+Z`.
#[derive(Debug, Clone)]
pub struct XyRect {
    pub x: [f32; 2],
    pub y: [f32; 2],
    pub k: f32,
    pub material: MaterialId,
}

impl XyRect {
    pub fn new(
        x: RangeInclusive<f32>,
        y: RangeInclusive<f32>,
        k: f32,
        material: MaterialId,
    ) -> Self {
        Self {
            x: extent(x),
            y: extent(y),
            k,
            material,
        }
    }
}

impl Hitable for XyRect {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        hit_axis_rect(XY, self.k, self.x, self.y, self.material, ray, range)
    }

    fn bounding_box(&self, _time: RangeInclusive<f32>) -> Option<Bounds> {
        Some(axis_rect_bounds(XY, self.k, self.x, self.y))
    }
}

/// Rectangle `x0 <= x <= x1, z0 <= z <= z1` in the plane `y = k`. Its normal is `+Y`.
#[derive(Debug, Clone)]
pub struct XzRect {
    pub x: [f32; 2],
    pub z: [f32; 2],
    pub k: f32,
    pub material: MaterialId,
}

impl XzRect {
    pub fn new(
        x: RangeInclusive<f32>,
        z: RangeInclusive<f32>,
        k: f32,
        material: MaterialId,
    ) -> Self {
        Self {
            x: extent(x),
            z: extent(z),
            k,
            material,
        }
    }
}

impl Hitable for XzRect {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        hit_axis_rect(XZ, self.k, self.x, self.z, self.material, ray, range)
    }

    fn bounding_box(&self, _time: RangeInclusive<f32>) -> Option<Bounds> {
        Some(axis_rect_bounds(XZ, self.k, self.x, self.z))
    }
}

/// Rectangle `y0 <= y <= y1, z0 <= z <= z1` in the plane `x = k`. Its normal is `+X`.
#[derive(Debug, Clone)]
pub struct YzRect {
    pub y: [f32; 2],
    pub z: [f32; 2],
    pub k: f32,
    pub material: MaterialId,
}

impl YzRect {
    pub fn new(
        y: RangeInclusive<f32>,
        z: RangeInclusive<f32>,
        k: f32,
        material: MaterialId,
    ) -> Self {
        Self {
            y: extent(y),
            z: extent(z),
            k,
            material,
        }
    }
}

impl Hitable for YzRect {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        hit_axis_rect(YZ, self.k, self.y, self.z, self.material, ray, range)
    }

    fn bounding_box(&self, _time: RangeInclusive<f32>) -> Option<Bounds> {
        Some(axis_rect_bounds(YZ, self.k, self.y, self.z))
    }
}
