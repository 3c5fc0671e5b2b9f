use std::ops::RangeInclusive;

use crate::{
    math::{
        bounds::Bounds,
        transform::{RotationY, Transformer},
    },
    ray::Ray,
};

use super::{Hit, HitRecord, Hitable};

/// Time interval used to query the wrapped shape's box when building a [RotateY].
///
/// The wrapped shape's box is assumed not to depend on time.
const BOUNDING_BOX_PROBE_TIME: RangeInclusive<f32> = 0.0..=1.0;

/// Rotates the wrapped shape about the world Y axis.
///
/// The ray is brought into the shape's frame with the inverse rotation, and the hit point and
/// normal are brought back with the forward one. Rotations preserve lengths, so `t` is unchanged.
#[derive(Debug, Clone)]
pub struct RotateY<H> {
    pub inner: H,
    rotation: RotationY,
    /// Computed once at construction, `None` when the wrapped shape has no box
    bounds: Option<Bounds>,
}

impl<H: Hitable> RotateY<H> {
    /// `angle` is in degrees
    pub fn new(inner: H, angle: f32) -> Self {
        let rotation = RotationY::from_degrees(angle);
        let bounds = inner
            .bounding_box(BOUNDING_BOX_PROBE_TIME)
            .map(|bounds| rotated_bounds(&bounds, &rotation));

        if bounds.is_none() {
            log::debug!("rotating an unbounded shape, the rotated shape is unbounded too");
        }

        Self {
            inner,
            rotation,
            bounds,
        }
    }
}

/// Box enclosing the 8 rotated corners of `bounds`. It contains the rotated volume but is in
/// general larger than it.
fn rotated_bounds(bounds: &Bounds, rotation: &RotationY) -> Bounds {
    let corners = bounds.corners().map(|corner| rotation.apply(corner));
    let (min, max) = corners[1..]
        .iter()
        .fold((corners[0], corners[0]), |(min, max), &c| (min.min(c), max.max(c)));
    Bounds::new(min, max)
}

impl<H: Hitable> Hitable for RotateY<H> {
    fn hit(&self, ray: &Ray, range: RangeInclusive<f32>) -> Hit {
        let to_local = self.rotation.inverse();
        let local_ray = Ray {
            origin: to_local.apply(ray.origin),
            direction: to_local.apply(ray.direction),
            time: ray.time,
        };

        self.inner.hit(&local_ray, range).map(|record| HitRecord {
            pos: self.rotation.apply(record.pos),
            normal: self.rotation.apply(record.normal),
            ..record
        })
    }

    fn bounding_box(&self, _time: RangeInclusive<f32>) -> Option<Bounds> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    use crate::{
        material::MaterialId,
        math::point::Point,
        ray::Ray,
        shape::{test_shapes::Unbounded, Cuboid, Hit, Hitable, Translate, XyRect},
    };

    use super::RotateY;

    const EPS: f32 = 1e-4;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, EPS), "{a} != {b}");
    }

    fn rect() -> XyRect {
        XyRect::new(-1.0..=1.0, -1.0..=1.0, 0.0, MaterialId(2))
    }

    #[test]
    fn quarter_turn_faces_x() {
        // The +Z facing rectangle ends up in the plane x = 0, facing +X
        let rotated = RotateY::new(rect(), 90.0);
        let ray = Ray::new(Point::new(5.0, 0.5, 0.25), -Vec3::X);
        let rec = rotated.hit(&ray, 0.0..=f32::INFINITY).unwrap();

        assert!((rec.t - 5.0).abs() < EPS);
        assert_close(rec.pos.vec(), Vec3::new(0.0, 0.5, 0.25));
        assert_close(rec.normal, Vec3::X);
        assert_eq!(rec.material, MaterialId(2));
    }

    #[test]
    fn old_position_is_missed() {
        let rotated = RotateY::new(rect(), 90.0);
        let ray = Ray::new(Point::new(0.5, 0.5, 5.0), -Vec3::Z);
        assert_eq!(rotated.hit(&ray, 0.0..=f32::INFINITY), Hit::NoHit);
    }

    #[test]
    fn zero_angle_is_identity() {
        let rect = rect();
        let rotated = RotateY::new(&rect, 0.0);
        let ray = Ray::new(Point::new(0.3, -0.2, -4.0), Vec3::new(0.01, 0.02, 1.0));
        assert_eq!(rotated.hit(&ray, 0.0..=10.0), rect.hit(&ray, 0.0..=10.0));
        assert_eq!(rotated.bounding_box(0.0..=1.0), rect.bounding_box(0.0..=1.0));
    }

    #[test]
    fn rotation_then_inverse_matches_unrotated() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0x0b5e55ed);
        let cuboid = Cuboid::new(
            Point::new(-1.0, 0.0, -2.0),
            Point::new(2.0, 1.5, 1.0),
            MaterialId(0),
        );

        let mut hits = 0;
        for _ in 0..500 {
            let angle = rng.gen_range(-180.0..180.0);
            let there_and_back = RotateY::new(RotateY::new(&cuboid, angle), -angle);

            let target = Point::new(
                rng.gen_range(-1.0..2.0),
                rng.gen_range(0.0..1.5),
                rng.gen_range(-2.0..1.0),
            );
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let origin = target + 8.0 * direction;
            let ray = Ray::new(origin, target - origin);

            let Hit::Hit(expected) = cuboid.hit(&ray, 0.001..=f32::INFINITY) else {
                continue;
            };
            // Rays grazing an edge may legitimately switch face after the round trip
            if expected.u.min(expected.v) < 0.01 || expected.u.max(expected.v) > 0.99 {
                continue;
            }
            hits += 1;

            let rec = there_and_back.hit(&ray, 0.001..=f32::INFINITY).unwrap();
            assert!((rec.t - expected.t).abs() < EPS * expected.t.max(1.0));
            assert!((rec.u - expected.u).abs() < EPS);
            assert!((rec.v - expected.v).abs() < EPS);
            assert_close(rec.pos.vec(), expected.pos.vec());
            assert_close(rec.normal, expected.normal);
            assert_eq!(rec.material, expected.material);
        }
        assert!(hits > 100);
    }

    #[test]
    fn preserves_time() {
        struct TimeProbe;
        impl Hitable for TimeProbe {
            fn hit(&self, ray: &Ray, _range: std::ops::RangeInclusive<f32>) -> Hit {
                assert_eq!(ray.time, 0.625);
                Hit::NoHit
            }
            fn bounding_box(
                &self,
                _time: std::ops::RangeInclusive<f32>,
            ) -> Option<crate::math::bounds::Bounds> {
                None
            }
        }

        let shape = RotateY::new(Translate::new(TimeProbe, Vec3::ONE), 30.0);
        let ray = Ray::new_at_time(Point::ORIGIN, Vec3::X, 0.625);
        assert_eq!(shape.hit(&ray, 0.0..=1.0), Hit::NoHit);
    }

    #[test]
    fn bounding_box_of_rotated_cuboid() {
        let cuboid = Cuboid::new(Point::ORIGIN, Point::new(1.0, 2.0, 1.0), MaterialId(0));
        let rotated = RotateY::new(&cuboid, 45.0);
        let b = rotated.bounding_box(0.0..=1.0).unwrap();

        let half_diag = std::f32::consts::FRAC_1_SQRT_2;
        assert_close(b.min.vec(), Vec3::new(0.0, 0.0, -half_diag));
        assert_close(b.max.vec(), Vec3::new(2.0 * half_diag, 2.0, half_diag));
    }

    #[test]
    fn hits_lie_in_bounding_box() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        let cuboid = Cuboid::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(165.0, 330.0, 165.0),
            MaterialId(0),
        );
        let shape = Translate::new(RotateY::new(&cuboid, 15.0), Vec3::new(265.0, 0.0, 295.0));
        let bounds = shape.bounding_box(0.0..=1.0).unwrap();

        let mut hits = 0;
        for _ in 0..500 {
            let origin = Point::new(rng.gen_range(0.0..555.0), rng.gen_range(0.0..555.0), -800.0);
            let target = Point::new(
                rng.gen_range(250.0..450.0),
                rng.gen_range(0.0..330.0),
                rng.gen_range(290.0..480.0),
            );
            let ray = Ray::new(origin, target - origin);
            if let Hit::Hit(rec) = shape.hit(&ray, 0.001..=f32::INFINITY) {
                hits += 1;
                assert!(
                    bounds.contains_with_tolerance(rec.pos, 1e-2),
                    "{} not in {bounds}",
                    rec.pos
                );
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn no_box_propagates() {
        let rotated = RotateY::new(Unbounded(rect()), 30.0);
        assert_eq!(rotated.bounding_box(0.0..=1.0), None);
        assert_eq!(rotated.bounds, None);

        // Still hittable
        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), -Vec3::Z);
        assert!(rotated.hit(&ray, 0.0..=10.0).is_hit());
    }

    #[test]
    fn bounding_box_is_cached() {
        let rotated = RotateY::new(rect(), 30.0);
        assert_eq!(rotated.bounding_box(0.0..=1.0), rotated.bounding_box(10.0..=20.0));
        assert_eq!(rotated.bounding_box(0.0..=1.0), rotated.bounds);
    }
}
