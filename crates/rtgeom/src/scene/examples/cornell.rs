use glam::Vec3;

use crate::{
    math::point::Point,
    scene::Scene,
    shape::{Cuboid, FlipNormals, RotateY, Translate, XyRect, XzRect, YzRect},
};

/// The classic 555 units wide Cornell box, with its two rotated boxes.
pub struct CornellBoxScene;

impl CornellBoxScene {
    pub const SIZE: f32 = 555.0;

    pub fn insert_into(scene: &mut Scene) {
        let red = scene.insert_material(Some("Red".to_owned()));
        let white = scene.insert_material(Some("White".to_owned()));
        let green = scene.insert_material(Some("Green".to_owned()));
        let light = scene.insert_material(Some("Light".to_owned()));

        let size = Self::SIZE;

        // Walls
        scene.insert_object(FlipNormals::new(YzRect::new(
            0.0..=size,
            0.0..=size,
            size,
            green,
        )));
        scene.insert_object(YzRect::new(0.0..=size, 0.0..=size, 0.0, red));
        scene.insert_object(XzRect::new(213.0..=343.0, 227.0..=332.0, size - 1.0, light));
        scene.insert_object(FlipNormals::new(XzRect::new(
            0.0..=size,
            0.0..=size,
            size,
            white,
        )));
        scene.insert_object(XzRect::new(0.0..=size, 0.0..=size, 0.0, white));
        scene.insert_object(FlipNormals::new(XyRect::new(
            0.0..=size,
            0.0..=size,
            size,
            white,
        )));

        // Boxes
        let short = Cuboid::new(Point::ORIGIN, Point::new(165.0, 165.0, 165.0), white);
        scene.insert_object(Translate::new(
            RotateY::new(short, -18.0),
            Vec3::new(130.0, 0.0, 65.0),
        ));

        let tall = Cuboid::new(Point::ORIGIN, Point::new(165.0, 330.0, 165.0), white);
        scene.insert_object(Translate::new(
            RotateY::new(tall, 15.0),
            Vec3::new(265.0, 0.0, 295.0),
        ));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        math::{
            point::Point,
            transform::{RotationY, Transformer},
        },
        ray::Ray,
        scene::Scene,
        shape::{Hit, Hitable},
    };

    use super::CornellBoxScene;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        CornellBoxScene::insert_into(&mut scene);
        scene
    }

    fn label(scene: &Scene, hit: Hit) -> Option<&str> {
        let rec = hit.into_record()?;
        scene.material(rec.material)?.label.as_deref()
    }

    #[test]
    fn layout() {
        let scene = scene();
        assert_eq!(scene.objects.len(), 8);
        assert_eq!(scene.materials.len(), 4);

        let b = scene.bounding_box(0.0..=1.0).unwrap();
        assert!(b.contains_with_tolerance(Point::ORIGIN, 1e-3));
        assert!(b.contains_with_tolerance(Point::new(555.0, 555.0, 555.0), 1e-3));
    }

    #[test]
    fn walls_face_inwards() {
        let scene = scene();
        let center = Point::new(277.5, 100.0, 277.5);
        let cases = [
            (Vec3::X, "Green"),
            (-Vec3::X, "Red"),
            (-Vec3::Y, "White"),
            (Vec3::Z, "White"),
        ];

        for (direction, expected) in cases {
            // Aim between the two boxes
            let origin = if direction.y == 0.0 {
                Point::new(277.5, 450.0, 277.5)
            } else {
                center
            };
            let hit = scene.hit(&Ray::new(origin, direction), 1e-3..=f32::INFINITY);
            let rec = hit.unwrap();
            assert!(rec.normal.dot(direction) < 0.0, "{direction} -> {rec}");
            assert_eq!(label(&scene, hit), Some(expected), "{direction}");
        }
    }

    #[test]
    fn light_is_seen_from_below() {
        let scene = scene();
        let ray = Ray::new(Point::new(278.0, 450.0, 278.0), Vec3::Y);
        let hit = scene.hit(&ray, 1e-3..=f32::INFINITY);
        assert_eq!(label(&scene, hit), Some("Light"));
        assert!((hit.unwrap().t - 104.0).abs() < 1e-3);
    }

    #[test]
    fn short_box_blocks_the_floor() {
        let scene = scene();

        // Center of the short box footprint, once rotated and moved
        let center = RotationY::from_degrees(-18.0).apply(Vec3::new(82.5, 0.0, 82.5));
        let origin = Point::new(130.0, 400.0, 65.0) + center;
        let ray = Ray::new(origin, -Vec3::Y);

        let rec = scene.hit(&ray, 1e-3..=f32::INFINITY).unwrap();
        assert!((rec.pos.vec().y - 165.0).abs() < 1e-2, "{rec}");
        assert!((rec.normal - Vec3::Y).length() < 1e-5, "{rec}");
        assert!(scene.occluded(&ray, 1e-3..=300.0));
    }
}
