use glam::Vec3;

use crate::{
    scene::Scene,
    shape::{Translate, XyRect},
};

/// Two small rectangles facing +Z, the second one pushed 5 units further.
pub struct DebugScene;

impl DebugScene {
    pub fn insert_into(scene: &mut Scene) {
        let near = scene.insert_material(Some("Near".to_owned()));
        let far = scene.insert_material(Some("Far".to_owned()));

        scene.insert_object(XyRect::new(3.0..=5.0, 1.0..=3.0, 2.0, near));
        scene.insert_object(Translate::new(
            XyRect::new(3.0..=5.0, 1.0..=3.0, 2.0, far),
            Vec3::new(0.0, 0.0, 5.0),
        ));
    }
}
