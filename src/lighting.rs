//! Studio light rig
//!
//! Four symmetric area lights above the origin, aimed inward and downward,
//! plus the environment background. Setup is destructive: any lights already
//! in the scene are removed first.

use glam::Vec3;

use crate::scene::{Light, ObjectData, Scene};

pub const AREA_LIGHT_ENERGY: f32 = 1000.0;
pub const AREA_LIGHT_SIZE: f32 = 10.0;
pub const BACKGROUND_COLOR: [f32; 3] = [0.05, 0.05, 0.05];
pub const BACKGROUND_STRENGTH: f32 = 0.5;

/// Fixed placements: one light per diagonal corner, each with its own
/// inward-facing rotation.
const LIGHT_PLACEMENTS: [(Vec3, Vec3); 4] = [
    (Vec3::new(15.0, 15.0, 20.0), Vec3::new(-0.6, -0.8, -0.8)),
    (Vec3::new(-15.0, 15.0, 20.0), Vec3::new(-0.6, 0.8, 0.8)),
    (Vec3::new(15.0, -15.0, 20.0), Vec3::new(-0.6, 0.8, -0.8)),
    (Vec3::new(-15.0, -15.0, 20.0), Vec3::new(-0.6, -0.8, 0.8)),
];

/// Replace all scene lighting with the four-light studio rig and set the
/// world background.
pub fn setup_lighting(scene: &mut Scene) {
    scene.clear_lights();

    for (i, (location, rotation)) in LIGHT_PLACEMENTS.iter().enumerate() {
        let light = scene.add_object(
            format!("AreaLight_{i}"),
            ObjectData::Light(Light {
                energy: AREA_LIGHT_ENERGY,
                size: AREA_LIGHT_SIZE,
                color: [1.0, 1.0, 1.0],
            }),
        );
        light.location = *location;
        light.rotation_euler = *rotation;
    }

    let world = scene.ensure_world();
    world.background_color = BACKGROUND_COLOR;
    world.background_strength = BACKGROUND_STRENGTH;

    log::info!("lighting rig ready: {} area lights", LIGHT_PLACEMENTS.len());
}
