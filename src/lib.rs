//! waveforge: procedural animated wave-terrain scene generator
//!
//! Builds a complete scene description in four steps run in fixed order:
//! an animated terrain mesh driven by per-frame shape keys, a layered
//! refractive water material, a four-light studio rig with an environment
//! background, and a camera orbiting the origin. The scene document is an
//! explicit [`Scene`] value, so the whole pipeline runs and tests without a
//! rendering host; rendering, shader evaluation, and playback remain host
//! concerns.

pub mod camera;
pub mod error;
pub mod lighting;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod terrain;

use serde::{Deserialize, Serialize};

pub use camera::build_camera_orbit;
pub use error::{SceneError, SceneResult};
pub use lighting::setup_lighting;
pub use material::build_water_material;
pub use scene::{MaterialId, ObjectId, Scene};
pub use terrain::{build_terrain, TerrainConfig, Timing};

/// Full configuration for one generated scene. One [`Timing`] value drives
/// the terrain animation, the camera orbit, and the timeline, so the frame
/// counts cannot drift apart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneConfig {
    pub timing: Timing,
    pub terrain: TerrainConfig,
    pub orbit_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            timing: Timing::new(10.0, 30),
            terrain: TerrainConfig {
                grid_size: 40,
                wave_height: 0.3,
                noise_scale: 0.8,
                grid_scale: 10.0,
            },
            orbit_radius: 20.0,
        }
    }
}

/// Handles to the scene entities produced by [`build_wave_scene`].
#[derive(Debug, Clone, Copy)]
pub struct SceneHandles {
    pub terrain: ObjectId,
    pub material: MaterialId,
    pub camera: ObjectId,
}

/// Run the full generation pipeline: terrain, material, lighting, camera,
/// frame range, playback. Steps run strictly in order; only the material
/// attachment depends on an earlier step's output.
pub fn build_wave_scene(scene: &mut Scene, config: &SceneConfig) -> SceneResult<SceneHandles> {
    config.timing.validate()?;

    let terrain = terrain::build_terrain(scene, &config.timing, &config.terrain)?;
    let material = material::build_water_material(scene);
    scene.assign_material(terrain, material)?;

    lighting::setup_lighting(scene);
    let camera = camera::build_camera_orbit(scene, &config.timing, config.orbit_radius)?;

    let total_frames = config.timing.total_frames();
    scene.set_frame_range(0, total_frames);
    scene.set_fps(config.timing.fps);
    scene.start_playback();

    log::info!(
        "scene complete: {} objects, {} frames at {} fps",
        scene.objects().len(),
        total_frames,
        config.timing.fps
    );
    Ok(SceneHandles {
        terrain,
        material,
        camera,
    })
}
