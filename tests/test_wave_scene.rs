//! End-to-end scenario: build the full wave scene with a tiny configuration
//! and check every step left the document in the expected state.

use waveforge::scene::ObjectData;
use waveforge::terrain::TERRAIN_OBJECT;
use waveforge::{build_wave_scene, Scene, SceneConfig, TerrainConfig, Timing};

fn tiny_config() -> SceneConfig {
    SceneConfig {
        timing: Timing::new(2.0, 1),
        terrain: TerrainConfig {
            grid_size: 4,
            wave_height: 1.0,
            noise_scale: 0.5,
            grid_scale: 10.0,
        },
        orbit_radius: 20.0,
    }
}

#[test]
fn full_pipeline_produces_expected_scene() {
    let mut scene = Scene::new();
    let config = tiny_config();
    let handles = build_wave_scene(&mut scene, &config).unwrap();

    // Terrain: 16 points, 9 quads, Basis plus one key per frame.
    let terrain = scene.object(handles.terrain).unwrap();
    assert_eq!(terrain.name, TERRAIN_OBJECT);
    let mesh = terrain.mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.quad_count(), 9);
    assert_eq!(mesh.shape_keys().len(), 3);

    // Each wave key holds exactly one influence of 1.0, at its own frame.
    for frame in 0..2u32 {
        let key = mesh.shape_key(&format!("Wave_{frame}")).unwrap();
        assert_eq!(*key.influence.value_at(frame).unwrap(), 1.0);
        let other = (frame + 1) % 2;
        assert_eq!(*key.influence.value_at(other).unwrap(), 0.0);
    }

    // Material attached to the terrain object.
    assert_eq!(terrain.material, Some(handles.material));
    let material = scene.material(handles.material).unwrap();
    assert_eq!(material.name, "WaterMaterial");
    assert_eq!(material.graph.nodes().len(), 5);

    // Lighting rig and world background.
    assert_eq!(scene.light_count(), 4);
    let world = scene.world().unwrap();
    assert!((world.background_strength - 0.5).abs() < 1e-6);

    // Camera: 3 samples (frames 0, 1, 2), loop closure, active camera set.
    assert_eq!(scene.active_camera(), Some(handles.camera));
    let camera = scene.object(handles.camera).unwrap();
    assert!(matches!(camera.data, ObjectData::Camera(_)));
    assert_eq!(camera.location_track.len(), 3);
    let first = *camera.location_track.value_at(0).unwrap();
    let last = *camera.location_track.value_at(2).unwrap();
    assert!((first - last).length() < 1e-4);

    // Timeline driven by the single shared timing value.
    let timeline = scene.timeline();
    assert_eq!(timeline.frame_start, 0);
    assert_eq!(timeline.frame_end, 2);
    assert_eq!(timeline.fps, 1);
    assert!(timeline.playing);
}

#[test]
fn frame_zero_center_height_is_zero() {
    let config = tiny_config();
    let omega = config.timing.base_frequency();
    // At phase 0 every term of the wave superposition vanishes.
    let h = waveforge::terrain::wave_height(&config.terrain, omega, 0.0, 0.0, 0.0);
    assert!(h.abs() < 1e-6);
}

#[test]
fn default_config_matches_original_rig() {
    let config = SceneConfig::default();
    assert_eq!(config.timing.total_frames(), 300);
    assert_eq!(config.terrain.grid_size, 40);
    assert!((config.orbit_radius - 20.0).abs() < 1e-6);

    let mut scene = Scene::new();
    let handles = build_wave_scene(&mut scene, &config).unwrap();
    let mesh = scene.object(handles.terrain).unwrap().mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 1600);
    assert_eq!(mesh.shape_keys().len(), 301);
    assert_eq!(scene.timeline().frame_end, 300);
}

#[test]
fn zero_duration_is_a_fatal_config_error() {
    let mut config = tiny_config();
    config.timing.duration_seconds = 0.0;
    let mut scene = Scene::new();
    assert!(build_wave_scene(&mut scene, &config).is_err());
}

#[test]
fn scene_serializes_to_json() {
    let mut scene = Scene::new();
    build_wave_scene(&mut scene, &tiny_config()).unwrap();
    let json = serde_json::to_string(&scene).unwrap();
    assert!(json.contains("WaveTerrain"));
    assert!(json.contains("WaterMaterial"));
}
