//! Animated wave-terrain builder
//!
//! Builds the grid mesh and one shape key per frame, each holding the frame's
//! displaced surface. The wave is a closed-form superposition of three radial
//! traveling waves plus a deterministic trigonometric cross term; the "noise"
//! term is intentionally not a stochastic source, so runs are reproducible.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::mesh::{self, ShapeKey};
use crate::scene::keyframe::Track;
use crate::scene::{ObjectData, ObjectId, Scene};

/// Object name used for the generated terrain.
pub const TERRAIN_OBJECT: &str = "WaveTerrain";

/// Shared animation timing. Terrain, camera, and the timeline all derive
/// their frame counts from one value of this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timing {
    pub duration_seconds: f32,
    pub fps: u32,
}

impl Timing {
    pub fn new(duration_seconds: f32, fps: u32) -> Self {
        Self {
            duration_seconds,
            fps,
        }
    }

    /// Total frame count, `round(duration * fps)`.
    pub fn total_frames(&self) -> u32 {
        (self.duration_seconds * self.fps as f32).round() as u32
    }

    /// Base angular frequency of the wave animation.
    pub fn base_frequency(&self) -> f32 {
        TAU / self.duration_seconds
    }

    /// Zero duration or zero fps would divide by zero downstream; both are
    /// fatal configuration errors.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(SceneError::config(format!(
                "duration_seconds must be positive, got {}",
                self.duration_seconds
            )));
        }
        if self.fps == 0 {
            return Err(SceneError::config("fps must be at least 1"));
        }
        if self.total_frames() == 0 {
            return Err(SceneError::config(format!(
                "duration {}s at {} fps yields zero frames",
                self.duration_seconds, self.fps
            )));
        }
        Ok(())
    }
}

/// Terrain generation parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Points per side of the lattice; at least 2
    pub grid_size: u32,
    /// Peak wave amplitude
    pub wave_height: f32,
    /// Strength of the trigonometric cross term
    pub noise_scale: f32,
    /// World-space width/height the grid covers
    pub grid_scale: f32,
}

impl TerrainConfig {
    pub fn validate(&self) -> SceneResult<()> {
        if self.grid_size < 2 {
            return Err(SceneError::config(format!(
                "grid_size must be at least 2, got {}",
                self.grid_size
            )));
        }
        for (name, value) in [
            ("wave_height", self.wave_height),
            ("noise_scale", self.noise_scale),
            ("grid_scale", self.grid_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Wave height at a grid point for a given animation phase.
///
/// `phase` is the normalized frame position scaled to `[0, 2pi)`; `omega` is
/// the base angular frequency `2pi / duration`. Three radial traveling waves
/// plus the cross term, all scaled by the amplitude. The cross term vanishes
/// at the grid center for every phase since `sin(5 * 0) = 0`.
pub fn wave_height(config: &TerrainConfig, omega: f32, phase: f32, x: f32, y: f32) -> f32 {
    let d = (x * x + y * y).sqrt();
    let main = (d * 1.5 + phase * omega).sin();
    let secondary = (d * 2.0 + phase * omega * 1.5).sin() * 0.3;
    let tertiary = (d * 3.0 + phase * omega * 2.0).sin() * 0.15;
    let cross = (x * 5.0 + phase * omega).sin()
        * (y * 5.0 + phase * omega).sin()
        * (phase * omega * 2.0).sin()
        * config.noise_scale
        * 0.5;
    (main + secondary + tertiary + cross) * config.wave_height
}

/// Largest height magnitude the wave function can produce.
pub fn height_bound(config: &TerrainConfig) -> f32 {
    config.wave_height * (1.0 + 0.3 + 0.15 + 0.5 * config.noise_scale)
}

/// Build the animated terrain object: base grid, neutral Basis key, and one
/// displaced shape key per frame with its influence keyed to 1.0 at the
/// frame and 0.0 everywhere else. Replaces any prior object of the same
/// name. Returns the terrain handle for material attachment.
pub fn build_terrain(
    scene: &mut Scene,
    timing: &Timing,
    config: &TerrainConfig,
) -> SceneResult<ObjectId> {
    timing.validate()?;
    config.validate()?;

    let total_frames = timing.total_frames();
    let omega = timing.base_frequency();

    let mut mesh = mesh::generate_grid(config.grid_size, config.grid_scale);
    let base_points = mesh.positions.clone();
    mesh.add_shape_key(ShapeKey::new("Basis", base_points.clone()))?;

    let mut skipped = 0u32;
    for frame in 0..total_frames {
        let phase = frame as f32 / total_frames as f32 * TAU;
        let points: Vec<Vec3> = base_points
            .iter()
            .map(|p| Vec3::new(p.x, p.y, wave_height(config, omega, phase, p.x, p.y)))
            .collect();

        let mut key = ShapeKey::new(format!("Wave_{frame}"), points);
        key.influence = influence_track(frame, total_frames);

        // A failed frame leaves a gap in the animation but never aborts it.
        if let Err(err) = mesh.add_shape_key(key) {
            log::warn!("skipping shape key for frame {frame}: {err}");
            skipped += 1;
        }
    }

    if scene.remove_object_named(TERRAIN_OBJECT) {
        log::info!("replaced existing '{TERRAIN_OBJECT}' object");
    }
    let id = scene.add_object(TERRAIN_OBJECT, ObjectData::Mesh(mesh)).id();
    scene.set_frame_end(total_frames);

    log::info!(
        "built terrain: {} points, {} quads, {} wave keys ({} skipped)",
        config.grid_size * config.grid_size,
        (config.grid_size - 1) * (config.grid_size - 1),
        total_frames - skipped,
        skipped
    );
    Ok(id)
}

/// Influence curve for the shape key owned by `frame`: 1.0 at its own frame
/// and an explicit 0.0 at every other frame, so no key ever inherits a stale
/// weight from interpolation defaults.
fn influence_track(frame: u32, total_frames: u32) -> Track<f32> {
    let mut track = Track::new();
    for f in 0..total_frames {
        track.insert(f, if f == frame { 1.0 } else { 0.0 });
    }
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TerrainConfig {
        TerrainConfig {
            grid_size: 4,
            wave_height: 1.0,
            noise_scale: 0.5,
            grid_scale: 10.0,
        }
    }

    #[test]
    fn total_frames_rounds() {
        assert_eq!(Timing::new(2.0, 1).total_frames(), 2);
        assert_eq!(Timing::new(10.0, 30).total_frames(), 300);
        assert_eq!(Timing::new(0.9, 1).total_frames(), 1);
    }

    #[test]
    fn zero_timing_is_fatal() {
        assert!(Timing::new(0.0, 30).validate().is_err());
        assert!(Timing::new(10.0, 0).validate().is_err());
        assert!(Timing::new(0.2, 1).validate().is_err());
        assert!(Timing::new(10.0, 30).validate().is_ok());
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        let mut config = test_config();
        config.grid_size = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn center_height_has_no_cross_term() {
        // sin(5 * 0) = 0 kills the cross term at the center, leaving only
        // the radial waves at d = 0.
        let config = test_config();
        let timing = Timing::new(10.0, 24);
        let omega = timing.base_frequency();
        let total = timing.total_frames();
        for frame in 0..total {
            let phase = frame as f32 / total as f32 * TAU;
            let h = wave_height(&config, omega, phase, 0.0, 0.0);
            let radial = (phase * omega).sin()
                + 0.3 * (phase * omega * 1.5).sin()
                + 0.15 * (phase * omega * 2.0).sin();
            assert!((h - radial * config.wave_height).abs() < 1e-5);
        }
    }

    #[test]
    fn height_is_bounded() {
        let config = test_config();
        let timing = Timing::new(10.0, 24);
        let omega = timing.base_frequency();
        let bound = height_bound(&config) + 1e-4;
        for frame in 0..timing.total_frames() {
            let phase = frame as f32 / timing.total_frames() as f32 * TAU;
            for &(x, y) in &[(0.0, 0.0), (1.3, -2.7), (-5.0, 5.0), (4.99, 4.99)] {
                assert!(wave_height(&config, omega, phase, x, y).abs() <= bound);
            }
        }
    }

    #[test]
    fn influence_is_one_at_own_frame_zero_at_neighbors() {
        let total = 8;
        for frame in 0..total {
            let track = influence_track(frame, total);
            assert_eq!(track.len(), total as usize);
            assert_eq!(*track.value_at(frame).unwrap(), 1.0);
            let prev = (frame + total - 1) % total;
            let next = (frame + 1) % total;
            if prev != frame {
                assert_eq!(*track.value_at(prev).unwrap(), 0.0);
            }
            if next != frame {
                assert_eq!(*track.value_at(next).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn build_terrain_populates_scene() {
        let mut scene = Scene::new();
        let timing = Timing::new(2.0, 2);
        let id = build_terrain(&mut scene, &timing, &test_config()).unwrap();

        let obj = scene.object(id).unwrap();
        let mesh = obj.mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.quad_count(), 9);
        // Basis plus one key per frame.
        assert_eq!(mesh.shape_keys().len(), 1 + 4);
        assert!(mesh.shape_key("Basis").is_some());
        assert!(mesh.shape_key("Wave_0").is_some());
        assert_eq!(scene.timeline().frame_end, 4);
    }

    #[test]
    fn rebuilding_replaces_previous_terrain() {
        let mut scene = Scene::new();
        let timing = Timing::new(2.0, 1);
        build_terrain(&mut scene, &timing, &test_config()).unwrap();
        build_terrain(&mut scene, &timing, &test_config()).unwrap();
        let count = scene
            .objects()
            .iter()
            .filter(|o| o.name == TERRAIN_OBJECT)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn displaced_keys_keep_xy_and_grid_cardinality() {
        let mut scene = Scene::new();
        let timing = Timing::new(2.0, 1);
        let config = test_config();
        let id = build_terrain(&mut scene, &timing, &config).unwrap();
        let mesh = scene.object(id).unwrap().mesh().unwrap();
        let base = mesh.shape_key("Basis").unwrap();
        for frame in 0..timing.total_frames() {
            let key = mesh.shape_key(&format!("Wave_{frame}")).unwrap();
            assert_eq!(key.points.len(), mesh.vertex_count());
            for (p, b) in key.points.iter().zip(base.points.iter()) {
                assert_eq!(p.x, b.x);
                assert_eq!(p.y, b.y);
                assert!(p.z.abs() <= height_bound(&config) + 1e-4);
            }
        }
    }
}
