//! Orbiting camera builder
//!
//! Creates the scene camera and keyframes a full circular orbit around the
//! origin: one key per frame, inclusive of the final frame so the loop
//! closes exactly where it started.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::error::SceneResult;
use crate::scene::keyframe::Track;
use crate::scene::{Camera, ObjectData, ObjectId, Scene};
use crate::terrain::Timing;

/// Height of the orbit circle above the terrain plane.
pub const ORBIT_HEIGHT: f32 = 10.0;

/// Downward pitch of the camera, matching the rig's original framing.
const ORBIT_PITCH: f32 = 60.0 * std::f32::consts::PI / 180.0;

/// Camera position and yaw on the orbit circle at a given angle. The yaw is
/// the tangent direction plus a quarter turn, which keeps the lens pointed
/// at the origin.
pub fn orbit_sample(radius: f32, angle: f32) -> (Vec3, Vec3) {
    let location = Vec3::new(radius * angle.cos(), radius * angle.sin(), ORBIT_HEIGHT);
    let rotation = Vec3::new(ORBIT_PITCH, 0.0, angle + FRAC_PI_2);
    (location, rotation)
}

/// Create the orbiting camera, mark it active, and key its transform for
/// frames `0..=total_frames`.
pub fn build_camera_orbit(
    scene: &mut Scene,
    timing: &Timing,
    radius: f32,
) -> SceneResult<ObjectId> {
    timing.validate()?;
    let total_frames = timing.total_frames();

    let mut location_track = Track::new();
    let mut rotation_track = Track::new();
    for frame in 0..=total_frames {
        let angle = frame as f32 / total_frames as f32 * TAU;
        let (location, rotation) = orbit_sample(radius, angle);
        location_track.insert(frame, location);
        rotation_track.insert(frame, rotation);
    }

    let camera = scene.add_object("Camera", ObjectData::Camera(Camera::default()));
    let (location, rotation) = orbit_sample(radius, 0.0);
    camera.location = location;
    camera.rotation_euler = rotation;
    camera.location_track = location_track;
    camera.rotation_track = rotation_track;
    let id = camera.id();
    scene.set_active_camera(id);

    log::info!(
        "camera orbit ready: radius {radius}, {} keys",
        total_frames + 1
    );
    Ok(id)
}
