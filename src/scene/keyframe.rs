//! Keyframe track storage with sorted insert and linear evaluation
//!
//! Tracks hold per-frame values for animated channels (object location and
//! rotation, shape-key influence). Evaluation clamps before the first and
//! after the last key.

use serde::{Deserialize, Serialize};

/// Values that can be linearly interpolated between two keyframes.
pub trait Interpolate: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Interpolate for glam::Vec3 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        glam::Vec3::lerp(a, b, t)
    }
}

/// A single keyframe: a value pinned to an integer frame number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Keyframe<T> {
    pub frame: u32,
    pub value: T,
}

/// An animated channel. Keys stay sorted by frame; inserting at an
/// already-keyed frame replaces the existing value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T> Default for Track<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Track<T> {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys sorted by frame.
    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// Insert a key, keeping frame order. A key already present at `frame`
    /// is overwritten.
    pub fn insert(&mut self, frame: u32, value: T) {
        match self.keys.binary_search_by_key(&frame, |k| k.frame) {
            Ok(i) => self.keys[i].value = value,
            Err(i) => self.keys.insert(i, Keyframe { frame, value }),
        }
    }

    /// Exact value at a keyed frame, if one exists.
    pub fn value_at(&self, frame: u32) -> Option<&T> {
        self.keys
            .binary_search_by_key(&frame, |k| k.frame)
            .ok()
            .map(|i| &self.keys[i].value)
    }
}

impl<T: Interpolate> Track<T> {
    /// Evaluate the track at a (possibly fractional) frame. Returns None for
    /// an empty track; clamps outside the keyed range.
    pub fn evaluate(&self, frame: f32) -> Option<T> {
        let first = self.keys.first()?;
        let last = self.keys.last()?;
        if frame <= first.frame as f32 {
            return Some(first.value);
        }
        if frame >= last.frame as f32 {
            return Some(last.value);
        }

        // Index of the first key strictly after `frame`.
        let hi = self.keys.partition_point(|k| (k.frame as f32) <= frame);
        let k0 = self.keys[hi - 1];
        let k1 = self.keys[hi];
        let span = (k1.frame - k0.frame) as f32;
        let t = if span > 0.0 {
            (frame - k0.frame as f32) / span
        } else {
            0.0
        };
        Some(T::lerp(k0.value, k1.value, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_keys_sorted() {
        let mut track = Track::new();
        track.insert(10, 1.0f32);
        track.insert(0, 0.0);
        track.insert(5, 0.5);
        let frames: Vec<u32> = track.keys().iter().map(|k| k.frame).collect();
        assert_eq!(frames, vec![0, 5, 10]);
    }

    #[test]
    fn insert_replaces_existing_frame() {
        let mut track = Track::new();
        track.insert(3, 1.0f32);
        track.insert(3, 2.0);
        assert_eq!(track.len(), 1);
        assert_eq!(*track.value_at(3).unwrap(), 2.0);
    }

    #[test]
    fn evaluate_interpolates_and_clamps() {
        let mut track = Track::new();
        track.insert(0, 0.0f32);
        track.insert(10, 10.0);
        assert!((track.evaluate(5.0).unwrap() - 5.0).abs() < 1e-6);
        assert!((track.evaluate(-2.0).unwrap() - 0.0).abs() < 1e-6);
        assert!((track.evaluate(25.0).unwrap() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn evaluate_empty_track_is_none() {
        let track: Track<f32> = Track::new();
        assert!(track.evaluate(0.0).is_none());
    }

    #[test]
    fn evaluate_vec3_midpoint() {
        let mut track = Track::new();
        track.insert(0, glam::Vec3::ZERO);
        track.insert(2, glam::Vec3::new(2.0, 4.0, 6.0));
        let mid = track.evaluate(1.0).unwrap();
        assert!((mid - glam::Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }
}
