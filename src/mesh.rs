//! Grid mesh generation and shape-key storage
//!
//! Provides CPU-side generation of a regular XY lattice (Z=0) with quad
//! faces, plus the shape-key data blended in by influence tracks. Topology is
//! fixed at creation; shape keys only move points.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::scene::keyframe::Track;

/// A named set of absolute per-point positions, blended into the base mesh
/// by its animated influence weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeKey {
    pub name: String,
    pub points: Vec<Vec3>,
    pub influence: Track<f32>,
}

impl ShapeKey {
    pub fn new(name: impl Into<String>, points: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            points,
            influence: Track::new(),
        }
    }
}

/// Quad mesh with optional shape keys. Faces reference point indices in a
/// fixed winding; every shape key has the same point count as the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub quads: Vec<[u32; 4]>,
    shape_keys: Vec<ShapeKey>,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, quads: Vec<[u32; 4]>) -> Self {
        Self {
            positions,
            quads,
            shape_keys: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    pub fn shape_keys(&self) -> &[ShapeKey] {
        &self.shape_keys
    }

    pub fn shape_key(&self, name: &str) -> Option<&ShapeKey> {
        self.shape_keys.iter().find(|k| k.name == name)
    }

    /// Add a shape key. Fails on a name collision or a point-count mismatch
    /// with the base mesh.
    pub fn add_shape_key(&mut self, key: ShapeKey) -> SceneResult<&mut ShapeKey> {
        if self.shape_keys.iter().any(|k| k.name == key.name) {
            return Err(SceneError::shape_key(format!(
                "shape key '{}' already exists",
                key.name
            )));
        }
        if key.points.len() != self.positions.len() {
            return Err(SceneError::shape_key(format!(
                "shape key '{}' has {} points, mesh has {}",
                key.name,
                key.points.len(),
                self.positions.len()
            )));
        }
        self.shape_keys.push(key);
        let idx = self.shape_keys.len() - 1;
        Ok(&mut self.shape_keys[idx])
    }
}

/// Generate a `grid_size x grid_size` lattice spanning
/// `[-grid_scale/2, grid_scale/2]` in X and Y at Z=0, with one quad per 2x2
/// block of adjacent points. Winding is (v1, v2, v4, v3), matching the base
/// lattice order (row-major, X fastest).
pub fn generate_grid(grid_size: u32, grid_scale: f32) -> Mesh {
    if grid_size < 2 {
        return Mesh::new(Vec::new(), Vec::new());
    }
    let n = grid_size as usize;
    let step = 1.0 / (grid_size - 1) as f32;

    let mut positions = Vec::with_capacity(n * n);
    for y in 0..grid_size {
        let ny = (y as f32 * step - 0.5) * grid_scale;
        for x in 0..grid_size {
            let nx = (x as f32 * step - 0.5) * grid_scale;
            positions.push(Vec3::new(nx, ny, 0.0));
        }
    }

    let mut quads = Vec::with_capacity((n - 1) * (n - 1));
    for y in 0..grid_size - 1 {
        for x in 0..grid_size - 1 {
            let v1 = y * grid_size + x;
            let v2 = v1 + 1;
            let v3 = v1 + grid_size;
            let v4 = v3 + 1;
            quads.push([v1, v2, v4, v3]);
        }
    }

    Mesh::new(positions, quads)
}
