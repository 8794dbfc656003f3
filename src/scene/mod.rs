//! In-memory scene document mutated by the builder modules
//!
//! The original pipeline drove an ambient host scene graph; here the document
//! is an explicit value threaded through every builder, so a scene can be
//! assembled and inspected without any host. Objects carry stable ids that
//! survive removal of other objects.

pub mod keyframe;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::mesh::Mesh;
use keyframe::Track;

/// Stable handle to an object in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(u32);

/// Handle to a material in a [`Scene`]. Materials are never removed, so the
/// handle is a plain index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(usize);

/// Area light data block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Light {
    /// Emitted power in watts
    pub energy: f32,
    /// Edge length of the square emitter
    pub size: f32,
    /// Linear RGB color
    pub color: [f32; 3],
}

/// Camera data block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { fov_y_deg: 50.0 }
    }
}

/// Environment background shared by the whole scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct World {
    pub background_color: [f32; 3],
    pub background_strength: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0],
            background_strength: 1.0,
        }
    }
}

/// Data block attached to an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObjectData {
    Mesh(Mesh),
    Light(Light),
    Camera(Camera),
}

/// A placed object: transform, data block, optional material, and the
/// animated transform channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    id: ObjectId,
    pub name: String,
    pub location: Vec3,
    /// XYZ Euler rotation in radians
    pub rotation_euler: Vec3,
    pub data: ObjectData,
    pub material: Option<MaterialId>,
    pub location_track: Track<Vec3>,
    pub rotation_track: Track<Vec3>,
}

impl Object {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self.data, ObjectData::Light(_))
    }
}

/// Global frame range and playback state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timeline {
    pub frame_start: u32,
    pub frame_end: u32,
    pub fps: u32,
    pub playing: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            frame_start: 0,
            frame_end: 250,
            fps: 24,
            playing: false,
        }
    }
}

/// A shader graph bound to a name, assignable to mesh objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub graph: crate::material::MaterialGraph,
}

/// The scene document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    objects: Vec<Object>,
    materials: Vec<Material>,
    world: Option<World>,
    active_camera: Option<ObjectId>,
    timeline: Timeline,
    next_object_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object at the origin and return it for further setup.
    pub fn add_object(&mut self, name: impl Into<String>, data: ObjectData) -> &mut Object {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        self.objects.push(Object {
            id,
            name: name.into(),
            location: Vec3::ZERO,
            rotation_euler: Vec3::ZERO,
            data,
            material: None,
            location_track: Track::new(),
            rotation_track: Track::new(),
        });
        let idx = self.objects.len() - 1;
        &mut self.objects[idx]
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn find_object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Remove an object by handle. Returns false if the handle is stale.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        if self.active_camera == Some(id) {
            self.active_camera = None;
        }
        self.objects.len() != before
    }

    /// Remove every object with the given name. Returns true if any matched.
    pub fn remove_object_named(&mut self, name: &str) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.name != name);
        self.objects.len() != before
    }

    /// Remove every light object from the scene.
    pub fn clear_lights(&mut self) {
        self.objects.retain(|o| !o.is_light());
    }

    pub fn light_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_light()).count()
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Assign a material to a mesh object.
    pub fn assign_material(&mut self, object: ObjectId, material: MaterialId) -> SceneResult<()> {
        if material.0 >= self.materials.len() {
            return Err(SceneError::object(format!(
                "material handle {} is out of range",
                material.0
            )));
        }
        let obj = self
            .object_mut(object)
            .ok_or_else(|| SceneError::object("material target object not found"))?;
        if obj.mesh().is_none() {
            return Err(SceneError::object(format!(
                "object '{}' is not a mesh",
                obj.name
            )));
        }
        obj.material = Some(material);
        Ok(())
    }

    /// Return the world, creating a default one if the scene has none.
    pub fn ensure_world(&mut self) -> &mut World {
        self.world.get_or_insert_with(World::default)
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn set_active_camera(&mut self, id: ObjectId) {
        self.active_camera = Some(id);
    }

    pub fn active_camera(&self) -> Option<ObjectId> {
        self.active_camera
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn set_frame_range(&mut self, start: u32, end: u32) {
        self.timeline.frame_start = start;
        self.timeline.frame_end = end;
    }

    pub fn set_frame_end(&mut self, end: u32) {
        self.timeline.frame_end = end;
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.timeline.fps = fps;
    }

    /// Flag the timeline as playing. Playback itself is host territory; the
    /// document only records the request.
    pub fn start_playback(&mut self) {
        self.timeline.playing = true;
    }
}
