//! Water shading graph
//!
//! A small fixed node set: a Fresnel node drives the mix factor between a
//! glossy reflection lobe and a blue-tinted refractive glass lobe, and the
//! mixed shader feeds the surface output. The graph is data only; evaluation
//! and rendering are host territory.

use serde::{Deserialize, Serialize};

use crate::scene::{Material, MaterialId, Scene};

/// Index of refraction shared by the Fresnel blend and the glass lobe.
pub const WATER_IOR: f32 = 1.33;

const GLASS_COLOR: [f32; 4] = [0.1, 0.3, 0.9, 1.0];
const GLOSSY_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const GLOSSY_ROUGHNESS: f32 = 0.1;

/// Handle to a node within one [`MaterialGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

/// Node kinds supported by the water material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShaderNodeKind {
    /// Final surface output of the material
    OutputSurface,
    /// Blend between two shader inputs by a scalar factor
    MixShader,
    GlassBsdf { color: [f32; 4], ior: f32 },
    GlossyBsdf { color: [f32; 4], roughness: f32 },
    Fresnel { ior: f32 },
}

/// Output socket of a shader node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputSocket {
    Bsdf,
    Shader,
    Fac,
}

/// Input socket of a shader node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSocket {
    Surface,
    Fac,
    /// First shader slot of a mix node
    ShaderA,
    /// Second shader slot of a mix node
    ShaderB,
}

/// A placed node. Location is the 2D editor position, kept for parity with
/// host node editors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShaderNode {
    pub kind: ShaderNodeKind,
    pub location: [f32; 2],
}

/// A directed connection between two node sockets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeLink {
    pub from_node: NodeId,
    pub from_socket: OutputSocket,
    pub to_node: NodeId,
    pub to_socket: InputSocket,
}

/// Shader node graph: nodes plus explicit socket links. Immutable after the
/// builder finishes with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialGraph {
    nodes: Vec<ShaderNode>,
    links: Vec<NodeLink>,
}

impl MaterialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, kind: ShaderNodeKind, location: [f32; 2]) -> NodeId {
        self.nodes.push(ShaderNode { kind, location });
        NodeId(self.nodes.len() - 1)
    }

    pub fn link(
        &mut self,
        from_node: NodeId,
        from_socket: OutputSocket,
        to_node: NodeId,
        to_socket: InputSocket,
    ) {
        self.links.push(NodeLink {
            from_node,
            from_socket,
            to_node,
            to_socket,
        });
    }

    pub fn node(&self, id: NodeId) -> Option<&ShaderNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[ShaderNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[NodeLink] {
        &self.links
    }

    /// The link feeding a given input socket, if any.
    pub fn link_into(&self, node: NodeId, socket: InputSocket) -> Option<&NodeLink> {
        self.links
            .iter()
            .find(|l| l.to_node == node && l.to_socket == socket)
    }

    /// First node of the given kind discriminant matching `pred`.
    pub fn find_node(&self, pred: impl Fn(&ShaderNodeKind) -> bool) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| pred(&n.kind))
            .map(NodeId)
    }
}

/// Build the layered water material and register it with the scene.
/// Pure construction; always succeeds.
pub fn build_water_material(scene: &mut Scene) -> MaterialId {
    let mut graph = MaterialGraph::new();

    let output = graph.add_node(ShaderNodeKind::OutputSurface, [300.0, 0.0]);
    let mix = graph.add_node(ShaderNodeKind::MixShader, [100.0, 0.0]);
    let glass = graph.add_node(
        ShaderNodeKind::GlassBsdf {
            color: GLASS_COLOR,
            ior: WATER_IOR,
        },
        [-100.0, -100.0],
    );
    let glossy = graph.add_node(
        ShaderNodeKind::GlossyBsdf {
            color: GLOSSY_COLOR,
            roughness: GLOSSY_ROUGHNESS,
        },
        [-100.0, 100.0],
    );
    let fresnel = graph.add_node(ShaderNodeKind::Fresnel { ior: WATER_IOR }, [-100.0, 200.0]);

    graph.link(fresnel, OutputSocket::Fac, mix, InputSocket::Fac);
    graph.link(glossy, OutputSocket::Bsdf, mix, InputSocket::ShaderA);
    graph.link(glass, OutputSocket::Bsdf, mix, InputSocket::ShaderB);
    graph.link(mix, OutputSocket::Shader, output, InputSocket::Surface);

    let id = scene.add_material(Material {
        name: "WaterMaterial".into(),
        graph,
    });
    log::info!("built water material (5 nodes, 4 links)");
    id
}
