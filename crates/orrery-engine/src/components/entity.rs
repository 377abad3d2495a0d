use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;

/// A scene object: transform plus an optional mesh.
/// Stars, bodies, glow shells and orbit rings are all plain entities.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Display name; picking reports it to the tooltip.
    pub tag: String,
    /// Inactive entities are left out of the render buffers.
    pub active: bool,
    pub pos: Vec3,
    /// Euler rotation (XYZ order) in radians.
    pub rotation: Vec3,
    /// Entities without a mesh are never drawn.
    pub mesh: Option<MeshComponent>,
}

impl Entity {
    /// Active, untagged, at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            mesh: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }
}
