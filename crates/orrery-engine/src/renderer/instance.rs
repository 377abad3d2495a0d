use bytemuck::{Pod, Zeroable};

/// Material flag bits packed into `MeshInstance::flags`.
pub const FLAG_TRANSPARENT: u32 = 1;
pub const FLAG_DOUBLE_SIDED: u32 = 1 << 1;
pub const FLAG_UNLIT: u32 = 1 << 2;

/// Per-mesh render data read by the host renderer each frame.
/// Must match the host protocol: 20 floats = 80 bytes stride.
///
/// Geometry params by `geometry` kind:
/// - 0 sphere: `param_a` = radius
/// - 1 ring: `param_a` = inner radius, `param_b` = outer radius
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation (XYZ) in radians.
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub geometry: f32,
    pub param_a: f32,
    pub param_b: f32,
    pub segments: f32,
    /// Texture id, or -1 for none.
    pub texture: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    pub emissive_r: f32,
    pub emissive_g: f32,
    pub emissive_b: f32,
    pub emissive_intensity: f32,
    pub flags: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One point cloud inside the shared point position buffer.
/// Wire format: 8 floats `[offset, count, size, r, g, b, opacity, flags]`,
/// where `offset`/`count` are in points (3 floats each).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointBatch {
    pub offset: f32,
    pub count: f32,
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    pub flags: f32,
}

impl PointBatch {
    pub const FLOATS: usize = 8;
}

/// Render buffer holding everything the host draws.
/// Mesh instances are rebuilt every frame; points are static and built once.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
    /// Flat xyz positions of every point cloud.
    pub points: Vec<f32>,
    pub point_batches: Vec<PointBatch>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a buffer with room for `max_instances` meshes.
    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            points: Vec::new(),
            point_batches: Vec::new(),
        }
    }

    pub fn clear_instances(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn point_count(&self) -> u32 {
        (self.points.len() / 3) as u32
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr()
    }

    pub fn point_batch_count(&self) -> u32 {
        self.point_batches.len() as u32
    }

    pub fn point_batches_ptr(&self) -> *const f32 {
        self.point_batches.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_instance_is_20_floats() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), 80);
        assert_eq!(MeshInstance::STRIDE_BYTES, 80);
    }

    #[test]
    fn point_batch_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointBatch>(), PointBatch::FLOATS * 4);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(MeshInstance::default());
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear_instances();
        assert_eq!(buf.instance_count(), 0);
    }
}
