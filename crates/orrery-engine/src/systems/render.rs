use crate::components::entity::Entity;
use crate::components::mesh::{Geometry, Material, Shading};
use crate::renderer::instance::{
    MeshInstance, PointBatch, RenderBuffer, FLAG_DOUBLE_SIDED, FLAG_TRANSPARENT, FLAG_UNLIT,
};

fn material_flags(material: &Material) -> f32 {
    let mut flags = 0;
    if material.transparent {
        flags |= FLAG_TRANSPARENT;
    }
    if material.double_sided {
        flags |= FLAG_DOUBLE_SIDED;
    }
    if material.shading == Shading::Basic {
        flags |= FLAG_UNLIT;
    }
    flags as f32
}

/// Rebuild the per-frame mesh instances from a set of entities.
/// Point clouds are skipped; see [`build_point_buffer`].
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear_instances();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let (param_a, param_b, segments) = match mesh.geometry {
            Geometry::Sphere { radius, segments } => (radius, 0.0, segments),
            Geometry::Ring { inner, outer, segments } => (inner, outer, segments),
            Geometry::Points { .. } => continue,
        };
        let m = &mesh.material;

        buffer.push(MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rot_x: entity.rotation.x,
            rot_y: entity.rotation.y,
            rot_z: entity.rotation.z,
            geometry: mesh.geometry.kind() as f32,
            param_a,
            param_b,
            segments: segments as f32,
            texture: m.map.map_or(-1.0, |t| t.0 as f32),
            r: m.color.r,
            g: m.color.g,
            b: m.color.b,
            opacity: m.opacity,
            emissive_r: m.emissive.r,
            emissive_g: m.emissive.g,
            emissive_b: m.emissive.b,
            emissive_intensity: m.emissive_intensity,
            flags: material_flags(m),
        });
    }
}

/// Write every point cloud into the shared point buffer, translated by
/// its entity position. Point clouds never change, so this runs once.
pub fn build_point_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.points.clear();
    buffer.point_batches.clear();

    for entity in entities {
        let Some(mesh) = &entity.mesh else { continue };
        let Geometry::Points { positions, size } = &mesh.geometry else { continue };

        let offset = buffer.points.len() / 3;
        buffer.points.reserve(positions.len() * 3);
        for p in positions {
            let world = *p + entity.pos;
            buffer.points.extend_from_slice(&[world.x, world.y, world.z]);
        }
        let m = &mesh.material;
        buffer.point_batches.push(PointBatch {
            offset: offset as f32,
            count: positions.len() as f32,
            size: *size,
            r: m.color.r,
            g: m.color.g,
            b: m.color.b,
            opacity: m.opacity,
            flags: material_flags(m),
        });
    }
}
