//! Ray casting against scene spheres.
//!
//! Only sphere geometry is pickable; the candidate list decides which
//! entities take part, so decorative meshes never get in the way.

use glam::Vec3;
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Half-line with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first sphere surface hit, if any.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_near = -b - sqrt_disc;
        let t_far = -b + sqrt_disc;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            Some(t_far)
        } else {
            None
        }
    }
}

/// A single ray/entity intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: EntityId,
    pub distance: f32,
    pub point: Vec3,
}

/// Intersect `ray` with the sphere meshes of `candidates`.
/// Hits come back nearest first; inactive or non-sphere entities are skipped.
pub fn intersect_entities(ray: &Ray, scene: &Scene, candidates: &[EntityId]) -> Vec<Hit> {
    let mut hits: Vec<Hit> = candidates
        .iter()
        .filter_map(|&id| scene.get(id))
        .filter(|e| e.active)
        .filter_map(|e| {
            let radius = e.mesh.as_ref()?.sphere_radius()?;
            let distance = ray.intersect_sphere(e.pos, radius)?;
            Some(Hit {
                id: e.id,
                distance,
                point: ray.at(distance),
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
