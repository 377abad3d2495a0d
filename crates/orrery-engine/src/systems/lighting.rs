//! Scene lights for the host's lighting pass.
//!
//! Lights are added once at scene build and persist for the session.
//! The host reads the packed records straight out of linear memory.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::components::mesh::Color;

/// Light kind tags as written in the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient = 0,
    Point = 1,
    Directional = 2,
}

/// A scene light.
///
/// Wire format (12 floats / 48 bytes):
/// `[kind, x, y, z, r, g, b, intensity, distance, pad, pad, pad]`
///
/// For directional lights `x, y, z` is the position the light shines
/// from toward the origin. `distance` is the point-light cutoff (0 = infinite).
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Light {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub distance: f32,
    pub _pad: [f32; 3],
}

impl Light {
    fn new(kind: LightKind, pos: Vec3, color: Color, intensity: f32, distance: f32) -> Self {
        Self {
            kind: kind as u32 as f32,
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            distance,
            _pad: [0.0; 3],
        }
    }

    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self::new(LightKind::Ambient, Vec3::ZERO, color, intensity, 0.0)
    }

    pub fn point(pos: Vec3, color: Color, intensity: f32, distance: f32) -> Self {
        Self::new(LightKind::Point, pos, color, intensity, distance)
    }

    pub fn directional(from: Vec3, color: Color, intensity: f32) -> Self {
        Self::new(LightKind::Directional, from, color, intensity, 0.0)
    }

    pub fn kind(&self) -> LightKind {
        match self.kind as u32 {
            0 => LightKind::Ambient,
            1 => LightKind::Point,
            _ => LightKind::Directional,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Manages the active lights of the scene.
pub struct LightState {
    lights: Vec<Light>,
}

impl LightState {
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
        }
    }

    /// Add a light to the scene.
    pub fn add(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get an iterator over active lights.
    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Number of lights of one kind.
    pub fn count_of(&self, kind: LightKind) -> usize {
        self.lights.iter().filter(|l| l.kind() == kind).count()
    }

    /// Pointer to the lights data for host reads.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn point_light_new() {
        let light = Light::point(Vec3::ZERO, Color::WHITE, 3.0, 500.0);
        assert_eq!(light.kind(), LightKind::Point);
        assert_eq!(light.intensity, 3.0);
        assert_eq!(light.distance, 500.0);
        assert_eq!(light.position(), Vec3::ZERO);
    }

    #[test]
    fn light_state_counts_by_kind() {
        let mut state = LightState::new();
        state.add(Light::ambient(Color::WHITE, 2.0));
        state.add(Light::point(Vec3::ZERO, Color::WHITE, 3.0, 500.0));
        state.add(Light::directional(Vec3::splat(30.0), Color::WHITE, 2.0));
        assert_eq!(state.count(), 3);
        assert_eq!(state.count_of(LightKind::Ambient), 1);
        assert_eq!(state.count_of(LightKind::Point), 1);
        assert_eq!(state.count_of(LightKind::Directional), 1);
    }

    #[test]
    fn light_is_12_floats() {
        assert_eq!(std::mem::size_of::<Light>(), LIGHT_FLOATS * 4);
    }
}
