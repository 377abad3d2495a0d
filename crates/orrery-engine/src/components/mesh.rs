use glam::Vec3;
use crate::assets::registry::TextureId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Geometry primitive. Tessellation is left to the host renderer;
/// `segments` is the subdivision hint it should use.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere { radius: f32, segments: u32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32, segments: u32 },
    /// Static point cloud in local space.
    Points { positions: Vec<Vec3>, size: f32 },
}

impl Geometry {
    /// Wire id used by the render buffer.
    pub fn kind(&self) -> u32 {
        match self {
            Geometry::Sphere { .. } => 0,
            Geometry::Ring { .. } => 1,
            Geometry::Points { .. } => 2,
        }
    }
}

/// Lighting model for a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Lit by the scene lights.
    #[default]
    Standard,
    /// Unlit, flat color.
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Color texture. `None` renders the flat color.
    pub map: Option<TextureId>,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub double_sided: bool,
    pub shading: Shading,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            map: None,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            opacity: 1.0,
            transparent: false,
            double_sided: false,
            shading: Shading::Standard,
        }
    }
}

impl Material {
    /// Lit material sampling a texture.
    pub fn standard(map: TextureId) -> Self {
        Self {
            map: Some(map),
            ..Default::default()
        }
    }

    /// Unlit flat-color material.
    pub fn basic(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Basic,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    /// Marks the material transparent with the given opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}

/// A renderable mesh: geometry plus material.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }

    pub fn sphere(radius: f32, segments: u32, material: Material) -> Self {
        Self::new(Geometry::Sphere { radius, segments }, material)
    }

    pub fn ring(inner: f32, outer: f32, segments: u32, material: Material) -> Self {
        Self::new(Geometry::Ring { inner, outer, segments }, material)
    }

    pub fn points(positions: Vec<Vec3>, size: f32, material: Material) -> Self {
        Self::new(Geometry::Points { positions, size }, material)
    }

    /// Bounding radius for sphere geometry; `None` for everything else.
    pub fn sphere_radius(&self) -> Option<f32> {
        match self.geometry {
            Geometry::Sphere { radius, .. } => Some(radius),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_decode() {
        let sky = Color::from_hex(0x87CEEB);
        assert!((sky.r - 135.0 / 255.0).abs() < 1e-6);
        assert!((sky.g - 206.0 / 255.0).abs() < 1e-6);
        assert!((sky.b - 235.0 / 255.0).abs() < 1e-6);
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
    }

    #[test]
    fn opacity_implies_transparent() {
        let m = Material::basic(Color::WHITE).with_opacity(0.2);
        assert!(m.transparent);
        assert_eq!(m.opacity, 0.2);
        assert_eq!(m.shading, Shading::Basic);
    }

    #[test]
    fn sphere_radius_only_for_spheres() {
        let s = MeshComponent::sphere(1.5, 32, Material::default());
        let r = MeshComponent::ring(9.9, 10.1, 128, Material::default());
        assert_eq!(s.sphere_radius(), Some(1.5));
        assert_eq!(r.sphere_radius(), None);
    }
}
