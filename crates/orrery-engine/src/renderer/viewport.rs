use glam::Vec2;

/// Output surface size in CSS pixels plus the pixel density the
/// renderer should use for its backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Resize to the given CSS size. The device pixel ratio is capped at `max_ratio`.
    pub fn resize(&mut self, width: f32, height: f32, device_ratio: f32, max_ratio: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.pixel_ratio = if device_ratio > 0.0 {
            device_ratio.min(max_ratio)
        } else {
            1.0
        };
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Backing-store size in device pixels.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    /// Map a client-space pointer position to normalized device coordinates.
    pub fn to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x / self.width) * 2.0 - 1.0,
            -(screen.y / self.height) * 2.0 + 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped() {
        let mut vp = Viewport::default();
        vp.resize(1920.0, 1080.0, 3.0, 2.0);
        assert_eq!(vp.pixel_ratio, 2.0);
        assert_eq!(vp.drawing_buffer_size(), (3840, 2160));

        vp.resize(1920.0, 1080.0, 1.5, 2.0);
        assert_eq!(vp.pixel_ratio, 1.5);
    }

    #[test]
    fn ndc_corners() {
        let vp = Viewport { width: 800.0, height: 600.0, pixel_ratio: 1.0 };
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }
}
