//! Orbit camera controller.
//!
//! Pointer drags rotate around a fixed target, the secondary button pans,
//! and the wheel dollies in and out. Input only accumulates deltas; the
//! camera moves in `update`, which must run every frame so damping can
//! bleed the remaining motion off smoothly.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3};
use crate::renderer::camera::PerspectiveCamera;

const POLAR_EPSILON: f32 = 1e-6;
/// Multiplicative dolly per wheel notch.
const ZOOM_STEP: f32 = 0.95;

/// Primary button rotates, anything else pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Rotate,
    Pan,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    mode: DragMode,
    last: Vec2,
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Point the camera orbits around.
    pub target: Vec3,
    pub enable_damping: bool,
    /// Fraction of the pending motion applied per update when damping.
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle bounds measured from +Y (radians).
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,

    viewport_height: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pending_pan: Vec2,
    pan_offset: Vec3,
    drag: Option<Drag>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: false,
            damping_factor: 0.05,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            viewport_height: 600.0,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pending_pan: Vec2::ZERO,
            pan_offset: Vec3::ZERO,
            drag: None,
        }
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation and pan speeds are expressed per viewport height.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(1.0);
    }

    pub fn on_pointer_down(&mut self, pos: Vec2, button: u32) {
        let mode = if button == 0 { DragMode::Rotate } else { DragMode::Pan };
        self.drag = Some(Drag { mode, last: pos });
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = pos - drag.last;
        drag.last = pos;
        match drag.mode {
            DragMode::Rotate => {
                self.delta_theta -= TAU * delta.x / self.viewport_height * self.rotate_speed;
                self.delta_phi -= TAU * delta.y / self.viewport_height * self.rotate_speed;
            }
            DragMode::Pan => {
                self.pending_pan += delta * self.pan_speed;
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.drag = None;
    }

    /// Positive delta (scrolling down) moves the camera away from the target.
    pub fn on_wheel(&mut self, delta: f32) {
        let step = ZOOM_STEP.powf(self.zoom_speed);
        if delta > 0.0 {
            self.scale /= step;
        } else if delta < 0.0 {
            self.scale *= step;
        }
    }

    /// Apply pending motion to `camera`. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - self.target;
        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        self.absorb_pan(camera, radius);

        let factor = if self.enable_damping { self.damping_factor } else { 1.0 };
        theta += self.delta_theta * factor;
        phi += self.delta_phi * factor;
        phi = phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset * factor;

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        let previous = camera.position;
        camera.position = self.target + new_offset;
        camera.look_at(self.target);

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        (camera.position - previous).length_squared() > 1e-6
    }

    /// Convert accumulated pan pixels into a world-space target offset
    /// in the camera's screen plane.
    fn absorb_pan(&mut self, camera: &PerspectiveCamera, distance: f32) {
        if self.pending_pan == Vec2::ZERO {
            return;
        }
        let forward = (self.target - camera.position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let world_per_pixel = 2.0 * distance * (camera.fov_deg.to_radians() / 2.0).tan()
            / self.viewport_height;
        self.pan_offset += (-right * self.pending_pan.x + up * self.pending_pan.y) * world_per_pixel;
        self.pending_pan = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn setup() -> (OrbitControls, PerspectiveCamera) {
        let camera = PerspectiveCamera::new(60.0, 1.5, 0.1, 1000.0)
            .with_position(Vec3::new(40.0, 30.0, 40.0));
        let controls = OrbitControls {
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 20.0,
            max_distance: 100.0,
            max_polar_angle: FRAC_PI_2,
            ..Default::default()
        };
        (controls, camera)
    }

    #[test]
    fn idle_update_keeps_camera() {
        let (mut controls, mut camera) = setup();
        let before = camera.position;
        assert!(!controls.update(&mut camera));
        assert!((camera.position - before).length() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let (mut controls, mut camera) = setup();
        for _ in 0..200 {
            controls.on_wheel(-1.0);
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 20.0).abs() < 1e-3);

        for _ in 0..200 {
            controls.on_wheel(1.0);
            controls.update(&mut camera);
        }
        assert!((camera.position.length() - 100.0).abs() < 1e-2);
    }

    #[test]
    fn camera_never_goes_below_horizon() {
        let (mut controls, mut camera) = setup();
        controls.on_pointer_down(Vec2::new(100.0, 100.0), 0);
        controls.on_pointer_move(Vec2::new(100.0, -5000.0));
        controls.on_pointer_up();
        for _ in 0..500 {
            controls.update(&mut camera);
            assert!(camera.position.y >= -1e-3, "y = {}", camera.position.y);
        }
    }

    #[test]
    fn damping_keeps_moving_after_release() {
        let (mut controls, mut camera) = setup();
        controls.on_pointer_down(Vec2::ZERO, 0);
        controls.on_pointer_move(Vec2::new(60.0, 0.0));
        controls.on_pointer_up();

        assert!(controls.update(&mut camera));
        let first = camera.position;
        assert!(controls.update(&mut camera));
        assert!((camera.position - first).length() > 0.0);
    }

    #[test]
    fn pan_moves_target() {
        let (mut controls, mut camera) = setup();
        controls.enable_damping = false;
        controls.on_pointer_down(Vec2::ZERO, 2);
        controls.on_pointer_move(Vec2::new(50.0, 0.0));
        controls.update(&mut camera);
        assert!(controls.target.length() > 0.0);
        assert_eq!(camera.target, controls.target);
    }
}
