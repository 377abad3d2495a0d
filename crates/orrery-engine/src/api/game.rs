use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::components::mesh::Color;
use crate::controls::orbit::OrbitControls;
use crate::core::scene::Scene;
use crate::core::time::FrameTime;
use crate::error::EngineResult;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::viewport::Viewport;
use crate::systems::lighting::LightState;
use crate::ui::UiCommand;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Vertical field of view in degrees (default: 60).
    pub fov_deg: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Maximum number of mesh instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of scene lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of point clouds (default: 4).
    pub max_point_batches: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Upper bound on the device pixel ratio used for the drawing buffer.
    pub pixel_ratio_cap: f32,
    /// Quiet period before a resize burst is applied, in seconds.
    pub resize_debounce: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fov_deg: 60.0,
            near: 0.1,
            far: 1000.0,
            max_instances: 64,
            max_lights: 8,
            max_point_batches: 4,
            max_events: 32,
            pixel_ratio_cap: 2.0,
            resize_debounce: 0.25,
        }
    }
}

/// The core contract every app must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene and bind UI. Any error here is fatal at startup.
    fn init(&mut self, ctx: &mut EngineContext) -> EngineResult<()>;

    /// The per-frame tick. Consume input, advance the simulation, pick.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
    pub textures: TextureRegistry,
    /// Clear colour the host paints behind the scene.
    pub background: Color,
    /// Host frame timing. Always advances, paused or not.
    pub frame: FrameTime,
    pub ui: Vec<UiCommand>,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context sized and configured from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        let viewport = Viewport::default();
        Self {
            scene: Scene::with_capacity(config.max_instances + config.max_point_batches),
            lights: LightState::with_capacity(config.max_lights),
            camera: PerspectiveCamera::new(config.fov_deg, viewport.aspect(), config.near, config.far),
            controls: OrbitControls::new(),
            viewport,
            textures: TextureRegistry::new(),
            background: Color::BLACK,
            frame: FrameTime::default(),
            ui: Vec::new(),
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue a UI change for the host surface.
    pub fn emit_ui(&mut self, command: UiCommand) {
        self.ui.push(command);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (UI commands, events).
    pub fn clear_frame_data(&mut self) {
        self.ui.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_start_at_one() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }

    #[test]
    fn camera_follows_config() {
        let config = GameConfig { fov_deg: 45.0, far: 500.0, ..GameConfig::default() };
        let ctx = EngineContext::from_config(&config);
        assert_eq!(ctx.camera.fov_deg, 45.0);
        assert_eq!(ctx.camera.far, 500.0);
        assert!((ctx.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn clear_frame_data_drops_transients() {
        let mut ctx = EngineContext::new();
        ctx.emit_ui(UiCommand::HideTooltip);
        ctx.emit_event(GameEvent::default());
        ctx.clear_frame_data();
        assert!(ctx.ui.is_empty());
        assert!(ctx.events.is_empty());
    }
}
