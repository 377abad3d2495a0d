use orrery_engine::{
    Game, GameConfig, EngineContext, EngineResult,
    InputEvent, InputQueue, RenderBuffer, CameraUniform,
    ProtocolLayout, UiSurface, build_render_buffer, build_point_buffer,
};

/// Generic app runner that wires up the engine loop.
///
/// Each concrete app creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera: CameraUniform,
    surface: Box<dyn UiSurface>,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, surface: Box<dyn UiSurface>) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            camera: CameraUniform::default(),
            surface,
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the app for a viewport of the given CSS size.
    /// Call once after construction; errors are fatal.
    pub fn init(&mut self, width: f32, height: f32, pixel_ratio: f32) -> EngineResult<()> {
        self.ctx.viewport.resize(width, height, pixel_ratio, self.config.pixel_ratio_cap);
        self.ctx.camera.set_aspect(self.ctx.viewport.aspect());
        self.ctx.controls.set_viewport_height(self.ctx.viewport.height);

        self.game.init(&mut self.ctx)?;

        // Point clouds never change after init.
        build_point_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera = self.ctx.camera.uniform();

        for command in self.ctx.ui.drain(..) {
            self.surface.apply(&command)?;
        }

        log::info!(
            "runner: {} entities, {} lights, {} points",
            self.ctx.scene.len(),
            self.ctx.lights.count(),
            self.render_buffer.point_count()
        );
        self.initialized = true;
        Ok(())
    }

    /// Push an input event into the queue.
    /// Events the page collected earlier are queued first, so a move made
    /// before a release is still seen while the drag is active.
    pub fn push_input(&mut self, event: InputEvent) {
        self.surface.poll_input(&mut self.input);
        self.input.push(event);
    }

    /// Run one frame tick: collect input, update the app, rebuild buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.frame.step(dt);
        self.surface.poll_input(&mut self.input);

        self.game.update(&mut self.ctx, &self.input);
        self.input.clear();

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera = self.ctx.camera.uniform();

        for command in &self.ctx.ui {
            if let Err(e) = self.surface.apply(command) {
                log::warn!("ui command {command:?} failed: {e}");
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.render_buffer.points_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.render_buffer.point_count()
    }

    pub fn point_batches_ptr(&self) -> *const f32 {
        self.render_buffer.point_batches_ptr()
    }

    pub fn point_batch_count(&self) -> u32 {
        self.render_buffer.point_batch_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn background(&self) -> [f32; 3] {
        self.ctx.background.to_array()
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.ctx.viewport.pixel_ratio
    }

    pub fn viewport_size(&self) -> (f32, f32) {
        (self.ctx.viewport.width, self.ctx.viewport.height)
    }

    pub fn texture_count(&self) -> u32 {
        self.ctx.textures.len() as u32
    }

    /// Asset path for texture `id`, empty if unknown.
    pub fn texture_path(&self, id: u32) -> String {
        self.ctx
            .textures
            .path(orrery_engine::TextureId(id))
            .unwrap_or_default()
            .to_string()
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_point_batches(&self) -> u32 {
        self.layout.max_point_batches as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::Vec3;
    use orrery_engine::{
        Color, EngineError, Entity, Material, MeshComponent, UiCommand,
    };

    /// Records commands into a shared log so tests can inspect them after
    /// the surface has been boxed into the runner.
    #[derive(Default, Clone)]
    struct SharedSurface {
        log: Rc<RefCell<Vec<UiCommand>>>,
        pending: Rc<RefCell<Vec<InputEvent>>>,
    }

    impl UiSurface for SharedSurface {
        fn apply(&mut self, command: &UiCommand) -> EngineResult<()> {
            self.log.borrow_mut().push(command.clone());
            Ok(())
        }

        fn poll_input(&mut self, queue: &mut InputQueue) {
            for event in self.pending.borrow_mut().drain(..) {
                queue.push(event);
            }
        }
    }

    #[derive(Default)]
    struct StubGame {
        updates: u32,
        seen_inputs: usize,
        last_inputs: Vec<InputEvent>,
        fail_init: bool,
    }

    impl Game for StubGame {
        fn init(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
            if self.fail_init {
                return Err(EngineError::MissingUiElement("planet-controls".into()));
            }
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_pos(Vec3::new(10.0, 0.5, 0.0))
                    .with_mesh(MeshComponent::sphere(1.0, 16, Material::default())),
            );
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_mesh(MeshComponent::points(
                vec![Vec3::ZERO, Vec3::X, Vec3::Y],
                0.1,
                Material::basic(Color::WHITE),
            )));
            ctx.emit_ui(UiCommand::SetPauseLabel("Pause".into()));
            Ok(())
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            self.seen_inputs += input.len();
            self.last_inputs = input.iter().copied().collect();
            if let Some(e) = ctx.scene.iter_mut().next() {
                e.pos.x += 1.0;
            }
            ctx.emit_ui(UiCommand::HideTooltip);
        }
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut runner = GameRunner::new(StubGame::default(), Box::new(SharedSurface::default()));
        runner.tick(0.016);
        assert_eq!(runner.game().updates, 0);
        assert!(!runner.is_initialized());
    }

    #[test]
    fn init_builds_points_and_flushes_ui() {
        let surface = SharedSurface::default();
        let log = surface.log.clone();
        let mut runner = GameRunner::new(StubGame::default(), Box::new(surface));
        runner.init(1024.0, 512.0, 3.0).unwrap();

        assert_eq!(runner.point_count(), 3);
        assert_eq!(runner.point_batch_count(), 1);
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.pixel_ratio(), 2.0);
        assert!((runner.context().camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(*log.borrow(), vec![UiCommand::SetPauseLabel("Pause".into())]);
    }

    #[test]
    fn init_error_propagates() {
        let game = StubGame { fail_init: true, ..StubGame::default() };
        let mut runner = GameRunner::new(game, Box::new(SharedSurface::default()));
        assert!(runner.init(800.0, 600.0, 1.0).is_err());
        assert!(!runner.is_initialized());
    }

    #[test]
    fn tick_updates_and_drains_input() {
        let surface = SharedSurface::default();
        let pending = surface.pending.clone();
        let log = surface.log.clone();
        let mut runner = GameRunner::new(StubGame::default(), Box::new(surface));
        runner.init(800.0, 600.0, 1.0).unwrap();

        runner.push_input(InputEvent::Wheel { delta: 1.0 });
        pending.borrow_mut().push(InputEvent::PointerMove { x: 5.0, y: 5.0 });
        runner.tick(0.016);
        runner.tick(0.016);

        assert_eq!(runner.game().updates, 2);
        assert_eq!(runner.game().seen_inputs, 2);
        assert!((runner.context().frame.now - 0.032).abs() < 1e-6);
        assert_eq!(log.borrow().len(), 3);

        // Instance data reflects the latest scene state.
        let first = unsafe { *runner.instances_ptr() };
        assert_eq!(first, 12.0);
    }

    #[test]
    fn page_and_host_input_keep_arrival_order() {
        let surface = SharedSurface::default();
        let pending = surface.pending.clone();
        let mut runner = GameRunner::new(StubGame::default(), Box::new(surface));
        runner.init(800.0, 600.0, 1.0).unwrap();

        // Press, drag and release inside a single frame.
        runner.push_input(InputEvent::PointerDown { x: 100.0, y: 300.0, button: 0 });
        pending.borrow_mut().push(InputEvent::PointerMove { x: 300.0, y: 300.0 });
        runner.push_input(InputEvent::PointerUp { x: 300.0, y: 300.0, button: 0 });
        pending.borrow_mut().push(InputEvent::PointerMove { x: 310.0, y: 300.0 });
        runner.tick(0.016);

        assert_eq!(
            runner.game().last_inputs,
            vec![
                InputEvent::PointerDown { x: 100.0, y: 300.0, button: 0 },
                InputEvent::PointerMove { x: 300.0, y: 300.0 },
                InputEvent::PointerUp { x: 300.0, y: 300.0, button: 0 },
                InputEvent::PointerMove { x: 310.0, y: 300.0 },
            ]
        );
    }

    #[test]
    fn capacities_come_from_config() {
        let runner = GameRunner::new(StubGame::default(), Box::new(SharedSurface::default()));
        let config = GameConfig::default();
        assert_eq!(runner.max_instances() as usize, config.max_instances);
        assert_eq!(runner.max_lights() as usize, config.max_lights);
        assert!(runner.buffer_total_floats() > 0);
        assert_eq!(runner.texture_path(0), "");
    }
}
