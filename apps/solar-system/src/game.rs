//! Solar System: interactive orrery with circular orbits.
//!
//! Per tick: apply UI and pointer input, advance the pausable clock,
//! re-derive planet positions from elapsed time, pick the planet under
//! the pointer, then let the orbit controls move the camera.

use glam::Vec2;
use orrery_engine::{
    intersect_entities, ControlEvent, Debouncer, EngineContext, EngineResult, Game, GameConfig,
    GameEvent, InputEvent, InputQueue, UiButton, UiCommand,
};

use crate::bodies::{self, PLANETS, PLANET_COUNT};
use crate::bootstrap::{build_scene, SceneHandles, TEXTURE_MANIFEST};
use crate::orbit::circular_position;
use crate::state::{Pointer, SimulationState};

// ── Speed sliders ────────────────────────────────────────────────────

pub const SPEED_MIN: f32 = 0.0;
pub const SPEED_MAX: f32 = 0.1;
pub const SPEED_STEP: f32 = 0.001;

/// Tooltip offset from the pointer, in CSS pixels.
pub const TOOLTIP_OFFSET: f32 = 10.0;

// ── Game event kinds to the host ─────────────────────────────────────

/// Hovered planet changed: `a` = planet index, or -1 for none.
pub const EVENT_HOVER: f32 = 1.0;

/// Resize payload: CSS width, CSS height, device pixel ratio.
type ResizeRequest = (f32, f32, f32);

fn format_speed(speed: f32) -> String {
    format!("{speed:.3}")
}

pub struct SolarSystem {
    state: SimulationState,
    handles: Option<SceneHandles>,
    resize: Debouncer<ResizeRequest>,
    pixel_ratio_cap: f32,
    resizes_applied: u32,
    /// Planet index and anchor of the tooltip currently on screen.
    tooltip: Option<(usize, Vec2)>,
}

impl SolarSystem {
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            state: SimulationState::new(),
            handles: None,
            resize: Debouncer::new(config.resize_debounce),
            pixel_ratio_cap: config.pixel_ratio_cap,
            resizes_applied: 0,
            tooltip: None,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn handles(&self) -> Option<&SceneHandles> {
        self.handles.as_ref()
    }

    /// Number of debounced resizes that reached the camera and viewport.
    pub fn resizes_applied(&self) -> u32 {
        self.resizes_applied
    }

    /// Planet currently under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.tooltip.map(|(i, _)| i)
    }

    fn handle_control(&mut self, ctx: &mut EngineContext, event: ControlEvent) {
        match event {
            ControlEvent::SliderChanged { index, value } => {
                let Some(speed) = self.state.speeds.get_mut(index as usize) else {
                    log::warn!("slider {index} has no planet; ignored");
                    return;
                };
                *speed = value;
                ctx.emit_ui(UiCommand::SetSpeedReadout { index, text: format_speed(value) });
            }
            ControlEvent::Clicked(UiButton::PauseResume) => {
                self.state.toggle_pause();
                ctx.emit_ui(UiCommand::SetPauseLabel(self.state.session.pause_label().to_string()));
            }
            ControlEvent::Clicked(UiButton::ThemeToggle) => {
                self.state.toggle_theme();
                ctx.background = self.state.session.theme.background();
            }
        }
    }

    fn apply_resize(&mut self, ctx: &mut EngineContext, (width, height, ratio): ResizeRequest) {
        ctx.viewport.resize(width, height, ratio, self.pixel_ratio_cap);
        ctx.camera.set_aspect(ctx.viewport.aspect());
        ctx.controls.set_viewport_height(ctx.viewport.height);
        self.resizes_applied += 1;
        log::debug!(
            "resize: {}x{} @{} (drawing buffer {:?})",
            ctx.viewport.width,
            ctx.viewport.height,
            ctx.viewport.pixel_ratio,
            ctx.viewport.drawing_buffer_size()
        );
    }

    /// Spin the sun and planets; place planets on their orbits.
    fn step_bodies(&self, ctx: &mut EngineContext, handles: &SceneHandles) {
        let elapsed = self.state.clock.elapsed();

        if let Some(sun) = ctx.scene.get_mut(handles.sun) {
            sun.rotation.y += bodies::SUN_SPIN;
        }
        for (i, &id) in handles.planets.iter().enumerate() {
            if let Some(planet) = ctx.scene.get_mut(id) {
                let body = &PLANETS[i];
                planet.pos = circular_position(body.distance, self.state.speeds[i], elapsed, bodies::PLANET_Y);
                planet.rotation.y += bodies::PLANET_SPIN;
            }
        }
    }

    /// Index of the nearest planet under the last pointer position.
    fn pick(&self, ctx: &EngineContext, handles: &SceneHandles) -> Option<usize> {
        let pointer = self.state.session.pointer?;
        let ray = ctx.camera.ray_from_ndc(pointer.ndc);
        let nearest = intersect_entities(&ray, &ctx.scene, &handles.planets).into_iter().next()?;
        handles.planets.iter().position(|&id| id == nearest.id)
    }

    fn update_tooltip(&mut self, ctx: &mut EngineContext, hovered: Option<usize>) {
        let shown = match (hovered, self.state.session.pointer) {
            (Some(i), Some(p)) => Some((i, p.screen + Vec2::splat(TOOLTIP_OFFSET))),
            _ => None,
        };
        if shown == self.tooltip {
            return;
        }

        if hovered != self.hovered() {
            ctx.emit_event(GameEvent {
                kind: EVENT_HOVER,
                a: hovered.map_or(-1.0, |i| i as f32),
                b: 0.0,
                c: 0.0,
            });
        }
        match shown {
            Some((i, anchor)) => ctx.emit_ui(UiCommand::ShowTooltip {
                text: PLANETS[i].name.to_string(),
                x: anchor.x,
                y: anchor.y,
            }),
            None => ctx.emit_ui(UiCommand::HideTooltip),
        }
        self.tooltip = shown;
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 2 + 2 * PLANET_COUNT,
            max_lights: 4,
            max_point_batches: 1,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
        let handles = build_scene(ctx, TEXTURE_MANIFEST)?;
        ctx.background = self.state.session.theme.background();

        for (i, body) in PLANETS.iter().enumerate() {
            let speed = self.state.speeds[i];
            ctx.emit_ui(UiCommand::AddSpeedControl {
                index: i as u32,
                label: format!("{} Speed", body.name),
                min: SPEED_MIN,
                max: SPEED_MAX,
                step: SPEED_STEP,
                value: speed,
                readout: format_speed(speed),
            });
        }
        ctx.emit_ui(UiCommand::SetPauseLabel(self.state.session.pause_label().to_string()));
        ctx.emit_ui(UiCommand::HideTooltip);

        self.handles = Some(handles);
        log::info!("solar-system: scene ready");
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Input ────────────────────────────────────────────────────
        for event in input.iter() {
            match *event {
                InputEvent::Control(control) => self.handle_control(ctx, control),
                InputEvent::PointerMove { x, y } => {
                    let screen = Vec2::new(x, y);
                    self.state.session.pointer = Some(Pointer {
                        screen,
                        ndc: ctx.viewport.to_ndc(screen),
                    });
                    ctx.controls.on_pointer_move(screen);
                }
                InputEvent::PointerDown { x, y, button } => {
                    ctx.controls.on_pointer_down(Vec2::new(x, y), button);
                }
                InputEvent::PointerUp { .. } => ctx.controls.on_pointer_up(),
                InputEvent::Wheel { delta } => ctx.controls.on_wheel(delta),
                InputEvent::Resize { width, height, pixel_ratio } => {
                    self.resize.schedule((width, height, pixel_ratio), ctx.frame.now);
                }
            }
        }
        if let Some(request) = self.resize.poll(ctx.frame.now) {
            self.apply_resize(ctx, request);
        }

        // ── Simulation ───────────────────────────────────────────────
        self.state.advance(ctx.frame.dt);

        let Some(handles) = self.handles.take() else {
            return;
        };
        self.step_bodies(ctx, &handles);

        // ── Pick ─────────────────────────────────────────────────────
        let hovered = self.pick(ctx, &handles);
        self.update_tooltip(ctx, hovered);
        self.handles = Some(handles);

        // ── Camera ───────────────────────────────────────────────────
        ctx.controls.update(&mut ctx.camera);
    }
}
