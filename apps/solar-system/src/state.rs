use glam::Vec2;
use orrery_engine::{Clock, Color};

use crate::bodies::{PLANETS, PLANET_COUNT};

/// Background theme. Toggling flips between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const DARK_COLOR: u32 = 0x000000;
    pub const LIGHT_COLOR: u32 = 0x87CEEB;

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color::from_hex(Self::DARK_COLOR),
            Theme::Light => Color::from_hex(Self::LIGHT_COLOR),
        }
    }
}

/// Last observed pointer, in client pixels and NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub screen: Vec2,
    pub ndc: Vec2,
}

/// Flags written by UI events and read by the tick.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub paused: bool,
    pub theme: Theme,
    /// `None` until the first pointer move.
    pub pointer: Option<Pointer>,
}

impl SessionState {
    pub fn pause_label(&self) -> &'static str {
        if self.paused {
            "Resume"
        } else {
            "Pause"
        }
    }
}

/// Everything the simulation mutates, owned by the app.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Only advanced while not paused.
    pub clock: Clock,
    /// Live angular speed per planet, index-aligned with `PLANETS`.
    pub speeds: [f32; PLANET_COUNT],
    pub session: SessionState,
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            clock: Clock::new(),
            speeds: PLANETS.map(|p| p.speed),
            session: SessionState::default(),
        }
    }

    /// Advance the clock by `dt` unless paused.
    pub fn advance(&mut self, dt: f32) {
        if !self.session.paused {
            self.clock.advance(dt);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.session.paused = !self.session.paused;
    }

    pub fn toggle_theme(&mut self) {
        self.session.theme = self.session.theme.toggled();
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_toggles_return_to_dark() {
        let mut state = SimulationState::new();
        let dark = state.session.theme.background();
        assert_eq!(dark, Color::BLACK);

        state.toggle_theme();
        assert_eq!(state.session.theme, Theme::Light);
        assert_eq!(state.session.theme.background(), Color::from_hex(0x87CEEB));

        state.toggle_theme();
        assert_eq!(state.session.theme.background(), dark);
    }

    #[test]
    fn clock_freezes_while_paused() {
        let mut state = SimulationState::new();
        state.advance(0.5);
        state.toggle_pause();
        state.advance(0.5);
        state.advance(0.5);
        assert!((state.clock.elapsed() - 0.5).abs() < 1e-6);
        assert_eq!(state.session.pause_label(), "Resume");

        state.toggle_pause();
        state.advance(0.25);
        assert!((state.clock.elapsed() - 0.75).abs() < 1e-6);
        assert_eq!(state.session.pause_label(), "Pause");
    }

    #[test]
    fn speeds_start_from_table() {
        let state = SimulationState::new();
        assert_eq!(state.speeds[0], 0.04);
        assert_eq!(state.speeds[8], 0.004);
        assert!(state.session.pointer.is_none());
    }
}
