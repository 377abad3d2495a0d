//! UI surface contract between app logic and the page.
//!
//! Apps never touch the DOM. They push [`UiCommand`]s into the engine
//! context, and the runner hands them to whatever [`UiSurface`] the host
//! installed. Control interactions travel the other way as
//! [`ControlEvent`]s in the input queue.

use crate::error::EngineResult;
use crate::input::queue::InputQueue;

/// Buttons the control panel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiButton {
    PauseResume,
    ThemeToggle,
}

/// Something the user did to a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Range slider `index` moved to `value`.
    SliderChanged { index: u32, value: f32 },
    Clicked(UiButton),
}

/// A change the app wants applied to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Append one labelled slider plus readout to the control panel.
    AddSpeedControl {
        index: u32,
        label: String,
        min: f32,
        max: f32,
        step: f32,
        value: f32,
        readout: String,
    },
    SetSpeedReadout { index: u32, text: String },
    SetPauseLabel(String),
    /// Show the tooltip at client coordinates.
    ShowTooltip { text: String, x: f32, y: f32 },
    HideTooltip,
}

/// Applies UI commands to a concrete page (DOM, test recorder, ...).
pub trait UiSurface {
    fn apply(&mut self, command: &UiCommand) -> EngineResult<()>;

    /// Move events the page collected since the last tick into `queue`.
    fn poll_input(&mut self, _queue: &mut InputQueue) {}
}

/// Surface that remembers everything it was told. Used headless and in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<UiCommand>,
}

impl UiSurface for RecordingSurface {
    fn apply(&mut self, command: &UiCommand) -> EngineResult<()> {
        self.commands.push(command.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_order() {
        let mut surface = RecordingSurface::default();
        surface.apply(&UiCommand::SetPauseLabel("Pause".into())).unwrap();
        surface.apply(&UiCommand::HideTooltip).unwrap();
        assert_eq!(
            surface.commands,
            vec![UiCommand::SetPauseLabel("Pause".into()), UiCommand::HideTooltip]
        );
    }
}
