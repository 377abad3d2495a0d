use crate::ui::ControlEvent;

/// Input event types the engine understands.
/// No app-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A press began at client coordinates (x, y).
    PointerDown { x: f32, y: f32, button: u32 },
    /// A press ended at client coordinates (x, y).
    PointerUp { x: f32, y: f32, button: u32 },
    /// The cursor moved to client coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scrolled; positive is away from the user.
    Wheel { delta: f32 },
    /// The viewport changed size (CSS pixels + device pixel ratio).
    Resize { width: f32, height: f32, pixel_ratio: f32 },
    /// A UI control was used.
    Control(ControlEvent),
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drop all pending events, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::UiButton;

    #[test]
    fn push_and_clear() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0, button: 0 });
        q.push(InputEvent::Wheel { delta: 1.0 });
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn control_event_round_trips_through_queue() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Control(ControlEvent::SliderChanged { index: 3, value: 0.05 }));
        q.push(InputEvent::Control(ControlEvent::Clicked(UiButton::ThemeToggle)));
        let events: Vec<_> = q.iter().copied().collect();
        match events[0] {
            InputEvent::Control(ControlEvent::SliderChanged { index, value }) => {
                assert_eq!(index, 3);
                assert_eq!(value, 0.05);
            }
            _ => panic!("Expected SliderChanged"),
        }
        assert_eq!(events[1], InputEvent::Control(ControlEvent::Clicked(UiButton::ThemeToggle)));
    }
}
