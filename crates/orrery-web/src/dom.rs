//! Browser-side UI surface.
//!
//! Owns the control panel, pause button and tooltip elements. Listeners
//! never touch app state directly: they push `InputEvent`s into a shared
//! pending list that the runner drains at the start of each tick.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_engine::{
    ControlEvent, EngineError, EngineResult, InputEvent, InputQueue, UiButton, UiCommand,
    UiSurface,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, MouseEvent};

pub const CONTROLS_ID: &str = "planet-controls";
pub const PAUSE_ID: &str = "pause-resume";
pub const THEME_ID: &str = "theme-toggle";
pub const TOOLTIP_SELECTOR: &str = ".tooltip";

type Pending = Rc<RefCell<Vec<InputEvent>>>;

fn dom_err(e: JsValue) -> EngineError {
    EngineError::Dom(format!("{e:?}"))
}

fn require_id(document: &Document, id: &str) -> EngineResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EngineError::MissingUiElement(format!("#{id}")))
}

fn as_html(element: Element, what: &str) -> EngineResult<HtmlElement> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| EngineError::Dom(format!("{what} is not an HTML element")))
}

/// Attach `handler` to `kind` events on `target` for the life of the page.
fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> EngineResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    closure.forget();
    Ok(())
}

fn push_on(pending: &Pending, event: InputEvent) -> impl FnMut(Event) + 'static {
    let pending = pending.clone();
    move |_e: Event| pending.borrow_mut().push(event)
}

pub struct DomBindings {
    document: Document,
    controls: Element,
    pause_button: HtmlElement,
    tooltip: HtmlElement,
    readouts: Vec<Element>,
    pending: Pending,
}

impl DomBindings {
    /// Find the required elements and install the page-level listeners.
    /// Fails if any control element is missing from the page.
    pub fn attach() -> EngineResult<Self> {
        let window = web_sys::window().ok_or_else(|| EngineError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| EngineError::Dom("no document".into()))?;

        let controls = require_id(&document, CONTROLS_ID)?;
        let pause_button = as_html(require_id(&document, PAUSE_ID)?, PAUSE_ID)?;
        let theme_button = require_id(&document, THEME_ID)?;
        let tooltip = document
            .query_selector(TOOLTIP_SELECTOR)
            .map_err(dom_err)?
            .ok_or_else(|| EngineError::MissingUiElement(TOOLTIP_SELECTOR.to_string()))?;
        let tooltip = as_html(tooltip, TOOLTIP_SELECTOR)?;

        let pending: Pending = Rc::new(RefCell::new(Vec::new()));

        listen(
            &pause_button,
            "click",
            push_on(&pending, InputEvent::Control(ControlEvent::Clicked(UiButton::PauseResume))),
        )?;
        listen(
            &theme_button,
            "click",
            push_on(&pending, InputEvent::Control(ControlEvent::Clicked(UiButton::ThemeToggle))),
        )?;

        let moves = pending.clone();
        listen(&window, "mousemove", move |e: Event| {
            if let Some(m) = e.dyn_ref::<MouseEvent>() {
                moves.borrow_mut().push(InputEvent::PointerMove {
                    x: m.client_x() as f32,
                    y: m.client_y() as f32,
                });
            }
        })?;

        let resizes = pending.clone();
        let win = window.clone();
        listen(&window, "resize", move |_e: Event| {
            let width = win.inner_width().ok().and_then(|v| v.as_f64());
            let height = win.inner_height().ok().and_then(|v| v.as_f64());
            match (width, height) {
                (Some(w), Some(h)) => resizes.borrow_mut().push(InputEvent::Resize {
                    width: w as f32,
                    height: h as f32,
                    pixel_ratio: win.device_pixel_ratio() as f32,
                }),
                _ => log::warn!("resize: window size unavailable"),
            }
        })?;

        log::info!("dom: bound control panel");
        Ok(Self {
            document,
            controls,
            pause_button,
            tooltip,
            readouts: Vec::new(),
            pending,
        })
    }

    fn create(&self, tag: &str) -> EngineResult<Element> {
        self.document.create_element(tag).map_err(dom_err)
    }

    /// Build one `div.planet-control` block: label, range slider, readout.
    fn add_speed_control(
        &mut self,
        index: u32,
        label: &str,
        min: f32,
        max: f32,
        step: f32,
        value: f32,
        readout: &str,
    ) -> EngineResult<()> {
        let input_id = format!("speed-{index}");

        let block = self.create("div")?;
        block.set_class_name("planet-control");

        let label_el = self.create("label")?;
        label_el.set_attribute("for", &input_id).map_err(dom_err)?;
        label_el.set_text_content(Some(label));

        let slider = self
            .create("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| EngineError::Dom("input element has wrong type".into()))?;
        slider.set_type("range");
        slider.set_id(&input_id);
        slider.set_min(&min.to_string());
        slider.set_max(&max.to_string());
        slider.set_step(&step.to_string());
        slider.set_value(&value.to_string());

        let value_el = self.create("span")?;
        value_el.set_class_name("speed-value");
        value_el.set_text_content(Some(readout));

        block.append_child(&label_el).map_err(dom_err)?;
        block.append_child(&slider).map_err(dom_err)?;
        block.append_child(&value_el).map_err(dom_err)?;
        self.controls.append_child(&block).map_err(dom_err)?;

        let pending = self.pending.clone();
        let source = slider.clone();
        listen(&slider, "input", move |_e: Event| {
            match source.value().parse::<f32>() {
                Ok(value) => pending.borrow_mut().push(InputEvent::Control(
                    ControlEvent::SliderChanged { index, value },
                )),
                Err(_) => log::warn!("slider {index}: unparsable value {:?}", source.value()),
            }
        })?;

        if self.readouts.len() <= index as usize {
            self.readouts.resize(index as usize + 1, value_el.clone());
        }
        self.readouts[index as usize] = value_el;
        Ok(())
    }

    fn set_style(&self, name: &str, value: &str) -> EngineResult<()> {
        self.tooltip.style().set_property(name, value).map_err(dom_err)
    }
}

impl UiSurface for DomBindings {
    fn apply(&mut self, command: &UiCommand) -> EngineResult<()> {
        match command {
            UiCommand::AddSpeedControl { index, label, min, max, step, value, readout } => {
                self.add_speed_control(*index, label, *min, *max, *step, *value, readout)
            }
            UiCommand::SetSpeedReadout { index, text } => {
                let readout = self
                    .readouts
                    .get(*index as usize)
                    .ok_or_else(|| EngineError::Dom(format!("no readout for control {index}")))?;
                readout.set_text_content(Some(text));
                Ok(())
            }
            UiCommand::SetPauseLabel(text) => {
                self.pause_button.set_text_content(Some(text));
                Ok(())
            }
            UiCommand::ShowTooltip { text, x, y } => {
                self.set_style("display", "block")?;
                self.set_style("left", &format!("{x}px"))?;
                self.set_style("top", &format!("{y}px"))?;
                self.tooltip.set_text_content(Some(text));
                Ok(())
            }
            UiCommand::HideTooltip => self.set_style("display", "none"),
        }
    }

    fn poll_input(&mut self, queue: &mut InputQueue) {
        for event in self.pending.borrow_mut().drain(..) {
            queue.push(event);
        }
    }
}
