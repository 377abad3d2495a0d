pub mod runner;
pub mod dom;

pub use runner::GameRunner;
pub use dom::DomBindings;
pub use orrery_engine as engine;
pub use js_sys;

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_init, app_tick, input handlers, data accessors)
///
/// Pointer-move, resize and control-panel events come in through the DOM
/// bindings; the host forwards canvas presses and wheel input.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyApp;
///
/// orrery_web::export_app!(MyApp, "my-app");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `orrery_engine::Game`
///   and has a `new()` constructor
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        /// Bind the page, build the scene and start accepting ticks.
        /// Rejects if a texture or control element is missing.
        #[wasm_bindgen]
        pub fn app_init(width: f32, height: f32, pixel_ratio: f32) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let to_js = |e: $crate::engine::EngineError| JsValue::from($crate::js_sys::Error::new(&e.to_string()));
            let surface = $crate::DomBindings::attach().map_err(to_js)?;
            let mut runner = $crate::GameRunner::new(<$app_type>::new(), Box::new(surface));
            runner.init(width, height, pixel_ratio).map_err(to_js)?;

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $app_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn app_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn app_pointer_down(x: f32, y: f32, button: u32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_up(x: f32, y: f32, button: u32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::PointerUp { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn app_wheel(delta: f32) {
            with_runner(|r| r.push_input($crate::engine::InputEvent::Wheel { delta }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_points_ptr() -> *const f32 {
            with_runner(|r| r.points_ptr())
        }

        #[wasm_bindgen]
        pub fn get_point_count() -> u32 {
            with_runner(|r| r.point_count())
        }

        #[wasm_bindgen]
        pub fn get_point_batches_ptr() -> *const f32 {
            with_runner(|r| r.point_batches_ptr())
        }

        #[wasm_bindgen]
        pub fn get_point_batch_count() -> u32 {
            with_runner(|r| r.point_batch_count())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_background_r() -> f32 {
            with_runner(|r| r.background()[0])
        }

        #[wasm_bindgen]
        pub fn get_background_g() -> f32 {
            with_runner(|r| r.background()[1])
        }

        #[wasm_bindgen]
        pub fn get_background_b() -> f32 {
            with_runner(|r| r.background()[2])
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_size().0)
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_size().1)
        }

        #[wasm_bindgen]
        pub fn get_pixel_ratio() -> f32 {
            with_runner(|r| r.pixel_ratio())
        }

        // ---- Texture accessors ----

        #[wasm_bindgen]
        pub fn get_texture_count() -> u32 {
            with_runner(|r| r.texture_count())
        }

        #[wasm_bindgen]
        pub fn get_texture_path(id: u32) -> String {
            with_runner(|r| r.texture_path(id))
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_point_batches() -> u32 {
            with_runner(|r| r.max_point_batches())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
