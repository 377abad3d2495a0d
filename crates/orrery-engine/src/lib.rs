pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod controls;
pub mod picking;
pub mod ui;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, Geometry, Material, MeshComponent, Shading};
pub use core::scene::Scene;
pub use core::time::{Clock, FrameTime};
pub use core::debounce::Debouncer;
pub use core::rng::Rng;
pub use renderer::instance::{MeshInstance, PointBatch, RenderBuffer};
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use renderer::viewport::Viewport;
pub use controls::orbit::OrbitControls;
pub use picking::ray::{Ray, Hit, intersect_entities};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{TextureManifest, TextureDescriptor};
pub use assets::registry::{TextureId, TextureRegistry};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{Light, LightKind, LightState};
pub use systems::render::{build_render_buffer, build_point_buffer};
pub use ui::{ControlEvent, UiButton, UiCommand, UiSurface, RecordingSurface};
pub use error::{EngineError, EngineResult};
