use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod bootstrap;
pub mod game;
pub mod orbit;
pub mod state;
use game::SolarSystem;

orrery_web::export_app!(SolarSystem, "solar-system");
