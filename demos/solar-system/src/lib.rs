use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod controls;
pub mod game;
pub mod info;
pub mod orbit;
pub mod picking;
pub mod render;
pub mod sim;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
