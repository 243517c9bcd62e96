//! The water pump puzzle: a square board with vases of fixed capacity and a
//! pump. Water is pumped into vases, moved between them or poured away until
//! every vase holds exactly its goal amount. Moving water costs its amount
//! times the distance it travels.

mod action;
mod config;
mod error;
mod heuristics;
mod presets;
mod problem;
mod state;
mod vase;

pub use action::WaterAction;
pub use config::{VaseConfig, WaterPumpConfig};
pub use error::ProblemError;
pub use heuristics::{
    NearestSourceHeuristic, PumpDistanceHeuristic, WaterHeuristicName, INADMISSIBLE_SCALE,
};
pub use presets::{Preset, PRESET_GRID_SIZE, PRESET_PUMP};
pub use problem::WaterPump;
pub use state::WaterState;
pub use vase::{Position, Vase};
