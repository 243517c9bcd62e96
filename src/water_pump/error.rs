use crate::water_pump::Position;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a water pump problem cannot be built.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("grid size must be positive")]
    EmptyGrid,
    #[error("pump at {position} lies outside the {grid_size}x{grid_size} grid")]
    PumpOutOfBounds { position: Position, grid_size: usize },
    #[error("vase {index} at {position} lies outside the {grid_size}x{grid_size} grid")]
    VaseOutOfBounds {
        index: usize,
        position: Position,
        grid_size: usize,
    },
    #[error("vase {index} holds {value} units but its capacity is {capacity}")]
    ValueExceedsCapacity {
        index: usize,
        value: u32,
        capacity: u32,
    },
    #[error("vase {index} has goal {goal} but its capacity is {capacity}")]
    GoalExceedsCapacity {
        index: usize,
        goal: u32,
        capacity: u32,
    },
    #[error("vases {first} and {second} are both at {position}")]
    OverlappingVases {
        first: usize,
        second: usize,
        position: Position,
    },
    #[error("failed to read problem file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse problem configuration")]
    Parse(#[from] toml::de::Error),
}
