use crate::water_pump::{Position, ProblemError, Vase, WaterPump};
use strum_macros::EnumIter;

/// Size of the board used by every preset
pub const PRESET_GRID_SIZE: usize = 8;

/// Where the pump sits on every preset board
pub const PRESET_PUMP: Position = Position { row: 5, col: 3 };

/// Built-in boards, all starting with empty vases.
#[derive(clap::ValueEnum, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum Preset {
    #[clap(help = "Three vases.")]
    Basic,
    #[clap(help = "Four vases.")]
    Standard,
    #[clap(help = "Five vases, one of them far from the pump.")]
    Standard2,
    #[clap(help = "The standard board with two more vases.")]
    Standard3,
}

// (row, col, goal, capacity)
const BASIC: &[(usize, usize, u32, u32)] = &[(1, 3, 2, 4), (5, 5, 1, 1), (1, 1, 3, 4)];
const STANDARD: &[(usize, usize, u32, u32)] =
    &[(1, 2, 3, 5), (2, 2, 2, 3), (4, 0, 1, 1), (6, 1, 5, 6)];
const STANDARD2: &[(usize, usize, u32, u32)] = &[
    (0, 0, 6, 7),
    (5, 4, 2, 4),
    (3, 3, 2, 2),
    (7, 4, 1, 6),
    (5, 5, 4, 7),
];
const STANDARD3_EXTRA: &[(usize, usize, u32, u32)] = &[(7, 7, 4, 4), (5, 6, 0, 1)];

impl Preset {
    pub fn vases(&self) -> Vec<Vase> {
        let layout: Vec<_> = match self {
            Preset::Basic => BASIC.to_vec(),
            Preset::Standard => STANDARD.to_vec(),
            Preset::Standard2 => STANDARD2.to_vec(),
            Preset::Standard3 => [STANDARD, STANDARD3_EXTRA].concat(),
        };
        layout
            .into_iter()
            .map(|(row, col, goal, capacity)| Vase::new(Position::new(row, col), capacity, goal))
            .collect()
    }

    pub fn problem(&self) -> Result<WaterPump, ProblemError> {
        WaterPump::new(PRESET_GRID_SIZE, PRESET_PUMP, self.vases())
    }
}
