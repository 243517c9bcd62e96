use serde::Deserialize;
use std::fmt::Display;

/// A cell on the board, `row` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Euclidean distance between the two cells.
    pub fn distance(&self, other: &Position) -> f64 {
        let d_row = self.row as f64 - other.row as f64;
        let d_col = self.col as f64 - other.col as f64;
        d_row.hypot(d_col)
    }

    pub fn is_within(&self, grid_size: usize) -> bool {
        self.row < grid_size && self.col < grid_size
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A container of water with a fixed position and capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vase {
    pub position: Position,
    pub capacity: u32,
    /// Units of water currently held
    pub value: u32,
    /// Units of water the vase should hold in a goal state
    pub goal: u32,
}

impl Vase {
    pub fn new(position: Position, capacity: u32, goal: u32) -> Self {
        Self {
            position,
            capacity,
            value: 0,
            goal,
        }
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    pub fn is_full(&self) -> bool {
        self.value == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    pub fn room(&self) -> u32 {
        self.capacity.saturating_sub(self.value)
    }

    /// Units still missing to reach the goal, zero if the vase holds enough.
    pub fn deficit(&self) -> u32 {
        self.goal.saturating_sub(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0, 0);
        assert_approx_eq!(a.distance(&Position::new(3, 4)), 5.0);
        assert_approx_eq!(Position::new(1, 1).distance(&Position::new(2, 2)), 2f64.sqrt());
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn vase_room_and_deficit() {
        let vase = Vase::new(Position::new(0, 0), 5, 3).with_value(4);
        assert_eq!(vase.room(), 1);
        assert_eq!(vase.deficit(), 0);
        assert!(!vase.is_full());
        assert_eq!(Vase::new(Position::new(0, 0), 5, 3).deficit(), 3);
    }
}
