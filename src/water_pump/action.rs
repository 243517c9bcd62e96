use std::fmt::Display;

/// The moves available on a water pump board. Indices refer to vases in the
/// order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterAction {
    /// Pour away all water of a vase
    Empty(usize),
    /// Fill a vase to capacity from the pump
    Pump(usize),
    /// Fill `target` to capacity with water taken from `source`
    TakeFrom { target: usize, source: usize },
    /// Pour all water of `source` into `target`
    TransferFrom { source: usize, target: usize },
}

impl Display for WaterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterAction::Empty(i) => write!(f, "empty({})", i),
            WaterAction::Pump(i) => write!(f, "pump({})", i),
            WaterAction::TakeFrom { target, source } => {
                write!(f, "takeFromI({}, {})", target, source)
            }
            WaterAction::TransferFrom { source, target } => {
                write!(f, "transferFromI({}, {})", source, target)
            }
        }
    }
}
