use crate::search::{Heuristic, HeuristicValue, ZeroHeuristic};
use crate::water_pump::WaterState;
use serde::Deserialize;
use strum_macros::EnumIter;

/// For every vase below its goal, the missing water times the distance to the
/// closest place water could come from: the pump or any other vase.
///
/// Every unit that is still missing has to travel at least that far, and
/// every action charges at least the distance times the water it delivers,
/// so this never overestimates.
#[derive(Clone, Debug, Default)]
pub struct NearestSourceHeuristic;

impl Heuristic<WaterState> for NearestSourceHeuristic {
    fn evaluate(&self, state: &WaterState) -> HeuristicValue {
        let vases = state.vases();
        let h: f64 = vases
            .iter()
            .enumerate()
            .filter(|(_, vase)| vase.deficit() > 0)
            .map(|(i, vase)| {
                let nearest = vases
                    .iter()
                    .enumerate()
                    .filter(|&(y, _)| y != i)
                    .map(|(_, other)| vase.position.distance(&other.position))
                    .fold(state.pump().distance(&vase.position), f64::min);
                vase.deficit() as f64 * nearest
            })
            .sum();
        h.into()
    }
}

/// The signed difference between goal and current value of every vase, times
/// its distance to the pump, summed and multiplied by `scale`.
///
/// Vases holding more than their goal contribute negatively, and the estimate
/// can exceed the true remaining cost, so the heuristic is not admissible.
#[derive(Clone, Debug)]
pub struct PumpDistanceHeuristic {
    scale: f64,
}

impl PumpDistanceHeuristic {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for PumpDistanceHeuristic {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl Heuristic<WaterState> for PumpDistanceHeuristic {
    fn evaluate(&self, state: &WaterState) -> HeuristicValue {
        let pump = state.pump();
        let h: f64 = state
            .vases()
            .iter()
            .map(|vase| (vase.goal as f64 - vase.value as f64) * pump.distance(&vase.position))
            .sum();
        (h * self.scale).into()
    }
}

/// Scale of [`WaterHeuristicName::Inadmissible`].
pub const INADMISSIBLE_SCALE: f64 = 5.;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WaterHeuristicName {
    #[default]
    #[clap(help = "No heuristic, A* becomes uniform cost search.")]
    UniformCost,
    #[clap(help = "Missing water times distance to the nearest source.")]
    Admissible,
    #[clap(help = "Goal difference times distance to the pump. Not admissible.")]
    PumpDistance,
    #[clap(help = "Pump distance scaled by 5, finds suboptimal plans faster.")]
    Inadmissible,
}

impl WaterHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<WaterState>> {
        match self {
            WaterHeuristicName::UniformCost => Box::new(ZeroHeuristic::new()),
            WaterHeuristicName::Admissible => Box::new(NearestSourceHeuristic),
            WaterHeuristicName::PumpDistance => Box::new(PumpDistanceHeuristic::new(1.)),
            WaterHeuristicName::Inadmissible => {
                Box::new(PumpDistanceHeuristic::new(INADMISSIBLE_SCALE))
            }
        }
    }

    pub fn is_admissible(&self) -> bool {
        matches!(
            self,
            WaterHeuristicName::UniformCost | WaterHeuristicName::Admissible
        )
    }
}
