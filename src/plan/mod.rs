//! Minimum-fuel touring plans: an exact planner for small reachable sets
//! and an approximate fallback for larger ones.

pub mod approx;
pub mod error;
pub mod exact;
pub mod state;

use crate::config::Configuration;
use crate::engine::EngineConfig;
use crate::grid::Grid;
use crate::motion::Orientation;
pub use error::PlanError;
use serde::{Deserialize, Serialize};

/// Which planner to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlanMode {
    Exact,
    Approximate,
    /// Exact below `EngineConfig::exact_planner_threshold` reachable
    /// objectives, approximate at or above it.
    Auto,
}

/// One configuration visited after leaving the start, in plan order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
    /// Bitmask of objectives visited by this point in the plan (exact
    /// planner only assigns bits meaningfully across its own search; the
    /// approximate planner tracks the same bit assignment by completed
    /// leg).
    pub mask: u32,
}

/// The result of a planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// No sequence of maneuvers visits every reachable objective.
    NoPlan,
    Planned { total_fuel: i64, trace: Vec<TraceStep> },
}

/// Runs the planner selected by `mode` (or selected automatically under
/// `PlanMode::Auto`) over `grid`'s currently-reachable objectives.
pub fn dispatch(
    grid: &Grid,
    start: Configuration,
    mode: PlanMode,
    config: &EngineConfig,
) -> Result<PlanOutcome, PlanError> {
    let objective_cells: Vec<(i32, i32)> =
        grid.objectives().iter().filter(|o| o.reachable).map(|o| (o.x, o.y)).collect();

    if objective_cells.is_empty() {
        log::info!("planner: no reachable objectives, trivial empty plan");
        return Ok(PlanOutcome::Planned { total_fuel: 0, trace: Vec::new() });
    }

    let use_exact = match mode {
        PlanMode::Exact => true,
        PlanMode::Approximate => false,
        PlanMode::Auto => objective_cells.len() < config.exact_planner_threshold,
    };

    if use_exact {
        log::info!("planner: dispatching to exact planner ({} objectives)", objective_cells.len());
        exact::plan(grid, start, &objective_cells)
    } else {
        log::info!("planner: dispatching to approximate planner ({} objectives)", objective_cells.len());
        approx::plan(grid, start, &objective_cells, config)
    }
}
