//! Wires the grid, reachability analysis, and tour planning together
//! behind one entry point, and owns the engine's tunable knobs.

use crate::config::Configuration;
use crate::grid::{Grid, GridError};
use crate::plan::{self, PlanMode, PlanOutcome};
use crate::reach::{self, ReachabilityReport};

/// Tunable knobs, passed explicitly rather than read from process-global
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reachable-objective count at which `PlanMode::Auto` switches from
    /// the exact planner to the approximate one.
    pub exact_planner_threshold: usize,
    /// Sentinel cost for the approximate planner's dummy-node edge to the
    /// start, biasing the dummy away from sitting adjacent to it.
    pub dummy_edge_penalty: i64,
    /// Sentinel cost for a pairwise leg the approximate planner's
    /// representative-orientation search could not complete.
    pub infeasible_pair_cost: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            exact_planner_threshold: 15,
            dummy_edge_penalty: 1_000_000,
            infeasible_pair_cost: 1_000_000_000,
        }
    }
}

/// An error raised while driving the engine end to end.
#[derive(Debug)]
pub enum EngineError {
    Grid(GridError),
    Plan(plan::PlanError),
    /// The derived start configuration does not fit the grid at all; no
    /// objective could ever be reached and no plan could ever run.
    InfeasibleStart(Configuration),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Grid(e) => write!(f, "{e}"),
            EngineError::Plan(e) => write!(f, "{e}"),
            EngineError::InfeasibleStart(c) => write!(f, "start configuration {c} does not fit the grid"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<GridError> for EngineError {
    fn from(value: GridError) -> Self {
        EngineError::Grid(value)
    }
}

impl From<plan::PlanError> for EngineError {
    fn from(value: plan::PlanError) -> Self {
        EngineError::Plan(value)
    }
}

/// A loaded maze plus its derived start configuration, ready for
/// reachability analysis and planning.
pub struct Engine {
    grid: Grid,
    start: Configuration,
    config: EngineConfig,
}

impl Engine {
    pub fn load(bytes: &[u8], config: EngineConfig) -> Result<Engine, EngineError> {
        let grid = Grid::load(bytes)?;
        let start = grid.start_configuration()?;
        Ok(Engine { grid, start, config })
    }

    pub fn start(&self) -> Configuration {
        self.start
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs reachability analysis, demoting unreachable objectives in
    /// place. Hard-errors if the start itself does not fit the grid —
    /// unlike [`reach::analyze`], which treats that case as "zero
    /// reachable" rather than a failure, since a caller driving the full
    /// engine has nowhere useful to go from an infeasible start.
    pub fn analyze_reachability(&mut self) -> Result<ReachabilityReport, EngineError> {
        if !crate::oracle::fits(&self.grid, self.start.x, self.start.y, self.start.orientation) {
            return Err(EngineError::InfeasibleStart(self.start));
        }
        Ok(reach::analyze(&mut self.grid, self.start))
    }

    pub fn plan(&self, mode: PlanMode) -> Result<PlanOutcome, EngineError> {
        Ok(plan::dispatch(&self.grid, self.start, mode, &self.config)?)
    }
}

#[doc(hidden)]
mod test;
