//! Exact minimum-fuel touring plan via Dijkstra over the bitmask-indexed
//! `(x, y, orientation, mask)` state space.
//!
//! A flat `Vec<i64>` cost array and a flat `Vec<u32>` parent array are used
//! instead of a hashmap-backed frontier, per the crate's contract that the
//! exact planner's state space is dense and small enough (`R * C * 4 *
//! 2^N`) to address directly — this is the one place a hand-rolled binary
//! heap is used instead of reaching for `pathfinding::dijkstra`, because the
//! transition function needs to mutate the objective mask as a side effect
//! of reaching an objective cell, which the generic successor closure alone
//! cannot express cleanly against a flat array.

use crate::config::Configuration;
use crate::grid::Grid;
use crate::motion::{transitions, Orientation};
use crate::oracle::covered_cells;
use crate::plan::error::PlanError;
use crate::plan::state::{Dims, State};
use crate::plan::{PlanOutcome, TraceStep};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

const NO_PARENT: u32 = u32::MAX;

/// Min-heap entry; `BinaryHeap` is a max-heap, so ordering is reversed on
/// cost.
struct HeapEntry {
    cost: i64,
    index: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

/// Runs exact Dijkstra from `start` over `grid`'s reachable objectives.
/// `objective_cells` is the fixed ordering that assigns each reachable
/// objective its bit in the mask; bit `i` is set once any of the vehicle's
/// six footprint cells coincides with `objective_cells[i]`.
pub fn plan(grid: &Grid, start: Configuration, objective_cells: &[(i32, i32)]) -> Result<PlanOutcome, PlanError> {
    let dims = Dims::new(grid.rows(), grid.cols(), objective_cells.len() as u32);
    let total_states = dims.total_states();

    let mut dist: Vec<i64> = Vec::new();
    dist.try_reserve_exact(total_states).map_err(|_| PlanError::AllocationFailed)?;
    dist.resize(total_states, i64::MAX);

    let mut parent: Vec<u32> = Vec::new();
    parent.try_reserve_exact(total_states).map_err(|_| PlanError::AllocationFailed)?;
    parent.resize(total_states, NO_PARENT);

    let start_mask = mask_for(start.x, start.y, start.orientation, objective_cells);
    let start_index = dims.encode(State { x: start.x, y: start.y, orientation: start.orientation, mask: start_mask });
    dist[start_index] = 0;

    let full_mask = if objective_cells.is_empty() { 0 } else { (1u32 << objective_cells.len()) - 1 };

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { cost: 0, index: start_index });

    let mut goal_index = None;
    if dims.decode(start_index).mask == full_mask {
        goal_index = Some(start_index);
    }

    while let Some(HeapEntry { cost, index }) = heap.pop() {
        if cost > dist[index] {
            continue;
        }

        let current = dims.decode(index);
        if current.mask == full_mask {
            goal_index = Some(index);
            break;
        }

        for maneuver in transitions(current.orientation) {
            let nx = current.x + maneuver.dx;
            let ny = current.y + maneuver.dy;

            if nx < 0 || ny < 0 || nx as usize >= dims.cols || ny as usize >= dims.rows {
                continue;
            }

            if !crate::oracle::fits(grid, nx, ny, maneuver.new_orientation) {
                continue;
            }

            let next_mask = current.mask | mask_for(nx, ny, maneuver.new_orientation, objective_cells);
            let next_index = dims.encode(State { x: nx, y: ny, orientation: maneuver.new_orientation, mask: next_mask });
            let next_cost = cost + maneuver.fuel as i64;

            if next_cost < dist[next_index] {
                dist[next_index] = next_cost;
                parent[next_index] = index as u32;
                heap.push(HeapEntry { cost: next_cost, index: next_index });
            }
        }
    }

    let Some(goal) = goal_index else {
        log::info!("exact planner: no plan visits all {} objectives", objective_cells.len());
        return Ok(PlanOutcome::NoPlan);
    };

    let total_fuel = dist[goal];
    let trace = reconstruct(&dims, &parent, start_index, goal);
    log::info!("exact planner: total fuel {total_fuel} over {} steps", trace.len());

    Ok(PlanOutcome::Planned { total_fuel, trace })
}

/// Bits for every objective cell coincident with any of the vehicle's six
/// footprint cells at `(x, y, orientation)`, not just its anchor.
fn mask_for(x: i32, y: i32, orientation: Orientation, objective_cells: &[(i32, i32)]) -> u32 {
    let footprint = covered_cells(x, y, orientation);
    let mut mask = 0u32;
    for (bit, &(ox, oy)) in objective_cells.iter().enumerate() {
        if footprint.iter().any(|&(fx, fy)| fx == ox && fy == oy) {
            mask |= 1 << bit;
        }
    }
    mask
}

/// Walks the parent chain from `goal` back to `start_index`, panicking if
/// the chain does not terminate at the expected start (a cycle or a
/// corrupted parent array is an internal bug, not a recoverable error).
fn reconstruct(dims: &Dims, parent: &[u32], start_index: usize, goal: usize) -> Vec<TraceStep> {
    let mut steps = Vec::new();
    let mut current = goal;

    loop {
        if current == start_index {
            break;
        }

        let previous = parent[current];
        assert_ne!(previous, NO_PARENT, "exact planner: parent chain broken before reaching start");

        let state = dims.decode(current);
        steps.push(TraceStep {
            x: state.x,
            y: state.y,
            orientation: state.orientation,
            mask: state.mask,
        });

        current = previous as usize;
        assert!(steps.len() <= dims.total_states(), "exact planner: parent chain cycle detected");
    }

    steps.reverse();
    steps
}
