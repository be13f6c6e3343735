//! Breadth-first reachability analysis over `(x, y, orientation)`
//! configurations.

#[doc(hidden)]
mod test;

use crate::config::Configuration;
use crate::grid::Grid;
use crate::motion::{transitions, Orientation};
use crate::oracle::fits;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Summary of a reachability run: how many of the grid's objectives are
/// reachable from the start configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachabilityReport {
    pub reachable_count: usize,
    pub total: usize,
}

/// Runs BFS from `start`, flags each of `grid`'s objectives as reachable
/// or not (anchor-only coverage — see module docs), and demotes every
/// unreachable objective from `Objective` to `Free`.
///
/// If `start` does not fit the grid, no configuration is reachable: every
/// objective is left unreachable (and demoted), matching the reference
/// behaviour of short-circuiting rather than failing outright — the hard
/// "infeasible start" error is the caller's responsibility (see
/// [`crate::engine::Engine`]).
pub fn analyze(grid: &mut Grid, start: Configuration) -> ReachabilityReport {
    let total = grid.objectives().len();

    if !fits(grid, start.x, start.y, start.orientation) {
        log::warn!("start configuration {start} does not fit; 0/{total} objectives reachable");
        for objective in grid.objectives_mut() {
            objective.reachable = false;
        }
        demote_unreachable(grid);
        return ReachabilityReport { reachable_count: 0, total };
    }

    let rows = grid.rows();
    let cols = grid.cols();
    let mut visited = vec![false; rows * cols * 4];
    let visited_index = |x: i32, y: i32, o: Orientation| {
        (y as usize * cols + x as usize) * 4 + o.index()
    };

    let mut queue: VecDeque<Configuration> = VecDeque::new();
    visited[visited_index(start.x, start.y, start.orientation)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if let Some(objective) = grid
            .objectives_mut()
            .iter_mut()
            .find(|o| o.x == current.x && o.y == current.y)
        {
            objective.reachable = true;
        }

        for maneuver in transitions(current.orientation) {
            let nx = current.x + maneuver.dx;
            let ny = current.y + maneuver.dy;

            if nx < 0 || ny < 0 || nx as usize >= cols || ny as usize >= rows {
                continue;
            }

            let idx = visited_index(nx, ny, maneuver.new_orientation);
            if visited[idx] {
                continue;
            }

            if fits(grid, nx, ny, maneuver.new_orientation) {
                visited[idx] = true;
                queue.push_back(Configuration::new(nx, ny, maneuver.new_orientation));
            }
        }
    }

    let reachable_count = demote_unreachable(grid);
    log::info!("{reachable_count}/{total} objectives reachable");
    ReachabilityReport { reachable_count, total }
}

/// Demotes every unreachable objective to a free cell; returns the count
/// that remained reachable.
fn demote_unreachable(grid: &mut Grid) -> usize {
    let unreachable: Vec<(i32, i32)> = grid
        .objectives()
        .iter()
        .filter(|o| !o.reachable)
        .map(|o| (o.x, o.y))
        .collect();

    for (x, y) in unreachable {
        grid.demote_objective(x, y);
    }

    grid.objectives().iter().filter(|o| o.reachable).count()
}
