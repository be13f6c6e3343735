#![cfg(test)]

use super::*;
use crate::plan::PlanOutcome;

#[test]
fn infeasible_start_is_a_hard_error() {
    let maze = b"1113\n1121\n1111";
    let mut engine = Engine::load(maze, EngineConfig::default()).unwrap();
    let result = engine.analyze_reachability();
    assert!(matches!(result, Err(EngineError::InfeasibleStart(_))));
}

#[test_log::test]
fn end_to_end_plan_on_a_single_objective_room() {
    let maze = b"1111111\n1111111\n1111111\n1121131\n1111111\n1111111\n1111111";
    let mut engine = Engine::load(maze, EngineConfig::default()).unwrap();
    let report = engine.analyze_reachability().unwrap();
    assert_eq!(report.reachable_count, 1);

    let outcome = engine.plan(PlanMode::Exact).unwrap();
    match outcome {
        PlanOutcome::Planned { total_fuel, trace } => {
            assert!(total_fuel > 0);
            assert!(!trace.is_empty());
        }
        PlanOutcome::NoPlan => panic!("expected a plan for a single reachable objective"),
    }
}

#[test]
fn no_reachable_objectives_yields_a_trivial_plan() {
    let maze = b"1111\n1121\n1111";
    let mut engine = Engine::load(maze, EngineConfig::default()).unwrap();
    let report = engine.analyze_reachability().unwrap();
    assert_eq!(report.total, 0);

    let outcome = engine.plan(PlanMode::Auto).unwrap();
    assert_eq!(outcome, PlanOutcome::Planned { total_fuel: 0, trace: Vec::new() });
}
