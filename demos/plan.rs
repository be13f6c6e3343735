//! Thin CLI front end: loads a maze file, runs reachability analysis and
//! planning, and prints a summary (or, with `--json`, the machine-readable
//! result).
//!
//! Usage: `plan <maze-file> [--json]`

use gridpilot::engine::{Engine, EngineConfig};
use gridpilot::plan::PlanMode;
use serde::Serialize;
use std::env;
use std::fs;
use std::process::ExitCode;

#[derive(Serialize)]
struct Output {
    reachable: usize,
    total: usize,
    outcome: gridpilot::plan::PlanOutcome,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: plan <maze-file> [--json]");
        return ExitCode::FAILURE;
    };
    let json = args.iter().any(|a| a == "--json");

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("failed to read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = EngineConfig::default();
    if let Ok(threshold) = env::var("GRIDPILOT_EXACT_THRESHOLD") {
        match threshold.parse() {
            Ok(value) => config.exact_planner_threshold = value,
            Err(_) => log::warn!("ignoring malformed GRIDPILOT_EXACT_THRESHOLD={threshold}"),
        }
    }

    let mut engine = match Engine::load(&bytes, config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = match engine.analyze_reachability() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("reachability analysis failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match engine.plan(PlanMode::Auto) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("planning failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        let output = Output { reachable: report.reachable_count, total: report.total, outcome };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("failed to serialize result: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("reachable objectives: {}/{}", report.reachable_count, report.total);
    match outcome {
        gridpilot::plan::PlanOutcome::NoPlan => println!("no plan visits every reachable objective"),
        gridpilot::plan::PlanOutcome::Planned { total_fuel, trace } => {
            println!("plan found: {} steps, {total_fuel} total fuel", trace.len());
        }
    }

    ExitCode::SUCCESS
}
