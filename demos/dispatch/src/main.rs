//! dispatch: runs the bundled relief scenarios under every search strategy.
//!
//! ```text
//! dispatch [city|azores|grid|all] [bfs|ucs|greedy|astar|all]
//! ```
//!
//! Each run writes its operation log under `output/dispatch/<scenario>/<strategy>/`
//! and a cross-run `summary.json` is written at the end.  Set `RUST_LOG=debug`
//! to see every planning round.

mod heuristics;
mod scenarios;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use rd_mission::{CatastropheStatus, Mission, MissionConfig, MissionReport};
use rd_output::{CsvWriter, MissionOutputObserver};
use rd_search::SearchStrategy;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_ROOT: &str = "output/dispatch";
/// Hard stop, well past every bundled deadline.
const MAX_TICKS:   u64  = 2_000;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let scenario_arg = args.next().unwrap_or_else(|| "all".into());
    let strategy_arg = args.next().unwrap_or_else(|| "all".into());

    let strategies: Vec<SearchStrategy> = if strategy_arg == "all" {
        SearchStrategy::ALL.to_vec()
    } else {
        vec![strategy_arg.parse()?]
    };
    let config = MissionConfig::default().with_max_ticks(MAX_TICKS);

    println!("=== dispatch: relief fleet planner ===");
    println!();

    let mut summary = Vec::new();
    for scenario in scenarios::select(&scenario_arg)? {
        println!(
            "Scenario {:?}: {} nodes, {} vehicles, {} catastrophes, {} scheduled destructions",
            scenario.name,
            scenario.network.node_count(),
            scenario.fleet.len(),
            scenario.catastrophes.len(),
            scenario.schedule.len(),
        );
        let mission = Mission::new(scenario, config.clone());

        for &strategy in &strategies {
            let dir = Path::new(OUTPUT_ROOT).join(&mission.scenario().name).join(strategy.as_str());
            std::fs::create_dir_all(&dir)?;
            let writer = CsvWriter::new(&dir)?;
            let mut obs = MissionOutputObserver::new(writer, mission.scenario());

            let t0 = Instant::now();
            let report = mission.run(strategy, &mut obs)?;
            let elapsed = t0.elapsed();

            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            print_report(&mission, &report, elapsed);

            summary.push(json!({
                "scenario":   mission.scenario().name,
                "strategy":   strategy.as_str(),
                "outcome":    report.outcome.to_string(),
                "final_tick": report.final_tick.0,
                "replans":    report.replans,
                "operations": report.executed.len(),
                "resolved":   report.resolved_count(),
                "fuel_litres": report.fuel_consumed().litres(),
                "elapsed_ms": elapsed.as_secs_f64() * 1e3,
            }));
        }
    }

    std::fs::create_dir_all(OUTPUT_ROOT)?;
    let summary_path = Path::new(OUTPUT_ROOT).join("summary.json");
    std::fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    println!("Summary written to {}", summary_path.display());
    Ok(())
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_report(mission: &Mission, report: &MissionReport, elapsed: Duration) {
    let scenario = mission.scenario();
    let strategy = report.strategy.map_or("custom", SearchStrategy::as_str);

    println!();
    println!("── {} / {} ──", scenario.name, strategy);
    println!(
        "Outcome {} at T{}  |  replans {}  |  {} operations  |  fuel {}  |  {:.3} ms",
        report.outcome,
        report.final_tick.0,
        report.replans,
        report.executed.len(),
        report.fuel_consumed(),
        elapsed.as_secs_f64() * 1e3,
    );

    println!("{:<6} {:<12} {:<7} {:<12} {}", "Time", "Vehicle", "Kind", "Node", "Detail");
    println!("{}", "-".repeat(56));
    for op in &report.executed {
        println!(
            "{:<6} {:<12} {:<7} {:<12} {}",
            op.time.0,
            scenario.vehicle_name(op.vehicle),
            op.kind().as_str(),
            scenario.network.name(op.node),
            op.action,
        );
    }

    println!();
    println!("{:<12} {:<9} {:<11} {}", "Catastrophe", "Deadline", "Status", "Outstanding");
    println!("{}", "-".repeat(48));
    for c in &report.statuses {
        let (status, outstanding) = match &c.status {
            CatastropheStatus::Resolved { at } => (format!("T{}", at.0), 0),
            CatastropheStatus::Unresolved { outstanding } => {
                ("unresolved".to_owned(), outstanding.values().sum::<u32>())
            }
            CatastropheStatus::Unassigned { outstanding } => {
                ("unassigned".to_owned(), outstanding.values().sum::<u32>())
            }
        };
        println!("{:<12} {:<9} {:<11} {}", c.name, c.deadline.0, status, outstanding);
    }
    println!();
}
