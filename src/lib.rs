// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::dag::{ensure_acyclic, CostModel, Scheduler, StepGraph};
use crate::errors::Result;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (with CLI overrides)
/// - instruction parsing
/// - graph construction + cycle validation
/// - linearization
/// - makespan simulation
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;

    let workers = cfg.schedule.effective_workers(args.workers);
    let base_cost = cfg.schedule.effective_base_cost(args.base_cost);

    let edges = input::load_edges(&args.input)?;
    let graph = StepGraph::from_edges(&edges);
    ensure_acyclic(&graph)?;

    info!(steps = graph.len(), workers, base_cost, "loaded step graph");

    let costs = CostModel::from_alphabet_str(base_cost, &cfg.schedule.alphabet);

    if args.dry_run {
        print_dry_run(&graph, &costs, workers);
        return Ok(());
    }

    let order = graph.linearize()?;
    println!("order: {}", order.concat());

    let mut scheduler = Scheduler::new(graph, costs, workers);
    let makespan = scheduler.solve()?;
    println!("makespan: {makespan}");

    Ok(())
}

/// Simple dry-run output: print steps, adjacency and costs.
fn print_dry_run(graph: &StepGraph, costs: &CostModel, workers: usize) {
    println!("stepplan dry-run");
    println!("  workers = {workers}");
    println!("  base_cost = {}", costs.base());
    println!();

    println!("steps ({}):", graph.len());
    for step in graph.steps() {
        println!("  - {step}");

        let prereqs = graph.prerequisites_of(step);
        if !prereqs.is_empty() {
            println!("      after: {prereqs:?}");
        }
        let dependents = graph.dependents_of(step);
        if !dependents.is_empty() {
            println!("      unblocks: {dependents:?}");
        }
        match costs.cost(step) {
            Ok(c) => println!("      cost: {c}"),
            Err(_) => println!("      cost: (not in alphabet)"),
        }
    }

    debug!("dry-run complete (no simulation)");
}
