use std::error::Error;

use stepplan::dag::{CostModel, Scheduler};
use stepplan::errors::StepplanError;
use stepplan_test_utils::builders::{sample_edges, EdgeListBuilder};

type TestResult = Result<(), Box<dyn Error>>;

fn letters(base: u64) -> CostModel {
    CostModel::from_alphabet_str(base, "ABCDEFGHIJKLMNOPQRSTUVWXYZ")
}

#[test]
fn worked_example_with_two_workers_takes_15() -> TestResult {
    let graph = sample_edges().build_graph();
    let mut scheduler = Scheduler::new(graph, letters(0), 2);

    assert_eq!(scheduler.solve()?, 15);
    assert_eq!(scheduler.now(), 15);

    Ok(())
}

#[test]
fn worked_example_job_trace_with_two_workers() -> TestResult {
    let graph = sample_edges().build_graph();
    let mut scheduler = Scheduler::new(graph, letters(0), 2);
    scheduler.solve()?;

    let jobs = scheduler.pool().jobs();
    let trace: Vec<(usize, &str, u64, u64)> = jobs
        .iter()
        .map(|j| (j.worker, j.step.as_str(), j.start, j.finish))
        .collect();

    assert_eq!(
        trace,
        [
            (0, "C", 0, 3),
            (0, "A", 3, 4),
            (1, "F", 3, 9),
            (0, "B", 4, 6),
            (0, "D", 6, 10),
            (0, "E", 10, 15),
        ]
    );

    Ok(())
}

#[test]
fn unlimited_workers_hit_the_critical_path() -> TestResult {
    // Critical path C(3) -> F(6) -> E(5) = 14.
    let graph = sample_edges().build_graph();
    let mut scheduler = Scheduler::new(graph, letters(0), 7);

    assert_eq!(scheduler.solve()?, 14);

    Ok(())
}

#[test]
fn a_single_worker_serializes_everything() -> TestResult {
    // 1 + 2 + 3 + 4 + 5 + 6 = 21.
    let graph = sample_edges().build_graph();
    let mut scheduler = Scheduler::new(graph, letters(0), 1);
    assert_eq!(scheduler.solve()?, 21);

    // With a base cost every step gets 60 units heavier.
    let graph = sample_edges().build_graph();
    let mut scheduler = Scheduler::new(graph, letters(60), 1);
    assert_eq!(scheduler.solve()?, 381);

    Ok(())
}

#[test]
fn base_cost_sixty_with_five_workers() -> TestResult {
    // Ample workers: the makespan equals the critical path
    // C(63) -> A(61) -> D(64) -> E(65) = 253.
    let graph = sample_edges().build_graph();
    let mut scheduler = Scheduler::new(graph, letters(60), 5);

    assert_eq!(scheduler.solve()?, 253);

    Ok(())
}

#[test]
fn an_empty_graph_finishes_at_zero() -> TestResult {
    let graph = EdgeListBuilder::new().build_graph();
    let mut scheduler = Scheduler::new(graph, letters(0), 2);

    assert_eq!(scheduler.solve()?, 0);
    assert!(scheduler.pool().jobs().is_empty());

    Ok(())
}

#[test]
fn a_cycle_stalls_the_schedule() {
    let graph = EdgeListBuilder::new()
        .edge("A", "B")
        .edge("B", "A")
        .build_graph();
    let mut scheduler = Scheduler::new(graph, letters(0), 2);

    assert!(matches!(
        scheduler.solve(),
        Err(StepplanError::CyclicDependency(_))
    ));
}

#[test]
fn a_step_outside_the_alphabet_is_an_error() {
    let graph = EdgeListBuilder::new().edge("A", "?").build_graph();
    let mut scheduler = Scheduler::new(graph, CostModel::from_alphabet_str(0, "AB"), 1);

    assert!(matches!(
        scheduler.solve(),
        Err(StepplanError::UnknownStep(s)) if s == "?"
    ));
}
