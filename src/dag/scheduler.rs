// src/dag/scheduler.rs

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::dag::cost::CostModel;
use crate::dag::graph::StepGraph;
use crate::dag::pool::{Job, WorkerPool};
use crate::dag::StepId;
use crate::errors::{Result, StepplanError};

/// Discrete-event simulation of a worker pool executing the step graph.
///
/// It is responsible for:
/// - deriving the completed set from the pool at each clock value
/// - deciding which steps are ready (prerequisites done, not in progress)
/// - pairing ready steps with free workers deterministically
/// - advancing the clock to the next completion event
/// - reporting a stalled schedule as a dependency cycle
pub struct Scheduler {
    graph: StepGraph,
    costs: CostModel,
    pool: WorkerPool,
    /// Monotonically non-decreasing simulation clock.
    now: u64,
}

impl Scheduler {
    /// Construct a scheduler over `graph` with `workers` simulated slots.
    pub fn new(graph: StepGraph, costs: CostModel, workers: usize) -> Self {
        Self {
            graph,
            costs,
            pool: WorkerPool::new(workers),
            now: 0,
        }
    }

    /// Current clock value.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Read-only view of the pool (jobs assigned so far).
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Run the simulation to completion and return the makespan.
    ///
    /// The clock only ever visits completion timestamps: a step can only
    /// become ready, and a worker can only become free, at a moment when
    /// some job finishes.
    pub fn solve(&mut self) -> Result<u64> {
        loop {
            let completed = self.pool.completed_by(self.now);
            if completed.len() == self.graph.len() {
                info!(makespan = self.now, "all steps complete");
                return Ok(self.now);
            }

            let assigned = self.assign_ready_steps(&completed)?;

            match self.pool.next_completion_after(self.now) {
                Ok(t) => {
                    debug!(
                        from = self.now,
                        to = t,
                        newly_assigned = assigned,
                        "advancing clock to next completion"
                    );
                    self.now = t;
                }
                Err(StepplanError::NoFutureCompletion(_)) => {
                    // Steps remain but nothing will ever finish: the
                    // remaining steps wait on each other.
                    let stuck = self
                        .graph
                        .nodes()
                        .iter()
                        .find(|s| !completed.contains(*s))
                        .cloned()
                        .unwrap_or_default();
                    warn!(step = %stuck, t = self.now, "schedule stalled");
                    return Err(StepplanError::CyclicDependency(stuck));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Pair free workers with ready steps at the current clock value.
    ///
    /// Workers are taken in slot order, ready steps ascending; pairing stops
    /// when either side runs out. Returns how many jobs were created.
    fn assign_ready_steps(&mut self, completed: &BTreeSet<StepId>) -> Result<usize> {
        let free = self.pool.available_workers(self.now);
        if free.is_empty() {
            return Ok(0);
        }

        let in_progress: BTreeSet<StepId> = self
            .pool
            .jobs_in_progress_at(self.now)
            .iter()
            .map(|j| j.step.clone())
            .collect();

        let ready: Vec<StepId> = self
            .graph
            .steps()
            .filter(|s| !completed.contains(*s) && !in_progress.contains(*s))
            .filter(|s| self.graph.is_ready(s, completed))
            .cloned()
            .collect();

        let mut assigned = 0;
        for (worker, step) in free.into_iter().zip(ready) {
            let finish = self.now + self.costs.cost(&step)?;
            let job = Job {
                worker,
                step: step.clone(),
                start: self.now,
                finish,
            };

            debug!(step = %step, worker, start = self.now, finish, "assigning step");
            if !self.pool.assign(job) {
                // The completed/in-progress filters should make this
                // unreachable.
                warn!(step = %step, "pool rejected duplicate assignment");
                continue;
            }
            assigned += 1;
        }

        Ok(assigned)
    }
}
