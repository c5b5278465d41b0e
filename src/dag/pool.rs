// src/dag/pool.rs

//! Fixed pool of simulated worker slots and the jobs assigned to them.

use std::collections::BTreeSet;

use tracing::debug;

use crate::dag::StepId;
use crate::errors::{Result, StepplanError};

/// Identifier of a worker slot within the pool.
pub type WorkerId = usize;

/// One worker's execution of one step over `[start, finish)`.
///
/// Jobs are created by the scheduler and never mutated afterwards; the pool
/// owns them once assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub worker: WorkerId,
    pub step: StepId,
    pub start: u64,
    /// Exclusive upper bound: the worker is free again at `finish`.
    pub finish: u64,
}

impl Job {
    fn covers(&self, t: u64) -> bool {
        self.start <= t && t < self.finish
    }
}

/// Fixed set of worker slots plus the append-only job history.
///
/// Invariants:
/// - a worker has at most one job covering any instant
/// - a step has at most one job across the whole run
#[derive(Debug, Clone)]
pub struct WorkerPool {
    workers: Vec<WorkerId>,
    jobs: Vec<Job>,
}

impl WorkerPool {
    /// Create a pool with `count` worker slots (ids `0..count`).
    pub fn new(count: usize) -> Self {
        Self {
            workers: (0..count).collect(),
            jobs: Vec::new(),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// All jobs ever assigned, in assignment order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Register a job.
    ///
    /// Returns `false` (and registers nothing) if the step already has a
    /// job: each step is performed exactly once per pool.
    pub fn assign(&mut self, job: Job) -> bool {
        if self.jobs.iter().any(|j| j.step == job.step) {
            debug!(step = %job.step, "rejecting second assignment for step");
            return false;
        }
        self.jobs.push(job);
        true
    }

    /// Steps whose job has finished by `t` (`finish <= t`).
    pub fn completed_by(&self, t: u64) -> BTreeSet<StepId> {
        self.jobs
            .iter()
            .filter(|j| j.finish <= t)
            .map(|j| j.step.clone())
            .collect()
    }

    /// Jobs whose interval contains `t`.
    pub fn jobs_in_progress_at(&self, t: u64) -> Vec<&Job> {
        self.jobs.iter().filter(|j| j.covers(t)).collect()
    }

    /// Workers occupied at `t`.
    pub fn busy_workers(&self, t: u64) -> BTreeSet<WorkerId> {
        self.jobs_in_progress_at(t).iter().map(|j| j.worker).collect()
    }

    /// Workers free at `t`, in the pool's fixed slot order.
    pub fn available_workers(&self, t: u64) -> Vec<WorkerId> {
        let busy = self.busy_workers(t);
        self.workers
            .iter()
            .copied()
            .filter(|w| !busy.contains(w))
            .collect()
    }

    /// Smallest job finish time strictly greater than `t`.
    ///
    /// Errors when no job finishes after `t`; the caller decides whether
    /// that means "done" or "stalled".
    pub fn next_completion_after(&self, t: u64) -> Result<u64> {
        self.jobs
            .iter()
            .map(|j| j.finish)
            .filter(|f| *f > t)
            .min()
            .ok_or(StepplanError::NoFutureCompletion(t))
    }
}
