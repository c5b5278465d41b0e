// src/dag/mod.rs

//! Step graph and makespan scheduling.
//!
//! - [`graph`] holds the directed graph of step ordering constraints.
//! - [`cost`] maps step identifiers to processing durations.
//! - [`pool`] tracks per-worker job intervals over simulated time.
//! - [`scheduler`] runs the discrete-event loop that assigns ready steps
//!   to free workers until the whole graph is complete.

pub mod cost;
pub mod graph;
pub mod pool;
pub mod scheduler;

/// Canonical step identifier type used throughout the crate.
pub type StepId = String;

pub use cost::CostModel;
pub use graph::{ensure_acyclic, StepGraph};
pub use pool::{Job, WorkerId, WorkerPool};
pub use scheduler::Scheduler;
