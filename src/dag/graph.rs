// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::dag::StepId;
use crate::errors::{Result, StepplanError};
use crate::input::Edge;

/// Directed graph of step ordering constraints.
///
/// Adjacency is kept in both directions: `dependents` maps a step to the
/// steps that must wait for it, and `prerequisites` is the exact transpose.
/// Both are built once from the full edge list and never mutated afterwards;
/// every adjacency list is sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepGraph {
    nodes: BTreeSet<StepId>,
    dependents: BTreeMap<StepId, Vec<StepId>>,
    prerequisites: BTreeMap<StepId, Vec<StepId>>,
}

impl StepGraph {
    /// Build a graph from parsed constraint edges.
    ///
    /// Every identifier seen on either side of an edge becomes a node.
    /// Duplicate edges collapse to one.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut nodes = BTreeSet::new();
        let mut dependents: BTreeMap<StepId, Vec<StepId>> = BTreeMap::new();
        let mut prerequisites: BTreeMap<StepId, Vec<StepId>> = BTreeMap::new();

        for edge in edges {
            nodes.insert(edge.before.clone());
            nodes.insert(edge.after.clone());

            dependents
                .entry(edge.before.clone())
                .or_default()
                .push(edge.after.clone());
            prerequisites
                .entry(edge.after.clone())
                .or_default()
                .push(edge.before.clone());
        }

        for list in dependents.values_mut().chain(prerequisites.values_mut()) {
            list.sort();
            list.dedup();
        }

        Self {
            nodes,
            dependents,
            prerequisites,
        }
    }

    /// All step identifiers, ascending.
    pub fn steps(&self) -> impl Iterator<Item = &StepId> {
        self.nodes.iter()
    }

    /// Full node set, used by the scheduler's terminal check.
    pub fn nodes(&self) -> &BTreeSet<StepId> {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, step: &str) -> bool {
        self.nodes.contains(step)
    }

    /// Steps that must wait for `step` (its direct successors).
    pub fn dependents_of(&self, step: &str) -> &[StepId] {
        self.dependents
            .get(step)
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }

    /// Steps that must finish before `step` can begin.
    pub fn prerequisites_of(&self, step: &str) -> &[StepId] {
        self.prerequisites
            .get(step)
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }

    /// Steps with no prerequisites, ascending.
    pub fn root_steps(&self) -> Vec<StepId> {
        self.nodes
            .iter()
            .filter(|s| self.prerequisites_of(s).is_empty())
            .cloned()
            .collect()
    }

    /// Whether every prerequisite of `step` is in `completed`.
    pub fn is_ready(&self, step: &str, completed: &BTreeSet<StepId>) -> bool {
        self.prerequisites_of(step)
            .iter()
            .all(|p| completed.contains(p))
    }

    /// Single-worker execution order.
    ///
    /// Maintains a frontier seeded with the root steps. At each point the
    /// lexicographically smallest frontier member whose prerequisites have
    /// all been emitted is appended, and its dependents join the frontier.
    /// Smallest-ready-first is the defining tie-break of the ordering, also
    /// when several steps become available at once.
    pub fn linearize(&self) -> Result<Vec<StepId>> {
        let mut frontier: BTreeSet<StepId> = self.root_steps().into_iter().collect();
        let mut emitted: BTreeSet<StepId> = BTreeSet::new();
        let mut order: Vec<StepId> = Vec::with_capacity(self.nodes.len());

        while !frontier.is_empty() {
            let next = frontier
                .iter()
                .find(|s| self.is_ready(s, &emitted))
                .cloned();

            let step = match next {
                Some(s) => s,
                None => {
                    // Non-empty frontier with nothing ready: the remaining
                    // steps wait on each other.
                    let stuck = frontier.iter().next().cloned().unwrap_or_default();
                    return Err(StepplanError::CyclicDependency(stuck));
                }
            };

            frontier.remove(&step);
            for dep in self.dependents_of(&step) {
                if !emitted.contains(dep) {
                    frontier.insert(dep.clone());
                }
            }
            emitted.insert(step.clone());
            order.push(step);
        }

        if order.len() != self.nodes.len() {
            // Steps unreachable from any root can only sit on a cycle.
            let stuck = self
                .nodes
                .iter()
                .find(|s| !emitted.contains(*s))
                .cloned()
                .unwrap_or_default();
            return Err(StepplanError::CyclicDependency(stuck));
        }

        debug!(steps = order.len(), "linearized step graph");
        Ok(order)
    }
}

/// Reject graphs with dependency cycles.
///
/// A topological sort over the edge set fails exactly when a cycle exists;
/// the error names one step involved in it.
pub fn ensure_acyclic(graph: &StepGraph) -> Result<()> {
    let mut dg: DiGraphMap<&str, ()> = DiGraphMap::new();

    for step in graph.steps() {
        dg.add_node(step.as_str());
    }
    for step in graph.steps() {
        for dep in graph.dependents_of(step) {
            dg.add_edge(step.as_str(), dep.as_str(), ());
        }
    }

    match toposort(&dg, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(StepplanError::CyclicDependency(
            cycle.node_id().to_string(),
        )),
    }
}
