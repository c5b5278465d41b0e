#![allow(dead_code)]

use stepplan::dag::StepGraph;
use stepplan::input::Edge;

/// Builder for constraint edge lists to simplify test setup.
pub struct EdgeListBuilder {
    edges: Vec<Edge>,
}

impl EdgeListBuilder {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add the constraint "`before` must be finished before `after`".
    pub fn edge(mut self, before: &str, after: &str) -> Self {
        self.edges.push(Edge {
            before: before.to_string(),
            after: after.to_string(),
        });
        self
    }

    /// Render the edges as an input document in the wire grammar.
    pub fn to_input(&self) -> String {
        self.edges
            .iter()
            .map(|e| {
                format!(
                    "Step {} must be finished before step {} can begin.\n",
                    e.before, e.after
                )
            })
            .collect()
    }

    pub fn build_edges(self) -> Vec<Edge> {
        self.edges
    }

    pub fn build_graph(self) -> StepGraph {
        StepGraph::from_edges(&self.edges)
    }
}

impl Default for EdgeListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The seven-step worked example used across the integration tests.
///
/// Edges: C→A, C→F, A→B, A→D, B→E, D→E, F→E.
pub fn sample_edges() -> EdgeListBuilder {
    EdgeListBuilder::new()
        .edge("C", "A")
        .edge("C", "F")
        .edge("A", "B")
        .edge("A", "D")
        .edge("B", "E")
        .edge("D", "E")
        .edge("F", "E")
}
