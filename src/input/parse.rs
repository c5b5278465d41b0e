// src/input/parse.rs

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::dag::StepId;
use crate::errors::{Result, StepplanError};

/// One parsed constraint: `before` must finish before `after` can begin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub before: StepId,
    pub after: StepId,
}

/// Grammar for a single constraint line.
///
/// Identifiers are any run of non-whitespace characters; single uppercase
/// letters in practice.
const LINE_GRAMMAR: &str = r"^Step (\S+) must be finished before step (\S+) can begin\.$";

fn line_regex() -> Result<Regex> {
    Regex::new(LINE_GRAMMAR).map_err(|e| StepplanError::Other(e.into()))
}

/// Parse a whole input document into edges.
///
/// Blank lines are skipped. Any other line that does not match the grammar
/// aborts parsing with [`StepplanError::MalformedLine`] naming the line.
pub fn parse_lines(input: &str) -> Result<Vec<Edge>> {
    let re = line_regex()?;

    let mut edges = Vec::new();
    for line in input.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        edges.push(parse_line(&re, line)?);
    }
    Ok(edges)
}

fn parse_line(re: &Regex, line: &str) -> Result<Edge> {
    let caps = re
        .captures(line)
        .ok_or_else(|| StepplanError::MalformedLine(line.to_string()))?;

    Ok(Edge {
        before: caps[1].to_string(),
        after: caps[2].to_string(),
    })
}

/// Read and parse an instruction file.
pub fn load_edges(path: impl AsRef<Path>) -> Result<Vec<Edge>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let edges = parse_lines(&contents)?;

    debug!(
        count = edges.len(),
        path = %path.display(),
        "parsed constraint records"
    );
    Ok(edges)
}
