// src/dag/cost.rs

//! Per-step processing durations.

use std::collections::HashMap;

use crate::dag::StepId;
use crate::errors::{Result, StepplanError};

/// Maps a step identifier to its fixed processing duration.
///
/// Every step costs `base` plus the 1-based position of its identifier in
/// the configured alphabet (`A` = 1 .. `Z` = 26 by default).
#[derive(Debug, Clone)]
pub struct CostModel {
    base: u64,
    offsets: HashMap<StepId, u64>,
}

impl CostModel {
    /// Build a model from a base cost and an ordered sequence of symbols.
    pub fn new(base: u64, alphabet: impl IntoIterator<Item = StepId>) -> Self {
        let offsets = alphabet
            .into_iter()
            .enumerate()
            .map(|(i, sym)| (sym, i as u64 + 1))
            .collect();

        Self { base, offsets }
    }

    /// Model matching `[schedule].alphabet`: one symbol per character.
    pub fn from_alphabet_str(base: u64, alphabet: &str) -> Self {
        Self::new(base, alphabet.chars().map(|c| c.to_string()))
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Processing duration for `step`.
    pub fn cost(&self, step: &str) -> Result<u64> {
        match self.offsets.get(step) {
            Some(offset) => Ok(self.base + offset),
            None => Err(StepplanError::UnknownStep(step.to_string())),
        }
    }
}
