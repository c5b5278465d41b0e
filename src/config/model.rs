// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [schedule]
/// workers = 5
/// base_cost = 60
/// alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
/// ```
///
/// The section and all of its fields are optional and have defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Simulation parameters from `[schedule]`.
    #[serde(default)]
    pub schedule: ScheduleSection,
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScheduleSection {
    /// Number of simulated worker slots.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Fixed cost added to every step on top of its alphabet offset.
    #[serde(default = "default_base_cost")]
    pub base_cost: u64,

    /// Ordered symbols used to derive per-step costs; the offset of a step
    /// is its 1-based position in this string.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

fn default_workers() -> usize {
    1
}

fn default_base_cost() -> u64 {
    0
}

fn default_alphabet() -> String {
    ('A'..='Z').collect()
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            base_cost: default_base_cost(),
            alphabet: default_alphabet(),
        }
    }
}

impl ScheduleSection {
    /// Effective worker count after an optional CLI override.
    pub fn effective_workers(&self, cli: Option<usize>) -> usize {
        cli.unwrap_or(self.workers)
    }

    /// Effective base cost after an optional CLI override.
    pub fn effective_base_cost(&self, cli: Option<u64>) -> u64 {
        cli.unwrap_or(self.base_cost)
    }
}
