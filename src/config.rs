use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::EngineError;

/// Leaf evaluator tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    /// Applied to each table value before tanh; raw centipawn sums saturate it.
    pub scale: f64,
    /// Heuristic scores stay within [-ceiling, ceiling]; must be < 1 so they never reach a terminal value.
    pub ceiling: f64,
}

impl Default for EvalParams {
    fn default() -> Self { Self { scale: 0.01, ceiling: 0.8 } }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Fraction of remaining clock spent per decision (remaining / divisor).
    pub time_divisor: u64,
    /// Fixed per-decision budget; overrides the clock-derived one.
    pub movetime_ms: Option<u64>,
    /// Hard cap on iterations, for reproducible runs.
    pub max_iterations: Option<u64>,
    /// UCT exploration weight C.
    pub exploration: f64,
    pub eval: EvalParams,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { time_divisor: 30, movetime_ms: None, max_iterations: None, exploration: 1.0, eval: EvalParams::default() }
    }
}

impl SearchParams {
    pub fn from_json_str(s: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Budget in milliseconds for one decision given the clock's remaining time.
    pub fn budget_ms(&self, remaining_ms: u64) -> u64 {
        match self.movetime_ms {
            Some(t) => t,
            None => remaining_ms / self.time_divisor.max(1),
        }
    }
}
