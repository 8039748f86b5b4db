//! Request and configuration types.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// One script-generation run: a destination plus all simulator parameters.
///
/// The destination must not exist before generation; everything else is
/// checked by [`validate`](GenerationRequest::validate) before any filesystem
/// effect.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub dest: PathBuf,
    /// Simulate-then-dump iterations, each with its own `img<i>` directory.
    pub iterations: u32,
    /// Simulated time covered by one iteration.
    pub time_per_iteration: f64,
    /// Count-dumps per iteration; each `sim` advances time/dumps.
    pub dumps_per_iteration: u32,
    pub alpha: [f64; 3],
    pub beta: [f64; 3],
    /// Passed through verbatim on the `init` line.
    pub lattice_size: String,
}

impl GenerationRequest {
    /// Reject non-positive counts and times. `!(x > 0.0)` also catches NaN.
    pub fn validate(&self) -> io::Result<()> {
        if self.iterations == 0 {
            return Err(invalid_input("iteration count must be positive"));
        }
        if self.dumps_per_iteration == 0 {
            return Err(invalid_input("dumps per iteration must be positive"));
        }
        if !(self.time_per_iteration > 0.0) {
            return Err(invalid_input("time per iteration must be positive"));
        }
        Ok(())
    }
}

fn invalid_input(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

/// Batch sweep parameters. Defaults mirror the historical research constants.
///
/// `alpha`/`beta` hold the two fixed coefficients of each triple; the third
/// is drawn from `grid` (both free coefficients share the same grid).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub root: PathBuf,
    pub iterations: u32,
    pub time_per_iteration: f64,
    pub dumps_per_iteration: u32,
    pub lattice_size: String,
    pub alpha: [f64; 2],
    pub beta: [f64; 2],
    pub grid: Vec<f64>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_DATA_ROOT),
            iterations: DEFAULT_ITERATIONS,
            time_per_iteration: DEFAULT_TIME_PER_ITERATION,
            dumps_per_iteration: DEFAULT_DUMPS_PER_ITERATION,
            lattice_size: DEFAULT_LATTICE_SIZE.to_string(),
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            grid: DEFAULT_PARAM_GRID.to_vec(),
        }
    }
}

impl FactoryConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: &str) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }
}
