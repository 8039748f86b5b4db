//! File-name constants and the historical research parameters.
//!
//! The defaults reproduce the original MATH 89S sweep: 40 iterations of 0.25
//! time units at 100 count-dumps each, on a 45³ lattice, with α2 and β2 swept
//! over a 7-value grid (49 runs).

/// Command script file name inside each destination directory.
pub const INPUT_FILE_NAME: &str = "input.txt";

/// Count-dump target referenced (but never created) by the script.
pub const COUNT_FILE_NAME: &str = "count.csv";

/// Steps-dump target referenced (but never created) by the script.
pub const STEPS_FILE_NAME: &str = "steps.csv";

/// Per-iteration image directory prefix: `img0`, `img1`, ...
pub const IMG_DIR_PREFIX: &str = "img";

// ── Historical factory defaults ──

/// Simulate-then-dump iterations per run.
pub const DEFAULT_ITERATIONS: u32 = 40;

/// Simulated time per iteration.
pub const DEFAULT_TIME_PER_ITERATION: f64 = 0.25;

/// Count-dumps per iteration (each preceded by a `sim` of time/dumps).
pub const DEFAULT_DUMPS_PER_ITERATION: u32 = 100;

/// Lattice side length, passed through verbatim on the `init` line.
pub const DEFAULT_LATTICE_SIZE: &str = "45";

/// Fixed α0, α1 (α2 is swept).
pub const DEFAULT_ALPHA: [f64; 2] = [-0.1, -0.5];

/// Fixed β0, β1 (β2 is swept).
pub const DEFAULT_BETA: [f64; 2] = [0.6, 0.2];

/// Values swept for both free coefficients, α2 and β2.
pub const DEFAULT_PARAM_GRID: [f64; 7] = [-0.4, -0.2, -0.1, 0.0, 0.1, 0.2, 0.4];

/// Default data root for factory runs.
pub const DEFAULT_DATA_ROOT: &str = "data";
