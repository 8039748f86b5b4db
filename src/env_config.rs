//! Shared environment configuration for the latgen binaries.

use std::path::PathBuf;

use crate::constants::DEFAULT_DATA_ROOT;

/// Read `LATGEN_DATA_ROOT` (default `"data"`). The factory's `--root` flag
/// takes precedence over the environment.
pub fn data_root() -> PathBuf {
    std::env::var("LATGEN_DATA_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_ROOT))
}
