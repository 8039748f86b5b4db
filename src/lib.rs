//! # latgen — input-script generator for the bone-lattice simulator
//!
//! The bone-lattice simulator is driven by a line-oriented command script
//! (`input.txt`): one `init` line fixing the lattice size and the six payoff
//! coefficients, then alternating `sim`/`dump` instructions, then `exit`.
//! This crate generates those scripts together with the directory tree the
//! dump instructions reference.
//!
//! | Piece | Module | Description |
//! |-------|--------|-------------|
//! | Vocabulary | [`script`] | `Instruction` enum, one variant per script line, with Python-compatible float tokens |
//! | Single run | [`generator`] | Create `<dest>/`, `<dest>/img<i>/`, write `<dest>/input.txt` |
//! | Batch sweep | [`sweep`] | Cartesian grid over the free coefficients (α2, β2), one subtree per pair |
//!
//! Two binaries wrap the library: `latgen-generate` (interactive prompts,
//! single run) and `latgen-factory` (grid sweep with `--flag` overrides and
//! an optional JSON config).
//!
//! Generation is deliberately fail-fast: an existing destination aborts the
//! run with `AlreadyExists`, and a run that fails midway leaves its partial
//! tree in place for manual removal. Scripts are written once and never
//! mutated; the simulator consumes them whole.

pub mod constants;
pub mod env_config;
pub mod generator;
pub mod prompt;
pub mod script;
pub mod sweep;
pub mod types;
