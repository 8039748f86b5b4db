//! Coefficient-grid batch generation: one destination subtree per (α2, β2).
//!
//! The sweep holds α0, α1, β0, β1 fixed and varies the third coefficient of
//! each triple over the configured grid, α2 in the outer loop and β2 in the
//! inner one. Runs are strictly sequential and independent; the first failing
//! run aborts the sweep, leaving earlier subtrees intact.

use std::fs;
use std::io;
use std::time::Instant;

use crate::generator::generate;
use crate::script::format_float;
use crate::types::{FactoryConfig, GenerationRequest};

/// Directory name for one grid point, matching the historical layout:
/// α2=0.0, β2=0.2 → `"0.0.0.2"`.
pub fn run_dir_name(alpha2: f64, beta2: f64) -> String {
    format!("{}.{}", format_float(alpha2), format_float(beta2))
}

/// Parse a comma-separated grid override, e.g. `"-0.4,-0.2,0.0"`.
pub fn parse_grid(csv: &str) -> Result<Vec<f64>, String> {
    let mut values = Vec::new();
    for token in csv.split(',') {
        let token = token.trim();
        values.push(
            token
                .parse::<f64>()
                .map_err(|_| format!("invalid grid value '{}'", token))?,
        );
    }
    Ok(values)
}

/// Build the request for one grid point of a sweep.
pub fn request_for(cfg: &FactoryConfig, alpha2: f64, beta2: f64) -> GenerationRequest {
    GenerationRequest {
        dest: cfg.root.join(run_dir_name(alpha2, beta2)),
        iterations: cfg.iterations,
        time_per_iteration: cfg.time_per_iteration,
        dumps_per_iteration: cfg.dumps_per_iteration,
        alpha: [cfg.alpha[0], cfg.alpha[1], alpha2],
        beta: [cfg.beta[0], cfg.beta[1], beta2],
        lattice_size: cfg.lattice_size.clone(),
    }
}

/// Run the full grid sequentially. Returns the number of subtrees generated.
///
/// The data root itself may pre-exist (it is created if missing); the
/// per-run directories under it must not.
pub fn run_factory(cfg: &FactoryConfig) -> io::Result<usize> {
    fs::create_dir_all(&cfg.root)?;

    let total = cfg.grid.len() * cfg.grid.len();
    let t_total = Instant::now();
    let mut done = 0;

    for &alpha2 in &cfg.grid {
        for &beta2 in &cfg.grid {
            let req = request_for(cfg, alpha2, beta2);
            println!("[{}/{}] {}", done + 1, total, req.dest.display());
            generate(&req)?;
            done += 1;
        }
    }

    println!(
        "\nDone. {} runs generated in {:.1}s.",
        done,
        t_total.elapsed().as_secs_f64()
    );
    Ok(done)
}
