//! latgen-generate: interactive single-run script generator.
//!
//! Prompts for a destination, timing parameters, the two coefficient triples,
//! and the lattice size, then generates `<dest>/input.txt` plus the image
//! directories. Any malformed input or existing destination aborts the run.

use std::io;
use std::path::PathBuf;

use latgen::generator::generate;
use latgen::prompt::{prompt_line, prompt_parse};
use latgen::types::GenerationRequest;

fn main() {
    let req = match read_request() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = generate(&req) {
        eprintln!("Generation failed: {}", e);
        std::process::exit(1);
    }
}

/// Prompt sequence, in the order the research scripts always used.
fn read_request() -> io::Result<GenerationRequest> {
    let dest = PathBuf::from(prompt_line("folder path")?);
    let iterations: u32 = prompt_parse("step count")?;
    let time_per_iteration: f64 = prompt_parse("time per sim")?;
    let dumps_per_iteration: u32 = prompt_parse("count dumps per sim")?;

    let mut alpha = [0.0f64; 3];
    let mut beta = [0.0f64; 3];
    for i in 0..3 {
        alpha[i] = prompt_parse(&format!("alpha[{}]", i))?;
        beta[i] = prompt_parse(&format!("beta[{}]", i))?;
    }

    let lattice_size = prompt_line("lattice size")?;

    Ok(GenerationRequest {
        dest,
        iterations,
        time_per_iteration,
        dumps_per_iteration,
        alpha,
        beta,
        lattice_size,
    })
}
