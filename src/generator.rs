//! Input Script Generator: directory-tree creation plus script emission.
//!
//! The generated layout for a run at `<dest>`:
//!
//! ```text
//! <dest>/input.txt     the command script (written here)
//! <dest>/img<i>/       one image directory per iteration (created here)
//! <dest>/img<i>.csv    referenced by `dump csv`, created by the simulator
//! <dest>/count.csv     referenced by `dump count`, created by the simulator
//! <dest>/steps.csv     referenced by `dump steps`, created by the simulator
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter};
use std::time::Instant;

use crate::constants::*;
use crate::script::{Instruction, ScriptWriter};
use crate::types::GenerationRequest;

/// Generate `<dest>/input.txt` and the per-iteration image directories.
///
/// Fail-fast with no cleanup: an existing destination (or script file)
/// surfaces as `AlreadyExists`, and a run that fails midway leaves its
/// partial tree in place for manual removal before a retry.
pub fn generate(req: &GenerationRequest) -> io::Result<()> {
    req.validate()?;

    let start_time = Instant::now();

    // Fails with AlreadyExists if the destination is present
    fs::create_dir(&req.dest)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(req.dest.join(INPUT_FILE_NAME))?;
    let mut script = ScriptWriter::new(BufWriter::new(file));

    let count_file = req.dest.join(COUNT_FILE_NAME);
    let sim_time = req.time_per_iteration / req.dumps_per_iteration as f64;

    script.emit(&Instruction::Init {
        size: &req.lattice_size,
        alpha: req.alpha,
        beta: req.beta,
    })?;

    for i in 0..req.iterations {
        let img_dir = req.dest.join(format!("{}{}", IMG_DIR_PREFIX, i));
        fs::create_dir(&img_dir)?;

        for _ in 0..req.dumps_per_iteration {
            script.emit(&Instruction::Sim(sim_time))?;
            script.emit(&Instruction::DumpCount(&count_file))?;
        }
        script.emit(&Instruction::DumpImg(&img_dir))?;
        script.emit(&Instruction::DumpCsv(
            &req.dest.join(format!("{}{}.csv", IMG_DIR_PREFIX, i)),
        ))?;
    }

    script.emit(&Instruction::DumpSteps(&req.dest.join(STEPS_FILE_NAME)))?;
    script.emit(&Instruction::Exit)?;
    let lines = script.finish()?;

    let elapsed = start_time.elapsed().as_secs_f64() * 1000.0;
    println!(
        "Generated {} ({} lines, {} iterations) in {:.2} ms",
        req.dest.join(INPUT_FILE_NAME).display(),
        lines,
        req.iterations,
        elapsed
    );

    Ok(())
}
