//! Command-script vocabulary and rendering.
//!
//! A script is a flat sequence of instructions, one per line:
//!
//! ```text
//! init <size> <a0> <a1> <a2> <b0> <b1> <b2>
//! sim <float>
//! dump count <path>
//! dump img <path>
//! dump csv <path>
//! dump steps <path>
//! exit
//! ```
//!
//! Numeric tokens render the way Python's `str()` renders floats, so
//! regenerated scripts and grid directory names stay byte-compatible with
//! the existing data sets.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Format a coefficient or time value matching Python's `str(float)`:
/// shortest round-trip decimal, integral values keeping one fractional digit.
/// `0.0` → `"0.0"`, `-0.5` → `"-0.5"`, `1.0/3.0` → `"0.3333333333333333"`.
pub fn format_float(v: f64) -> String {
    if v.is_finite() && v == v.trunc() {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// One line of the command script.
#[derive(Clone, Copy, Debug)]
pub enum Instruction<'a> {
    /// Lattice size plus the six payoff coefficients, in fixed order.
    Init {
        size: &'a str,
        alpha: [f64; 3],
        beta: [f64; 3],
    },
    /// Advance simulated time.
    Sim(f64),
    /// Append a population count row to the given CSV.
    DumpCount(&'a Path),
    /// Write a lattice image into the given directory.
    DumpImg(&'a Path),
    /// Write the full lattice state as CSV.
    DumpCsv(&'a Path),
    /// Write the per-step timing log.
    DumpSteps(&'a Path),
    /// End of script.
    Exit,
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Init { size, alpha, beta } => write!(
                f,
                "init {} {} {} {} {} {} {}",
                size,
                format_float(alpha[0]),
                format_float(alpha[1]),
                format_float(alpha[2]),
                format_float(beta[0]),
                format_float(beta[1]),
                format_float(beta[2]),
            ),
            Instruction::Sim(t) => write!(f, "sim {}", format_float(*t)),
            Instruction::DumpCount(path) => write!(f, "dump count {}", path.display()),
            Instruction::DumpImg(path) => write!(f, "dump img {}", path.display()),
            Instruction::DumpCsv(path) => write!(f, "dump csv {}", path.display()),
            Instruction::DumpSteps(path) => write!(f, "dump steps {}", path.display()),
            Instruction::Exit => write!(f, "exit"),
        }
    }
}

/// Line-at-a-time script writer. Tracks the line count for progress output.
pub struct ScriptWriter<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Append one instruction, newline-terminated.
    pub fn emit(&mut self, instruction: &Instruction<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", instruction)?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and return the number of lines written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.out.flush()?;
        Ok(self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_float_integral_keeps_fraction() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(45.0), "45.0");
        assert_eq!(format_float(-3.0), "-3.0");
    }

    #[test]
    fn test_format_float_shortest_round_trip() {
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(0.0025), "0.0025");
        assert_eq!(format_float(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_init_line_token_order() {
        let line = Instruction::Init {
            size: "45",
            alpha: [-0.1, -0.5, 0.0],
            beta: [0.6, 0.2, 0.2],
        }
        .to_string();
        assert_eq!(line, "init 45 -0.1 -0.5 0.0 0.6 0.2 0.2");
    }

    #[test]
    fn test_dump_lines() {
        let p = PathBuf::from("data/run/count.csv");
        assert_eq!(
            Instruction::DumpCount(&p).to_string(),
            "dump count data/run/count.csv"
        );
        assert_eq!(Instruction::Sim(0.25).to_string(), "sim 0.25");
        assert_eq!(Instruction::Exit.to_string(), "exit");
    }

    #[test]
    fn test_writer_counts_lines() {
        let mut buf = Vec::new();
        {
            let mut w = ScriptWriter::new(&mut buf);
            w.emit(&Instruction::Sim(1.0)).unwrap();
            w.emit(&Instruction::Exit).unwrap();
            assert_eq!(w.finish().unwrap(), 2);
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "sim 1.0\nexit\n");
    }
}
