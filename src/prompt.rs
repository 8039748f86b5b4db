//! Line-oriented stdin prompts for the interactive generator.
//!
//! Prompts print `<label> = ` and read one line. Malformed numeric input
//! fails immediately with an `InvalidInput` error; there is no re-prompting.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print `<label> = ` and read one trimmed line from stdin.
pub fn prompt_line(label: &str) -> io::Result<String> {
    print!("{} = ", label);
    io::stdout().flush()?;

    let mut buf = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut buf)?;
    if bytes_read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("stdin closed while reading '{}'", label),
        ));
    }
    Ok(buf.trim().to_string())
}

/// Prompt for a value and parse it.
pub fn prompt_parse<T>(label: &str) -> io::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    parse_field(label, &prompt_line(label)?)
}

/// Parse one field, wrapping failures as `InvalidInput` with the field name.
pub fn parse_field<T>(label: &str, raw: &str) -> io::Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid {} '{}': {}", label, raw, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_numeric() {
        assert_eq!(parse_field::<u32>("step count", "40").unwrap(), 40);
        assert_eq!(parse_field::<f64>("alpha[0]", "-0.1").unwrap(), -0.1);
    }

    #[test]
    fn test_parse_field_rejects_garbage() {
        let err = parse_field::<f64>("time per sim", "fast").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("time per sim"));
    }
}
