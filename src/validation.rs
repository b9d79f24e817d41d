//! Input validation utilities
//!
//! Pure validators for operator input, plus the interactive prompt
//! loops built on them. Prompts are generic over `BufRead`/`Write` so
//! they can be driven from tests.

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::error::{InventoryError, Result};

/// Why a raw numeric input was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// Input did not parse as a finite real number
    #[error("Invalid input. Please enter a number.")]
    NotANumber,
    /// Input parsed but was zero or negative
    #[error("Value must be positive.")]
    NotPositive,
}

/// Parse a strictly positive real number from raw text
///
/// Rejects input that does not parse as a finite number, or that is
/// less than or equal to zero. Surrounding whitespace is ignored.
pub fn parse_positive_number(raw: &str) -> std::result::Result<f64, NumberError> {
    let value: f64 = raw.trim().parse().map_err(|_| NumberError::NotANumber)?;

    if !value.is_finite() {
        return Err(NumberError::NotANumber);
    }
    if value <= 0.0 {
        return Err(NumberError::NotPositive);
    }

    Ok(value)
}

/// Validate an item name: must not be empty after trimming
pub fn validate_item_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InventoryError::ValidationError(
            "item name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Prompt for a free-form line of text
///
/// Returns the line with surrounding whitespace trimmed; empty input
/// is allowed. End of input is reported as an IO error.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InventoryError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }

    Ok(line.trim().to_string())
}

/// Prompt for an item name, re-prompting while the input is empty
pub fn prompt_nonempty_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match validate_item_name(&line) {
            Ok(()) => return Ok(line),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

/// Prompt for a strictly positive number, re-prompting until one is
/// given
///
/// Loops without an attempt limit; only an IO failure (including end
/// of input) terminates it early.
pub fn prompt_positive_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match parse_positive_number(&line) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_positive_number_valid() {
        assert_eq!(parse_positive_number("10"), Ok(10.0));
        assert_eq!(parse_positive_number("2.5"), Ok(2.5));
        assert_eq!(parse_positive_number(" 3 "), Ok(3.0));
        assert_eq!(parse_positive_number("0.0001"), Ok(0.0001));
    }

    #[test]
    fn test_parse_positive_number_not_a_number() {
        assert_eq!(parse_positive_number("abc"), Err(NumberError::NotANumber));
        assert_eq!(parse_positive_number(""), Err(NumberError::NotANumber));
        assert_eq!(parse_positive_number("10abc"), Err(NumberError::NotANumber));
        assert_eq!(parse_positive_number("1,5"), Err(NumberError::NotANumber));
    }

    #[test]
    fn test_parse_positive_number_rejects_non_finite() {
        assert_eq!(parse_positive_number("inf"), Err(NumberError::NotANumber));
        assert_eq!(parse_positive_number("-inf"), Err(NumberError::NotANumber));
        assert_eq!(parse_positive_number("nan"), Err(NumberError::NotANumber));
    }

    #[test]
    fn test_parse_positive_number_rejects_non_positive() {
        assert_eq!(parse_positive_number("0"), Err(NumberError::NotPositive));
        assert_eq!(parse_positive_number("-1"), Err(NumberError::NotPositive));
        assert_eq!(parse_positive_number("-0.0"), Err(NumberError::NotPositive));
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Widget").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_prompt_line_trims() {
        let mut input = Cursor::new("  Widget  \n");
        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "Enter item name: ").unwrap();
        assert_eq!(line, "Widget");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter item name: ");
    }

    #[test]
    fn test_prompt_line_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let result = prompt_line(&mut input, &mut output, "Enter item name: ");
        assert!(matches!(result, Err(InventoryError::IoError(_))));
    }

    #[test]
    fn test_prompt_nonempty_line_reprompts() {
        let mut input = Cursor::new("\n   \nWidget\n");
        let mut output = Vec::new();
        let line = prompt_nonempty_line(&mut input, &mut output, "Enter item name: ").unwrap();
        assert_eq!(line, "Widget");

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter item name: ").count(), 3);
    }

    #[test]
    fn test_prompt_positive_number_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n-5\n0\n2.5\n");
        let mut output = Vec::new();
        let value = prompt_positive_number(&mut input, &mut output, "Enter quantity: ").unwrap();
        assert_eq!(value, 2.5);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Invalid input. Please enter a number."));
        assert!(text.contains("Value must be positive."));
        assert_eq!(text.matches("Enter quantity: ").count(), 4);
    }

    #[test]
    fn test_prompt_positive_number_first_try() {
        let mut input = Cursor::new("7\n");
        let mut output = Vec::new();
        let value = prompt_positive_number(&mut input, &mut output, "Enter price: ").unwrap();
        assert_eq!(value, 7.0);
        assert_eq!(String::from_utf8(output).unwrap(), "Enter price: ");
    }

    #[test]
    fn test_prompt_positive_number_eof_mid_loop() {
        let mut input = Cursor::new("abc\n");
        let mut output = Vec::new();
        let result = prompt_positive_number(&mut input, &mut output, "Enter quantity: ");
        assert!(matches!(result, Err(InventoryError::IoError(_))));
    }
}
