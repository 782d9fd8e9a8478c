//! Input validation and prompting
//!
//! Everything typed by the user passes through here before it reaches the
//! store, so bad amounts are rejected without touching the ledger.

use std::io::{BufRead, Write};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, MoneyParseError};

/// Parse a user-entered amount. Zero is allowed; negatives, non-numbers and
/// amounts above [`Money::MAX`] are not.
pub fn parse_amount(text: &str) -> BudgetResult<Money> {
    let amount = Money::parse(text).map_err(|e| match e {
        MoneyParseError::OutOfRange(_) => BudgetError::amount_too_large(),
        _ => BudgetError::invalid_amount(),
    })?;
    if amount.is_negative() {
        return Err(BudgetError::invalid_amount());
    }
    Ok(amount)
}

/// Print `prompt` and read one line. `None` means end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> BudgetResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask a yes/no question; anything but `y`/`yes` counts as no
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> BudgetResult<bool> {
    let answer = prompt_line(input, output, &format!("{} [y/N] ", question))?;
    Ok(matches!(
        answer.as_deref().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_amount_accepts() {
        assert_eq!(parse_amount("1000").unwrap().cents(), 100000);
        assert_eq!(parse_amount("4.50").unwrap().cents(), 450);
        assert_eq!(parse_amount("$12.3").unwrap().cents(), 1230);
        assert_eq!(parse_amount("0").unwrap(), Money::zero());
        assert_eq!(parse_amount("+5").unwrap().cents(), 500);
    }

    #[test]
    fn test_parse_amount_rejects() {
        for bad in ["-5", "-0.01", "abc", "", "12,50", "1e3"] {
            let err = parse_amount(bad).unwrap_err();
            assert!(
                matches!(err, BudgetError::Validation(_)),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_amount_rejects_huge_amounts() {
        assert_eq!(parse_amount("10000000000000").unwrap(), Money::MAX);
        for huge in ["10000000000000.01", "90000000000000000", "99999999999999999999"] {
            let err = parse_amount(huge).unwrap_err();
            assert!(err.to_string().contains("Amount is too large"), "{}: {}", huge, err);
        }
    }

    #[test]
    fn test_prompt_line() {
        let mut input = Cursor::new("hello world\r\nnext\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Say: ").unwrap();
        assert_eq!(line.as_deref(), Some("hello world"));
        assert_eq!(String::from_utf8(output).unwrap(), "Say: ");
    }

    #[test]
    fn test_prompt_line_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut output, "> ").unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut output = Vec::new();
        for (answer, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("\n", false), ("", false)] {
            let mut input = Cursor::new(answer);
            assert_eq!(confirm(&mut input, &mut output, "Sure?").unwrap(), expected);
        }
    }
}
