//! Prompt-until-valid input loop and the pure validators it runs.

use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use super::ui::{StyleType, style_text};

/// Asks `message` and re-asks until `validate` accepts the trimmed
/// answer, printing the validator's message in red on each rejection.
///
/// The loop reads lines from any `BufRead`, so tests can drive it with an
/// in-memory cursor. An exhausted input stream is an error.
pub fn prompt_until_valid<R, V>(input: &mut R, message: &str, validate: V) -> io::Result<String>
where
    R: BufRead,
    V: Fn(&str) -> Result<(), String>,
{
    loop {
        print!("{} ", style_text(message, StyleType::Prompt));
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            ));
        }

        let answer = line.trim();
        match validate(answer) {
            Ok(()) => return Ok(answer.to_string()),
            Err(msg) => println!("{}", style_text(&msg, StyleType::Error)),
        }
    }
}

/// Validator for a currency code: exactly 3 letters whose uppercase form
/// is in the supported set.
pub fn currency_code_validator(
    supported: &BTreeSet<String>,
) -> impl Fn(&str) -> Result<(), String> {
    move |input: &str| {
        if input.chars().count() == 3 && supported.contains(&input.to_uppercase()) {
            Ok(())
        } else {
            Err("Please enter a valid 3-letter currency code.".to_string())
        }
    }
}

/// Validator for the amount: a decimal number strictly greater than zero.
pub fn amount_validator(input: &str) -> Result<(), String> {
    match input.parse::<Decimal>() {
        Ok(amount) if amount > Decimal::ZERO => Ok(()),
        _ => Err("Please enter a valid amount.".to_string()),
    }
}
