use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::rates::RateError;

/// Defines different styles for text elements.
pub enum StyleType {
    Banner,
    Success,
    Error,
    Prompt,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Banner => style(text).green().bold(),
        StyleType::Success => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Prompt => style(text).bold(),
    };
    styled.to_string()
}

/// Prints the startup banner framed by blank lines.
pub fn print_banner() {
    println!(
        "\n{}\n",
        style_text(" Currency Converter CLI ", StyleType::Banner)
    );
}

/// Prints a single error line in red.
pub fn print_error(text: &str) {
    println!("{}", style_text(text, StyleType::Error));
}

/// Maps a rate fetch failure to the lines shown to the user. HTTP
/// failures get a second line carrying the status code.
pub fn rate_error_lines(err: &RateError) -> Vec<String> {
    match err {
        RateError::Api { kind } => vec![format!("Error from API: {kind}")],
        RateError::UnknownCurrency { .. } => vec!["Invalid currency code. Try again.".to_string()],
        RateError::Http { status, body } => vec![
            format!("Error fetching exchange rate: Response data: {body}"),
            format!("Error status: {status}"),
        ],
        err => vec![format!("Error fetching exchange rate: {err}")],
    }
}

/// Prints a rate fetch failure in red.
pub fn print_rate_error(err: &RateError) {
    for line in rate_error_lines(err) {
        print_error(&line);
    }
}

/// Creates a spinner shown while a network request is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
