pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::prompt::{amount_validator, currency_code_validator, prompt_until_valid};
use crate::cli::ui;
use crate::core::convert::{ConversionRequest, conversion_line, convert};
use crate::core::rates::RateProvider;
use anyhow::Result;
use std::io::BufRead;
use tracing::{debug, info};

/// Runs the interactive conversion flow against `provider`, reading user
/// answers from `input`.
///
/// The flow is linear: fetch the supported currency set, prompt for base
/// currency, target currency and amount, fetch the rate and print the
/// converted amount. Rate fetch and conversion failures are rendered in
/// red and the run still ends successfully; only I/O failures on `input`
/// bubble up as errors.
pub async fn run<P, R>(provider: &P, input: &mut R) -> Result<()>
where
    P: RateProvider,
    R: BufRead,
{
    info!("Currency converter starting...");

    ui::print_banner();

    let spinner = ui::new_spinner("Fetching supported currencies...");
    let currencies = provider.supported_currencies().await;
    spinner.finish_and_clear();

    let supported = match currencies {
        Ok(set) if !set.is_empty() => set,
        Ok(_) => {
            // No input can validate against an empty currency set.
            ui::print_error("Error fetching supported currencies: the API reported no currencies");
            return Ok(());
        }
        Err(err) => {
            ui::print_error(&format!("Error fetching supported currencies: {err}"));
            return Ok(());
        }
    };
    debug!(count = supported.len(), "loaded supported currencies");

    let from = prompt_until_valid(
        input,
        "Enter base currency (e.g., USD, EUR, GBP):",
        currency_code_validator(&supported),
    )?;
    let to = prompt_until_valid(
        input,
        "Enter target currency (e.g., USD, EUR, GBP):",
        currency_code_validator(&supported),
    )?;
    let amount = prompt_until_valid(input, "Enter amount to convert:", amount_validator)?;

    let request = ConversionRequest { from, to, amount };
    debug!(?request, "collected conversion request");

    let spinner = ui::new_spinner("Fetching exchange rate...");
    let rate = provider.fetch_rate(&request.base(), &request.target()).await;
    spinner.finish_and_clear();

    match rate {
        Ok(rate) => match convert(request.amount_value()?, rate) {
            Some(converted) => {
                println!(
                    "{}\n",
                    ui::style_text(&conversion_line(&request, converted), ui::StyleType::Success)
                );
            }
            None => ui::print_error("Error converting amount: result out of range"),
        },
        Err(err) => ui::print_rate_error(&err),
    }

    Ok(())
}
