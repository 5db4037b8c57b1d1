use std::io::Cursor;
use tracing::{error, info};

use fxconv::core::config::AppConfig;
use fxconv::providers::exchange_rate_api::ExchangeRateApiProvider;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const API_KEY: &str = "test-key";

    pub async fn mount_latest_rates(server: &MockServer, base: &str, mock_response: &str) {
        let url_path = format!("/{API_KEY}/latest/{base}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(server)
            .await;
    }

    pub async fn mount_status(server: &MockServer, base: &str, status: u16) {
        let url_path = format!("/{API_KEY}/latest/{base}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(server)
            .await;
    }
}

fn provider_for(server: &wiremock::MockServer) -> ExchangeRateApiProvider {
    let config = AppConfig::new(test_utils::API_KEY, &server.uri());
    ExchangeRateApiProvider::new(&config).expect("Failed to build provider")
}

const USD_RATES: &str = r#"{
    "result": "success",
    "time_last_update_unix": 1717200001,
    "conversion_rates": {
        "USD": 1,
        "EUR": 0.85,
        "GBP": 0.75
    }
}"#;

#[test_log::test(tokio::test)]
async fn test_full_conversion_flow_with_mock() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(&mock_server, "USD", USD_RATES).await;

    let provider = provider_for(&mock_server);
    let mut input = Cursor::new("usd\neur\n100\n");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_reprompts_on_invalid_input() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(&mock_server, "USD", USD_RATES).await;

    let provider = provider_for(&mock_server);
    // Wrong length, unsupported code and a negative amount, each
    // followed by a valid answer.
    let mut input = Cursor::new("us\nusd\nXYZ\nEUR\n-5\n100\n");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_with_non_usd_base() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(&mock_server, "USD", USD_RATES).await;
    test_utils::mount_latest_rates(
        &mock_server,
        "EUR",
        r#"{
            "result": "success",
            "conversion_rates": { "EUR": 1, "USD": 1.18, "GBP": 0.88 }
        }"#,
    )
    .await;

    let provider = provider_for(&mock_server);
    let mut input = Cursor::new("eur\nusd\n50\n");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_completes_when_rate_fetch_reports_api_error() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(&mock_server, "USD", USD_RATES).await;
    // The EUR-based quote fails even though EUR validated against the
    // USD-based currency list.
    test_utils::mount_latest_rates(
        &mock_server,
        "EUR",
        r#"{ "result": "error", "error": { "type": "quota-reached" } }"#,
    )
    .await;

    let provider = provider_for(&mock_server);
    let mut input = Cursor::new("eur\nusd\n50\n");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_completes_when_conversion_overflows() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(
        &mock_server,
        "USD",
        r#"{
            "result": "success",
            "conversion_rates": { "USD": 1, "JPY": 150 }
        }"#,
    )
    .await;

    let provider = provider_for(&mock_server);
    // Largest representable amount; the JPY product cannot fit.
    let mut input = Cursor::new("usd\njpy\n79228162514264337593543950335\n");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_aborts_cleanly_when_currency_list_fails() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(
        &mock_server,
        "USD",
        r#"{ "result": "error", "error": { "type": "invalid-key" } }"#,
    )
    .await;

    let provider = provider_for(&mock_server);
    // No input at all: the flow must abort before the first prompt
    // instead of looping on a set nothing can validate against.
    let mut input = Cursor::new("");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_aborts_cleanly_when_currency_list_is_empty() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(
        &mock_server,
        "USD",
        r#"{ "result": "success", "conversion_rates": {} }"#,
    )
    .await;

    let provider = provider_for(&mock_server);
    let mut input = Cursor::new("");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_aborts_cleanly_on_http_error() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_status(&mock_server, "USD", 503).await;

    let provider = provider_for(&mock_server);
    let mut input = Cursor::new("");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_ok(), "Flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_flow_errors_when_input_closes_mid_prompt() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_latest_rates(&mock_server, "USD", USD_RATES).await;

    let provider = provider_for(&mock_server);
    // The currency list loads, then stdin closes before an answer.
    let mut input = Cursor::new("");

    let result = fxconv::run(&provider, &mut input).await;
    assert!(result.is_err(), "Expected an input error, got Ok");
}

#[test_log::test(tokio::test)]
#[ignore = "requires EXCHANGE_RATE_API_KEY and network access"]
async fn test_real_exchange_rate_api() {
    use fxconv::core::rates::RateProvider;

    let config = AppConfig::from_env().expect("EXCHANGE_RATE_API_KEY must be set");
    let provider = ExchangeRateApiProvider::new(&config).expect("Failed to build provider");

    info!("Fetching USD -> EUR rate from exchangerate-api.com");
    let result = provider.fetch_rate("USD", "EUR").await;

    match result {
        Ok(rate) => {
            info!(%rate, "Received successful rate response");
            assert!(rate > rust_decimal::Decimal::ZERO, "Rate should be positive");
        }
        Err(e) => {
            error!("Rate API request failed: {e}\n{e:?}");
            panic!("Rate API request failed: {e}");
        }
    }
}
