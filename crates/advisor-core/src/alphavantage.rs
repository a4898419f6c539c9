//! Alpha Vantage daily time-series client.
//!
//! Wraps the `TIME_SERIES_DAILY` endpoint behind the [`HttpClient`]
//! transport. An upstream rejection arrives as an `"Error Message"` key in
//! an otherwise 200 response; that payload is never handed to the
//! transformer.

use std::sync::Arc;

use serde_json::Value;

use crate::error::AdvisorError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::transform::transform;
use crate::{PriceSeries, Symbol, TradingDate};

pub const DAILY_ENDPOINT: &str = "https://www.alphavantage.co/query";
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Parsed daily response: series rows plus the metadata refresh stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeriesResponse {
    pub last_refreshed: TradingDate,
    pub series: PriceSeries,
}

/// Client for the Alpha Vantage daily series endpoint.
#[derive(Clone)]
pub struct AlphaVantageClient {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
        }
    }

    /// Read the API key from `ALPHAVANTAGE_API_KEY`, falling back to the
    /// provider's public demo key.
    pub fn from_env(http_client: Arc<dyn HttpClient>) -> Self {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_else(|_| String::from("demo"));
        Self::new(http_client, api_key)
    }

    pub async fn daily_series(&self, symbol: &Symbol) -> Result<DailySeriesResponse, AdvisorError> {
        let endpoint = format!(
            "{DAILY_ENDPOINT}?function=TIME_SERIES_DAILY&symbol={}&apikey={}",
            symbol.as_str(),
            self.api_key
        );

        let request = HttpRequest::get(&endpoint).with_timeout_ms(5_000);
        let response = self.http_client.execute(request).await.map_err(|error| {
            AdvisorError::upstream(format!("alphavantage transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(AdvisorError::upstream(format!(
                "alphavantage returned status {}",
                response.status
            )));
        }

        parse_daily_payload(&response.body)
    }
}

/// Parse a raw daily payload body into metadata plus a typed series.
pub fn parse_daily_payload(body: &str) -> Result<DailySeriesResponse, AdvisorError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|error| AdvisorError::upstream(format!("malformed alphavantage payload: {error}")))?;

    let object = payload
        .as_object()
        .ok_or_else(|| AdvisorError::upstream("alphavantage payload is not a JSON object"))?;

    if let Some(message) = object.get("Error Message") {
        return Err(AdvisorError::upstream(format!(
            "alphavantage rejected the request: {}",
            message.as_str().unwrap_or("unknown error")
        )));
    }

    let last_refreshed_raw = object
        .get("Meta Data")
        .and_then(Value::as_object)
        .and_then(|meta| meta.get("3. Last Refreshed"))
        .and_then(Value::as_str)
        .ok_or_else(|| AdvisorError::schema("missing 'Meta Data'.'3. Last Refreshed'"))?;
    let last_refreshed = TradingDate::parse(last_refreshed_raw)
        .map_err(|error| AdvisorError::schema(format!("last refreshed: {error}")))?;

    let series_map = object
        .get("Time Series (Daily)")
        .and_then(Value::as_object)
        .ok_or_else(|| AdvisorError::schema("missing 'Time Series (Daily)' mapping"))?;

    let series = transform(series_map)?;

    Ok(DailySeriesResponse {
        last_refreshed,
        series,
    })
}

/// Canned six-day daily payload in upstream shape, newest first. Backs
/// `--offline` mode and deterministic tests.
pub const SAMPLE_DAILY_PAYLOAD: &str = r#"{
    "Meta Data": {
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "MSFT",
        "3. Last Refreshed": "2018-06-08",
        "4. Output Size": "Compact",
        "5. Time Zone": "US/Eastern"
    },
    "Time Series (Daily)": {
        "2018-06-08": {
            "1. open": "101.0924",
            "2. high": "101.9500",
            "3. low": "100.5400",
            "4. close": "101.6300",
            "5. volume": "22165128"
        },
        "2018-06-07": {
            "1. open": "102.6500",
            "2. high": "102.6900",
            "3. low": "100.3800",
            "4. close": "100.8800",
            "5. volume": "28232197"
        },
        "2018-06-06": {
            "1. open": "102.4800",
            "2. high": "102.6000",
            "3. low": "101.9000",
            "4. close": "102.4900",
            "5. volume": "21122917"
        },
        "2018-06-05": {
            "1. open": "102.0000",
            "2. high": "102.3300",
            "3. low": "101.5300",
            "4. close": "102.1900",
            "5. volume": "23514402"
        },
        "2018-06-04": {
            "1. open": "101.2600",
            "2. high": "101.8600",
            "3. low": "100.8510",
            "4. close": "101.6700",
            "5. volume": "27281623"
        },
        "2018-06-01": {
            "1. open": "99.2798",
            "2. high": "100.8600",
            "3. low": "99.1700",
            "4. close": "100.7900",
            "5. volume": "28655624"
        }
    }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_sample_payload() {
        let response = parse_daily_payload(SAMPLE_DAILY_PAYLOAD).expect("payload parses");
        assert_eq!(response.last_refreshed.format_iso(), "2018-06-08");
        assert_eq!(response.series.len(), 6);
        assert_eq!(response.series.latest().close, 101.63);
    }

    #[test]
    fn error_message_payload_is_an_upstream_error() {
        let body = r#"{"Error Message": "Invalid API call. Please retry."}"#;
        let err = parse_daily_payload(body).expect_err("must fail");
        assert!(matches!(err, AdvisorError::Upstream { .. }));
    }

    #[test]
    fn malformed_json_is_an_upstream_error() {
        let err = parse_daily_payload("not json at all").expect_err("must fail");
        assert!(matches!(err, AdvisorError::Upstream { .. }));
    }

    #[test]
    fn missing_metadata_is_a_schema_error() {
        let body = r#"{"Time Series (Daily)": {}}"#;
        let err = parse_daily_payload(body).expect_err("must fail");
        assert!(matches!(err, AdvisorError::Schema { .. }));
    }

    #[test]
    fn missing_series_is_a_schema_error() {
        let body = r#"{"Meta Data": {"3. Last Refreshed": "2018-06-08"}}"#;
        let err = parse_daily_payload(body).expect_err("must fail");
        assert!(matches!(err, AdvisorError::Schema { .. }));
    }
}
