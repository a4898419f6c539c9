//! Transformation of the raw daily time-series payload into a typed series.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AdvisorError;
use crate::{DailyPrice, PriceSeries, TradingDate};

/// Labeled numeric-string fields under each date key of the
/// `"Time Series (Daily)"` mapping.
#[derive(Debug, Deserialize)]
struct RawDailyFields {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

/// Convert the raw date-keyed mapping into a [`PriceSeries`].
///
/// Every key produces exactly one row; nothing is dropped or deduplicated.
/// Input iteration order is kept as the row order (the upstream convention
/// is newest first), and the series constructor re-establishes descending
/// date order should the feed ever arrive shuffled.
pub fn transform(raw: &Map<String, Value>) -> Result<PriceSeries, AdvisorError> {
    let mut rows = Vec::with_capacity(raw.len());

    for (date_key, fields) in raw {
        let date = TradingDate::parse(date_key).map_err(|error| {
            AdvisorError::schema(format!("invalid date key '{date_key}': {error}"))
        })?;

        let fields: RawDailyFields = serde_json::from_value(fields.clone())
            .map_err(|error| AdvisorError::schema(format!("{date_key}: {error}")))?;

        let row = DailyPrice::new(
            date,
            parse_price(date_key, "1. open", &fields.open)?,
            parse_price(date_key, "2. high", &fields.high)?,
            parse_price(date_key, "3. low", &fields.low)?,
            parse_price(date_key, "4. close", &fields.close)?,
            parse_volume(date_key, &fields.volume)?,
        )
        .map_err(|error| AdvisorError::schema(format!("{date_key}: {error}")))?;

        rows.push(row);
    }

    PriceSeries::new(rows).map_err(AdvisorError::from)
}

fn parse_price(date: &str, field: &'static str, value: &str) -> Result<f64, AdvisorError> {
    value.trim().parse::<f64>().map_err(|_| {
        AdvisorError::schema(format!("{date}: field '{field}' is not a decimal: '{value}'"))
    })
}

fn parse_volume(date: &str, value: &str) -> Result<u64, AdvisorError> {
    value.trim().parse::<u64>().map_err(|_| {
        AdvisorError::schema(format!(
            "{date}: field '5. volume' is not a non-negative integer: '{value}'"
        ))
    })
}
