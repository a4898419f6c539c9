use serde::{Deserialize, Serialize};

use crate::{TradingDate, ValidationError};

/// One trading day of open/high/low/close/volume data. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrice {
    pub date: TradingDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyPrice {
    pub fn new(
        date: TradingDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Non-empty daily price series, newest trading day first.
///
/// The newest-first ordering is a hard contract: index 0 is the latest day
/// and index 1 the one before it, which the statistics and alert rules rely
/// on. The constructor restores descending date order if the source handed
/// rows over in any other arrangement, and rejects duplicate dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    rows: Vec<DailyPrice>,
}

impl PriceSeries {
    pub fn new(mut rows: Vec<DailyPrice>) -> Result<Self, ValidationError> {
        if rows.is_empty() {
            return Err(ValidationError::EmptySeries);
        }

        if !rows.windows(2).all(|pair| pair[0].date >= pair[1].date) {
            rows.sort_by(|a, b| b.date.cmp(&a.date));
        }

        if let Some(pair) = rows.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(ValidationError::DuplicateDate {
                date: pair[0].date.format_iso(),
            });
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[DailyPrice] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent trading day (index 0).
    pub fn latest(&self) -> &DailyPrice {
        &self.rows[0]
    }

    /// Second most recent trading day (index 1), when present.
    pub fn prior(&self) -> Option<&DailyPrice> {
        self.rows.get(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyPrice> {
        self.rows.iter()
    }
}

/// Descriptive statistics derived from a price series. Recomputed every run,
/// never persisted independently of the CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub latest_close: f64,
    pub latest_day: TradingDate,
    pub prior_close: f64,
    pub prior_day: TradingDate,
    pub recent_high: f64,
    pub recent_low: f64,
    pub last_refreshed: TradingDate,
}

/// Buy/hold verdict from the threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationAction {
    Buy,
    Hold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub reason: String,
}

/// Which side of the day-over-day threshold was crossed, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertDirection {
    Increase,
    Decrease,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertDecision {
    pub should_notify: bool,
    pub direction: AlertDirection,
    pub percent_change: f64,
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, close: f64) -> DailyPrice {
        DailyPrice::new(
            TradingDate::parse(date).expect("date"),
            close,
            close + 1.0,
            close - 1.0,
            close,
            10_000,
        )
        .expect("valid row")
    }

    #[test]
    fn rejects_non_finite_price() {
        let err = DailyPrice::new(
            TradingDate::parse("2018-06-08").expect("date"),
            f64::NAN,
            1.0,
            1.0,
            1.0,
            0,
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { field: "open" }));
    }

    #[test]
    fn rejects_empty_series() {
        let err = PriceSeries::new(Vec::new()).expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySeries));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let rows = vec![row("2018-06-08", 101.0), row("2018-06-08", 100.0)];
        let err = PriceSeries::new(rows).expect_err("must fail");
        assert!(matches!(err, ValidationError::DuplicateDate { .. }));
    }

    #[test]
    fn restores_newest_first_ordering() {
        let rows = vec![
            row("2018-06-01", 100.0),
            row("2018-06-08", 103.0),
            row("2018-06-07", 102.0),
        ];
        let series = PriceSeries::new(rows).expect("series");
        assert_eq!(series.latest().date.format_iso(), "2018-06-08");
        assert_eq!(
            series.prior().expect("prior row").date.format_iso(),
            "2018-06-07"
        );
    }

    #[test]
    fn preserves_already_descending_order() {
        let rows = vec![
            row("2018-06-08", 103.0),
            row("2018-06-07", 102.0),
            row("2018-06-06", 101.0),
        ];
        let series = PriceSeries::new(rows.clone()).expect("series");
        assert_eq!(series.rows(), rows.as_slice());
    }
}
