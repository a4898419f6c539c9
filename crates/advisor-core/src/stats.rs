//! Descriptive statistics over a daily price series.

use crate::error::AdvisorError;
use crate::{PriceSeries, Statistics, TradingDate};

/// Derive recent high/low and latest/prior close from a series.
///
/// Requires at least two rows, since the alert rule needs both the latest
/// and the prior close. The high/low extremes are taken over the entire
/// supplied series, not a trailing window. `last_refreshed` comes from the
/// response metadata, not from the series itself.
pub fn compute(
    series: &PriceSeries,
    last_refreshed: TradingDate,
) -> Result<Statistics, AdvisorError> {
    let rows = series.rows();
    if rows.len() < 2 {
        return Err(AdvisorError::InsufficientData { rows: rows.len() });
    }

    let latest = &rows[0];
    let prior = &rows[1];
    let recent_high = rows.iter().map(|row| row.high).fold(f64::MIN, f64::max);
    let recent_low = rows.iter().map(|row| row.low).fold(f64::MAX, f64::min);

    Ok(Statistics {
        latest_close: latest.close,
        latest_day: latest.date,
        prior_close: prior.close,
        prior_day: prior.date,
        recent_high,
        recent_low,
        last_refreshed,
    })
}
