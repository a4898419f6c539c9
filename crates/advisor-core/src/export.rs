//! CSV persistence of a daily price series.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::AdvisorError;
use crate::PriceSeries;

/// Fixed column order of the exported file. Downstream consumers key off
/// these names, so the header must stay stable.
pub const CSV_HEADERS: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

/// Write the series to `path`, one data row per trading day in series order.
///
/// The target file is fully replaced on every run, never appended to.
/// Missing parent directories are created first. The whole document is
/// serialized in memory and written with a single `fs::write`, so a failed
/// run leaves any previous file content untouched. Numeric fields are plain
/// decimal text; currency formatting is a display concern and never lands
/// in the file.
pub fn write_to_csv(series: &PriceSeries, path: &Path) -> Result<(), AdvisorError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for row in series.rows() {
        writer.write_record([
            row.date.format_iso(),
            row.open.to_string(),
            row.high.to_string(),
            row.low.to_string(),
            row.close.to_string(),
            row.volume.to_string(),
        ])?;
    }

    writer.flush()?;
    let buffer = writer
        .into_inner()
        .map_err(|error| AdvisorError::Io(io::Error::other(error.to_string())))?;

    fs::write(path, buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphavantage::SAMPLE_DAILY_PAYLOAD;
    use crate::transform::transform;
    use crate::DailyPrice;
    use serde_json::Value;

    fn sample_series() -> PriceSeries {
        let payload: Value = serde_json::from_str(SAMPLE_DAILY_PAYLOAD).expect("sample parses");
        let raw = payload["Time Series (Daily)"]
            .as_object()
            .expect("series mapping");
        transform(raw).expect("transform succeeds")
    }

    #[test]
    fn writes_header_plus_one_row_per_day() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prices.csv");

        write_to_csv(&sample_series(), &path).expect("write succeeds");

        let content = fs::read_to_string(&path).expect("file readable");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "timestamp,open,high,low,close,volume");
        assert!(lines[1].starts_with("2018-06-08,"));
        assert!(lines[6].starts_with("2018-06-01,"));
    }

    #[test]
    fn round_trips_field_values_and_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prices.csv");
        let series = sample_series();

        write_to_csv(&series, &path).expect("write succeeds");

        let mut reader = csv::Reader::from_path(&path).expect("file readable");
        let mut read_back = Vec::new();
        for record in reader.records() {
            let record = record.expect("record parses");
            let row = DailyPrice::new(
                crate::TradingDate::parse(&record[0]).expect("date"),
                record[1].parse().expect("open"),
                record[2].parse().expect("high"),
                record[3].parse().expect("low"),
                record[4].parse().expect("close"),
                record[5].parse().expect("volume"),
            )
            .expect("valid row");
            read_back.push(row);
        }

        assert_eq!(read_back.as_slice(), series.rows());
    }

    #[test]
    fn overwrites_instead_of_appending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prices.csv");
        let series = sample_series();

        write_to_csv(&series, &path).expect("first write");
        let first = fs::read(&path).expect("file readable");

        write_to_csv(&series, &path).expect("second write");
        let second = fs::read(&path).expect("file readable");

        assert_eq!(first, second);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("deeper").join("prices.csv");

        write_to_csv(&sample_series(), &path).expect("write succeeds");
        assert!(path.is_file());
    }
}
