use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Calendar date of a trading day, ISO 8601 `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDate(Date);

impl TradingDate {
    /// Parse an ISO date. A trailing time component is tolerated because
    /// upstream metadata sometimes reports `"2018-06-08 16:00:01"`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let date_part = input
            .trim()
            .split_whitespace()
            .next()
            .ok_or_else(|| ValidationError::InvalidDate {
                value: input.to_owned(),
            })?;

        Date::parse(date_part, ISO_DATE)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("TradingDate must be ISO formattable")
    }
}

impl Display for TradingDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradingDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradingDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_round_trips_iso_date() {
        let date = TradingDate::parse("2018-06-08").expect("date should parse");
        assert_eq!(date.format_iso(), "2018-06-08");
    }

    #[test]
    fn tolerates_trailing_time_component() {
        let date = TradingDate::parse("2018-06-08 16:00:01").expect("date should parse");
        assert_eq!(date.format_iso(), "2018-06-08");
    }

    #[test]
    fn rejects_non_iso_input() {
        let err = TradingDate::parse("06/08/2018").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn orders_by_calendar_day() {
        let earlier = TradingDate::parse("2018-06-01").expect("date");
        let later = TradingDate::parse("2018-06-08").expect("date");
        assert!(later > earlier);
    }
}
