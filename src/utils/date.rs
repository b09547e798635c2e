use crate::error::{ExportError, Result};
use crate::utils::constants::SERVICE_UTC_OFFSET_HOURS;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Observation date the station search is filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl TargetDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or_else(|| ExportError::InvalidDate(format!("{}-{}-{}", year, month, day)))
    }

    /// The day before `now`, as seen in the service's time zone.
    ///
    /// The service only publishes a day once it has completed in PST.
    pub fn yesterday_at(now: DateTime<Utc>) -> Self {
        let local = now + Duration::hours(SERVICE_UTC_OFFSET_HOURS as i64);
        Self::from((local - Duration::days(1)).date_naive())
    }

    pub fn yesterday() -> Self {
        Self::yesterday_at(Utc::now())
    }
}

impl From<NaiveDate> for TargetDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for TargetDate {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|e| ExportError::InvalidDate(format!("'{}': {}", s, e)))
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date() {
        let date: TargetDate = "2021-03-07".parse().unwrap();
        assert_eq!(date, TargetDate { year: 2021, month: 3, day: 7 });
        assert_eq!(date.to_string(), "2021-03-07");
    }

    #[test]
    fn test_invalid_date() {
        assert!("2021-02-30".parse::<TargetDate>().is_err());
        assert!("not a date".parse::<TargetDate>().is_err());
        assert!(TargetDate::new(2021, 13, 1).is_err());
    }

    #[test]
    fn test_yesterday_uses_service_time_zone() {
        // 05:00 UTC on the 10th is still the 9th in PST, so yesterday is the 8th
        let now = Utc.with_ymd_and_hms(2023, 1, 10, 5, 0, 0).unwrap();
        assert_eq!(TargetDate::yesterday_at(now), TargetDate::new(2023, 1, 8).unwrap());

        let now = Utc.with_ymd_and_hms(2023, 1, 10, 9, 0, 0).unwrap();
        assert_eq!(TargetDate::yesterday_at(now), TargetDate::new(2023, 1, 9).unwrap());
    }

    #[test]
    fn test_yesterday_crosses_year_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(TargetDate::yesterday_at(now), TargetDate::new(2023, 12, 31).unwrap());
    }
}
