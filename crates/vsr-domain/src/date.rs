//! Calendar date-range parsing for `start_date` / `end_date` filters.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};

/// Calendar-date layout accepted by date filters.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Asia/Tokyo offset. JST has no daylight saving, so a fixed offset is exact.
const JST_OFFSET_SECS: i32 = 9 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeError {
    #[error("invalid start date")]
    InvalidStartDate,
    #[error("invalid end date")]
    InvalidEndDate,
    #[error("start date is after end date")]
    StartAfterEnd,
}

/// Inclusive date range: `start` at 00:00:00 JST, `end` at 23:59:59 JST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("JST offset is within ±24h")
}

fn at(date: NaiveDate, time: NaiveTime) -> Option<DateTime<FixedOffset>> {
    date.and_time(time).and_local_timezone(jst()).single()
}

impl DateRange {
    pub fn parse(start_date: &str, end_date: &str) -> Result<Self, DateRangeError> {
        let start = NaiveDate::parse_from_str(start_date, DATE_LAYOUT)
            .map_err(|_| DateRangeError::InvalidStartDate)?;
        let end = NaiveDate::parse_from_str(end_date, DATE_LAYOUT)
            .map_err(|_| DateRangeError::InvalidEndDate)?;

        let start = NaiveTime::from_hms_opt(0, 0, 0)
            .and_then(|t| at(start, t))
            .ok_or(DateRangeError::InvalidStartDate)?;
        let end = NaiveTime::from_hms_opt(23, 59, 59)
            .and_then(|t| at(end, t))
            .ok_or(DateRangeError::InvalidEndDate)?;

        if start > end {
            return Err(DateRangeError::StartAfterEnd);
        }
        Ok(Self { start, end })
    }

    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.with_timezone(&Utc)
    }

    pub fn end_utc(&self) -> DateTime<Utc> {
        self.end.with_timezone(&Utc)
    }
}
