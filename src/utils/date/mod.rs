// Calendar-day utilities
// All schedule math works on chrono::NaiveDate: whole calendar days with no
// time-of-day or offset component, so durations are DST-safe by construction.

use chrono::{DateTime, Datelike, Duration, NaiveDate};

/// Parse a collaborator-supplied date string into a calendar day.
///
/// Accepts plain `YYYY-MM-DD` dates as well as full RFC 3339 timestamps,
/// whose time-of-day and offset are stripped (the date is taken as written,
/// not converted to another zone). Unparsable input degrades to `None` with
/// a data-quality warning; it never fails hard.
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(day);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.date_naive());
    }

    log::warn!("Unparsable date '{}' treated as missing", trimmed);
    None
}

/// Whole days from `start` to `end` in UTC calendar-day units.
/// Negative when `end` precedes `start`.
pub fn whole_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Offset a calendar day by a signed number of whole days.
pub fn add_days(day: NaiveDate, days: i64) -> NaiveDate {
    day + Duration::days(days)
}

/// First day of the month containing `day`.
pub fn start_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Number of days in the given month, via the distance to the successor
/// month's first day.
pub fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = NaiveDate::from_ymd_opt(
        if month == 12 { year + 1 } else { year },
        if month == 12 { 1 } else { month + 1 },
        1,
    );
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days(),
        _ => 30,
    }
}

/// Last day of the month containing `day`.
pub fn end_of_month(day: NaiveDate) -> NaiveDate {
    let first = start_of_month(day);
    add_days(first, days_in_month(first.year(), first.month()) - 1)
}

/// Serde adapter for optional calendar-day fields on the task wire format.
/// Serializes as `YYYY-MM-DD`; deserialization is lenient via
/// [`parse_calendar_day`].
pub mod lenient_day {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(day: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match day {
            Some(day) => serializer.serialize_str(&day.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_calendar_day))
    }
}
