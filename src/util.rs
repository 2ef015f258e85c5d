use crate::model::WINDOW_DAYS;
use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Utc, Weekday};

/// Shift that places today's day index in the weekday column of a
/// Sunday-first calendar week, leaving the not-yet-elapsed days of the
/// current week as padding.
pub fn alignment_offset(now: DateTime<Utc>) -> usize {
    match now.weekday() {
        Weekday::Sun => 7,
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
    }
}

pub fn start_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&t.date_naive().and_time(NaiveTime::MIN))
}

/// Aligned histogram index for a commit made at `timestamp`, or `None` when
/// the commit falls outside the window. Anything on or after the start of the
/// current day counts as today, future-dated (clock-skewed) commits included.
pub fn day_index(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Option<usize> {
    let days_since = (now.date_naive() - timestamp.date_naive())
        .num_days()
        .max(0);
    if days_since > WINDOW_DAYS {
        return None;
    }
    Some(days_since as usize + alignment_offset(now))
}
