use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// Default seating slot for a given day: lunch on Sunday, late dinner at the
/// weekend, early dinner otherwise.
pub fn suggested_time(date: NaiveDate) -> NaiveTime {
    let hour = match date.weekday() {
        Weekday::Sun => 12,
        Weekday::Fri | Weekday::Sat => 19,
        _ => 18,
    };
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub fn is_large_party(party_size: u32, threshold: u32) -> bool {
    party_size >= threshold
}
