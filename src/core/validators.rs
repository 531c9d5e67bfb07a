use crate::domain::model::{FieldId, FieldIssue, FormSnapshot, ReservationInput, ValidationResult};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern compiles"));

pub type FieldCheck<T> = std::result::Result<T, FieldIssue>;

fn required(value: &str) -> FieldCheck<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldIssue::Missing)
    } else {
        Ok(trimmed)
    }
}

pub fn check_name(value: &str) -> FieldCheck<String> {
    required(value).map(str::to_string)
}

/// The shape check runs on the raw value, so surrounding whitespace is rejected.
pub fn check_email(value: &str) -> FieldCheck<String> {
    let trimmed = required(value)?;
    if !EMAIL_PATTERN.is_match(value) {
        return Err(FieldIssue::Malformed);
    }
    Ok(trimmed.to_string())
}

pub fn check_phone(value: &str) -> FieldCheck<String> {
    let trimmed = required(value)?;
    if !PHONE_PATTERN.is_match(value) {
        return Err(FieldIssue::Malformed);
    }
    Ok(trimmed.to_string())
}

pub fn check_party_size(value: &str, offered: &[u32]) -> FieldCheck<u32> {
    let size = required(value)?.parse::<u32>().map_err(|_| FieldIssue::Malformed)?;
    if size == 0 {
        return Err(FieldIssue::Malformed);
    }
    if !offered.is_empty() && !offered.contains(&size) {
        return Err(FieldIssue::NotOffered);
    }
    Ok(size)
}

/// Same-day reservations are allowed; only dates strictly before `today` fail.
pub fn check_date(value: &str, today: NaiveDate) -> FieldCheck<NaiveDate> {
    let date = NaiveDate::parse_from_str(required(value)?, "%Y-%m-%d")
        .map_err(|_| FieldIssue::Malformed)?;
    if date < today {
        return Err(FieldIssue::InPast);
    }
    Ok(date)
}

pub fn check_time(value: &str) -> FieldCheck<NaiveTime> {
    let raw = required(value)?;
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| FieldIssue::Malformed)
}

#[derive(Debug, Clone)]
pub struct ReservationValidator {
    party_sizes: Vec<u32>,
}

impl ReservationValidator {
    pub fn new(party_sizes: Vec<u32>) -> Self {
        Self { party_sizes }
    }

    pub fn validate(&self, snapshot: &FormSnapshot, today: NaiveDate) -> ValidationResult {
        match self.check(snapshot, today) {
            Ok(_) => ValidationResult::default(),
            Err(result) => result,
        }
    }

    /// Runs every field check and builds the reservation only when all pass.
    pub fn check(
        &self,
        snapshot: &FormSnapshot,
        today: NaiveDate,
    ) -> std::result::Result<ReservationInput, ValidationResult> {
        let mut result = ValidationResult::default();

        let name = note(&mut result, FieldId::Name, check_name(&snapshot.name));
        let email = note(&mut result, FieldId::Email, check_email(&snapshot.email));
        let phone = note(&mut result, FieldId::Phone, check_phone(&snapshot.phone));
        let party_size = note(
            &mut result,
            FieldId::Guests,
            check_party_size(&snapshot.guests, &self.party_sizes),
        );
        let date = note(&mut result, FieldId::Date, check_date(&snapshot.date, today));
        let time = note(&mut result, FieldId::Time, check_time(&snapshot.time));

        match (name, email, phone, party_size, date, time) {
            (Some(name), Some(email), Some(phone), Some(party_size), Some(date), Some(time)) => {
                let notes = snapshot.message.trim();
                Ok(ReservationInput {
                    name,
                    email,
                    phone,
                    party_size,
                    date,
                    time,
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                })
            }
            _ => Err(result),
        }
    }
}

fn note<T>(result: &mut ValidationResult, field: FieldId, check: FieldCheck<T>) -> Option<T> {
    match check {
        Ok(value) => Some(value),
        Err(issue) => {
            tracing::debug!("Field '{}' failed validation: {:?}", field, issue);
            result.record(field, issue);
            None
        }
    }
}
