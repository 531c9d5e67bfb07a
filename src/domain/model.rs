use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifiers of the reservation form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Guests,
    Date,
    Time,
    Message,
}

impl FieldId {
    /// Fields that take part in validation, in the order error flags are applied.
    pub const VALIDATED: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Guests,
        FieldId::Date,
        FieldId::Time,
    ];

    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Guests,
        FieldId::Date,
        FieldId::Time,
        FieldId::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Guests => "guests",
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Message => "message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw field values as read from the form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl FormSnapshot {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Guests => &self.guests,
            FieldId::Date => &self.date,
            FieldId::Time => &self.time,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Phone => self.phone = value,
            FieldId::Guests => self.guests = value,
            FieldId::Date => self.date = value,
            FieldId::Time => self.time = value,
            FieldId::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub party_size: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    Malformed,
    NotOffered,
    InPast,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: BTreeMap<FieldId, FieldIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn record(&mut self, field: FieldId, issue: FieldIssue) {
        self.field_errors.insert(field, issue);
    }

    pub fn issue(&self, field: FieldId) -> Option<FieldIssue> {
        self.field_errors.get(&field).copied()
    }

    pub fn failed_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.field_errors.keys().copied()
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }

    /// True when the only problem is a date that already passed.
    pub fn only_past_date(&self) -> bool {
        self.error_count() == 1 && self.issue(FieldId::Date) == Some(FieldIssue::InPast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The single feedback message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// What happened to one call of the submit handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission was already in flight.
    Ignored,
    Rejected(ValidationResult),
    Settled(SubmissionOutcome),
}
