use crate::domain::model::{FeedbackMessage, FieldId, ReservationInput, SubmissionOutcome};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Narrow capability surface over the page that hosts the reservation form.
///
/// Methods take `&self`; implementations own their interior state the way a
/// page owns its elements.
pub trait FormView: Send + Sync {
    fn field(&self, field: FieldId) -> String;
    fn set_field(&self, field: FieldId, value: &str);
    fn set_error(&self, field: FieldId, flagged: bool);
    fn clear_errors(&self);
    fn set_placeholder(&self, field: FieldId, text: &str);
    fn submit_label(&self) -> String;
    fn set_busy(&self, busy: bool, label: &str);
    fn show_message(&self, message: &FeedbackMessage);
    fn clear_message(&self);
    /// Clear every field back to its empty state.
    fn reset(&self);
}

#[async_trait]
pub trait SubmissionPort: Send + Sync {
    async fn submit(&self, reservation: &ReservationInput) -> SubmissionOutcome;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
