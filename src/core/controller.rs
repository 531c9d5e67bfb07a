use crate::config::FormConfig;
use crate::core::feedback::FeedbackPresenter;
use crate::core::suggestions;
use crate::core::validators::{self, ReservationValidator};
use crate::domain::model::{
    FeedbackMessage, FieldId, FormSnapshot, SubmissionOutcome, SubmitAttempt, ValidationResult,
};
use crate::domain::ports::{Clock, FormView, SubmissionPort};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Re-enables the submit control and returns to Idle when dropped, including
/// when the submit future is dropped before the backend answers.
struct BusyGuard<'a, V: FormView> {
    view: &'a V,
    submitting: &'a AtomicBool,
    original_label: String,
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false, &self.original_label);
        self.submitting.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Drives one reservation form for the lifetime of a page session.
///
/// The view, the submission backend and the clock are injected; the
/// controller owns no page state besides the in-flight flag.
pub struct ReservationController<V: FormView + 'static, P: SubmissionPort, K: Clock> {
    view: Arc<V>,
    port: P,
    clock: K,
    config: FormConfig,
    validator: ReservationValidator,
    feedback: FeedbackPresenter<V>,
    submitting: AtomicBool,
}

impl<V: FormView + 'static, P: SubmissionPort, K: Clock> ReservationController<V, P, K> {
    pub fn new(view: Arc<V>, port: P, clock: K, config: FormConfig) -> Self {
        let validator = ReservationValidator::new(config.form.party_sizes.clone());
        let feedback = FeedbackPresenter::new(Arc::clone(&view), config.dismiss_after());
        Self {
            view,
            port,
            clock,
            config,
            validator,
            feedback,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> SubmitState {
        if self.submitting.load(Ordering::SeqCst) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    /// 頁面載入：日期預設為今天
    pub fn initialize(&self) {
        self.reset_date();
        tracing::debug!("Reservation form initialized for {}", self.config.venue_name());
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        for field in FieldId::ALL {
            snapshot.set(field, self.view.field(field));
        }
        snapshot
    }

    /// Validates the current form contents and refreshes the error flags.
    pub fn validate(&self) -> ValidationResult {
        self.view.clear_errors();
        let result = self.validator.validate(&self.snapshot(), self.clock.today());
        for field in result.failed_fields() {
            self.view.set_error(field, true);
        }
        result
    }

    pub async fn submit(&self) -> SubmitAttempt {
        // 送出中按鈕已停用，重複觸發直接忽略
        if self.state() == SubmitState::Submitting {
            tracing::debug!("Submit ignored: a reservation is already being sent");
            return SubmitAttempt::Ignored;
        }

        self.view.clear_errors();
        self.feedback.clear();

        let reservation = match self.validator.check(&self.snapshot(), self.clock.today()) {
            Ok(reservation) => reservation,
            Err(result) => {
                for field in result.failed_fields() {
                    self.view.set_error(field, true);
                }
                let text = if result.only_past_date() {
                    &self.config.feedback.past_date_message
                } else {
                    &self.config.feedback.validation_message
                };
                self.feedback.show(FeedbackMessage::error(text.clone()));
                tracing::info!(
                    "Reservation rejected: {} field(s) failed validation",
                    result.error_count()
                );
                return SubmitAttempt::Rejected(result);
            }
        };

        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SubmitAttempt::Ignored;
        }

        let original_label = self.view.submit_label();
        self.view.set_busy(true, &self.config.feedback.busy_label);
        let _busy = BusyGuard {
            view: self.view.as_ref(),
            submitting: &self.submitting,
            original_label,
        };
        tracing::info!(
            "Submitting reservation for {} guest(s) on {} at {}",
            reservation.party_size,
            reservation.date,
            reservation.time.format("%H:%M")
        );

        let outcome = self.port.submit(&reservation).await;

        match &outcome {
            SubmissionOutcome::Success(confirmation) => {
                self.feedback.show(FeedbackMessage::success(confirmation.clone()));
                self.view.reset();
                self.reset_date();
                tracing::info!("✅ Reservation submitted");
            }
            SubmissionOutcome::Failure(reason) => {
                self.feedback.show(FeedbackMessage::error(reason.clone()));
                tracing::warn!("❌ Reservation submission failed: {}", reason);
            }
        }

        SubmitAttempt::Settled(outcome)
    }

    /// Typing into a flagged field clears its flag as soon as it is non-empty.
    pub fn on_field_input(&self, field: FieldId) {
        if !self.view.field(field).trim().is_empty() {
            self.view.set_error(field, false);
        }
    }

    pub fn on_field_blur(&self, field: FieldId) {
        self.on_field_input(field);
    }

    /// 選擇日期後，若尚未填時間則帶入建議時段
    pub fn on_date_changed(&self) {
        self.on_field_input(FieldId::Date);

        let Ok(date) = validators::check_date(&self.view.field(FieldId::Date), chrono::NaiveDate::MIN)
        else {
            return;
        };
        if self.view.field(FieldId::Time).trim().is_empty() {
            let suggestion = suggestions::suggested_time(date).format("%H:%M").to_string();
            tracing::debug!("Suggesting {} for {}", suggestion, date);
            self.view.set_field(FieldId::Time, &suggestion);
        }
    }

    pub fn on_guests_changed(&self) {
        self.on_field_input(FieldId::Guests);

        let Ok(size) = self.view.field(FieldId::Guests).trim().parse::<u32>() else {
            return;
        };
        if suggestions::is_large_party(size, self.config.form.large_party_threshold)
            && self.view.field(FieldId::Message).is_empty()
        {
            self.view
                .set_placeholder(FieldId::Message, &self.config.form.large_party_hint);
        }
    }

    fn reset_date(&self) {
        let today = self.clock.today().format("%Y-%m-%d").to_string();
        self.view.set_field(FieldId::Date, &today);
    }
}
