use crate::domain::model::{ReservationInput, SubmissionOutcome};
use crate::domain::ports::SubmissionPort;
use async_trait::async_trait;
use std::time::Duration;

/// Stand-in backend: waits a fixed delay and always confirms.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    confirmation: String,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, confirmation: impl Into<String>) -> Self {
        Self {
            delay,
            confirmation: confirmation.into(),
        }
    }
}

#[async_trait]
impl SubmissionPort for SimulatedSubmitter {
    async fn submit(&self, reservation: &ReservationInput) -> SubmissionOutcome {
        tracing::debug!("Simulating submission for {} ({:?} delay)", reservation.email, self.delay);
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            "Reservation details: {}",
            serde_json::to_string(reservation).unwrap_or_default()
        );
        SubmissionOutcome::Success(self.confirmation.clone())
    }
}
