// Adapters layer: concrete implementations of the domain ports (view, backend, clock).

pub mod clock;
pub mod http;
pub mod memory_view;
pub mod simulated;

use crate::config::{FormConfig, SubmissionMode};
use crate::domain::model::{ReservationInput, SubmissionOutcome};
use crate::domain::ports::SubmissionPort;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The backend selected by `[submission] mode`.
pub enum ConfiguredSubmitter {
    Simulated(simulated::SimulatedSubmitter),
    Http(http::HttpSubmitter),
}

impl ConfiguredSubmitter {
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        match config.submission.mode {
            SubmissionMode::Simulated => Ok(Self::Simulated(simulated::SimulatedSubmitter::new(
                config.submission_delay(),
                config.feedback.success_message.clone(),
            ))),
            SubmissionMode::Http => Ok(Self::Http(http::HttpSubmitter::from_config(config)?)),
        }
    }
}

#[async_trait]
impl SubmissionPort for ConfiguredSubmitter {
    async fn submit(&self, reservation: &ReservationInput) -> SubmissionOutcome {
        match self {
            Self::Simulated(submitter) => submitter.submit(reservation).await,
            Self::Http(submitter) => submitter.submit(reservation).await,
        }
    }
}
