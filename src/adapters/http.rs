use crate::config::FormConfig;
use crate::domain::model::{ReservationInput, SubmissionOutcome};
use crate::domain::ports::SubmissionPort;
use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use chrono::{NaiveTime, Timelike};
use reqwest::Client;
use serde::Serialize;

/// JSON body posted to the reservation backend.
#[derive(Debug, Serialize)]
pub struct ReservationPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub guests: u32,
    pub date: String,
    pub time: String,
    pub message: &'a str,
    pub restaurant: &'a str,
}

impl<'a> ReservationPayload<'a> {
    pub fn new(reservation: &'a ReservationInput, venue: &'a str) -> Self {
        Self {
            name: &reservation.name,
            email: &reservation.email,
            phone: &reservation.phone,
            guests: reservation.party_size,
            date: reservation.date.format("%Y-%m-%d").to_string(),
            time: wire_time(reservation.time),
            message: reservation.notes.as_deref().unwrap_or_default(),
            restaurant: venue,
        }
    }
}

/// `HH:MM`, or `HH:MM:SS` when the entered time carries seconds.
fn wire_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

pub struct HttpSubmitter {
    client: Client,
    endpoint: String,
    venue: String,
    success_message: String,
    failure_message: String,
}

impl HttpSubmitter {
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        let endpoint = validate_required_field("submission.endpoint", &config.submission.endpoint)?;
        let client = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.clone(),
            venue: config.venue_name().to_string(),
            success_message: config.feedback.success_message.clone(),
            failure_message: config.feedback.failure_message.clone(),
        })
    }

    async fn post(&self, reservation: &ReservationInput) -> Result<()> {
        let payload = ReservationPayload::new(reservation, &self.venue);

        tracing::debug!("Posting reservation to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        tracing::debug!("Reservation backend status: {}", response.status());

        if !response.status().is_success() {
            return Err(ReservationError::SubmissionError {
                message: format!("backend responded with {}", response.status()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SubmissionPort for HttpSubmitter {
    async fn submit(&self, reservation: &ReservationInput) -> SubmissionOutcome {
        match self.post(reservation).await {
            Ok(()) => SubmissionOutcome::Success(self.success_message.clone()),
            Err(e) => {
                tracing::error!("Reservation request failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                SubmissionOutcome::Failure(self.failure_message.clone())
            }
        }
    }
}
