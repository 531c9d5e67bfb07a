use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub venue: VenueConfig,
    pub submission: SubmissionConfig,
    pub feedback: FeedbackConfig,
    pub form: FormFieldsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    pub name: String,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            name: "Blue Waves Cafe".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    #[default]
    Simulated,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub mode: SubmissionMode,
    pub endpoint: Option<String>,
    pub delay_ms: u64,
    pub timeout_seconds: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            mode: SubmissionMode::Simulated,
            endpoint: None,
            delay_ms: 1500,
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub dismiss_after_seconds: u64,
    pub busy_label: String,
    pub success_message: String,
    pub failure_message: String,
    pub validation_message: String,
    pub past_date_message: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            dismiss_after_seconds: 5,
            busy_label: "Booking Your Table... 🌊".to_string(),
            success_message: "🌊 Reservation submitted successfully! We'll contact you soon to confirm your table by the shore.".to_string(),
            failure_message: "Oops! Something went wrong. Please try again or call us directly.".to_string(),
            validation_message: "Please fill in all required fields correctly.".to_string(),
            past_date_message: "Please select a date in the future.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFieldsConfig {
    pub party_sizes: Vec<u32>,
    pub large_party_threshold: u32,
    pub large_party_hint: String,
}

impl Default for FormFieldsConfig {
    fn default() -> Self {
        Self {
            party_sizes: (1..=10).collect(),
            large_party_threshold: 7,
            large_party_hint: "For parties of 7+, please let us know if you have any special seating preferences. We recommend booking at least 24 hours in advance.".to_string(),
        }
    }
}

impl FormConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReservationError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReservationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESERVATION_ENDPOINT})
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("venue.name", &self.venue.name)?;

        if self.submission.mode == SubmissionMode::Http {
            let endpoint =
                validation::validate_required_field("submission.endpoint", &self.submission.endpoint)?;
            validation::validate_url("submission.endpoint", endpoint)?;
            validation::validate_positive_number(
                "submission.timeout_seconds",
                self.submission.timeout_seconds,
                1,
            )?;
        }

        validation::validate_positive_number(
            "feedback.dismiss_after_seconds",
            self.feedback.dismiss_after_seconds,
            1,
        )?;
        validation::validate_non_empty_string("feedback.busy_label", &self.feedback.busy_label)?;

        if self.form.party_sizes.is_empty() {
            return Err(ReservationError::ConfigValidationError {
                field: "form.party_sizes".to_string(),
                message: "At least one party size must be offered".to_string(),
            });
        }
        if let Some(zero) = self.form.party_sizes.iter().find(|size| **size == 0) {
            return Err(ReservationError::InvalidConfigValueError {
                field: "form.party_sizes".to_string(),
                value: zero.to_string(),
                reason: "Party sizes must be positive".to_string(),
            });
        }
        validation::validate_range("form.large_party_threshold", self.form.large_party_threshold, 1, 100)?;

        Ok(())
    }

    pub fn venue_name(&self) -> &str {
        &self.venue.name
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_secs(self.feedback.dismiss_after_seconds)
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission.delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.submission.timeout_seconds)
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
