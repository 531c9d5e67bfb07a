use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation failed for fields: {}", fields.join(", "))]
    ValidationError { fields: Vec<String> },

    #[error("Submission rejected by backend: {message}")]
    SubmissionError { message: String },
}

impl ReservationError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReservationError::HttpError(_) => {
                "無法連線到訂位服務 (could not reach the reservation backend)".to_string()
            }
            ReservationError::IoError(e) => format!("檔案讀取失敗: {}", e),
            ReservationError::ConfigValidationError { field, message } => {
                format!("設定錯誤 [{}]: {}", field, message)
            }
            ReservationError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值無效 [{}]: {}", field, reason)
            }
            ReservationError::MissingConfigError { field } => {
                format!("缺少必要設定: {}", field)
            }
            ReservationError::ValidationError { fields } => {
                format!("Please fix the following fields: {}", fields.join(", "))
            }
            ReservationError::SubmissionError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReservationError::HttpError(_) | ReservationError::SubmissionError { .. } => {
                "Try again in a moment or call the restaurant directly"
            }
            ReservationError::IoError(_) => "Check that the config file exists and is readable",
            ReservationError::ConfigValidationError { .. }
            | ReservationError::InvalidConfigValueError { .. }
            | ReservationError::MissingConfigError { .. } => {
                "Fix the TOML configuration and run again"
            }
            ReservationError::ValidationError { .. } => "Correct the highlighted fields and resubmit",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;
