use crate::config::toml_config::{FormConfig, SubmissionMode};
use crate::domain::model::{FieldId, FormSnapshot};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "reserve")]
#[command(about = "Validate and submit a table reservation")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Party size
    #[arg(long, default_value = "")]
    pub guests: String,

    /// Reservation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Reservation time (HH:MM); suggested from the date when omitted
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Submit to this endpoint instead of the configured backend
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliArgs {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut FormConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.submission.mode = SubmissionMode::Http;
            config.submission.endpoint = Some(endpoint.clone());
        }
    }

    /// Field values typed by the user; date and time are only present when given.
    pub fn entered_fields(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            guests: self.guests.clone(),
            message: self.notes.clone(),
            ..FormSnapshot::default()
        };
        if let Some(date) = &self.date {
            snapshot.set(FieldId::Date, date.clone());
        }
        if let Some(time) = &self.time {
            snapshot.set(FieldId::Time, time.clone());
        }
        snapshot
    }
}
