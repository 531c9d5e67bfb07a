use anyhow::Context;
use clap::Parser;
use reservation_form::domain::model::{MessageKind, SubmissionOutcome};
use reservation_form::utils::{logger, validation::Validate};
use reservation_form::{
    CliArgs, ConfiguredSubmitter, FieldId, FormConfig, InMemoryFormView, ReservationController,
    ReservationError, SubmitAttempt, SystemClock,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            FormConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => FormConfig::default(),
    };
    args.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let submitter = ConfiguredSubmitter::from_config(&config)?;
    let view = Arc::new(InMemoryFormView::new());
    let controller = ReservationController::new(Arc::clone(&view), submitter, SystemClock, config);

    controller.initialize();
    view.fill(&args.entered_fields());
    // 模擬使用者選擇日期與人數後觸發的事件
    controller.on_date_changed();
    controller.on_guests_changed();

    let attempt = controller.submit().await;
    if let Some(message) = view.message() {
        match message.kind {
            MessageKind::Success => println!("✅ {}", message.text),
            MessageKind::Error => eprintln!("❌ {}", message.text),
        }
    }
    if let Some(hint) = view.placeholder(FieldId::Message) {
        println!("💡 {}", hint);
    }

    match attempt {
        SubmitAttempt::Settled(SubmissionOutcome::Success(_)) => Ok(()),
        SubmitAttempt::Rejected(result) => {
            let err = ReservationError::ValidationError {
                fields: result.failed_fields().map(|f| f.to_string()).collect(),
            };
            eprintln!("💡 {}", err.recovery_suggestion());
            Err(err.into())
        }
        SubmitAttempt::Settled(SubmissionOutcome::Failure(reason)) => {
            Err(ReservationError::SubmissionError { message: reason }.into())
        }
        SubmitAttempt::Ignored => Ok(()),
    }
}
