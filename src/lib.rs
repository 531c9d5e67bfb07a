pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::clock::{FixedClock, SystemClock};
pub use adapters::memory_view::InMemoryFormView;
pub use adapters::ConfiguredSubmitter;
pub use config::FormConfig;
pub use core::controller::{ReservationController, SubmitState};
pub use domain::model::{FeedbackMessage, FieldId, MessageKind, SubmitAttempt};
pub use utils::error::{ReservationError, Result};
