pub mod controller;
pub mod feedback;
pub mod suggestions;
pub mod validators;

pub use crate::domain::model::{FormSnapshot, ReservationInput, SubmissionOutcome, ValidationResult};
pub use crate::domain::ports::{Clock, FormView, SubmissionPort};
pub use crate::utils::error::Result;
