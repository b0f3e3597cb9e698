//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use survey_core::model::{AnswerError, SubmitError};

/// Errors emitted by `SurveyController`.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("survey is closed")]
    Closed,
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Rejected(#[from] SubmitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
