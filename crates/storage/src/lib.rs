#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;
pub mod survey_store;

pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
pub use survey_store::{KeyValueSurveyStore, SurveyStore};
