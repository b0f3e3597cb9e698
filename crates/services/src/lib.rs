#![forbid(unsafe_code)]

pub mod celebration;
pub mod error;
pub mod survey_controller;

pub use storage::survey_store::SurveyStore;

pub use celebration::{Celebration, NoCelebration};
pub use error::SurveyError;
pub use survey_controller::{SurveyController, SurveySnapshot};
