mod survey_form_vm;
mod survey_results_vm;
mod survey_vm;

pub use survey_form_vm::{QuestionOptionVm, SurveyFormVm, SurveyQuestionVm, map_survey_form};
pub use survey_results_vm::{
    ResultBarVm, ResultQuestionVm, SurveyResultsVm, map_survey_results,
};
pub use survey_vm::{SurveyIntent, load_survey};

/// Stagger between consecutive question cards.
pub(crate) const CARD_STAGGER_MS: u64 = 100;
/// Stagger between bars of the same result card.
pub(crate) const BAR_STAGGER_MS: u64 = 50;

pub(crate) fn animation_delay(delay_ms: u64) -> String {
    format!("animation-delay: {delay_ms}ms")
}
