use std::sync::Arc;

use survey_core::model::{AnswerSet, SubmitError, SurveyState, SurveyView};

use crate::SurveyStore;
use crate::celebration::Celebration;
use crate::error::SurveyError;

/// Shown when the accepted state could not be written through.
pub const SAVE_FAILED_MESSAGE: &str = "No se pudieron guardar tus respuestas. Inténtalo de nuevo.";

/// Everything the renderer needs, detached from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySnapshot {
    pub state: SurveyState,
    pub answers: AnswerSet,
    pub view: SurveyView,
    pub validation: Option<String>,
}

impl SurveySnapshot {
    /// True when the submit control should accept input.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.view == SurveyView::Answering
            && !self.state.is_closed()
            && self.answers.is_complete()
    }
}

/// Owns the in-memory survey and moves it from answering to results.
///
/// The store and celebration are injected so hosts and tests can swap them.
pub struct SurveyController {
    store: Arc<dyn SurveyStore>,
    celebration: Arc<dyn Celebration>,
    state: SurveyState,
    answers: AnswerSet,
    view: SurveyView,
    validation: Option<String>,
}

impl SurveyController {
    /// Restore the persisted state and pick the opening view.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::Storage` if the store cannot be read or holds
    /// malformed values.
    pub async fn load(
        store: Arc<dyn SurveyStore>,
        celebration: Arc<dyn Celebration>,
    ) -> Result<Self, SurveyError> {
        let state = store.load().await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to load survey state");
        })?;
        let view = state.initial_view();
        tracing::info!(
            total = state.total_responses(),
            responded = state.has_responded(),
            ?view,
            "survey loaded"
        );

        Ok(Self {
            store,
            celebration,
            state,
            answers: AnswerSet::new(),
            view,
            validation: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &SurveyState {
        &self.state
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn view(&self) -> SurveyView {
        self.view
    }

    #[must_use]
    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    #[must_use]
    pub fn snapshot(&self) -> SurveySnapshot {
        SurveySnapshot {
            state: self.state,
            answers: self.answers,
            view: self.view,
            validation: self.validation.clone(),
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.snapshot().can_submit()
    }

    /// Record the option labelled `option` for `question` and clear any
    /// validation message.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::Closed` once results are showing, or
    /// `SurveyError::Answer` for an unknown question or option.
    pub fn select_answer(&mut self, question: usize, option: &str) -> Result<(), SurveyError> {
        if self.view == SurveyView::Results {
            return Err(SurveyError::Closed);
        }
        self.answers.select(question, option)?;
        self.validation = None;
        Ok(())
    }

    /// Same as [`Self::select_answer`], addressing the option by position.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::Closed` once results are showing, or
    /// `SurveyError::Answer` for out-of-range indexes.
    pub fn select_option(&mut self, question: usize, option: usize) -> Result<(), SurveyError> {
        if self.view == SurveyView::Results {
            return Err(SurveyError::Closed);
        }
        self.answers.select_index(question, option)?;
        self.validation = None;
        Ok(())
    }

    /// Validate, tally, persist, celebrate, and switch to results.
    ///
    /// Rejections set the validation message and leave everything else as it
    /// was. The in-memory state only advances after the store accepted it.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::Rejected` for validation failures and
    /// `SurveyError::Storage` when the write-through fails.
    pub async fn submit(&mut self) -> Result<(), SurveyError> {
        let next = match self.state.accept(&self.answers) {
            Ok(next) => next,
            Err(err) => return Err(self.reject(err)),
        };

        if let Err(err) = self.store.save(&next).await {
            tracing::error!(error = %err, "failed to persist survey submission");
            self.validation = Some(SAVE_FAILED_MESSAGE.to_string());
            return Err(err.into());
        }

        self.state = next;
        self.view = SurveyView::Results;
        self.validation = None;
        tracing::info!(total = next.total_responses(), "survey submission accepted");

        self.celebration.burst();
        Ok(())
    }

    fn reject(&mut self, err: SubmitError) -> SurveyError {
        tracing::info!(reason = %err, "survey submission rejected");
        self.validation = Some(err.to_string());
        SurveyError::Rejected(err)
    }
}
