use thiserror::Error;

use crate::model::answers::AnswerSet;
use crate::model::tally::{RESPONSE_CAP, TallyMatrix};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Reasons a submission is turned away. None of them mutate state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Ya has respondido a esta encuesta. ¡Gracias por tu participación!")]
    AlreadyResponded,
    #[error("Lo sentimos, ya se han alcanzado las 100 respuestas máximas.")]
    QuotaReached,
    #[error("¡Hey! Falta responder algunas preguntas. ¡Échales un vistazo!")]
    Incomplete { missing: Vec<usize> },
}

//
// ─── VIEW ─────────────────────────────────────────────────────────────────────
//

/// Which screen the survey shows. `Results` is terminal for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurveyView {
    #[default]
    Answering,
    Results,
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// The durable part of the survey: tallies, response count, and the local
/// "already answered" flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyState {
    tally: TallyMatrix,
    total_responses: u32,
    has_responded: bool,
}

impl SurveyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_persisted(tally: TallyMatrix, total_responses: u32, has_responded: bool) -> Self {
        Self {
            tally,
            total_responses,
            has_responded,
        }
    }

    #[must_use]
    pub fn tally(&self) -> &TallyMatrix {
        &self.tally
    }

    #[must_use]
    pub fn total_responses(&self) -> u32 {
        self.total_responses
    }

    #[must_use]
    pub fn has_responded(&self) -> bool {
        self.has_responded
    }

    #[must_use]
    pub fn quota_reached(&self) -> bool {
        self.total_responses >= RESPONSE_CAP
    }

    /// Submissions still accepted before the cap.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        RESPONSE_CAP.saturating_sub(self.total_responses)
    }

    /// True when no further submission can be accepted here.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.has_responded || self.quota_reached()
    }

    /// The screen a freshly loaded survey opens on.
    #[must_use]
    pub fn initial_view(&self) -> SurveyView {
        if self.is_closed() {
            SurveyView::Results
        } else {
            SurveyView::Answering
        }
    }

    /// Checks a submission without applying it.
    ///
    /// Checks run in order: already responded, quota, completeness.
    ///
    /// # Errors
    ///
    /// Returns the first `SubmitError` that applies.
    pub fn check(&self, answers: &AnswerSet) -> Result<(), SubmitError> {
        if self.has_responded {
            return Err(SubmitError::AlreadyResponded);
        }
        if self.quota_reached() {
            return Err(SubmitError::QuotaReached);
        }
        if !answers.is_complete() {
            return Err(SubmitError::Incomplete {
                missing: answers.missing(),
            });
        }
        Ok(())
    }

    /// Returns the state after accepting `answers`. `self` is not modified.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the submission is rejected by [`Self::check`].
    pub fn accept(&self, answers: &AnswerSet) -> Result<Self, SubmitError> {
        self.check(answers)?;
        let mut tally = self.tally;
        tally.record(answers);
        Ok(Self {
            tally,
            total_responses: self.total_responses + 1,
            has_responded: true,
        })
    }
}
