use serde::{Deserialize, Serialize};

use crate::model::answers::AnswerSet;
use crate::model::question::{OPTION_COUNT, QUESTION_COUNT};

/// Maximum number of accepted submissions.
pub const RESPONSE_CAP: u32 = 100;

/// Per-option counters, one row per question.
///
/// Serializes as a plain nested array (`[[0,0,0,0], ...]`), which is the
/// persisted layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TallyMatrix([[u32; OPTION_COUNT]; QUESTION_COUNT]);

impl TallyMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_rows(rows: [[u32; OPTION_COUNT]; QUESTION_COUNT]) -> Self {
        Self(rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[[u32; OPTION_COUNT]; QUESTION_COUNT] {
        &self.0
    }

    #[must_use]
    pub fn count(&self, question: usize, option: usize) -> u32 {
        self.0
            .get(question)
            .and_then(|row| row.get(option))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of a question's counters.
    #[must_use]
    pub fn row_total(&self, question: usize) -> u32 {
        self.0.get(question).map_or(0, |row| row.iter().sum())
    }

    /// Adds one vote for every answered question.
    pub fn record(&mut self, answers: &AnswerSet) {
        for (question, option) in answers.selected() {
            self.0[question][option] = self.0[question][option].saturating_add(1);
        }
    }
}

/// Share of `count` in `total` as a percentage; 0 when `total` is 0.
#[must_use]
pub fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(count) / f64::from(total) * 100.0
}
