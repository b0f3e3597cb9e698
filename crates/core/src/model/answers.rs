use thiserror::Error;

use crate::model::question::{OPTION_COUNT, QUESTION_COUNT, question};

/// Errors raised while recording a single answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("question index {0} is out of range")]
    UnknownQuestion(usize),
    #[error("option {option:?} does not belong to question {question}")]
    UnknownOption { question: usize, option: String },
    #[error("option index {option} is out of range for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
}

/// The respondent's current selection, one slot per question.
///
/// Slots hold the index of the chosen option; `None` means unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerSet {
    slots: [Option<usize>; QUESTION_COUNT],
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the option whose label is `option` for `question`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the question index is out of range or the label
    /// is not one of that question's options. The set is left untouched.
    pub fn select(&mut self, question_index: usize, option: &str) -> Result<(), AnswerError> {
        let question =
            question(question_index).ok_or(AnswerError::UnknownQuestion(question_index))?;
        let option_index =
            question
                .option_index(option)
                .ok_or_else(|| AnswerError::UnknownOption {
                    question: question_index,
                    option: option.to_string(),
                })?;
        self.slots[question_index] = Some(option_index);
        Ok(())
    }

    /// Selects an option by position.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if either index is out of range.
    pub fn select_index(&mut self, question_index: usize, option: usize) -> Result<(), AnswerError> {
        if question_index >= QUESTION_COUNT {
            return Err(AnswerError::UnknownQuestion(question_index));
        }
        if option >= OPTION_COUNT {
            return Err(AnswerError::OptionOutOfRange {
                question: question_index,
                option,
            });
        }
        self.slots[question_index] = Some(option);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, question_index: usize) -> Option<usize> {
        self.slots.get(question_index).copied().flatten()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Indexes of unanswered questions, ascending.
    #[must_use]
    pub fn missing(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
            .collect()
    }

    /// Iterates `(question, option)` pairs for every answered question.
    pub fn selected(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|option| (i, option)))
    }
}
