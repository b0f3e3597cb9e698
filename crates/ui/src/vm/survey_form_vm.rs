use services::SurveySnapshot;
use survey_core::model::QUESTIONS;

use super::{CARD_STAGGER_MS, animation_delay};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOptionVm {
    pub index: usize,
    pub id: String,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyQuestionVm {
    pub index: usize,
    pub group: String,
    pub icon: &'static str,
    pub text: &'static str,
    pub highlight: bool,
    pub enter_style: String,
    pub options: Vec<QuestionOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyFormVm {
    pub title: &'static str,
    pub remaining_label: String,
    pub error: Option<String>,
    pub questions: Vec<SurveyQuestionVm>,
    pub submit_disabled: bool,
}

#[must_use]
pub fn map_survey_form(snapshot: &SurveySnapshot) -> SurveyFormVm {
    let show_missing = snapshot.validation.is_some();

    let questions = QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let selected = snapshot.answers.get(i);
            let options = question
                .options()
                .iter()
                .enumerate()
                .map(|(j, label)| QuestionOptionVm {
                    index: j,
                    id: format!("p{i}o{j}"),
                    label: *label,
                    checked: selected == Some(j),
                })
                .collect();
            SurveyQuestionVm {
                index: i,
                group: format!("p{i}"),
                icon: question.icon(),
                text: question.text(),
                highlight: show_missing && selected.is_none(),
                enter_style: animation_delay(i as u64 * CARD_STAGGER_MS),
                options,
            }
        })
        .collect();

    SurveyFormVm {
        title: "¡Tu opinión es importante! 🌟",
        remaining_label: format!(
            "Faltan {} respuestas. ¡Sé parte del cambio!",
            snapshot.state.remaining()
        ),
        error: snapshot.validation.clone(),
        questions,
        submit_disabled: !snapshot.can_submit(),
    }
}
