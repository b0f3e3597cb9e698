use services::SurveySnapshot;
use survey_core::model::{QUESTIONS, RESPONSE_CAP, percentage};

use super::{BAR_STAGGER_MS, CARD_STAGGER_MS, animation_delay};

#[derive(Clone, Debug, PartialEq)]
pub struct ResultBarVm {
    pub label: &'static str,
    pub count: u32,
    pub width_pct: f64,
    pub width_style: String,
    pub grow_style: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultQuestionVm {
    pub index: usize,
    pub icon: &'static str,
    pub text: &'static str,
    pub enter_style: String,
    pub bars: Vec<ResultBarVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SurveyResultsVm {
    pub title: &'static str,
    pub total_label: String,
    pub cap_notice: Option<String>,
    pub questions: Vec<ResultQuestionVm>,
}

#[must_use]
pub fn map_survey_results(snapshot: &SurveySnapshot) -> SurveyResultsVm {
    let state = &snapshot.state;
    let total = state.total_responses();

    let questions = QUESTIONS
        .iter()
        .zip(state.tally().rows())
        .enumerate()
        .map(|(i, (question, row))| {
            let card_delay = i as u64 * CARD_STAGGER_MS;
            let bars = question
                .options()
                .iter()
                .zip(row)
                .enumerate()
                .map(|(j, (label, &count))| {
                    // Counters can outrun the total after an interrupted save.
                    let width_pct = percentage(count, total).clamp(0.0, 100.0);
                    ResultBarVm {
                        label: *label,
                        count,
                        width_pct,
                        width_style: format!("width: {width_pct:.1}%"),
                        grow_style: animation_delay(card_delay + j as u64 * BAR_STAGGER_MS),
                    }
                })
                .collect();
            ResultQuestionVm {
                index: i,
                icon: question.icon(),
                text: question.text(),
                enter_style: animation_delay(card_delay),
                bars,
            }
        })
        .collect();

    SurveyResultsVm {
        title: "¡Gracias por participar! 🎉",
        total_label: format!("Total de respuestas: {total} / {RESPONSE_CAP}"),
        cap_notice: state
            .quota_reached()
            .then(|| format!("Se alcanzó el máximo de {RESPONSE_CAP} respuestas.")),
        questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::model::{
        AnswerSet, OPTION_COUNT, QUESTION_COUNT, SurveyState, SurveyView, TallyMatrix,
    };

    fn snapshot(state: SurveyState) -> SurveySnapshot {
        SurveySnapshot {
            state,
            answers: AnswerSet::new(),
            view: SurveyView::Results,
            validation: None,
        }
    }

    #[test]
    fn zero_total_renders_empty_bars() {
        let vm = map_survey_results(&snapshot(SurveyState::new()));
        assert_eq!(vm.total_label, "Total de respuestas: 0 / 100");
        for question in &vm.questions {
            for bar in &question.bars {
                assert_eq!(bar.width_pct, 0.0);
                assert_eq!(bar.width_style, "width: 0.0%");
            }
        }
        assert!(vm.cap_notice.is_none());
    }

    #[test]
    fn widths_are_share_of_total() {
        let mut rows = [[0; OPTION_COUNT]; QUESTION_COUNT];
        for row in &mut rows {
            *row = [1, 3, 0, 0];
        }
        let state = SurveyState::from_persisted(TallyMatrix::from_rows(rows), 4, true);
        let vm = map_survey_results(&snapshot(state));

        let bars = &vm.questions[9].bars;
        assert_eq!(bars[0].width_pct, 25.0);
        assert_eq!(bars[1].width_pct, 75.0);
        assert_eq!(bars[1].count, 3);
        assert_eq!(bars[1].width_style, "width: 75.0%");
        assert_eq!(bars[2].width_pct, 0.0);
    }

    #[test]
    fn bars_grow_after_their_card_enters() {
        let vm = map_survey_results(&snapshot(SurveyState::new()));
        assert_eq!(vm.questions[0].enter_style, "animation-delay: 0ms");
        assert_eq!(vm.questions[2].enter_style, "animation-delay: 200ms");
        assert_eq!(vm.questions[0].bars[0].grow_style, "animation-delay: 0ms");
        assert_eq!(vm.questions[2].bars[3].grow_style, "animation-delay: 350ms");
    }

    #[test]
    fn cap_reached_adds_notice() {
        let mut rows = [[0; OPTION_COUNT]; QUESTION_COUNT];
        for row in &mut rows {
            row[3] = RESPONSE_CAP;
        }
        let state = SurveyState::from_persisted(TallyMatrix::from_rows(rows), RESPONSE_CAP, false);
        let vm = map_survey_results(&snapshot(state));
        assert_eq!(vm.total_label, "Total de respuestas: 100 / 100");
        assert!(vm.cap_notice.unwrap().contains("100"));
        assert_eq!(vm.questions[0].bars[3].width_pct, 100.0);
    }
}
