use dioxus::prelude::*;

use crate::vm::{
    QuestionOptionVm, ResultQuestionVm, SurveyFormVm, SurveyIntent, SurveyQuestionVm,
    SurveyResultsVm,
};

#[component]
pub(super) fn SurveyForm(vm: SurveyFormVm, on_intent: EventHandler<SurveyIntent>) -> Element {
    rsx! {
        div { class: "survey-card",
            header { class: "survey-card__header",
                h1 { class: "survey-card__title", "{vm.title}" }
                p { class: "survey-card__subtitle", "{vm.remaining_label}" }
            }
            if let Some(message) = vm.error.clone() {
                div { class: "survey-alert", role: "alert",
                    p { class: "survey-alert__title", "¡Ojo! 👀" }
                    p { class: "survey-alert__message", "{message}" }
                }
            }
            form {
                class: "survey-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_intent.call(SurveyIntent::Submit);
                },
                for question in vm.questions.iter().cloned() {
                    QuestionCard { key: "{question.index}", question, on_intent }
                }
                button {
                    class: "survey-submit",
                    id: "survey-submit",
                    r#type: "submit",
                    disabled: vm.submit_disabled,
                    "¡Enviar mis respuestas! 🚀"
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: SurveyQuestionVm, on_intent: EventHandler<SurveyIntent>) -> Element {
    let class = if question.highlight {
        "survey-question survey-question--missing"
    } else {
        "survey-question"
    };
    let question_index = question.index;

    rsx! {
        fieldset { class: "{class}", style: "{question.enter_style}",
            legend { class: "survey-question__label",
                span { class: "survey-question__icon", "{question.icon}" }
                span { "{question.text}" }
            }
            div { class: "survey-options",
                for option in question.options.iter().cloned() {
                    OptionRadio {
                        key: "{option.id}",
                        group: question.group.clone(),
                        option,
                        on_select: move |option: usize| {
                            on_intent.call(SurveyIntent::Select {
                                question: question_index,
                                option,
                            });
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn OptionRadio(group: String, option: QuestionOptionVm, on_select: EventHandler<usize>) -> Element {
    let option_index = option.index;

    rsx! {
        div { class: "survey-option",
            input {
                r#type: "radio",
                id: "{option.id}",
                name: "{group}",
                value: "{option.label}",
                checked: option.checked,
                onchange: move |_| on_select.call(option_index),
            }
            label { r#for: "{option.id}", class: "survey-option__label", "{option.label}" }
        }
    }
}

#[component]
pub(super) fn SurveyResults(vm: SurveyResultsVm) -> Element {
    rsx! {
        div { class: "survey-card",
            header { class: "survey-card__header",
                h1 { class: "survey-card__title", "{vm.title}" }
                p { class: "survey-card__subtitle", "{vm.total_label}" }
                if let Some(notice) = vm.cap_notice.clone() {
                    p { class: "survey-card__notice", "{notice}" }
                }
            }
            for question in vm.questions.iter().cloned() {
                ResultCard { key: "{question.index}", question }
            }
        }
    }
}

#[component]
fn ResultCard(question: ResultQuestionVm) -> Element {
    rsx! {
        section { class: "survey-result", style: "{question.enter_style}",
            h3 { class: "survey-question__label",
                span { class: "survey-question__icon", "{question.icon}" }
                span { "{question.text}" }
            }
            for bar in question.bars.iter().cloned() {
                div { class: "survey-bar",
                    span { class: "survey-bar__label", "{bar.label}" }
                    div { class: "survey-bar__track",
                        div {
                            class: "survey-bar__fill",
                            style: "{bar.width_style}; {bar.grow_style}",
                            span { class: "survey-bar__count", "{bar.count}" }
                        }
                    }
                }
            }
        }
    }
}
