use dioxus::prelude::*;
use services::SurveyController;
use survey_core::model::SurveyView as Screen;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SurveyIntent, load_survey, map_survey_form, map_survey_results};

use super::components::{SurveyForm, SurveyResults};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn SurveyView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(|| None::<SurveyController>);

    let resource = use_resource(move || {
        let store = ctx.survey_store();
        let celebration = ctx.celebration();
        let mut controller = controller;

        async move {
            let loaded = load_survey(store, celebration).await?;
            controller.set(Some(loaded));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch_intent = use_callback(move |intent: SurveyIntent| {
        let mut controller = controller;

        match intent {
            SurveyIntent::Select { question, option } => {
                if let Some(survey) = controller.write().as_mut() {
                    if let Err(err) = survey.select_option(question, option) {
                        tracing::warn!(error = %err, question, option, "answer not recorded");
                    }
                }
            }
            SurveyIntent::Submit => {
                spawn(async move {
                    let taken = {
                        let mut guard = controller.write();
                        guard.take()
                    };
                    let Some(mut survey) = taken else {
                        return;
                    };

                    let result = survey.submit().await;

                    // Always put the controller back so the page keeps rendering.
                    controller.set(Some(survey));

                    if let Err(err) = result {
                        tracing::debug!(error = %err, "submission not accepted");
                    }
                });
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SurveyTestHandles>() {
                handles.register(dispatch_intent, controller);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    let snapshot = controller.read().as_ref().map(SurveyController::snapshot);
    let ready_body = match snapshot {
        Some(snapshot) if snapshot.view == Screen::Results => rsx! {
            SurveyResults { vm: map_survey_results(&snapshot) }
        },
        Some(snapshot) => rsx! {
            SurveyForm { vm: map_survey_form(&snapshot), on_intent: dispatch_intent }
        },
        // Briefly empty while a submission holds the controller.
        None => rsx! {
            p { class: "survey-status", "Enviando..." }
        },
    };

    rsx! {
        div { class: "page survey-page", id: "survey-root",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "survey-status", "Cargando..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "survey-card survey-card--error",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Reintentar"
                        }
                    }
                },
                ViewState::Ready(()) => ready_body,
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SurveyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SurveyIntent>>>>,
    controller: Rc<RefCell<Option<Signal<Option<SurveyController>>>>>,
}

#[cfg(test)]
impl SurveyTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SurveyIntent>,
        controller: Signal<Option<SurveyController>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<SurveyIntent> {
        (*self.dispatch.borrow()).expect("survey dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<Option<SurveyController>> {
        (*self.controller.borrow()).expect("survey controller registered")
    }
}
