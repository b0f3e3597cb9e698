use std::sync::Arc;

use services::SurveyStore;
use services::survey_controller::SAVE_FAILED_MESSAGE;
use storage::repository::{KeyValueRepository, Storage, StorageError};
use storage::survey_store::{RESPONDED_KEY, TALLY_KEY, TOTAL_KEY};
use survey_core::model::{
    OPTION_COUNT, QUESTION_COUNT, QUESTIONS, SurveyState, SurveyView as Screen,
};

use crate::vm::SurveyIntent;

use super::test_harness::{
    setup_view_harness, setup_view_harness_with_storage, setup_view_harness_with_store,
};

#[tokio::test(flavor = "current_thread")]
async fn fresh_survey_renders_form() {
    let mut harness = setup_view_harness();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("¡Tu opinión es importante!"), "missing title in {html}");
    assert!(
        html.contains("Faltan 100 respuestas"),
        "missing remaining label in {html}"
    );
    assert!(html.contains(QUESTIONS[0].text()), "missing first question in {html}");
    assert!(html.contains("p9o3"), "missing last radio id in {html}");
    assert!(!html.contains("¡Ojo!"), "unexpected alert in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn restored_response_renders_results() {
    let storage = Storage::in_memory();
    let tally = format!("[{}]", vec!["[1,2,0,0]"; QUESTION_COUNT].join(","));
    storage.kv.set(TALLY_KEY, &tally).await.unwrap();
    storage.kv.set(TOTAL_KEY, "3").await.unwrap();
    storage.kv.set(RESPONDED_KEY, "true").await.unwrap();

    let mut harness = setup_view_harness_with_storage(storage);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("¡Gracias por participar!"), "missing title in {html}");
    assert!(
        html.contains("Total de respuestas: 3 / 100"),
        "missing total in {html}"
    );
    assert!(html.contains("width: 66.7%"), "missing bar width in {html}");
    assert!(
        html.contains("width: 66.7%; animation-delay: 50ms"),
        "missing bar animation in {html}"
    );
    assert!(!html.contains("survey-submit"), "form still rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn restored_cap_renders_cap_notice() {
    let storage = Storage::in_memory();
    storage.kv.set(TOTAL_KEY, "100").await.unwrap();

    let mut harness = setup_view_harness_with_storage(storage);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Total de respuestas: 100 / 100"),
        "missing total in {html}"
    );
    assert!(
        html.contains("Se alcanzó el máximo de 100 respuestas."),
        "missing cap notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_storage_renders_error_state() {
    let storage = Storage::in_memory();
    storage.kv.set(TALLY_KEY, "{oops").await.unwrap();

    let mut harness = setup_view_harness_with_storage(storage);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("No se pudieron leer los resultados guardados."),
        "missing error in {html}"
    );
    assert!(html.contains("Reintentar"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn incomplete_submit_shows_alert_and_keeps_form() {
    let mut harness = setup_view_harness();
    harness.settle().await;

    harness
        .dispatch(SurveyIntent::Select {
            question: 0,
            option: 1,
        })
        .await;
    harness.dispatch(SurveyIntent::Submit).await;

    let html = harness.render();
    assert!(html.contains("¡Ojo! 👀"), "missing alert title in {html}");
    assert!(
        html.contains("Falta responder algunas preguntas"),
        "missing alert message in {html}"
    );
    assert!(
        html.contains("survey-question--missing"),
        "missing highlight in {html}"
    );
    assert_eq!(harness.storage.kv.get(TOTAL_KEY).await.unwrap(), None);
    assert_eq!(harness.celebration.count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn complete_submit_switches_to_results() {
    let mut harness = setup_view_harness();
    harness.settle().await;

    for question in 0..QUESTION_COUNT {
        harness
            .dispatch(SurveyIntent::Select {
                question,
                option: question % OPTION_COUNT,
            })
            .await;
    }
    harness.dispatch(SurveyIntent::Submit).await;

    let html = harness.render();
    assert!(html.contains("¡Gracias por participar!"), "missing results in {html}");
    assert!(
        html.contains("Total de respuestas: 1 / 100"),
        "missing total in {html}"
    );
    assert_eq!(
        harness.storage.kv.get(TOTAL_KEY).await.unwrap().as_deref(),
        Some("1")
    );
    assert_eq!(harness.celebration.count(), 1);

    let controller = harness.handles.controller();
    let view = harness
        .dom
        .in_runtime(|| controller.read().as_ref().map(|survey| survey.view()));
    assert_eq!(view, Some(Screen::Results));
}

struct FailingSaveStore;

#[async_trait::async_trait]
impl SurveyStore for FailingSaveStore {
    async fn load(&self) -> Result<SurveyState, StorageError> {
        Ok(SurveyState::default())
    }

    async fn save(&self, _state: &SurveyState) -> Result<(), StorageError> {
        Err(StorageError::Connection("disk full".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_save_keeps_form_and_shows_message() {
    let mut harness =
        setup_view_harness_with_store(Storage::in_memory(), Arc::new(FailingSaveStore));
    harness.settle().await;

    for question in 0..QUESTION_COUNT {
        harness
            .dispatch(SurveyIntent::Select {
                question,
                option: 0,
            })
            .await;
    }
    harness.dispatch(SurveyIntent::Submit).await;

    let html = harness.render();
    assert!(html.contains(SAVE_FAILED_MESSAGE), "missing save error in {html}");
    assert!(html.contains("survey-submit"), "form not rendered in {html}");
    assert!(
        html.contains("Faltan 100 respuestas"),
        "total changed in {html}"
    );
    assert_eq!(harness.celebration.count(), 0);
}
