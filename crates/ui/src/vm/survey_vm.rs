use std::sync::Arc;

use services::{Celebration, SurveyController, SurveyError, SurveyStore};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurveyIntent {
    Select { question: usize, option: usize },
    Submit,
}

/// # Errors
///
/// Returns `ViewError::Storage` when the persisted survey cannot be read.
/// Any other controller error maps to `ViewError::Unknown`.
pub async fn load_survey(
    store: Arc<dyn SurveyStore>,
    celebration: Arc<dyn Celebration>,
) -> Result<SurveyController, ViewError> {
    match SurveyController::load(store, celebration).await {
        Ok(controller) => Ok(controller),
        Err(SurveyError::Storage(_)) => Err(ViewError::Storage),
        Err(SurveyError::Closed | SurveyError::Answer(_) | SurveyError::Rejected(_)) => {
            Err(ViewError::Unknown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::NoCelebration;
    use storage::repository::{KeyValueRepository, Storage};
    use storage::survey_store::TOTAL_KEY;
    use survey_core::model::SurveyView;

    #[tokio::test]
    async fn malformed_storage_maps_to_storage_error() {
        let storage = Storage::in_memory();
        storage.kv.set(TOTAL_KEY, "many").await.unwrap();

        let result = load_survey(storage.survey, Arc::new(NoCelebration)).await;
        assert!(matches!(result, Err(ViewError::Storage)));
    }

    #[tokio::test]
    async fn fresh_storage_loads_answering_controller() {
        let storage = Storage::in_memory();
        let controller = load_survey(storage.survey, Arc::new(NoCelebration))
            .await
            .unwrap();
        assert_eq!(controller.view(), SurveyView::Answering);
    }
}
