use std::sync::Arc;

use services::{Celebration, SurveyStore};

pub trait UiApp: Send + Sync {
    fn survey_store(&self) -> Arc<dyn SurveyStore>;
    fn celebration(&self) -> Arc<dyn Celebration>;
}

#[derive(Clone)]
pub struct AppContext {
    survey_store: Arc<dyn SurveyStore>,
    celebration: Arc<dyn Celebration>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            survey_store: app.survey_store(),
            celebration: app.celebration(),
        }
    }

    #[must_use]
    pub fn survey_store(&self) -> Arc<dyn SurveyStore> {
        Arc::clone(&self.survey_store)
    }

    #[must_use]
    pub fn celebration(&self) -> Arc<dyn Celebration> {
        Arc::clone(&self.celebration)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
