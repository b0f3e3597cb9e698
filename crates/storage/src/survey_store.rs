use std::sync::Arc;

use async_trait::async_trait;
use survey_core::model::{RESPONSE_CAP, SurveyState, TallyMatrix};

use crate::repository::{KeyValueRepository, StorageError};

/// Key holding the JSON-encoded 10×4 tally matrix.
pub const TALLY_KEY: &str = "resultadosEncuesta";
/// Key holding the decimal response count.
pub const TOTAL_KEY: &str = "totalRespuestasEncuesta";
/// Key holding the JSON-encoded "already responded" flag.
pub const RESPONDED_KEY: &str = "yaRespondioEncuesta";

/// Durable mirror of the survey state.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Load the persisted survey state. Absent entries fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if a stored value is malformed,
    /// or other storage errors if the backend is unavailable.
    async fn load(&self) -> Result<SurveyState, StorageError>;

    /// Write all three survey values.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any write fails. Earlier writes are not
    /// rolled back.
    async fn save(&self, state: &SurveyState) -> Result<(), StorageError>;
}

/// `SurveyStore` over three independent key-value entries.
#[derive(Clone)]
pub struct KeyValueSurveyStore {
    kv: Arc<dyn KeyValueRepository>,
}

impl KeyValueSurveyStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl SurveyStore for KeyValueSurveyStore {
    async fn load(&self) -> Result<SurveyState, StorageError> {
        let tally = match self.kv.get(TALLY_KEY).await? {
            Some(raw) => decode_tally(&raw)?,
            None => TallyMatrix::default(),
        };
        let total = match self.kv.get(TOTAL_KEY).await? {
            Some(raw) => decode_total(&raw)?,
            None => 0,
        };
        let responded = match self.kv.get(RESPONDED_KEY).await? {
            Some(raw) => decode_responded(&raw)?,
            None => false,
        };

        tracing::debug!(total, responded, "survey state loaded");
        Ok(SurveyState::from_persisted(tally, total, responded))
    }

    async fn save(&self, state: &SurveyState) -> Result<(), StorageError> {
        let tally = serde_json::to_string(state.tally())
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.set(TALLY_KEY, &tally).await?;
        self.kv
            .set(TOTAL_KEY, &state.total_responses().to_string())
            .await?;
        let responded = serde_json::to_string(&state.has_responded())
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv.set(RESPONDED_KEY, &responded).await?;

        tracing::debug!(total = state.total_responses(), "survey state saved");
        Ok(())
    }
}

fn decode_tally(raw: &str) -> Result<TallyMatrix, StorageError> {
    serde_json::from_str(raw)
        .map_err(|err| StorageError::Serialization(format!("{TALLY_KEY}: {err}")))
}

fn decode_total(raw: &str) -> Result<u32, StorageError> {
    let total: u32 = raw
        .trim()
        .parse()
        .map_err(|err| StorageError::Serialization(format!("{TOTAL_KEY}: {err}")))?;
    if total > RESPONSE_CAP {
        return Err(StorageError::Serialization(format!(
            "{TOTAL_KEY}: {total} exceeds the cap of {RESPONSE_CAP}"
        )));
    }
    Ok(total)
}

fn decode_responded(raw: &str) -> Result<bool, StorageError> {
    serde_json::from_str(raw)
        .map_err(|err| StorageError::Serialization(format!("{RESPONDED_KEY}: {err}")))
}
