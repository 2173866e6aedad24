use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::metadata::CalculatorMetadata;
use crate::models::result::CalculationResult;

/// Calculator identity carried alongside a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorConfig {
    /// Registry key, e.g. `gcs`.
    pub calculator_type: String,
    #[serde(flatten)]
    pub metadata: CalculatorMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Danish personal identification number.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cpr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionMetadata {
    pub session_id: Uuid,
    /// Seconds from session start to submission.
    pub duration: i64,
    /// Application version that produced the result.
    pub version: String,
    pub timestamp: jiff::Timestamp,
}

/// A questionnaire session: started when the form is opened, closed when
/// the result is bundled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub started_at: jiff::Timestamp,
}

impl Session {
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
        }
    }

    /// Metadata for a submission made at `at`. A clock that went
    /// backwards yields a zero duration.
    pub fn metadata(&self, version: impl Into<String>, at: jiff::Timestamp) -> SubmissionMetadata {
        let duration = at.duration_since(self.started_at).as_secs().max(0);
        SubmissionMetadata {
            session_id: self.id,
            duration,
            version: version.into(),
            timestamp: at,
        }
    }
}

/// Everything handed to the submission transport and export formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionBundle {
    pub config: CalculatorConfig,
    pub patient: Patient,
    pub responses: serde_json::Value,
    pub result: CalculationResult,
    pub metadata: SubmissionMetadata,
}

impl SubmissionBundle {
    pub fn new(
        config: CalculatorConfig,
        patient: Patient,
        responses: serde_json::Value,
        result: CalculationResult,
        metadata: SubmissionMetadata,
    ) -> Result<Self, CoreError> {
        if !responses.is_object() {
            return Err(CoreError::ResponsesNotObject);
        }
        Ok(Self {
            config,
            patient,
            responses,
            result,
            metadata,
        })
    }

    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}
