use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use medcalc_core::models::submission::SubmissionBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Started,
    Delivered,
    Failed,
}

impl SubmissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Delivered => "delivered",
            Self::Failed => "failed",
        }
    }
}

/// A structured event for one submission attempt.
///
/// Carries identifiers and the score only. Patient fields and raw
/// responses never reach the logs.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionEvent {
    pub outcome: SubmissionOutcome,
    pub calculator_type: String,
    pub session_id: Uuid,
    pub score: i32,
    pub transport: String,
    pub error: Option<String>,
}

impl SubmissionEvent {
    pub fn new(
        outcome: SubmissionOutcome,
        bundle: &SubmissionBundle,
        transport: impl Into<String>,
    ) -> Self {
        Self {
            outcome,
            calculator_type: bundle.config.calculator_type.clone(),
            session_id: bundle.metadata.session_id,
            score: bundle.result.score,
            transport: transport.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            submission.outcome = self.outcome.as_str(),
            submission.calculator_type = %self.calculator_type,
            submission.session_id = %self.session_id,
            submission.score = self.score,
            submission.transport = %self.transport,
            submission.error = self.error.as_deref(),
            "submission event"
        );
    }
}
