use std::time::Duration;

use serde_json::Value;

use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::submission::{CalculatorConfig, Patient, Session, SubmissionBundle};

use crate::error::SubmitError;
use crate::events::{SubmissionEvent, SubmissionOutcome};
use crate::transport::{Receipt, Transport};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitConfig {
    /// Version label stamped into every bundle's metadata.
    pub app_version: String,
    /// Upper bound on a single transport call.
    pub timeout: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct Submitter<T> {
    transport: T,
    config: SubmitConfig,
}

impl<T: Transport> Submitter<T> {
    pub fn new(transport: T, config: SubmitConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Assemble a bundle for a finished calculation, closing `session`
    /// now.
    pub fn bundle(
        &self,
        config: CalculatorConfig,
        patient: Patient,
        responses: Value,
        result: CalculationResult,
        session: &Session,
    ) -> Result<SubmissionBundle, SubmitError> {
        let metadata = session.metadata(&self.config.app_version, jiff::Timestamp::now());
        Ok(SubmissionBundle::new(
            config, patient, responses, result, metadata,
        )?)
    }

    /// Send a bundle through the transport. A call that does not finish
    /// within the configured timeout is abandoned.
    pub async fn submit(&self, bundle: &SubmissionBundle) -> Result<Receipt, SubmitError> {
        let payload = bundle.to_json()?;
        let transport = self.transport.name();

        SubmissionEvent::new(SubmissionOutcome::Started, bundle, transport).emit();

        let outcome = tokio::time::timeout(self.config.timeout, self.transport.send(&payload))
            .await
            .unwrap_or(Err(SubmitError::Timeout(self.config.timeout)));

        match &outcome {
            Ok(receipt) => {
                SubmissionEvent::new(SubmissionOutcome::Delivered, bundle, transport).emit();
                tracing::debug!(reference = %receipt.reference, "submission delivered");
            }
            Err(e) => {
                SubmissionEvent::new(SubmissionOutcome::Failed, bundle, transport)
                    .with_error(e)
                    .emit();
            }
        }
        outcome
    }
}
