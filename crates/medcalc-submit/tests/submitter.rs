use std::sync::Mutex;
use std::time::Duration;

use serde_json::{Value, json};

use medcalc_core::models::metadata::{CalculatorMetadata, Category};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;
use medcalc_core::models::submission::{CalculatorConfig, Patient, Session, SubmissionBundle};
use medcalc_submit::error::SubmitError;
use medcalc_submit::outbox::OutboxTransport;
use medcalc_submit::submitter::{SubmitConfig, Submitter};
use medcalc_submit::transport::{BoxFuture, Receipt, Transport};

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<Value>>,
}

impl Transport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    fn send<'a>(&'a self, payload: &'a Value) -> BoxFuture<'a, Result<Receipt, SubmitError>> {
        let reference = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(payload.clone());
            format!("#{}", sent.len())
        };
        Box::pin(async move { Ok(Receipt { reference }) })
    }
}

struct FailingTransport;

impl Transport for FailingTransport {
    fn name(&self) -> &str {
        "failing"
    }

    fn send<'a>(&'a self, _payload: &'a Value) -> BoxFuture<'a, Result<Receipt, SubmitError>> {
        Box::pin(async { Err(SubmitError::Transport("connection refused".to_string())) })
    }
}

struct SlowTransport;

impl Transport for SlowTransport {
    fn name(&self) -> &str {
        "slow"
    }

    fn send<'a>(&'a self, _payload: &'a Value) -> BoxFuture<'a, Result<Receipt, SubmitError>> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(Receipt {
                reference: "late".to_string(),
            })
        })
    }
}

fn config(timeout: Duration) -> SubmitConfig {
    SubmitConfig {
        app_version: "9.9.9".to_string(),
        timeout,
    }
}

fn gcs_bundle<T: Transport>(submitter: &Submitter<T>) -> SubmissionBundle {
    submitter
        .bundle(
            CalculatorConfig {
                calculator_type: "gcs".to_string(),
                metadata: CalculatorMetadata {
                    name: "Glasgow Coma Scale".to_string(),
                    version: "1.0.0".to_string(),
                    description: "Bevidsthedsniveau".to_string(),
                    category: Category::General,
                    estimated_duration: Some(2),
                    references: Vec::new(),
                },
            },
            Patient::default(),
            json!({"eyeOpening": 4, "verbalResponse": 5, "motorResponse": 6}),
            CalculationResult::new(15, RiskLevel::Low, "Normal bevidsthed"),
            &Session::start(),
        )
        .unwrap()
}

#[test]
fn bundle_is_stamped_with_app_version() {
    let submitter = Submitter::new(RecordingTransport::default(), config(Duration::from_secs(1)));
    let bundle = gcs_bundle(&submitter);
    assert_eq!(bundle.metadata.version, "9.9.9");
    assert!(bundle.metadata.duration >= 0);
}

#[test]
fn bundle_rejects_non_object_responses() {
    let submitter = Submitter::new(RecordingTransport::default(), SubmitConfig::default());
    let mut bundle = gcs_bundle(&submitter);
    bundle.responses = json!("not an object");
    let err = submitter
        .bundle(
            bundle.config,
            bundle.patient,
            bundle.responses,
            bundle.result,
            &Session::start(),
        )
        .unwrap_err();
    assert!(matches!(err, SubmitError::Bundle(_)));
}

#[tokio::test]
async fn submit_sends_the_serialized_bundle() {
    let submitter = Submitter::new(RecordingTransport::default(), config(Duration::from_secs(1)));
    let bundle = gcs_bundle(&submitter);

    let receipt = submitter.submit(&bundle).await.unwrap();
    assert_eq!(receipt.reference, "#1");

    let sent = submitter.transport().sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], bundle.to_json().unwrap());
    assert_eq!(sent[0]["config"]["calculatorType"], "gcs");
}

#[tokio::test]
async fn transport_errors_are_returned() {
    let submitter = Submitter::new(FailingTransport, config(Duration::from_secs(1)));
    let bundle = gcs_bundle(&submitter);
    let err = submitter.submit(&bundle).await.unwrap_err();
    assert_eq!(err.to_string(), "transport error: connection refused");
}

#[tokio::test]
async fn slow_transports_time_out() {
    let submitter = Submitter::new(SlowTransport, config(Duration::from_millis(20)));
    let bundle = gcs_bundle(&submitter);
    let err = submitter.submit(&bundle).await.unwrap_err();
    assert!(matches!(err, SubmitError::Timeout(d) if d == Duration::from_millis(20)));
}

#[tokio::test]
async fn outbox_writes_one_file_per_session() {
    let dir = tempfile::tempdir().unwrap();
    let outbox = OutboxTransport::new(dir.path().join("outbox"));
    let submitter = Submitter::new(outbox, config(Duration::from_secs(5)));
    let bundle = gcs_bundle(&submitter);

    let receipt = submitter.submit(&bundle).await.unwrap();

    let expected = dir
        .path()
        .join("outbox")
        .join(format!("{}.json", bundle.metadata.session_id));
    assert_eq!(receipt.reference, expected.display().to_string());

    let written: SubmissionBundle =
        serde_json::from_slice(&std::fs::read(&expected).unwrap()).unwrap();
    assert_eq!(written, bundle);
    assert_eq!(std::fs::read_dir(dir.path().join("outbox")).unwrap().count(), 1);
}

#[tokio::test]
async fn outbox_requires_a_session_id() {
    let dir = tempfile::tempdir().unwrap();
    let outbox = OutboxTransport::new(dir.path());
    let err = outbox.send(&json!({"metadata": {}})).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}
