//! medcalc-calculators
//!
//! Clinical score calculators. Pure computation, no I/O. Each calculator
//! declares its metadata, score range and response fields, and implements
//! a scoring function; validation and the range assertion are shared.

pub mod calculators;
pub mod error;
pub mod registry;
pub mod responses;
pub mod validation;

use serde_json::Value;

use medcalc_core::models::metadata::{CalculatorMetadata, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::validation::{ErrorCode, ValidationError, ValidationResult};

use error::CalculatorError;
use responses::Responses;
use validation::{FieldRule, validate_fields};

/// Trait implemented by each clinical calculator.
///
/// Implementors are stateless: they hold only immutable configuration, so
/// one instance can serve concurrent calls.
pub trait MedicalCalculator: Send + Sync {
    /// Registry key (e.g. "gcs", "westleycroupscore").
    fn id(&self) -> &'static str;

    fn metadata(&self) -> &CalculatorMetadata;

    /// Inclusive bounds every computed score must respect.
    fn score_range(&self) -> ScoreRange;

    /// The response fields this calculator accepts, in form order.
    fn fields(&self) -> &[FieldRule];

    /// Calculator-specific scoring. Called only through
    /// [`calculate`](Self::calculate) or
    /// [`calculate_unvalidated`](Self::calculate_unvalidated).
    fn calculate_score(&self, responses: &Responses<'_>)
    -> Result<CalculationResult, CalculatorError>;

    /// Validate a responses record. Never fails; problems are reported
    /// per field.
    fn validate(&self, responses: &Value) -> ValidationResult {
        let Some(fields) = responses.as_object() else {
            return ValidationResult::from_errors(vec![
                ValidationError::new(
                    "responses",
                    ErrorCode::InvalidInput,
                    "Besvarelsen skal være et objekt med felter",
                )
                .with_value(responses.clone()),
            ]);
        };
        ValidationResult::from_errors(validate_fields(self.fields(), fields))
    }

    /// Validate, score, then assert the score lies within
    /// [`score_range`](Self::score_range).
    fn calculate(&self, responses: &Value) -> Result<CalculationResult, CalculatorError> {
        let validation = self.validate(responses);
        if !validation.is_valid {
            return Err(CalculatorError::InvalidResponses {
                message: validation.joined_messages(),
                errors: validation.errors,
            });
        }
        self.calculate_unvalidated(responses)
    }

    /// Score without validating first. The range assertion still applies.
    fn calculate_unvalidated(&self, responses: &Value) -> Result<CalculationResult, CalculatorError> {
        let responses = Responses::new(responses)?;
        let result = self.calculate_score(&responses)?;

        let range = self.score_range();
        if !range.contains(result.score) {
            return Err(CalculatorError::ScoreOutOfRange {
                calculator: self.id().to_string(),
                score: result.score,
                range,
            });
        }
        Ok(result)
    }
}
