use thiserror::Error;

use medcalc_core::models::metadata::ScoreRange;
use medcalc_core::models::validation::ValidationError;

/// Programming and consistency errors. Expected, user-facing problems are
/// reported through `ValidationResult` instead.
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// `calculate` was called with responses that fail validation.
    #[error("{message}")]
    InvalidResponses {
        message: String,
        errors: Vec<ValidationError>,
    },

    /// The scoring function produced a score outside the declared range.
    #[error(
        "internal consistency error: {calculator} produced score {score}, expected a value in {range}"
    )]
    ScoreOutOfRange {
        calculator: String,
        score: i32,
        range: ScoreRange,
    },

    /// Responses could not be read by the scoring path at all.
    #[error("malformed responses: {0}")]
    MalformedResponses(String),

    #[error("unknown calculator type: {0}")]
    UnknownCalculatorType(String),

    #[error("calculator type '{0}' is known but has no scoring engine")]
    NotImplemented(String),

    #[error("SCORE2 table unavailable: {0}")]
    Table(String),

    /// A failure from `calculate_medical_score`, prefixed with the type.
    #[error("{calculator_type}: {source}")]
    Calculation {
        calculator_type: String,
        #[source]
        source: Box<CalculatorError>,
    },
}
