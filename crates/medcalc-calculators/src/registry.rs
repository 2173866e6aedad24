//! Lookup from calculator-type key to calculator instance.
//!
//! Calculators are stateless unit structs held in statics, so the registry
//! has no mutable state and hands out `&'static` references.

use serde_json::Value;

use medcalc_core::models::result::CalculationResult;

use crate::MedicalCalculator;
use crate::calculators::{
    audit::Audit, danpss::Danpss, epds::Epds, gcs::Gcs, ipss::Ipss, lrti::Lrti, puqe::Puqe,
    score2::Score2, westley_croup::WestleyCroup, who5::Who5,
};
use crate::error::CalculatorError;

/// Registered calculators, in menu order.
static CALCULATORS: [&dyn MedicalCalculator; 10] = [
    &Audit,
    &Danpss,
    &Epds,
    &Gcs,
    &Ipss,
    &Puqe,
    &WestleyCroup,
    &Who5,
    &Lrti,
    &Score2,
];

/// Keys the application knows but that are not scoring calculators.
const UNSCORED_TYPES: [&str; 1] = ["medicinboern"];

/// Return all registered calculators.
pub fn all_calculators() -> Vec<&'static dyn MedicalCalculator> {
    CALCULATORS.to_vec()
}

/// Registered calculator keys, in menu order.
pub fn available_calculator_types() -> Vec<&'static str> {
    CALCULATORS.iter().map(|c| c.id()).collect()
}

/// Look up a calculator by key.
pub fn get_calculator(
    calculator_type: &str,
) -> Result<&'static dyn MedicalCalculator, CalculatorError> {
    if let Some(calculator) = CALCULATORS.iter().copied().find(|c| c.id() == calculator_type) {
        return Ok(calculator);
    }
    if UNSCORED_TYPES.contains(&calculator_type) {
        return Err(CalculatorError::NotImplemented(calculator_type.to_string()));
    }
    Err(CalculatorError::UnknownCalculatorType(
        calculator_type.to_string(),
    ))
}

/// Look up and run a calculator. Every failure is wrapped with the
/// calculator type so it can be traced back from logs.
pub fn calculate_medical_score(
    calculator_type: &str,
    responses: &Value,
) -> Result<CalculationResult, CalculatorError> {
    let outcome = get_calculator(calculator_type).and_then(|c| c.calculate(responses));

    match outcome {
        Ok(result) => {
            tracing::debug!(
                calculator = calculator_type,
                score = result.score,
                risk_level = %result.risk_level,
                "calculation completed"
            );
            Ok(result)
        }
        Err(e) => {
            match &e {
                CalculatorError::InvalidResponses { errors, .. } => tracing::warn!(
                    calculator = calculator_type,
                    error_count = errors.len(),
                    "calculation rejected invalid responses"
                ),
                other => tracing::error!(
                    calculator = calculator_type,
                    error = %other,
                    "calculation failed"
                ),
            }
            Err(CalculatorError::Calculation {
                calculator_type: calculator_type.to_string(),
                source: Box::new(e),
            })
        }
    }
}
