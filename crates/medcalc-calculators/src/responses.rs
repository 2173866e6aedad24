use serde_json::{Map, Value};

use crate::error::CalculatorError;
use crate::validation::coerce_number;

/// Largest magnitude an integer field may carry into a scoring function.
/// Keeps sums of unvalidated fields far from `i32` overflow.
const MAX_INTEGER_MAGNITUDE: f64 = 1_000_000.0;

/// Read-only view over a responses record for scoring functions.
///
/// Coerces values the same way validation does, but does not check
/// ranges: scoring on unvalidated input is allowed and the range
/// assertion catches any nonsense total.
#[derive(Debug, Clone, Copy)]
pub struct Responses<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Responses<'a> {
    pub fn new(value: &'a Value) -> Result<Self, CalculatorError> {
        value
            .as_object()
            .map(|fields| Self { fields })
            .ok_or_else(|| {
                CalculatorError::MalformedResponses("responses must be a JSON object".to_string())
            })
    }

    pub fn number(&self, field: &str) -> Result<f64, CalculatorError> {
        let value = self
            .fields
            .get(field)
            .ok_or_else(|| CalculatorError::MalformedResponses(format!("missing field '{field}'")))?;
        coerce_number(value).ok_or_else(|| {
            CalculatorError::MalformedResponses(format!("field '{field}' is not a number"))
        })
    }

    pub fn integer(&self, field: &str) -> Result<i32, CalculatorError> {
        let n = self.number(field)?;
        if n.fract() != 0.0 || n.abs() > MAX_INTEGER_MAGNITUDE {
            return Err(CalculatorError::MalformedResponses(format!(
                "field '{field}' is not a whole number of sane magnitude"
            )));
        }
        Ok(n as i32)
    }

    pub fn choice(&self, field: &str) -> Result<&'a str, CalculatorError> {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| CalculatorError::MalformedResponses(format!("field '{field}' is not text")))
    }

    /// Sum of integer fields.
    pub fn sum(&self, fields: &[&str]) -> Result<i32, CalculatorError> {
        let mut total = 0;
        for field in fields {
            total += self.integer(field)?;
        }
        Ok(total)
    }
}
