//! Field rules and the validation primitives every calculator shares.
//!
//! A calculator declares its inputs as a slice of [`FieldRule`]s; the
//! same evaluation turns any JSON record into a list of
//! [`ValidationError`]s, so all calculators speak one error vocabulary.

use serde::Serialize;
use serde_json::{Map, Value};

use medcalc_core::models::validation::{ErrorCode, ValidationError};

/// The domain of a single response field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Whole number in `[min, max]`.
    Integer { min: i32, max: i32 },
    /// Finite number in `[min, max]`, e.g. a temperature.
    Number { min: f64, max: f64 },
    /// One of a fixed set of labels.
    Choice { options: &'static [&'static str] },
}

/// A declared response field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRule {
    pub name: &'static str,
    /// Danish label used in messages.
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldRule {
    pub const fn integer(name: &'static str, label: &'static str, min: i32, max: i32) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Integer { min, max },
        }
    }

    pub const fn number(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number { min, max },
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice { options },
        }
    }

    /// Check one value against this rule.
    pub fn check(&self, value: Option<&Value>) -> Vec<ValidationError> {
        match self.kind {
            FieldKind::Integer { min, max } => validate_numeric_range(
                self.name,
                self.label,
                value,
                f64::from(min),
                f64::from(max),
                true,
            ),
            FieldKind::Number { min, max } => {
                validate_numeric_range(self.name, self.label, value, min, max, false)
            }
            FieldKind::Choice { options } => validate_choice(self.name, self.label, value, options),
        }
    }
}

/// Coerce a JSON value to a finite number.
///
/// Numbers and numeric strings coerce; everything else does not.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// `None` for absent, `null` and blank-string values.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    })
}

/// Check that `value` is present, numeric (whole when `is_integer`) and
/// inside `[min, max]`. Returns at most one error.
pub fn validate_numeric_range(
    field: &str,
    label: &str,
    value: Option<&Value>,
    min: f64,
    max: f64,
    is_integer: bool,
) -> Vec<ValidationError> {
    let Some(raw) = present(value) else {
        return vec![ValidationError::new(
            field,
            ErrorCode::Required,
            format!("{label} skal udfyldes"),
        )];
    };

    let Some(number) = coerce_number(raw) else {
        return vec![
            ValidationError::new(field, ErrorCode::InvalidType, format!("{label} skal være et tal"))
                .with_value(raw.clone()),
        ];
    };

    if is_integer && number.fract() != 0.0 {
        return vec![
            ValidationError::new(
                field,
                ErrorCode::InvalidType,
                format!("{label} skal være et helt tal"),
            )
            .with_value(raw.clone()),
        ];
    }

    if number < min || number > max {
        return vec![
            ValidationError::new(
                field,
                ErrorCode::OutOfRange,
                format!(
                    "{label} skal være mellem {} og {}",
                    format_bound(min),
                    format_bound(max)
                ),
            )
            .with_value(raw.clone()),
        ];
    }

    Vec::new()
}

/// Check that `value` is one of `options`.
pub fn validate_choice(
    field: &str,
    label: &str,
    value: Option<&Value>,
    options: &[&str],
) -> Vec<ValidationError> {
    let Some(raw) = present(value) else {
        return vec![ValidationError::new(
            field,
            ErrorCode::Required,
            format!("{label} skal udfyldes"),
        )];
    };

    let Some(text) = raw.as_str() else {
        return vec![
            ValidationError::new(
                field,
                ErrorCode::InvalidType,
                format!("{label} skal være en tekstværdi"),
            )
            .with_value(raw.clone()),
        ];
    };

    if !options.contains(&text) {
        return vec![
            ValidationError::new(
                field,
                ErrorCode::InvalidOption,
                format!("{label} skal være en af: {}", options.join(", ")),
            )
            .with_value(raw.clone()),
        ];
    }

    Vec::new()
}

/// Evaluate every rule, then reject fields no rule declares.
pub fn validate_fields(rules: &[FieldRule], responses: &Map<String, Value>) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = rules
        .iter()
        .flat_map(|rule| rule.check(responses.get(rule.name)))
        .collect();

    for (name, value) in responses {
        if !rules.iter().any(|rule| rule.name == name.as_str()) {
            errors.push(
                ValidationError::new(
                    name.as_str(),
                    ErrorCode::UnknownField,
                    format!("Ukendt felt: {name}"),
                )
                .with_value(value.clone()),
            );
        }
    }

    errors
}

/// Danish number formatting for messages: `38,5`, `100`.
fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string().replace('.', ",")
    }
}
