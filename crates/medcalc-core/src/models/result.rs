use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::details::CalculatorDetails;
use crate::models::risk::RiskLevel;

/// Canonical output of every calculator.
///
/// Plain data only: no references back into the calculator, so it can be
/// serialized as-is for export and submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationResult {
    pub score: i32,
    /// Danish clinical interpretation of the score band.
    pub interpretation: String,
    /// Danish recommendations for the score band.
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<CalculatorDetails>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}

impl CalculationResult {
    pub fn new(score: i32, risk_level: RiskLevel, interpretation: impl Into<String>) -> Self {
        Self {
            score,
            interpretation: interpretation.into(),
            recommendations: Vec::new(),
            risk_level,
            details: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_recommendations<I, S>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations = recommendations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_details(mut self, details: CalculatorDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}
