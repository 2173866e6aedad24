use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical area a calculator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Psychology,
    Infection,
    Pregnancy,
    General,
}

impl Category {
    /// Danish label shown in menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Psychology => "Psykologi",
            Self::Infection => "Infektion",
            Self::Pregnancy => "Graviditet",
            Self::General => "Generelt",
        }
    }
}

/// Static descriptive record for a calculator. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub category: Category,
    /// Typical time to complete the questionnaire, in minutes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub estimated_duration: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub references: Vec<String>,
}

/// Inclusive integer bounds on a calculator's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, score: i32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

impl std::fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
