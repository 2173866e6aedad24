//! Calculator-specific result details.
//!
//! Every variant is a named-field record so exports and the web UI can
//! render sub-scores and flags without knowing the scoring rules.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "calculator", rename_all = "snake_case")]
#[ts(export)]
pub enum CalculatorDetails {
    Audit(AuditDetails),
    Danpss(DanpssDetails),
    Epds(EpdsDetails),
    Gcs(GcsDetails),
    Ipss(IpssDetails),
    Lrti(LrtiDetails),
    Puqe(PuqeDetails),
    Score2(Score2Details),
    WestleyCroup(WestleyCroupDetails),
    Who5(Who5Details),
}

/// Four-step symptom grading shared by several questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomSeverity {
    #[serde(rename = "none")]
    NoSymptoms,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuditDetails {
    /// Questions 1–3.
    pub consumption_score: i32,
    /// Questions 4–6.
    pub dependence_score: i32,
    /// Questions 7–10.
    pub harm_score: i32,
    /// WHO risk zone I–IV.
    pub risk_zone: u8,
    pub hazardous_drinking: bool,
    pub dependence_indicated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DanpssDetails {
    pub depression_score: i32,
    pub anxiety_score: i32,
    pub depression_severity: SymptomSeverity,
    pub anxiety_severity: SymptomSeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EpdsDetails {
    pub suicidal_thoughts: bool,
    pub urgent_referral: bool,
    /// EPDS-3A anxiety subscale (questions 3–5).
    pub anxiety_subscore: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConsciousnessLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GcsDetails {
    pub eye_opening: i32,
    pub verbal_response: i32,
    pub motor_response: i32,
    pub consciousness_level: ConsciousnessLevel,
    /// Component notation, e.g. `E4V5M6`.
    pub notation: String,
    pub airway_at_risk: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QualityOfLifeImpact {
    Minimal,
    Moderate,
    Significant,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IpssDetails {
    pub symptom_score: i32,
    pub symptom_severity: SymptomSeverity,
    pub quality_of_life: i32,
    pub quality_of_life_impact: QualityOfLifeImpact,
    /// Incomplete emptying, intermittency, weak stream, straining.
    pub voiding_score: i32,
    /// Frequency, urgency, nocturia.
    pub storage_score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LrtiCriterion {
    Fever,
    Tachypnea,
    Tachycardia,
    Hypotension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LrtiDetails {
    pub antibiotic_recommended: bool,
    pub criteria_met: Vec<LrtiCriterion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PuqeDetails {
    pub nausea: i32,
    pub vomiting: i32,
    pub retching: i32,
    pub severity: SymptomSeverity,
    pub hyperemesis_suspected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Score2AgeGroup {
    #[serde(rename = "under_50")]
    Under50,
    #[serde(rename = "50_to_69")]
    From50To69,
    #[serde(rename = "70_plus")]
    From70,
}

/// ESC 2021 risk category for apparently healthy persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Score2Category {
    LowToModerate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Score2Details {
    pub table_match: bool,
    pub age_group: Score2AgeGroup,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub risk_category: Option<Score2Category>,
    pub gender: String,
    pub smoking_status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CroupSeverity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CroupUrgency {
    Observe,
    Treat,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WestleyCroupDetails {
    pub severity: CroupSeverity,
    pub urgency: CroupUrgency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WellBeingLevel {
    Poor,
    BelowAverage,
    Average,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Who5Details {
    pub raw_score: i32,
    pub percentage_score: i32,
    pub well_being_level: WellBeingLevel,
    pub depression_risk: bool,
    pub screening_recommended: bool,
}
