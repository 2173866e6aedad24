use std::sync::LazyLock;

use medcalc_core::models::details::{
    CalculatorDetails, CroupSeverity, CroupUrgency, WestleyCroupDetails,
};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// Westley Croup Score.
/// Level of consciousness 0–5, cyanosis 0–5, stridor 0–2, air entry 0–2,
/// retractions 0–3. Total 0–17.
pub struct WestleyCroup;

const FIELDS: [FieldRule; 5] = [
    FieldRule::integer("levelOfConsciousness", "Bevidsthedsniveau", 0, 5),
    FieldRule::integer("cyanosis", "Cyanose", 0, 5),
    FieldRule::integer("stridor", "Stridor", 0, 2),
    FieldRule::integer("airEntry", "Luftskifte", 0, 2),
    FieldRule::integer("retractions", "Indtrækninger", 0, 3),
];

const ITEMS: [&str; 5] = [
    "levelOfConsciousness",
    "cyanosis",
    "stridor",
    "airEntry",
    "retractions",
];

pub fn severity(score: i32) -> (CroupSeverity, CroupUrgency) {
    match score {
        ..=2 => (CroupSeverity::Mild, CroupUrgency::Observe),
        3..=5 => (CroupSeverity::Moderate, CroupUrgency::Treat),
        _ => (CroupSeverity::Severe, CroupUrgency::Critical),
    }
}

impl MedicalCalculator for WestleyCroup {
    fn id(&self) -> &'static str {
        "westleycroupscore"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "Westley Croup Score".to_string(),
            version: "1.0.0".to_string(),
            description: "Vurdering af sværhedsgrad af pseudocroup (krup) hos børn".to_string(),
            category: Category::Infection,
            estimated_duration: Some(2),
            references: vec![
                "Westley CR, Cotton EK, Brooks JG. Nebulized racemic epinephrine by IPPB for \
                 the treatment of croup: a double-blind study. Am J Dis Child. \
                 1978;132(5):484-487."
                    .to_string(),
            ],
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(0, 17)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let score = responses.sum(&ITEMS)?;
        let (severity, urgency) = severity(score);

        let (risk_level, interpretation, recommendations) = match severity {
            CroupSeverity::Mild => (
                RiskLevel::Mild,
                "Let krup. Observation er tilstrækkelig.",
                vec![
                    "Observation, eventuelt i hjemmet",
                    "Overvej en enkelt dosis dexamethason",
                ],
            ),
            CroupSeverity::Moderate => (
                RiskLevel::Moderate,
                "Moderat krup. Behandling er indiceret.",
                vec![
                    "Giv dexamethason",
                    "Overvej adrenalin-inhalation",
                    "Observation i mindst 4 timer efter behandling",
                ],
            ),
            CroupSeverity::Severe => (
                RiskLevel::Severe,
                "Svær krup med truende respirationssvigt.",
                vec![
                    "Akut adrenalin-inhalation og dexamethason",
                    "Tilkald anæstesi og pædiatrisk bagvagt",
                    "Indlæggelse med tæt monitorering",
                ],
            ),
        };

        Ok(CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::WestleyCroup(WestleyCroupDetails {
                severity,
                urgency,
            })))
    }
}
