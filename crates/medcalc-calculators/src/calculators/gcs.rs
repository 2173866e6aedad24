use std::sync::LazyLock;

use medcalc_core::models::details::{CalculatorDetails, ConsciousnessLevel, GcsDetails};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// GCS: Glasgow Coma Scale.
/// Eye opening 1–4, verbal response 1–5, motor response 1–6. Total 3–15.
pub struct Gcs;

const FIELDS: [FieldRule; 3] = [
    FieldRule::integer("eyeOpening", "Øjenåbning", 1, 4),
    FieldRule::integer("verbalResponse", "Verbalt respons", 1, 5),
    FieldRule::integer("motorResponse", "Motorisk respons", 1, 6),
];

/// Consciousness band for a total score.
pub fn consciousness_level(score: i32) -> ConsciousnessLevel {
    match score {
        ..=8 => ConsciousnessLevel::Severe,
        9..=12 => ConsciousnessLevel::Moderate,
        13..=14 => ConsciousnessLevel::Mild,
        _ => ConsciousnessLevel::Normal,
    }
}

impl MedicalCalculator for Gcs {
    fn id(&self) -> &'static str {
        "gcs"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "Glasgow Coma Scale".to_string(),
            version: "1.0.0".to_string(),
            description: "Vurdering af bevidsthedsniveau ud fra øjenåbning, verbalt og motorisk respons"
                .to_string(),
            category: Category::General,
            estimated_duration: Some(2),
            references: vec![
                "Teasdale G, Jennett B. Assessment of coma and impaired consciousness. \
                 Lancet. 1974;2(7872):81-84."
                    .to_string(),
            ],
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(3, 15)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let eye_opening = responses.integer("eyeOpening")?;
        let verbal_response = responses.integer("verbalResponse")?;
        let motor_response = responses.integer("motorResponse")?;
        let score = eye_opening + verbal_response + motor_response;

        let level = consciousness_level(score);
        let (risk_level, interpretation, recommendations) = match level {
            ConsciousnessLevel::Severe => (
                RiskLevel::Severe,
                "Svær bevidsthedspåvirkning (GCS ≤ 8). Patienten kan ikke beskytte egne luftveje.",
                vec![
                    "Sikr frie luftveje og overvej intubation",
                    "Akut CT-scanning af cerebrum",
                    "Tilkald anæstesi og neurokirurgisk vagt",
                ],
            ),
            ConsciousnessLevel::Moderate => (
                RiskLevel::Moderate,
                "Moderat bevidsthedspåvirkning",
                vec![
                    "Tæt neurologisk observation",
                    "Overvej CT-scanning af cerebrum",
                    "Gentag GCS hvert 15.-30. minut",
                ],
            ),
            ConsciousnessLevel::Mild => (
                RiskLevel::Mild,
                "Let bevidsthedspåvirkning",
                vec!["Neurologisk observation", "Gentag GCS regelmæssigt"],
            ),
            ConsciousnessLevel::Normal => (
                RiskLevel::Low,
                "Normal bevidsthed",
                vec!["Ingen akut intervention nødvendig"],
            ),
        };

        Ok(CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Gcs(GcsDetails {
                eye_opening,
                verbal_response,
                motor_response,
                consciousness_level: level,
                notation: format!("E{eye_opening}V{verbal_response}M{motor_response}"),
                airway_at_risk: score <= 8,
            })))
    }
}
