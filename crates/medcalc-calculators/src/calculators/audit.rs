use std::sync::LazyLock;

use medcalc_core::models::details::{AuditDetails, CalculatorDetails};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// AUDIT: Alcohol Use Disorders Identification Test.
/// 10 questions, each 0–4. Total 0–40, banded into the four WHO risk zones.
pub struct Audit;

const FIELDS: [FieldRule; 10] = [
    FieldRule::integer("question1", "Hyppighed af alkoholindtag", 0, 4),
    FieldRule::integer("question2", "Antal genstande på en typisk dag", 0, 4),
    FieldRule::integer("question3", "Hyppighed af 6 eller flere genstande", 0, 4),
    FieldRule::integer("question4", "Manglende evne til at stoppe", 0, 4),
    FieldRule::integer("question5", "Svigtende forpligtelser på grund af alkohol", 0, 4),
    FieldRule::integer("question6", "Behov for en morgendrink", 0, 4),
    FieldRule::integer("question7", "Skyldfølelse efter drikning", 0, 4),
    FieldRule::integer("question8", "Hukommelsestab efter drikning", 0, 4),
    FieldRule::integer("question9", "Skade på dig selv eller andre", 0, 4),
    FieldRule::integer("question10", "Bekymring fra andre", 0, 4),
];

const CONSUMPTION: [&str; 3] = ["question1", "question2", "question3"];
const DEPENDENCE: [&str; 3] = ["question4", "question5", "question6"];
const HARM: [&str; 4] = ["question7", "question8", "question9", "question10"];

/// WHO risk zone (1–4) for a total score.
pub fn risk_zone(score: i32) -> u8 {
    match score {
        ..=7 => 1,
        8..=15 => 2,
        16..=19 => 3,
        _ => 4,
    }
}

impl MedicalCalculator for Audit {
    fn id(&self) -> &'static str {
        "audit"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "AUDIT".to_string(),
            version: "2.0.0".to_string(),
            description: "Alcohol Use Disorders Identification Test: screening for risikabelt \
                          og skadeligt alkoholforbrug"
                .to_string(),
            category: Category::Psychology,
            estimated_duration: Some(5),
            references: vec![
                "Babor TF, Higgins-Biddle JC, Saunders JB, Monteiro MG. AUDIT: The Alcohol Use \
                 Disorders Identification Test. 2nd ed. World Health Organization; 2001."
                    .to_string(),
            ],
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(0, 40)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let consumption_score = responses.sum(&CONSUMPTION)?;
        let dependence_score = responses.sum(&DEPENDENCE)?;
        let harm_score = responses.sum(&HARM)?;
        let score = consumption_score + dependence_score + harm_score;

        let zone = risk_zone(score);
        let (risk_level, interpretation, recommendations) = match zone {
            1 => (
                RiskLevel::Low,
                "Ikke tegn på alkoholafhængighed. Alkoholforbruget er forbundet med lav risiko.",
                vec![
                    "Informér om Sundhedsstyrelsens anbefalinger for alkoholindtag",
                    "Ingen yderligere intervention nødvendig",
                ],
            ),
            2 => (
                RiskLevel::Medium,
                "Risikabelt alkoholforbrug uden tegn på afhængighed.",
                vec![
                    "Giv kort rådgivning om at nedsætte alkoholforbruget",
                    "Tilbyd opfølgning hos egen læge",
                ],
            ),
            3 => (
                RiskLevel::High,
                "Skadeligt alkoholforbrug. Mulig alkoholafhængighed.",
                vec![
                    "Kort rådgivning og motiverende samtale",
                    "Løbende opfølgning af alkoholforbruget",
                    "Overvej henvisning til alkoholbehandling",
                ],
            ),
            _ => (
                RiskLevel::VeryHigh,
                "Sandsynlig alkoholafhængighed.",
                vec![
                    "Henvis til alkoholbehandling med henblik på udredning",
                    "Vurder behov for abstinensbehandling",
                ],
            ),
        };

        let dependence_indicated = dependence_score >= 4;
        let mut result = CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Audit(AuditDetails {
                consumption_score,
                dependence_score,
                harm_score,
                risk_zone: zone,
                hazardous_drinking: score >= 8,
                dependence_indicated,
            }));

        if dependence_indicated {
            result = result.with_warning("Forhøjet score på afhængighedsspørgsmålene (4-6)");
        }
        if responses.sum(&["question9", "question10"])? > 0 {
            result = result.with_warning("Alkoholrelateret skade er angivet (spørgsmål 9-10)");
        }
        Ok(result)
    }
}
