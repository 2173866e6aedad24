use std::sync::LazyLock;

use medcalc_core::models::details::{CalculatorDetails, WellBeingLevel, Who5Details};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// WHO-5 Well-Being Index.
/// Five items 0–5 (raw 0–25). The reported score is the percentage 0–100.
pub struct Who5;

const FIELDS: [FieldRule; 5] = [
    FieldRule::integer("question1", "Jeg har været glad og i godt humør", 0, 5),
    FieldRule::integer("question2", "Jeg har følt mig rolig og afslappet", 0, 5),
    FieldRule::integer("question3", "Jeg har følt mig aktiv og energisk", 0, 5),
    FieldRule::integer("question4", "Jeg er vågnet frisk og udhvilet", 0, 5),
    FieldRule::integer("question5", "Min dagligdag har været fyldt med ting, der interesserer mig", 0, 5),
];

const ITEMS: [&str; 5] = ["question1", "question2", "question3", "question4", "question5"];

/// Below this percentage depression should be assessed.
pub const DEPRESSION_RISK_THRESHOLD: i32 = 28;

/// Below this percentage screening for depression is recommended.
pub const SCREENING_THRESHOLD: i32 = 50;

pub fn percentage(raw_score: i32) -> i32 {
    (f64::from(raw_score) / 25.0 * 100.0).round() as i32
}

pub fn well_being_level(percentage: i32) -> WellBeingLevel {
    match percentage {
        ..28 => WellBeingLevel::Poor,
        28..50 => WellBeingLevel::BelowAverage,
        50..68 => WellBeingLevel::Average,
        68..85 => WellBeingLevel::Good,
        _ => WellBeingLevel::Excellent,
    }
}

impl MedicalCalculator for Who5 {
    fn id(&self) -> &'static str {
        "who5"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "WHO-5 Trivselsindeks".to_string(),
            version: "1.0.0".to_string(),
            description: "Måling af psykisk trivsel de seneste to uger".to_string(),
            category: Category::Psychology,
            estimated_duration: Some(2),
            references: vec![
                "Topp CW, Østergaard SD, Søndergaard S, Bech P. The WHO-5 Well-Being Index: \
                 a systematic review of the literature. Psychother Psychosom. \
                 2015;84(3):167-176."
                    .to_string(),
            ],
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(0, 100)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let raw_score = responses.sum(&ITEMS)?;
        let score = percentage(raw_score);
        let level = well_being_level(score);
        let depression_risk = score < DEPRESSION_RISK_THRESHOLD;

        let (risk_level, interpretation, recommendations) = match level {
            WellBeingLevel::Poor => (
                RiskLevel::High,
                "Lav trivsel. Mulig depression.",
                vec![
                    "Udred for depression, f.eks. med Major Depression Inventory (MDI)",
                    "Aftal opfølgende konsultation",
                ],
            ),
            WellBeingLevel::BelowAverage => (
                RiskLevel::Moderate,
                "Trivsel under gennemsnittet.",
                vec![
                    "Overvej screening for depression",
                    "Opfølgning inden for 2 uger",
                ],
            ),
            WellBeingLevel::Average => (
                RiskLevel::Mild,
                "Gennemsnitlig trivsel.",
                vec!["Ingen specifik handling", "Gentag målingen ved behov"],
            ),
            WellBeingLevel::Good => (
                RiskLevel::Low,
                "God trivsel.",
                vec!["Ingen handling nødvendig"],
            ),
            WellBeingLevel::Excellent => (
                RiskLevel::Low,
                "Fremragende trivsel.",
                vec!["Ingen handling nødvendig"],
            ),
        };

        let mut result = CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Who5(Who5Details {
                raw_score,
                percentage_score: score,
                well_being_level: level,
                depression_risk,
                screening_recommended: score < SCREENING_THRESHOLD,
            }));

        if depression_risk {
            result = result.with_warning("Trivselsscore under 28 %: risiko for depression");
        }
        Ok(result)
    }
}
