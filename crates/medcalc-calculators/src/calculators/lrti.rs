use std::sync::LazyLock;

use medcalc_core::models::details::{CalculatorDetails, LrtiCriterion, LrtiDetails};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// LRTI: point score for lower respiratory tract infection from vital signs.
///
/// | Criterion | Points |
/// |---|---|
/// | temperature > 38.5 °C | 2 |
/// | respiratory rate > 25 /min | 1 |
/// | heart rate > 100 /min | 1 |
/// | systolic BP < 100 mmHg | 2 |
pub struct Lrti;

const FIELDS: [FieldRule; 4] = [
    FieldRule::number("temperature", "Temperatur (°C)", 30.0, 45.0),
    FieldRule::integer("respiratoryRate", "Respirationsfrekvens (/min)", 5, 80),
    FieldRule::integer("heartRate", "Puls (/min)", 20, 250),
    FieldRule::integer("bloodPressureSystolic", "Systolisk blodtryk (mmHg)", 40, 260),
];

/// Antibiotics are recommended from this score.
pub const ANTIBIOTIC_THRESHOLD: i32 = 2;

fn points(criterion: LrtiCriterion) -> i32 {
    match criterion {
        LrtiCriterion::Fever | LrtiCriterion::Hypotension => 2,
        LrtiCriterion::Tachypnea | LrtiCriterion::Tachycardia => 1,
    }
}

impl MedicalCalculator for Lrti {
    fn id(&self) -> &'static str {
        "lrti"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "LRTI".to_string(),
            version: "1.0.0".to_string(),
            description: "Vurdering af nedre luftvejsinfektion og behov for antibiotika ud fra \
                          vitale parametre"
                .to_string(),
            category: Category::Infection,
            estimated_duration: Some(2),
            references: Vec::new(),
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(0, 6)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let temperature = responses.number("temperature")?;
        let respiratory_rate = responses.integer("respiratoryRate")?;
        let heart_rate = responses.integer("heartRate")?;
        let systolic = responses.integer("bloodPressureSystolic")?;

        let criteria_met: Vec<LrtiCriterion> = [
            (temperature > 38.5, LrtiCriterion::Fever),
            (respiratory_rate > 25, LrtiCriterion::Tachypnea),
            (heart_rate > 100, LrtiCriterion::Tachycardia),
            (systolic < 100, LrtiCriterion::Hypotension),
        ]
        .into_iter()
        .filter_map(|(met, criterion)| met.then_some(criterion))
        .collect();

        let score: i32 = criteria_met.iter().copied().map(points).sum();
        let antibiotic_recommended = score >= ANTIBIOTIC_THRESHOLD;

        let (risk_level, interpretation, mut recommendations) = match score {
            ..=1 => (
                RiskLevel::Low,
                "Lav risiko for behandlingskrævende nedre luftvejsinfektion.",
                vec!["Symptomatisk behandling", "Genvurder ved forværring"],
            ),
            2..=3 => (
                RiskLevel::Moderate,
                "Moderat risiko for nedre luftvejsinfektion.",
                vec!["Klinisk kontrol inden for 48 timer"],
            ),
            4..=5 => (
                RiskLevel::High,
                "Høj risiko for nedre luftvejsinfektion.",
                vec![
                    "Mål CRP og overvej røntgen af thorax",
                    "Vurder behov for indlæggelse",
                ],
            ),
            _ => (
                RiskLevel::VeryHigh,
                "Meget høj risiko: mulig svær pneumoni eller sepsis.",
                vec![
                    "Akut indlæggelse bør overvejes",
                    "Monitorér vitale parametre tæt",
                ],
            ),
        };
        if antibiotic_recommended {
            recommendations.insert(0, "Antibiotisk behandling anbefales");
        }

        Ok(CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Lrti(LrtiDetails {
                antibiotic_recommended,
                criteria_met,
            })))
    }
}
