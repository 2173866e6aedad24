use std::sync::LazyLock;

use medcalc_core::models::details::{
    CalculatorDetails, IpssDetails, QualityOfLifeImpact, SymptomSeverity,
};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// IPSS: International Prostate Symptom Score.
/// Seven symptom items 0–5 (total 0–35) plus a separate quality-of-life
/// item 0–6 that does not contribute to the score.
pub struct Ipss;

const FIELDS: [FieldRule; 8] = [
    FieldRule::integer("incompleteEmptying", "Fornemmelse af ufuldstændig tømning", 0, 5),
    FieldRule::integer("frequency", "Hyppig vandladning", 0, 5),
    FieldRule::integer("intermittency", "Afbrudt stråle", 0, 5),
    FieldRule::integer("urgency", "Vandladningstrang", 0, 5),
    FieldRule::integer("weakStream", "Svag stråle", 0, 5),
    FieldRule::integer("straining", "Behov for at presse", 0, 5),
    FieldRule::integer("nocturia", "Natlig vandladning", 0, 5),
    FieldRule::integer("qualityOfLife", "Livskvalitet", 0, 6),
];

const VOIDING: [&str; 4] = ["incompleteEmptying", "intermittency", "weakStream", "straining"];
const STORAGE: [&str; 3] = ["frequency", "urgency", "nocturia"];

pub fn symptom_severity(score: i32) -> SymptomSeverity {
    match score {
        ..=7 => SymptomSeverity::Mild,
        8..=19 => SymptomSeverity::Moderate,
        _ => SymptomSeverity::Severe,
    }
}

pub fn quality_of_life_impact(quality_of_life: i32) -> QualityOfLifeImpact {
    match quality_of_life {
        ..=1 => QualityOfLifeImpact::Minimal,
        2..=3 => QualityOfLifeImpact::Moderate,
        4..=5 => QualityOfLifeImpact::Significant,
        _ => QualityOfLifeImpact::Severe,
    }
}

impl MedicalCalculator for Ipss {
    fn id(&self) -> &'static str {
        "ipss"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "IPSS".to_string(),
            version: "1.0.0".to_string(),
            description: "International Prostate Symptom Score: gradering af nedre \
                          urinvejssymptomer"
                .to_string(),
            category: Category::General,
            estimated_duration: Some(5),
            references: vec![
                "Barry MJ, Fowler FJ Jr, O'Leary MP, et al. The American Urological \
                 Association symptom index for benign prostatic hyperplasia. J Urol. \
                 1992;148(5):1549-1557."
                    .to_string(),
            ],
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(0, 35)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let voiding_score = responses.sum(&VOIDING)?;
        let storage_score = responses.sum(&STORAGE)?;
        let score = voiding_score + storage_score;
        let quality_of_life = responses.integer("qualityOfLife")?;

        let severity = symptom_severity(score);
        let impact = quality_of_life_impact(quality_of_life);

        let (risk_level, severity_text, mut recommendations) = match severity {
            SymptomSeverity::NoSymptoms | SymptomSeverity::Mild => (
                RiskLevel::Mild,
                "Lette",
                vec![
                    "Afventende holdning med årlig kontrol",
                    "Livsstilsråd: begræns væskeindtag om aftenen og reducer koffein",
                ],
            ),
            SymptomSeverity::Moderate => (
                RiskLevel::Moderate,
                "Moderate",
                vec![
                    "Overvej medicinsk behandling med alfablokker",
                    "Urinstix og PSA ved klinisk indikation",
                ],
            ),
            SymptomSeverity::Severe => (
                RiskLevel::Severe,
                "Svære",
                vec![
                    "Henvis til urolog",
                    "Overvej kombinationsbehandling eller kirurgisk vurdering",
                ],
            ),
        };

        let impact_text = match impact {
            QualityOfLifeImpact::Minimal => "minimalt påvirket",
            QualityOfLifeImpact::Moderate => "moderat påvirket",
            QualityOfLifeImpact::Significant => "betydeligt påvirket",
            QualityOfLifeImpact::Severe => "svært påvirket",
        };

        if matches!(
            impact,
            QualityOfLifeImpact::Significant | QualityOfLifeImpact::Severe
        ) {
            recommendations
                .push("Drøft behandlingsønsker med patienten, da livskvaliteten er påvirket");
        }

        let interpretation = format!(
            "{severity_text} vandladningssymptomer (IPSS {score}). Livskvalitet: {impact_text}."
        );

        Ok(CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Ipss(IpssDetails {
                symptom_score: score,
                symptom_severity: severity,
                quality_of_life,
                quality_of_life_impact: impact,
                voiding_score,
                storage_score,
            })))
    }
}
