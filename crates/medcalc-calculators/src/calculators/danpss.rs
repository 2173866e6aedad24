use std::sync::LazyLock;

use medcalc_core::models::details::{CalculatorDetails, DanpssDetails, SymptomSeverity};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// DANPSS: depression (q1–q7) and anxiety (q8–q12) symptom questionnaire.
/// Every item 0–3. Depression 0–21, anxiety 0–15, total 0–36.
pub struct Danpss;

const FIELDS: [FieldRule; 12] = [
    FieldRule::integer("q1", "Nedtrykthed", 0, 3),
    FieldRule::integer("q2", "Manglende interesse og glæde", 0, 3),
    FieldRule::integer("q3", "Træthed og manglende energi", 0, 3),
    FieldRule::integer("q4", "Nedsat selvtillid", 0, 3),
    FieldRule::integer("q5", "Skyldfølelse", 0, 3),
    FieldRule::integer("q6", "Koncentrationsbesvær", 0, 3),
    FieldRule::integer("q7", "Søvnforstyrrelser", 0, 3),
    FieldRule::integer("q8", "Nervøsitet og indre uro", 0, 3),
    FieldRule::integer("q9", "Bekymringer", 0, 3),
    FieldRule::integer("q10", "Anspændthed", 0, 3),
    FieldRule::integer("q11", "Pludselige angstanfald", 0, 3),
    FieldRule::integer("q12", "Undgåelsesadfærd", 0, 3),
];

const DEPRESSION: [&str; 7] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7"];
const ANXIETY: [&str; 5] = ["q8", "q9", "q10", "q11", "q12"];

pub fn depression_severity(score: i32) -> SymptomSeverity {
    match score {
        ..=5 => SymptomSeverity::NoSymptoms,
        6..=10 => SymptomSeverity::Mild,
        11..=15 => SymptomSeverity::Moderate,
        _ => SymptomSeverity::Severe,
    }
}

pub fn anxiety_severity(score: i32) -> SymptomSeverity {
    match score {
        ..=3 => SymptomSeverity::NoSymptoms,
        4..=6 => SymptomSeverity::Mild,
        7..=9 => SymptomSeverity::Moderate,
        _ => SymptomSeverity::Severe,
    }
}

/// Combined risk for the total score.
pub fn combined_risk(total: i32) -> RiskLevel {
    match total {
        ..=8 => RiskLevel::Low,
        9..=16 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

fn severity_text(severity: SymptomSeverity) -> &'static str {
    match severity {
        SymptomSeverity::NoSymptoms => "ingen",
        SymptomSeverity::Mild => "lette",
        SymptomSeverity::Moderate => "moderate",
        SymptomSeverity::Severe => "svære",
    }
}

impl MedicalCalculator for Danpss {
    fn id(&self) -> &'static str {
        "danpss"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "DANPSS".to_string(),
            version: "1.0.0".to_string(),
            description: "Spørgeskema om depressive symptomer og angstsymptomer".to_string(),
            category: Category::Psychology,
            estimated_duration: Some(5),
            references: Vec::new(),
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(0, 36)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let depression_score = responses.sum(&DEPRESSION)?;
        let anxiety_score = responses.sum(&ANXIETY)?;
        let score = depression_score + anxiety_score;

        let depression = depression_severity(depression_score);
        let anxiety = anxiety_severity(anxiety_score);
        let risk_level = combined_risk(score);

        let interpretation = format!(
            "Depressive symptomer: {} ({depression_score}/21). Angstsymptomer: {} ({anxiety_score}/15).",
            severity_text(depression),
            severity_text(anxiety),
        );

        let recommendations = match risk_level {
            RiskLevel::Low => vec![
                "Ingen behandling nødvendig",
                "Genvurder ved vedvarende symptomer",
            ],
            RiskLevel::Medium => vec![
                "Opfølgende samtale inden for 2-4 uger",
                "Overvej psykoedukation og støttende samtaler",
            ],
            _ => vec![
                "Udred for depression og angst hos læge",
                "Overvej henvisning til psykolog eller psykiatrisk vurdering",
            ],
        };

        let mut result = CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Danpss(DanpssDetails {
                depression_score,
                anxiety_score,
                depression_severity: depression,
                anxiety_severity: anxiety,
            }));

        if depression == SymptomSeverity::Severe {
            result = result.with_warning("Svære depressive symptomer");
        }
        if anxiety == SymptomSeverity::Severe {
            result = result.with_warning("Svære angstsymptomer");
        }
        Ok(result)
    }
}
