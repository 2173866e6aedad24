use std::sync::LazyLock;

use medcalc_core::models::details::{CalculatorDetails, PuqeDetails, SymptomSeverity};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// PUQE-24: Pregnancy-Unique Quantification of Emesis.
/// Nausea, vomiting and retching over the last 24 hours, each 1–5. Total 3–15.
pub struct Puqe;

const FIELDS: [FieldRule; 3] = [
    FieldRule::integer("nausea", "Varighed af kvalme", 1, 5),
    FieldRule::integer("vomiting", "Antal opkastninger", 1, 5),
    FieldRule::integer("retching", "Antal gange med opkastningsfornemmelse", 1, 5),
];

pub fn severity(score: i32) -> SymptomSeverity {
    match score {
        ..=6 => SymptomSeverity::Mild,
        7..=12 => SymptomSeverity::Moderate,
        _ => SymptomSeverity::Severe,
    }
}

impl MedicalCalculator for Puqe {
    fn id(&self) -> &'static str {
        "puqe"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "PUQE-24".to_string(),
            version: "1.0.0".to_string(),
            description: "Gradering af kvalme og opkastning i graviditeten".to_string(),
            category: Category::Pregnancy,
            estimated_duration: Some(2),
            references: vec![
                "Koren G, Boskovic R, Hard M, et al. Motherisk-PUQE (pregnancy-unique \
                 quantification of emesis and nausea) scoring system for nausea and vomiting \
                 of pregnancy. Am J Obstet Gynecol. 2002;186(5 Suppl):S228-S231."
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
        let nausea = responses.integer("nausea")?;
        let vomiting = responses.integer("vomiting")?;
        let retching = responses.integer("retching")?;
        let score = nausea + vomiting + retching;

        let severity = severity(score);
        let hyperemesis_suspected = severity == SymptomSeverity::Severe;

        let (risk_level, interpretation, recommendations) = match severity {
            SymptomSeverity::Severe => (
                RiskLevel::Severe,
                "Svær graviditetskvalme. Mistanke om hyperemesis gravidarum.",
                vec![
                    "Vurder dehydrering, vægttab og ketonuri",
                    "Overvej indlæggelse til intravenøs væskebehandling",
                    "Antiemetisk behandling",
                ],
            ),
            SymptomSeverity::Moderate => (
                RiskLevel::Moderate,
                "Moderat graviditetskvalme.",
                vec![
                    "Overvej antiemetisk behandling",
                    "Sikr tilstrækkeligt væskeindtag",
                ],
            ),
            SymptomSeverity::Mild | SymptomSeverity::NoSymptoms => (
                RiskLevel::Mild,
                "Let graviditetskvalme.",
                vec![
                    "Kostråd: små, hyppige måltider",
                    "Ingefær eller akupressur kan forsøges",
                ],
            ),
        };

        let mut result = CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Puqe(PuqeDetails {
                nausea,
                vomiting,
                retching,
                severity,
                hyperemesis_suspected,
            }));

        if hyperemesis_suspected {
            result = result.with_warning("Mulig hyperemesis gravidarum");
        }
        Ok(result)
    }
}
