use std::sync::LazyLock;

use medcalc_core::models::details::{CalculatorDetails, EpdsDetails};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// EPDS: Edinburgh Postnatal Depression Scale.
/// 10 items, each 0–3. Total 0–30. Any answer above 0 on item 10 (self-harm)
/// overrides the score band.
pub struct Epds;

const FIELDS: [FieldRule; 10] = [
    FieldRule::integer("question1", "Har kunnet le og se det sjove i tingene", 0, 3),
    FieldRule::integer("question2", "Har glædet mig til ting", 0, 3),
    FieldRule::integer("question3", "Har bebrejdet mig selv unødigt", 0, 3),
    FieldRule::integer("question4", "Har været ængstelig eller bekymret uden grund", 0, 3),
    FieldRule::integer("question5", "Har følt mig bange eller panisk uden grund", 0, 3),
    FieldRule::integer("question6", "Tingene er vokset mig over hovedet", 0, 3),
    FieldRule::integer("question7", "Har haft svært ved at sove, fordi jeg var ulykkelig", 0, 3),
    FieldRule::integer("question8", "Har følt mig ked af det eller elendig", 0, 3),
    FieldRule::integer("question9", "Har været så ulykkelig, at jeg har grædt", 0, 3),
    FieldRule::integer("question10", "Tanken om at skade mig selv er faldet mig ind", 0, 3),
];

const ITEMS: [&str; 10] = [
    "question1",
    "question2",
    "question3",
    "question4",
    "question5",
    "question6",
    "question7",
    "question8",
    "question9",
    "question10",
];

/// EPDS-3A anxiety subscale.
const ANXIETY_ITEMS: [&str; 3] = ["question3", "question4", "question5"];

impl MedicalCalculator for Epds {
    fn id(&self) -> &'static str {
        "epds"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "EPDS".to_string(),
            version: "1.0.0".to_string(),
            description: "Edinburgh Postnatal Depression Scale: screening for fødselsdepression"
                .to_string(),
            category: Category::Pregnancy,
            estimated_duration: Some(5),
            references: vec![
                "Cox JL, Holden JM, Sagovsky R. Detection of postnatal depression. Development \
                 of the 10-item Edinburgh Postnatal Depression Scale. Br J Psychiatry. \
                 1987;150:782-786."
                    .to_string(),
            ],
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(0, 30)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let score = responses.sum(&ITEMS)?;
        let anxiety_subscore = responses.sum(&ANXIETY_ITEMS)?;
        let suicidal_thoughts = responses.integer("question10")? > 0;

        let (risk_level, interpretation, recommendations) = if suicidal_thoughts {
            (
                RiskLevel::Severe,
                "Tanker om selvskade er angivet. Akut vurdering er påkrævet uanset samlet score.",
                vec![
                    "Akut henvisning til psykiatrisk vurdering samme dag",
                    "Lad ikke patienten være alene ved akut risiko",
                    "Informér egen læge",
                ],
            )
        } else {
            match score {
                ..=9 => (
                    RiskLevel::Minimal,
                    "Ingen tegn på fødselsdepression.",
                    vec!["Ingen yderligere handling", "Gentag screening ved behov"],
                ),
                10..=12 => (
                    RiskLevel::Mild,
                    "Mulige tegn på fødselsdepression.",
                    vec![
                        "Opfølgende samtale med sundhedsplejerske eller læge",
                        "Gentag EPDS om 2-4 uger",
                    ],
                ),
                _ => (
                    RiskLevel::Moderate,
                    "Sandsynlig fødselsdepression.",
                    vec![
                        "Henvis til læge for klinisk vurdering",
                        "Overvej samtaleterapi og/eller medicinsk behandling",
                    ],
                ),
            }
        };

        let mut result = CalculationResult::new(score, risk_level, interpretation)
            .with_recommendations(recommendations)
            .with_details(CalculatorDetails::Epds(EpdsDetails {
                suicidal_thoughts,
                urgent_referral: suicidal_thoughts,
                anxiety_subscore,
            }));

        if suicidal_thoughts {
            result = result.with_warning("Spørgsmål 10 indikerer tanker om selvskade");
        }
        if anxiety_subscore >= 6 {
            result = result.with_warning("Forhøjet angstdelskala (EPDS-3A ≥ 6)");
        }
        Ok(result)
    }
}
