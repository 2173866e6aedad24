use std::sync::LazyLock;

use medcalc_core::models::details::{
    CalculatorDetails, Score2AgeGroup, Score2Category, Score2Details,
};
use medcalc_core::models::metadata::{CalculatorMetadata, Category, ScoreRange};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;

use super::score2_table::{
    self, GENDER_FEMALE, GENDER_MALE, NON_SMOKER, SMOKER, Score2Query,
};
use crate::MedicalCalculator;
use crate::error::CalculatorError;
use crate::responses::Responses;
use crate::validation::FieldRule;

/// SCORE2 / SCORE2-OP: 10-year risk of fatal and non-fatal cardiovascular
/// disease, read from the low-risk region chart.
///
/// Inputs outside the chart (age < 40 or > 89, systolic BP < 100 or > 179,
/// LDL < 2.2 or > 6.1) are valid but cannot be scored: the result carries
/// [`NOT_FOUND`] and [`RiskLevel::Unknown`].
pub struct Score2;

/// Score reported when the chart has no matching cell.
pub const NOT_FOUND: i32 = -1;

const FIELDS: [FieldRule; 5] = [
    FieldRule::choice("gender", "Køn", &[GENDER_MALE, GENDER_FEMALE]),
    FieldRule::choice("smokingStatus", "Rygestatus", &[NON_SMOKER, SMOKER]),
    FieldRule::integer("age", "Alder (år)", 18, 110),
    FieldRule::integer("systolicBloodPressure", "Systolisk blodtryk (mmHg)", 60, 260),
    FieldRule::number("ldlCholesterol", "LDL-kolesterol (mmol/L)", 0.5, 15.0),
];

pub fn age_group(age: i32) -> Score2AgeGroup {
    match age {
        ..=49 => Score2AgeGroup::Under50,
        50..=69 => Score2AgeGroup::From50To69,
        _ => Score2AgeGroup::From70,
    }
}

/// ESC 2021 risk category. Thresholds depend on age.
pub fn risk_category(group: Score2AgeGroup, percent: i32) -> Score2Category {
    let (high_from, very_high_from) = match group {
        Score2AgeGroup::Under50 => (2.5, 7.5),
        Score2AgeGroup::From50To69 => (5.0, 10.0),
        Score2AgeGroup::From70 => (7.5, 15.0),
    };
    let percent = f64::from(percent);
    if percent >= very_high_from {
        Score2Category::VeryHigh
    } else if percent >= high_from {
        Score2Category::High
    } else {
        Score2Category::LowToModerate
    }
}

impl MedicalCalculator for Score2 {
    fn id(&self) -> &'static str {
        "score2"
    }

    fn metadata(&self) -> &CalculatorMetadata {
        static METADATA: LazyLock<CalculatorMetadata> = LazyLock::new(|| CalculatorMetadata {
            name: "SCORE2".to_string(),
            version: "1.0.0".to_string(),
            description: "10-års risiko for hjerte-kar-sygdom hos personer uden kendt \
                          hjerte-kar-sygdom eller diabetes (lavrisikoregion)"
                .to_string(),
            category: Category::General,
            estimated_duration: Some(3),
            references: vec![
                "SCORE2 working group and ESC Cardiovascular risk collaboration. SCORE2 risk \
                 prediction algorithms. Eur Heart J. 2021;42(25):2439-2454."
                    .to_string(),
                "SCORE2-OP working group and ESC Cardiovascular risk collaboration. SCORE2-OP \
                 risk prediction algorithms. Eur Heart J. 2021;42(25):2455-2467."
                    .to_string(),
            ],
        });
        &METADATA
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange::new(NOT_FOUND, 100)
    }

    fn fields(&self) -> &[FieldRule] {
        &FIELDS
    }

    fn calculate_score(
        &self,
        responses: &Responses<'_>,
    ) -> Result<CalculationResult, CalculatorError> {
        let gender = responses.choice("gender")?;
        let smoking_status = responses.choice("smokingStatus")?;
        let age = responses.integer("age")?;
        let systolic = responses.integer("systolicBloodPressure")?;
        let ldl = responses.number("ldlCholesterol")?;

        let chart = score2_table::chart()?;
        let percent = score2_table::lookup(
            chart,
            &Score2Query {
                gender,
                smoking_status,
                ldl,
                age: f64::from(age),
                systolic: f64::from(systolic),
            },
        );

        let group = age_group(age);
        let smoker = smoking_status == SMOKER;

        let Some(percent) = percent else {
            return Ok(CalculationResult::new(
                NOT_FOUND,
                RiskLevel::Unknown,
                "Risikoen kan ikke aflæses: værdierne ligger uden for SCORE2-skemaet.",
            )
            .with_recommendations([
                "Kontrollér alder (40-89 år), systolisk blodtryk (100-179 mmHg) og \
                 LDL-kolesterol (2,2-6,1 mmol/L)",
            ])
            .with_details(CalculatorDetails::Score2(Score2Details {
                table_match: false,
                age_group: group,
                risk_category: None,
                gender: gender.to_string(),
                smoking_status: smoking_status.to_string(),
            }))
            .with_warning("Ingen SCORE2-værdi for de angivne værdier"));
        };

        let category = risk_category(group, percent);
        let (risk_level, category_text, mut recommendations) = match category {
            Score2Category::LowToModerate => (
                RiskLevel::Low,
                "lav til moderat risiko",
                vec![
                    "Livsstilsrådgivning om kost og motion",
                    "Genberegn risikoen ved ændrede risikofaktorer",
                ],
            ),
            Score2Category::High => (
                RiskLevel::High,
                "høj risiko",
                vec![
                    "Livsstilsintervention",
                    "Overvej blodtrykssænkende og lipidsænkende behandling",
                ],
            ),
            Score2Category::VeryHigh => (
                RiskLevel::VeryHigh,
                "meget høj risiko",
                vec![
                    "Behandling af risikofaktorer anbefales",
                    "Blodtrykssænkende og lipidsænkende behandling",
                ],
            ),
        };
        if smoker {
            recommendations.push("Tilbyd rygestopforløb");
        }

        Ok(CalculationResult::new(
            percent,
            risk_level,
            format!("10-års risiko for hjerte-kar-sygdom: {percent} % ({category_text})."),
        )
        .with_recommendations(recommendations)
        .with_details(CalculatorDetails::Score2(Score2Details {
            table_match: true,
            age_group: group,
            risk_category: Some(category),
            gender: gender.to_string(),
            smoking_status: smoking_status.to_string(),
        })))
    }
}
