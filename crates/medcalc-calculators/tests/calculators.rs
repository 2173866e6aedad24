use serde_json::{Value, json};

use medcalc_calculators::MedicalCalculator;
use medcalc_calculators::calculators::{
    audit::Audit, danpss::Danpss, epds::Epds, gcs::Gcs, ipss::Ipss, lrti::Lrti, puqe::Puqe,
    westley_croup::WestleyCroup, who5::Who5,
};
use medcalc_calculators::error::CalculatorError;
use medcalc_core::models::details::{
    CalculatorDetails, ConsciousnessLevel, CroupSeverity, CroupUrgency, LrtiCriterion,
    QualityOfLifeImpact, SymptomSeverity, WellBeingLevel,
};
use medcalc_core::models::risk::RiskLevel;
use medcalc_core::models::validation::ErrorCode;

fn questions(prefix: &str, count: usize, value: i64) -> Value {
    let map = (1..=count)
        .map(|i| (format!("{prefix}{i}"), json!(value)))
        .collect::<serde_json::Map<_, _>>();
    Value::Object(map)
}

// GCS

#[test]
fn gcs_full_score_is_normal_consciousness() {
    let result = Gcs
        .calculate(&json!({"eyeOpening": 4, "verbalResponse": 5, "motorResponse": 6}))
        .unwrap();
    assert_eq!(result.score, 15);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.interpretation.contains("Normal bevidsthed"));

    let Some(CalculatorDetails::Gcs(details)) = result.details else {
        panic!("expected GCS details");
    };
    assert_eq!(details.consciousness_level, ConsciousnessLevel::Normal);
    assert_eq!(details.notation, "E4V5M6");
    assert!(!details.airway_at_risk);
}

#[test]
fn gcs_bands() {
    let cases = [
        ((1, 1, 1), RiskLevel::Severe),
        ((2, 2, 4), RiskLevel::Severe),
        ((2, 2, 5), RiskLevel::Moderate),
        ((3, 4, 5), RiskLevel::Moderate),
        ((3, 4, 6), RiskLevel::Mild),
        ((4, 4, 6), RiskLevel::Mild),
    ];
    for ((e, v, m), expected) in cases {
        let result = Gcs
            .calculate(&json!({"eyeOpening": e, "verbalResponse": v, "motorResponse": m}))
            .unwrap();
        assert_eq!(result.risk_level, expected, "E{e}V{v}M{m}");
    }
}

#[test]
fn gcs_out_of_range_field_is_reported_not_scored() {
    let responses = json!({"eyeOpening": 7, "verbalResponse": 5, "motorResponse": 6});

    let validation = Gcs.validate(&responses);
    assert!(!validation.is_valid);
    let errors: Vec<_> = validation.errors_for("eyeOpening").collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::OutOfRange);

    match Gcs.calculate(&responses) {
        Err(CalculatorError::InvalidResponses { message, errors }) => {
            assert_eq!(message, "Øjenåbning skal være mellem 1 og 4");
            assert_eq!(errors.len(), 1);
        }
        other => panic!("expected InvalidResponses, got {other:?}"),
    }

    match Gcs.calculate_unvalidated(&responses) {
        Err(CalculatorError::ScoreOutOfRange { calculator, score, range }) => {
            assert_eq!(calculator, "gcs");
            assert_eq!(score, 18);
            assert_eq!((range.min, range.max), (3, 15));
        }
        other => panic!("expected ScoreOutOfRange, got {other:?}"),
    }
}

#[test]
fn invalid_responses_message_joins_all_messages() {
    let err = Gcs.calculate(&json!({"eyeOpening": 0})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Øjenåbning skal være mellem 1 og 4, Verbalt respons skal udfyldes, \
         Motorisk respons skal udfyldes"
    );
}

#[test]
fn unvalidated_in_range_input_still_scores() {
    // eyeOpening 0 is invalid, but 0 + 5 + 6 = 11 is inside the range.
    let result = Gcs
        .calculate_unvalidated(&json!({"eyeOpening": 0, "verbalResponse": 5, "motorResponse": 6}))
        .unwrap();
    assert_eq!(result.score, 11);
}

#[test]
fn non_object_responses_are_invalid_input() {
    for input in [json!([1, 2]), json!("x"), json!(null), json!(3)] {
        let validation = Gcs.validate(&input);
        assert!(!validation.is_valid);
        assert_eq!(validation.errors[0].code, ErrorCode::InvalidInput);
    }
    assert!(matches!(
        Gcs.calculate_unvalidated(&json!([])),
        Err(CalculatorError::MalformedResponses(_))
    ));
}

// AUDIT

#[test]
fn audit_all_zero_is_low_risk() {
    let result = Audit.calculate(&questions("question", 10, 0)).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.interpretation.contains("Ikke tegn på alkoholafhængighed"));
    assert!(result.warnings.is_empty());
}

#[test]
fn audit_zones_and_subscores() {
    let mut responses = questions("question", 10, 0);
    responses["question1"] = json!(4);
    responses["question2"] = json!(4);
    // 8 points, consumption only.
    let result = Audit.calculate(&responses).unwrap();
    assert_eq!(result.score, 8);
    assert_eq!(result.risk_level, RiskLevel::Medium);

    responses["question4"] = json!(4);
    responses["question5"] = json!(4);
    let result = Audit.calculate(&responses).unwrap();
    assert_eq!(result.score, 16);
    assert_eq!(result.risk_level, RiskLevel::High);

    let Some(CalculatorDetails::Audit(details)) = &result.details else {
        panic!("expected AUDIT details");
    };
    assert_eq!(details.consumption_score, 8);
    assert_eq!(details.dependence_score, 8);
    assert_eq!(details.harm_score, 0);
    assert_eq!(details.risk_zone, 3);
    assert!(details.hazardous_drinking);
    assert!(details.dependence_indicated);
    assert_eq!(result.warnings.len(), 1);

    let result = Audit.calculate(&questions("question", 10, 2)).unwrap();
    assert_eq!(result.score, 20);
    assert_eq!(result.risk_level, RiskLevel::VeryHigh);
    assert_eq!(result.warnings.len(), 2);
}

// DANPSS

#[test]
fn danpss_subscores_and_bands() {
    let mut responses = questions("q", 12, 0);
    for q in ["q1", "q2", "q3"] {
        responses[q] = json!(2);
    }
    responses["q8"] = json!(3);
    responses["q9"] = json!(1);

    let result = Danpss.calculate(&responses).unwrap();
    assert_eq!(result.score, 10);
    assert_eq!(result.risk_level, RiskLevel::Medium);

    let Some(CalculatorDetails::Danpss(details)) = result.details else {
        panic!("expected DANPSS details");
    };
    assert_eq!(details.depression_score, 6);
    assert_eq!(details.anxiety_score, 4);
    assert_eq!(details.depression_severity, SymptomSeverity::Mild);
    assert_eq!(details.anxiety_severity, SymptomSeverity::Mild);
}

#[test]
fn danpss_maximum_is_high_with_warnings() {
    let result = Danpss.calculate(&questions("q", 12, 3)).unwrap();
    assert_eq!(result.score, 36);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn danpss_threshold_edges() {
    use medcalc_calculators::calculators::danpss::{
        anxiety_severity, combined_risk, depression_severity,
    };
    assert_eq!(depression_severity(5), SymptomSeverity::NoSymptoms);
    assert_eq!(depression_severity(6), SymptomSeverity::Mild);
    assert_eq!(depression_severity(15), SymptomSeverity::Moderate);
    assert_eq!(depression_severity(16), SymptomSeverity::Severe);
    assert_eq!(anxiety_severity(3), SymptomSeverity::NoSymptoms);
    assert_eq!(anxiety_severity(9), SymptomSeverity::Moderate);
    assert_eq!(anxiety_severity(10), SymptomSeverity::Severe);
    assert_eq!(combined_risk(8), RiskLevel::Low);
    assert_eq!(combined_risk(9), RiskLevel::Medium);
    assert_eq!(combined_risk(16), RiskLevel::Medium);
    assert_eq!(combined_risk(17), RiskLevel::High);
}

// EPDS

#[test]
fn epds_bands_without_self_harm() {
    let mut responses = questions("question", 10, 0);
    let result = Epds.calculate(&responses).unwrap();
    assert_eq!(result.risk_level, RiskLevel::Minimal);

    for q in ["question1", "question2", "question3", "question6"] {
        responses[q] = json!(3);
    }
    let result = Epds.calculate(&responses).unwrap();
    assert_eq!(result.score, 12);
    assert_eq!(result.risk_level, RiskLevel::Mild);

    responses["question7"] = json!(1);
    let result = Epds.calculate(&responses).unwrap();
    assert_eq!(result.score, 13);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
}

#[test]
fn epds_self_harm_item_forces_urgent_referral() {
    let mut responses = questions("question", 10, 0);
    responses["question10"] = json!(1);

    let result = Epds.calculate(&responses).unwrap();
    assert_eq!(result.score, 1);
    assert_eq!(result.risk_level, RiskLevel::Severe);
    assert!(!result.warnings.is_empty());

    let Some(CalculatorDetails::Epds(details)) = result.details else {
        panic!("expected EPDS details");
    };
    assert!(details.suicidal_thoughts);
    assert!(details.urgent_referral);
}

#[test]
fn epds_anxiety_subscale() {
    let mut responses = questions("question", 10, 0);
    for q in ["question3", "question4", "question5"] {
        responses[q] = json!(2);
    }
    let result = Epds.calculate(&responses).unwrap();
    let Some(CalculatorDetails::Epds(details)) = &result.details else {
        panic!("expected EPDS details");
    };
    assert_eq!(details.anxiety_subscore, 6);
    assert_eq!(result.warnings.len(), 1);
}

// IPSS

#[test]
fn ipss_symptom_score_excludes_quality_of_life() {
    let responses = json!({
        "incompleteEmptying": 2,
        "frequency": 3,
        "intermittency": 1,
        "urgency": 2,
        "weakStream": 4,
        "straining": 1,
        "nocturia": 3,
        "qualityOfLife": 4
    });
    let result = Ipss.calculate(&responses).unwrap();
    assert_eq!(result.score, 16);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
    assert_eq!(result.recommendations.len(), 3);

    let Some(CalculatorDetails::Ipss(details)) = result.details else {
        panic!("expected IPSS details");
    };
    assert_eq!(details.quality_of_life, 4);
    assert_eq!(details.quality_of_life_impact, QualityOfLifeImpact::Significant);
    assert_eq!(details.voiding_score, 8);
    assert_eq!(details.storage_score, 8);
}

#[test]
fn ipss_quality_of_life_bands() {
    use medcalc_calculators::calculators::ipss::quality_of_life_impact;
    assert_eq!(quality_of_life_impact(0), QualityOfLifeImpact::Minimal);
    assert_eq!(quality_of_life_impact(1), QualityOfLifeImpact::Minimal);
    assert_eq!(quality_of_life_impact(3), QualityOfLifeImpact::Moderate);
    assert_eq!(quality_of_life_impact(5), QualityOfLifeImpact::Significant);
    assert_eq!(quality_of_life_impact(6), QualityOfLifeImpact::Severe);
}

#[test]
fn ipss_requires_quality_of_life() {
    let responses = json!({
        "incompleteEmptying": 0, "frequency": 0, "intermittency": 0, "urgency": 0,
        "weakStream": 0, "straining": 0, "nocturia": 0
    });
    let validation = Ipss.validate(&responses);
    let errors: Vec<_> = validation.errors_for("qualityOfLife").collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::Required);
}

// LRTI

#[test]
fn lrti_all_criteria_met() {
    let result = Lrti
        .calculate(&json!({
            "temperature": 39,
            "respiratoryRate": 30,
            "heartRate": 110,
            "bloodPressureSystolic": 90
        }))
        .unwrap();
    assert_eq!(result.score, 6);
    assert_eq!(result.risk_level, RiskLevel::VeryHigh);

    let Some(CalculatorDetails::Lrti(details)) = result.details else {
        panic!("expected LRTI details");
    };
    assert!(details.antibiotic_recommended);
    assert_eq!(
        details.criteria_met,
        vec![
            LrtiCriterion::Fever,
            LrtiCriterion::Tachypnea,
            LrtiCriterion::Tachycardia,
            LrtiCriterion::Hypotension
        ]
    );
}

#[test]
fn lrti_thresholds_are_strict() {
    let result = Lrti
        .calculate(&json!({
            "temperature": 38.5,
            "respiratoryRate": 25,
            "heartRate": 100,
            "bloodPressureSystolic": 100
        }))
        .unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);

    let result = Lrti
        .calculate(&json!({
            "temperature": "38.6",
            "respiratoryRate": 20,
            "heartRate": 80,
            "bloodPressureSystolic": 120
        }))
        .unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
    assert_eq!(result.recommendations[0], "Antibiotisk behandling anbefales");
}

// PUQE

#[test]
fn puqe_bands_and_hyperemesis() {
    let mild = Puqe
        .calculate(&json!({"nausea": 2, "vomiting": 2, "retching": 2}))
        .unwrap();
    assert_eq!(mild.score, 6);
    assert_eq!(mild.risk_level, RiskLevel::Mild);

    let moderate = Puqe
        .calculate(&json!({"nausea": 4, "vomiting": 4, "retching": 4}))
        .unwrap();
    assert_eq!(moderate.risk_level, RiskLevel::Moderate);

    let severe = Puqe
        .calculate(&json!({"nausea": 5, "vomiting": 4, "retching": 4}))
        .unwrap();
    assert_eq!(severe.score, 13);
    assert_eq!(severe.risk_level, RiskLevel::Severe);
    let Some(CalculatorDetails::Puqe(details)) = severe.details else {
        panic!("expected PUQE details");
    };
    assert!(details.hyperemesis_suspected);
}

#[test]
fn puqe_zero_is_out_of_range() {
    let validation = Puqe.validate(&json!({"nausea": 0, "vomiting": 1, "retching": 1}));
    assert_eq!(validation.errors.len(), 1);
    assert_eq!(validation.errors[0].code, ErrorCode::OutOfRange);
}

// Westley Croup

#[test]
fn westley_croup_critical() {
    let result = WestleyCroup
        .calculate(&json!({
            "levelOfConsciousness": 5,
            "cyanosis": 5,
            "stridor": 2,
            "airEntry": 1,
            "retractions": 0
        }))
        .unwrap();
    assert_eq!(result.score, 13);
    assert_eq!(result.risk_level, RiskLevel::Severe);
    let Some(CalculatorDetails::WestleyCroup(details)) = result.details else {
        panic!("expected Westley details");
    };
    assert_eq!(details.severity, CroupSeverity::Severe);
    assert_eq!(details.urgency, CroupUrgency::Critical);
}

#[test]
fn westley_croup_bands() {
    use medcalc_calculators::calculators::westley_croup::severity;
    assert_eq!(severity(0), (CroupSeverity::Mild, CroupUrgency::Observe));
    assert_eq!(severity(2), (CroupSeverity::Mild, CroupUrgency::Observe));
    assert_eq!(severity(3), (CroupSeverity::Moderate, CroupUrgency::Treat));
    assert_eq!(severity(5), (CroupSeverity::Moderate, CroupUrgency::Treat));
    assert_eq!(severity(6), (CroupSeverity::Severe, CroupUrgency::Critical));
}

#[test]
fn westley_croup_maximum_input_stays_in_range() {
    let result = WestleyCroup
        .calculate(&json!({
            "levelOfConsciousness": 5,
            "cyanosis": 5,
            "stridor": 2,
            "airEntry": 2,
            "retractions": 3
        }))
        .unwrap();
    assert_eq!(result.score, 17);
}

// WHO-5

#[test]
fn who5_maximum_is_excellent() {
    let result = Who5.calculate(&questions("question", 5, 5)).unwrap();
    assert_eq!(result.score, 100);
    assert_eq!(result.risk_level, RiskLevel::Low);

    let Some(CalculatorDetails::Who5(details)) = result.details else {
        panic!("expected WHO-5 details");
    };
    assert_eq!(details.raw_score, 25);
    assert_eq!(details.percentage_score, 100);
    assert_eq!(details.well_being_level, WellBeingLevel::Excellent);
    assert!(!details.depression_risk);
}

#[test]
fn who5_low_score_flags_depression_risk() {
    let mut responses = questions("question", 5, 1);
    responses["question1"] = json!(2);
    // raw 6 -> 24 %
    let result = Who5.calculate(&responses).unwrap();
    assert_eq!(result.score, 24);
    assert_eq!(result.risk_level, RiskLevel::High);
    let Some(CalculatorDetails::Who5(details)) = result.details else {
        panic!("expected WHO-5 details");
    };
    assert_eq!(details.well_being_level, WellBeingLevel::Poor);
    assert!(details.depression_risk);
    assert!(details.screening_recommended);
}

#[test]
fn who5_level_edges() {
    use medcalc_calculators::calculators::who5::{percentage, well_being_level};
    assert_eq!(percentage(7), 28);
    assert_eq!(well_being_level(27), WellBeingLevel::Poor);
    assert_eq!(well_being_level(28), WellBeingLevel::BelowAverage);
    assert_eq!(well_being_level(50), WellBeingLevel::Average);
    assert_eq!(well_being_level(68), WellBeingLevel::Good);
    assert_eq!(well_being_level(84), WellBeingLevel::Good);
    assert_eq!(well_being_level(85), WellBeingLevel::Excellent);
}
