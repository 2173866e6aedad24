use serde_json::json;

use medcalc_core::models::metadata::{CalculatorMetadata, Category};
use medcalc_core::models::result::CalculationResult;
use medcalc_core::models::risk::RiskLevel;
use medcalc_core::models::submission::{CalculatorConfig, Patient, Session, SubmissionBundle};
use medcalc_export::error::ExportError;
use medcalc_export::render::render_template;
use medcalc_export::text::render_text;
use medcalc_export::{ExportFormat, export};

fn bundle(patient: Patient, result: CalculationResult) -> SubmissionBundle {
    let session = Session::start();
    SubmissionBundle::new(
        CalculatorConfig {
            calculator_type: "puqe".to_string(),
            metadata: CalculatorMetadata {
                name: "PUQE".to_string(),
                version: "1.0.0".to_string(),
                description: "Graviditetskvalme".to_string(),
                category: Category::Pregnancy,
                estimated_duration: None,
                references: Vec::new(),
            },
        },
        patient,
        json!({"nausea": 5, "vomiting": 4, "retching": 4}),
        result,
        session.metadata("1.2.0", session.started_at),
    )
    .unwrap()
}

fn severe_puqe() -> CalculationResult {
    CalculationResult::new(13, RiskLevel::Severe, "Svær graviditetskvalme")
        .with_recommendations(["Vurder indlæggelse", "Kontrollér væskestatus"])
        .with_warning("Mistanke om hyperemesis gravidarum")
}

#[test]
fn format_names_parse_case_insensitively() {
    assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert_eq!(" TEXT ".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
    assert!(matches!(
        "docx".parse::<ExportFormat>(),
        Err(ExportError::UnknownFormat(f)) if f == "docx"
    ));
    assert_eq!(ExportFormat::Text.extension(), "txt");
    assert_eq!(ExportFormat::Pdf.to_string(), "pdf");
}

#[test]
fn json_export_is_the_bundle() {
    let bundle = bundle(Patient::default(), severe_puqe());
    let bytes = export(ExportFormat::Json, &bundle).unwrap();
    let parsed: SubmissionBundle = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, bundle);
}

#[test]
fn text_report_is_danish() {
    let bundle = bundle(
        Patient {
            name: Some("Test Patient".to_string()),
            cpr: None,
            age: Some(31),
        },
        severe_puqe(),
    );
    let text = String::from_utf8(export(ExportFormat::Text, &bundle).unwrap()).unwrap();

    assert!(text.starts_with("PUQE (version 1.0.0)\n"));
    assert!(text.contains("Patient: Test Patient\n"));
    assert!(!text.contains("CPR:"));
    assert!(text.contains("Alder: 31 år\n"));
    assert!(text.contains("Score: 13\n"));
    assert!(text.contains("Risikoniveau: Svær\n"));
    assert!(text.contains("- Vurder indlæggelse\n- Kontrollér væskestatus\n"));
    assert!(text.contains("! Mistanke om hyperemesis gravidarum\n"));
    assert!(text.contains("Varighed: 0 sekunder\n"));
}

#[test]
fn text_report_omits_empty_sections() {
    let result = CalculationResult::new(3, RiskLevel::Mild, "Let graviditetskvalme");
    let text = render_text(&bundle(Patient::default(), result)).unwrap();
    assert!(!text.contains("Patient:"));
    assert!(!text.contains("Anbefalinger:"));
    assert!(!text.contains("Advarsler:"));
    assert!(text.contains("Risikoniveau: Let\n"));
}

#[test]
fn custom_templates_see_responses_and_label() {
    let bundle = bundle(Patient::default(), severe_puqe());
    let rendered = render_template(
        "kort.txt",
        "{{ config.calculatorType }}: {{ responses.nausea }} / {{ riskLabel }}",
        &bundle,
    )
    .unwrap();
    assert_eq!(rendered, "puqe: 5 / Svær");
}

#[test]
fn broken_templates_are_parse_errors() {
    let bundle = bundle(Patient::default(), severe_puqe());
    assert!(matches!(
        render_template("broken.txt", "{% if %}", &bundle),
        Err(ExportError::TemplateParse(_))
    ));
    assert!(matches!(
        render_template("missing.txt", "{{ nothing.here }}", &bundle),
        Err(ExportError::TemplateRender(_))
    ));
}

#[test]
fn pdf_and_csv_are_unsupported() {
    let bundle = bundle(Patient::default(), severe_puqe());
    for format in [ExportFormat::Pdf, ExportFormat::Csv] {
        assert!(!format.is_supported());
        assert!(matches!(
            export(format, &bundle),
            Err(ExportError::Unsupported(name)) if name == format.as_str()
        ));
    }
}
