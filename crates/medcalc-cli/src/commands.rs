use std::io::{Read, Write};
use std::path::Path;

use serde_json::{Value, json};

use medcalc_calculators::registry::{all_calculators, calculate_medical_score, get_calculator};
use medcalc_calculators::validation::{FieldKind, FieldRule};
use medcalc_core::models::submission::{CalculatorConfig, Patient, Session, SubmissionBundle};
use medcalc_export::ExportFormat;
use medcalc_export::render::render_template;
use medcalc_submit::outbox::OutboxTransport;
use medcalc_submit::submitter::Submitter;
use medcalc_submit::transport::Receipt;

use crate::config::MedcalcConfig;

/// Read a responses record from a file, or from stdin when `input` is
/// `None` or `-`.
pub fn read_responses(input: Option<&Path>) -> eyre::Result<Value> {
    let contents = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&contents).map_err(|e| eyre::eyre!("responses are not valid JSON: {e}"))
}

pub fn list(out: &mut dyn Write) -> eyre::Result<()> {
    for calculator in all_calculators() {
        let metadata = calculator.metadata();
        writeln!(
            out,
            "{:<18} {:<34} {:<11} {}",
            calculator.id(),
            metadata.name,
            metadata.category.label(),
            calculator.score_range()
        )?;
    }
    Ok(())
}

fn describe_field(rule: &FieldRule) -> String {
    match rule.kind {
        FieldKind::Integer { min, max } => format!("heltal {min}-{max}"),
        FieldKind::Number { min, max } => format!("tal {min}-{max}"),
        FieldKind::Choice { options } => format!("valg: {}", options.join(", ")),
    }
}

pub fn describe(out: &mut dyn Write, calculator_type: &str, as_json: bool) -> eyre::Result<()> {
    let calculator = get_calculator(calculator_type)?;
    let metadata = calculator.metadata();

    if as_json {
        let value = json!({
            "calculatorType": calculator.id(),
            "metadata": metadata,
            "scoreRange": calculator.score_range(),
            "fields": calculator.fields(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "{} ({}) v{}", metadata.name, calculator.id(), metadata.version)?;
    writeln!(out, "{}", metadata.description)?;
    write!(
        out,
        "Kategori: {}  Score: {}",
        metadata.category.label(),
        calculator.score_range()
    )?;
    if let Some(minutes) = metadata.estimated_duration {
        write!(out, "  Varighed: ca. {minutes} min")?;
    }
    writeln!(out)?;

    writeln!(out, "\nFelter:")?;
    for rule in calculator.fields() {
        writeln!(out, "  {:<24} {:<48} {}", rule.name, rule.label, describe_field(rule))?;
    }

    if !metadata.references.is_empty() {
        writeln!(out, "\nReferencer:")?;
        for reference in &metadata.references {
            writeln!(out, "  - {reference}")?;
        }
    }
    Ok(())
}

/// Print the validation result. Returns whether the responses are valid.
pub fn validate(out: &mut dyn Write, calculator_type: &str, responses: &Value) -> eyre::Result<bool> {
    let calculator = get_calculator(calculator_type)?;
    let validation = calculator.validate(responses);
    writeln!(out, "{}", serde_json::to_string_pretty(&validation)?)?;
    Ok(validation.is_valid)
}

pub fn calculate(out: &mut dyn Write, calculator_type: &str, responses: &Value) -> eyre::Result<()> {
    let result = calculate_medical_score(calculator_type, responses)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    Ok(())
}

/// Score the responses and assemble a submission bundle.
pub fn build_bundle(
    calculator_type: &str,
    responses: Value,
    patient: Patient,
    session: &Session,
    config: &MedcalcConfig,
) -> eyre::Result<SubmissionBundle> {
    let calculator = get_calculator(calculator_type)?;
    let result = calculate_medical_score(calculator_type, &responses)?;
    let bundle = SubmissionBundle::new(
        CalculatorConfig {
            calculator_type: calculator.id().to_string(),
            metadata: calculator.metadata().clone(),
        },
        patient,
        responses,
        result,
        session.metadata(&config.app_version, jiff::Timestamp::now()),
    )?;
    Ok(bundle)
}

/// Export a bundle. A custom `template` replaces the built-in text
/// report and implies text output.
pub fn export(
    out: &mut dyn Write,
    bundle: &SubmissionBundle,
    format: ExportFormat,
    template: Option<&Path>,
) -> eyre::Result<()> {
    let bytes = match template {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read template {}: {e}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "template.txt".to_string());
            render_template(&name, &content, bundle)?.into_bytes()
        }
        None => medcalc_export::export(format, bundle)?,
    };
    out.write_all(&bytes)?;
    Ok(())
}

/// Submit a bundle to the outbox directory.
pub async fn submit(
    bundle: &SubmissionBundle,
    config: &MedcalcConfig,
    outbox: Option<&Path>,
) -> eyre::Result<Receipt> {
    let dir = match outbox {
        Some(dir) => dir.to_path_buf(),
        None => config.outbox_dir()?,
    };
    let submitter = Submitter::new(OutboxTransport::new(dir), config.submit_config());
    Ok(submitter.submit(bundle).await?)
}
