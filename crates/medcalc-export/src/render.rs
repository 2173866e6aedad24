use tera::{Context, Tera};

use medcalc_core::models::submission::SubmissionBundle;

use crate::error::ExportError;

/// Render a Tera template with a submission bundle.
///
/// The bundle's JSON fields (`config`, `patient`, `responses`, `result`,
/// `metadata`) become the template context, plus `riskLabel` holding the
/// Danish label of the result's risk level.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    bundle: &SubmissionBundle,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(bundle)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("riskLabel", bundle.result.risk_level.label());

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
