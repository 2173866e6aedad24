use medcalc_core::models::submission::SubmissionBundle;

use crate::error::ExportError;
use crate::render::render_template;

/// Built-in Danish report. Template names ending in `.txt` are not
/// HTML-escaped by Tera.
pub const DEFAULT_TEMPLATE_NAME: &str = "rapport.txt";

pub const DEFAULT_TEMPLATE: &str = r#"{{ config.name }} (version {{ config.version }})
{% if patient.name is defined %}Patient: {{ patient.name }}
{% endif %}{% if patient.cpr is defined %}CPR: {{ patient.cpr }}
{% endif %}{% if patient.age is defined %}Alder: {{ patient.age }} år
{% endif %}
Score: {{ result.score }}
Risikoniveau: {{ riskLabel }}
Vurdering: {{ result.interpretation }}
{% if result.recommendations | length > 0 %}
Anbefalinger:
{% for recommendation in result.recommendations %}- {{ recommendation }}
{% endfor %}{% endif %}{% if result.warnings is defined %}
Advarsler:
{% for warning in result.warnings %}! {{ warning }}
{% endfor %}{% endif %}
Tidspunkt: {{ metadata.timestamp }}
Varighed: {{ metadata.duration }} sekunder
Session: {{ metadata.sessionId }}
"#;

/// Render the built-in text report.
pub fn render_text(bundle: &SubmissionBundle) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, bundle)
}
