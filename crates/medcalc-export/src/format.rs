use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use medcalc_core::models::submission::SubmissionBundle;

use crate::error::ExportError;
use crate::{csv, json, pdf, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
    Pdf,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Json, Self::Text, Self::Pdf, Self::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }

    /// File extension for written exports.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Json | Self::Text)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExportError::UnknownFormat(s.to_string()))
    }
}

/// Export a bundle in the requested format.
pub fn export(format: ExportFormat, bundle: &SubmissionBundle) -> Result<Vec<u8>, ExportError> {
    let output = match format {
        ExportFormat::Json => json::generate_json(bundle),
        ExportFormat::Text => text::render_text(bundle).map(String::into_bytes),
        ExportFormat::Pdf => text::render_text(bundle).and_then(|rendered| pdf::generate_pdf(&rendered)),
        ExportFormat::Csv => csv::generate_csv(bundle),
    };

    match &output {
        Ok(bytes) => tracing::debug!(
            format = %format,
            calculator = %bundle.config.calculator_type,
            bytes = bytes.len(),
            "export generated"
        ),
        Err(e) => tracing::warn!(format = %format, error = %e, "export failed"),
    }
    output
}
