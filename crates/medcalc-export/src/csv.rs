use medcalc_core::models::submission::SubmissionBundle;

use crate::error::ExportError;

/// Placeholder; always returns [`ExportError::Unsupported`].
pub fn generate_csv(_bundle: &SubmissionBundle) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Unsupported("csv"))
}
