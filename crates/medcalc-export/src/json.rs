use medcalc_core::models::submission::SubmissionBundle;

use crate::error::ExportError;

/// Pretty-printed JSON of the whole bundle.
pub fn generate_json(bundle: &SubmissionBundle) -> Result<Vec<u8>, ExportError> {
    let mut bytes = serde_json::to_vec_pretty(bundle)?;
    bytes.push(b'\n');
    Ok(bytes)
}
