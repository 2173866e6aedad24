use crate::error::ExportError;

/// Generate a PDF from the rendered text report.
///
/// Placeholder: PDF output needs a rendering library, so this always
/// returns [`ExportError::Unsupported`].
pub fn generate_pdf(_rendered: &str) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Unsupported("pdf"))
}
