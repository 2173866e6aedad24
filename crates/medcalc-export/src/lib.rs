//! medcalc-export
//!
//! Export of submission bundles: JSON, a Danish text report rendered from
//! a Tera template, and PDF/CSV placeholders.

pub mod csv;
pub mod error;
pub mod format;
pub mod json;
pub mod pdf;
pub mod render;
pub mod text;

pub use format::{ExportFormat, export};
