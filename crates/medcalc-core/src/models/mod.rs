pub mod details;
pub mod metadata;
pub mod result;
pub mod risk;
pub mod submission;
pub mod validation;
