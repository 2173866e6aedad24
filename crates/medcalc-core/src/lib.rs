//! medcalc-core
//!
//! Pure domain types shared by the calculators, export and submission
//! crates. No scoring logic lives here; this is the result and risk
//! vocabulary every calculator conforms to.

pub mod error;
pub mod models;
