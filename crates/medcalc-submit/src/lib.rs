//! medcalc-submit
//!
//! Hands finished submission bundles to a transport under a timeout and
//! records each attempt as a structured tracing event.

pub mod error;
pub mod events;
pub mod outbox;
pub mod submitter;
pub mod transport;
