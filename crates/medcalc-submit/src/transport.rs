use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Acknowledgement from a transport that a payload was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Transport-specific reference, e.g. a file path or remote id.
    pub reference: String,
}

/// Delivers serialized submission bundles somewhere.
pub trait Transport: Send + Sync {
    /// Short name used in submission events.
    fn name(&self) -> &str;

    fn send<'a>(
        &'a self,
        payload: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<Receipt, SubmitError>>;
}
