use std::path::{Path, PathBuf};

use crate::error::SubmitError;
use crate::transport::{BoxFuture, Receipt, Transport};

/// Writes each payload as a JSON file into a directory, for pickup by
/// whatever forwards submissions onward.
#[derive(Debug, Clone)]
pub struct OutboxTransport {
    dir: PathBuf,
}

impl OutboxTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(payload: &serde_json::Value) -> Result<String, SubmitError> {
        let session_id = payload
            .pointer("/metadata/sessionId")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| SubmitError::Transport("payload has no metadata.sessionId".to_string()))?;
        Ok(format!("{session_id}.json"))
    }
}

impl Transport for OutboxTransport {
    fn name(&self) -> &str {
        "outbox"
    }

    fn send<'a>(
        &'a self,
        payload: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<Receipt, SubmitError>> {
        Box::pin(async move {
            let path = self.dir.join(Self::file_name(payload)?);
            let bytes = serde_json::to_vec_pretty(payload)?;

            tokio::fs::create_dir_all(&self.dir).await?;
            let tmp = path.with_extension("json.tmp");
            tokio::fs::write(&tmp, &bytes).await?;
            tokio::fs::rename(&tmp, &path).await?;

            Ok(Receipt {
                reference: path.display().to_string(),
            })
        })
    }
}
