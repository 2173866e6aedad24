use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use medcalc_export::ExportFormat;
use medcalc_submit::submitter::SubmitConfig;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 2;

const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedcalcConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Format used by `export` when `--format` is not given. Added in v1.
    pub export_format: ExportFormat,
    /// Version label stamped into submission bundles.
    pub app_version: String,
    /// Where `submit` writes bundles. Defaults to the data directory.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub outbox_dir: Option<PathBuf>,
    /// Added in v2.
    pub submit_timeout_secs: u64,
    pub created_at: jiff::Timestamp,
}

impl Default for MedcalcConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            export_format: ExportFormat::Text,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            outbox_dir: None,
            submit_timeout_secs: DEFAULT_SUBMIT_TIMEOUT_SECS,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl MedcalcConfig {
    pub fn submit_config(&self) -> SubmitConfig {
        SubmitConfig {
            app_version: self.app_version.clone(),
            timeout: Duration::from_secs(self.submit_timeout_secs),
        }
    }

    /// Configured outbox, or `<data_dir>/medcalc/outbox`.
    pub fn outbox_dir(&self) -> eyre::Result<PathBuf> {
        if let Some(dir) = &self.outbox_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
        Ok(base.join("medcalc").join("outbox"))
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("medcalc"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the user's config, falling back to defaults when none exists.
pub fn load_config() -> eyre::Result<MedcalcConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MedcalcConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<MedcalcConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MedcalcConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update medcalc."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: add export_format
    if from_version < 1 {
        obj.entry("export_format")
            .or_insert(serde_json::Value::String(ExportFormat::Text.to_string()));
        tracing::info!("migrated config v0 → v1 (added export_format)");
    }

    // v1 → v2: add submit_timeout_secs
    if from_version < 2 {
        obj.entry("submit_timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_SUBMIT_TIMEOUT_SECS.into()));
        tracing::info!("migrated config v1 → v2 (added submit_timeout_secs)");
    }

    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );
    Ok(json)
}

/// Save to the user's config directory. Returns the written path.
pub fn save_config(config: &MedcalcConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &MedcalcConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
