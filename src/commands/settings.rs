use std::path::Path;
use tracing::debug;
use crate::core::AssemblySettings;
use crate::utils::{AssemblerError, AssemblerResult};

/// Loads settings from a JSON file; missing fields take their defaults.
pub async fn load_settings(path: &Path) -> AssemblerResult<AssemblySettings> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AssemblerError::config(format!("Cannot read settings file {}: {}", path.display(), e))
    })?;

    let settings = serde_json::from_str(&raw).map_err(|e| {
        AssemblerError::config(format!("Invalid settings file {}: {}", path.display(), e))
    })?;

    debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
