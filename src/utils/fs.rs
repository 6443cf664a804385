use std::path::Path;
use tokio::fs;
use crate::utils::{AssemblerError, AssemblerResult};

/// Get file size in bytes
pub async fn get_file_size(path: impl AsRef<Path>) -> AssemblerResult<u64> {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.len())
        .map_err(|e| AssemblerError::io(format!(
            "Failed to get file size of {}: {}", path.as_ref().display(), e
        )))
}

/// Get the file name of a path for log output
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
