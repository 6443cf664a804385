use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::core::OptimizeSettings;
use crate::utils::{AssemblerError, AssemblerResult, extract_filename, get_file_size};
use super::types::OptimizeOutcome;

/// Runs gifsicle over a GIF, rewriting it in place.
pub struct Gifsicle {
    settings: OptimizeSettings,
}

impl Gifsicle {
    pub fn new(settings: OptimizeSettings) -> Self {
        Self { settings }
    }

    /// Builds the argument list for optimizing `path` in place.
    pub fn args(&self, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--batch".into(),
            format!("-O{}", self.settings.level).into(),
        ];
        if let Some(colors) = self.settings.colors {
            args.push("--colors".into());
            args.push(colors.to_string().into());
        }
        args.extend(self.settings.extra_args.iter().map(OsString::from));
        args.push(path.as_os_str().to_owned());
        args
    }

    /// Optimizes `path` in place and reports the size before and after.
    pub async fn optimize(&self, path: &Path) -> AssemblerResult<OptimizeOutcome> {
        let program = &self.settings.program;
        let original_size = get_file_size(path).await?;
        let args = self.args(path);
        debug!("Running {} {:?}", program.display(), args);

        let output = Command::new(program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    AssemblerError::OptimizerUnavailable(program.clone())
                }
                _ => AssemblerError::io(format!("Failed to run {}: {}", program.display(), e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("Optimizer failed: {}", stderr);
            return Err(AssemblerError::OptimizerFailed {
                status: output.status.code(),
                stderr,
            });
        }

        let optimized_size = get_file_size(path).await?;
        let outcome = OptimizeOutcome { original_size, optimized_size };
        debug!(
            "'{}' optimized: {} → {} bytes ({} saved)",
            extract_filename(path),
            original_size,
            optimized_size,
            outcome.saved_bytes()
        );
        Ok(outcome)
    }
}
