//! Assembly task definition.

use std::path::PathBuf;
use crate::core::AssemblySettings;

/// Source directory of the original frame dump.
pub const DEFAULT_INPUT_DIR: &str = "./output/";
/// Where the assembled GIF lands by default.
pub const DEFAULT_OUTPUT_PATH: &str = "./output.gif";

/// Represents one assembly run.
///
/// Contains the source directory, the destination file and the settings
/// that control encoding and optimization.
#[derive(Debug, Clone)]
pub struct AssemblyTask {
    /// Directory whose regular files become frames
    pub input_dir: PathBuf,
    /// Path where the GIF will be written
    pub output_path: PathBuf,
    /// Encoding and optimization settings
    pub settings: AssemblySettings,
}

impl AssemblyTask {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        settings: AssemblySettings,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            settings,
        }
    }
}
