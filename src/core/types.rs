//! Core types for assembly settings and results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Order in which directory entries become frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameOrder {
    /// Whatever order the filesystem yields entries in
    #[default]
    Directory,
    /// Sorted by file name
    Name,
}

/// Configuration for assembling frames into a GIF.
///
/// Every field has a default, so a settings file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssemblySettings {
    /// Display time of each frame in milliseconds
    pub frame_delay_ms: u32,
    /// Number of repetitions; `None` loops forever
    pub loop_count: Option<u16>,
    /// Frame ordering
    pub order: FrameOrder,
    /// Palette quantizer speed (1 = best quality, 30 = fastest)
    pub quantizer_speed: i32,
    /// Post-encode optimization pass
    pub optimize: OptimizeSettings,
}

impl Default for AssemblySettings {
    fn default() -> Self {
        Self {
            frame_delay_ms: 100,
            loop_count: None,
            order: FrameOrder::Directory,
            quantizer_speed: 10,
            optimize: OptimizeSettings::default(),
        }
    }
}

/// Settings for the gifsicle pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeSettings {
    /// Whether to run the optimizer at all
    pub enabled: bool,
    /// Optimizer executable, looked up on PATH when not absolute
    pub program: PathBuf,
    /// gifsicle `-O` level (1-3)
    pub level: u8,
    /// Palette size passed as `--colors`; unset leaves every frame's palette alone
    pub colors: Option<u16>,
    /// Extra arguments inserted before the file argument
    pub extra_args: Vec<String>,
}

impl Default for OptimizeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            program: PathBuf::from("gifsicle"),
            level: 1,
            colors: None,
            extra_args: Vec::new(),
        }
    }
}

/// Result of an assembly run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyReport {
    /// Path of the written GIF
    pub output_path: PathBuf,
    /// Number of frames in the GIF
    pub frame_count: usize,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Size in bytes straight out of the encoder
    pub encoded_size: u64,
    /// Size in bytes after the optimization pass
    pub optimized_size: u64,
    /// Bytes saved by the optimizer (can be negative if the file grew)
    pub saved_bytes: i64,
    /// Savings as a percentage of the encoded size
    pub compression_ratio: f64,
    /// Whether the optimizer ran
    pub optimized: bool,
}

impl AssemblyReport {
    /// Builds a report, deriving the savings from the two sizes.
    pub fn new(
        output_path: PathBuf,
        frame_count: usize,
        (width, height): (u32, u32),
        encoded_size: u64,
        optimized_size: Option<u64>,
    ) -> Self {
        let optimized = optimized_size.is_some();
        let optimized_size = optimized_size.unwrap_or(encoded_size);
        let saved_bytes = encoded_size as i64 - optimized_size as i64;
        let compression_ratio = if encoded_size > 0 {
            saved_bytes as f64 / encoded_size as f64 * 100.0
        } else {
            0.0
        };

        Self {
            output_path,
            frame_count,
            width,
            height,
            encoded_size,
            optimized_size,
            saved_bytes,
            compression_ratio,
            optimized,
        }
    }
}
