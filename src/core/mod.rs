//! Core types for the assembler.
//!
//! - [`AssemblyTask`]: One assembly run (input dir, output path, settings)
//! - [`AssemblySettings`]: Encoding and optimization configuration
//! - [`FrameSequence`]: Decoded frames in output order
//! - [`AssemblyReport`]: Result of a run

mod frames;
mod task;
mod types;

pub use frames::{Frame, FrameSequence};
pub use task::{AssemblyTask, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
pub use types::{AssemblyReport, AssemblySettings, FrameOrder, OptimizeSettings};
