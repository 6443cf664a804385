// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;
pub mod cli;

// Public exports for external consumers
pub use crate::core::{AssemblyReport, AssemblySettings, AssemblyTask, FrameOrder, FrameSequence, OptimizeSettings};
pub use crate::utils::{AssemblerError, AssemblerResult};
pub use crate::commands::*;

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
