//! Command handlers invoked by the CLI.
//!
//! - [`assemble_gif`]: Run the full pipeline for one task
//! - [`load_settings`]: Read an `AssemblySettings` JSON file

mod assemble;
mod settings;

pub use assemble::assemble_gif;
pub use settings::load_settings;
