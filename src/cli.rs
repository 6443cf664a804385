//! Command-line surface.

use std::path::PathBuf;
use clap::Parser;
use crate::core::{AssemblySettings, AssemblyTask, FrameOrder, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};

/// Assemble the images in a directory into an optimized animated GIF
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose regular files become frames
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Where to write the GIF
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// JSON settings file; flags below override its values
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Frame delay in milliseconds, a multiple of 10
    #[arg(long)]
    pub delay: Option<u32>,

    /// Number of times to repeat the animation (loops forever when omitted)
    #[arg(long)]
    pub loop_count: Option<u16>,

    /// Order frames by file name instead of directory order
    #[arg(long, default_value_t = false)]
    pub sort_by_name: bool,

    /// Palette quantizer speed, 1 (best) to 30 (fastest)
    #[arg(long)]
    pub quantizer_speed: Option<i32>,

    /// Skip the gifsicle optimization pass
    #[arg(long, default_value_t = false)]
    pub no_optimize: bool,

    /// Optimizer executable
    #[arg(long)]
    pub optimizer: Option<PathBuf>,

    /// gifsicle optimization level (1-3)
    #[arg(long)]
    pub optimize_level: Option<u8>,

    /// Palette size handed to gifsicle (2-256)
    #[arg(long)]
    pub colors: Option<u16>,

    /// Print the report as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Applies flag overrides on top of `base`.
    pub fn apply_overrides(&self, mut base: AssemblySettings) -> AssemblySettings {
        if let Some(delay) = self.delay {
            base.frame_delay_ms = delay;
        }
        if let Some(count) = self.loop_count {
            base.loop_count = Some(count);
        }
        if self.sort_by_name {
            base.order = FrameOrder::Name;
        }
        if let Some(speed) = self.quantizer_speed {
            base.quantizer_speed = speed;
        }
        if self.no_optimize {
            base.optimize.enabled = false;
        }
        if let Some(program) = &self.optimizer {
            base.optimize.program = program.clone();
        }
        if let Some(level) = self.optimize_level {
            base.optimize.level = level;
        }
        if let Some(colors) = self.colors {
            base.optimize.colors = Some(colors);
        }
        base
    }

    /// Builds the task from the paths and the merged settings.
    pub fn into_task(self, base: AssemblySettings) -> AssemblyTask {
        let settings = self.apply_overrides(base);
        AssemblyTask::new(self.input, self.output, settings)
    }
}
