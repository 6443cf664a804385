// This is the entry point of the gif-assembler binary.
// The lib.rs file serves only as a public API for external consumers.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gif_assembler_lib::cli::Args;
use gif_assembler_lib::{AssemblerError, AssemblySettings, assemble_gif, load_settings};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_writer(std::io::stderr) // stdout is reserved for --json
        .compact()
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let base = match &args.settings {
        Some(path) => load_settings(path).await?,
        None => AssemblySettings::default(),
    };

    let json = args.json;
    let task = args.into_task(base);
    let report = assemble_gif(task).await?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    info!("=== GIF assembler starting ===");
    let json = args.json;
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Assembly failed");
            // Printed directly so the cause survives RUST_LOG filtering
            eprintln!("Error: {e:#}");
            if json {
                if let Some(err) = e.downcast_ref::<AssemblerError>() {
                    println!("{}", serde_json::json!({ "error": err, "message": err.to_string() }));
                }
            }
            ExitCode::FAILURE
        }
    }
}
