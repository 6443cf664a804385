//! The assembly pipeline: collect → encode → optimize.

use tracing::{debug, info};
use crate::core::{AssemblyReport, AssemblyTask};
use crate::processing::{Gifsicle, collect_frames, write_gif};
use crate::utils::{AssemblerError, AssemblerResult, validate_task};

/// Assembles every regular file of `task.input_dir` into one GIF.
///
/// All frames are decoded before the output is touched, so a bad input file
/// or an empty directory leaves any previous output in place. The optimizer
/// runs last and rewrites the GIF in place.
///
/// # Arguments
/// * `task` - Source directory, destination path and settings
///
/// # Returns
/// A report with frame count, dimensions and the sizes before and after
/// optimization.
pub async fn assemble_gif(task: AssemblyTask) -> AssemblerResult<AssemblyReport> {
    debug!(
        "Received assemble command: {} → {}",
        task.input_dir.display(),
        task.output_path.display()
    );
    validate_task(&task)?;

    let AssemblyTask { input_dir, output_path, settings } = task;

    let frames = collect_frames(&input_dir, settings.order).await?;
    let Some((width, height)) = frames.dimensions() else {
        return Err(AssemblerError::EmptyInput(input_dir));
    };
    let frame_count = frames.len();

    info!(
        "Encoding {} frames ({}×{}, {}ms delay) into {}",
        frame_count,
        width,
        height,
        settings.frame_delay_ms,
        output_path.display()
    );
    let encoded_size = {
        let settings = settings.clone();
        let output_path = output_path.clone();
        tokio::task::spawn_blocking(move || write_gif(&frames, &settings, &output_path))
            .await
            .map_err(|e| AssemblerError::encode(format!("Encode task panicked: {e}")))??
    };

    let optimized_size = if settings.optimize.enabled {
        let outcome = Gifsicle::new(settings.optimize)
            .optimize(&output_path)
            .await?;
        Some(outcome.optimized_size)
    } else {
        debug!("Optimization disabled, keeping encoder output");
        None
    };

    let report = AssemblyReport::new(
        output_path,
        frame_count,
        (width, height),
        encoded_size,
        optimized_size,
    );

    info!(
        "Wrote {} ({} frames, {} bytes, {:.1}% saved by optimizer)",
        report.output_path.display(),
        report.frame_count,
        report.optimized_size,
        report.compression_ratio
    );
    Ok(report)
}
