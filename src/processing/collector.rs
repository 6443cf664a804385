//! Turns the regular files of a directory into decoded frames.
//!
//! Each file is decoded inside `tokio::task::spawn_blocking` and awaited
//! before the next one starts, so frames arrive strictly in listing order.

use std::path::{Path, PathBuf};
use image::ImageReader;
use tracing::{debug, info, warn};

use crate::core::{Frame, FrameOrder, FrameSequence};
use crate::utils::{AssemblerError, AssemblerResult, extract_filename};

/// Lists the regular files directly inside `dir`.
///
/// Symlinks are followed. Directories, dangling links and special files are
/// skipped.
pub async fn list_frame_sources(dir: &Path, order: FrameOrder) -> AssemblerResult<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        AssemblerError::io(format!("Failed to read directory {}: {}", dir.display(), e))
    })?;

    let mut sources = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        AssemblerError::io(format!("Failed to read directory {}: {}", dir.display(), e))
    })? {
        let path = entry.path();
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => sources.push(path),
            Ok(_) => debug!("Skipping non-file entry '{}'", extract_filename(&path)),
            Err(e) => warn!("Skipping unreadable entry '{}': {}", path.display(), e),
        }
    }

    if order == FrameOrder::Name {
        sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(sources)
}

/// Decodes one file into an RGBA frame.
///
/// The format is sniffed from the file contents, falling back to the
/// extension.
pub fn decode_frame(path: &Path) -> AssemblerResult<Frame> {
    let image = ImageReader::open(path)
        .map_err(|e| AssemblerError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| AssemblerError::decode(path, e))?
        .decode()
        .map_err(|e| AssemblerError::decode(path, e))?;

    Ok(Frame::new(path, image.into_rgba8()))
}

/// Lists and decodes every frame of `dir`.
pub async fn collect_frames(dir: &Path, order: FrameOrder) -> AssemblerResult<FrameSequence> {
    let sources = list_frame_sources(dir, order).await?;
    let total = sources.len();
    info!("Collecting {} frames from {}", total, dir.display());

    let mut frames = FrameSequence::new();
    for (idx, source) in sources.into_iter().enumerate() {
        let frame = tokio::task::spawn_blocking(move || decode_frame(&source))
            .await
            .map_err(|e| AssemblerError::decode(dir, format!("Decode task panicked: {e}")))??;

        let (width, height) = frame.dimensions();
        debug!(
            "Frame {}/{} '{}': {}×{}",
            idx + 1,
            total,
            extract_filename(&frame.source),
            width,
            height
        );

        frames.push(frame)?;
    }

    Ok(frames)
}
