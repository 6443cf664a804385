//! Encodes a [`FrameSequence`] as an animated GIF.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use image::codecs::gif::{GifEncoder, Repeat};
use image::Delay;
use tracing::debug;

use crate::core::{AssemblySettings, FrameSequence};
use crate::utils::{AssemblerError, AssemblerResult};

/// Writes `frames` as a GIF stream into `writer`.
///
/// The trailer is emitted when the encoder is dropped at the end of this
/// call, so callers flush `writer` afterwards.
pub fn encode_gif<W: Write>(
    frames: &FrameSequence,
    settings: &AssemblySettings,
    writer: W,
) -> AssemblerResult<()> {
    if frames.is_empty() {
        return Err(AssemblerError::encode("Cannot encode a GIF without frames"));
    }

    let mut encoder = GifEncoder::new_with_speed(writer, settings.quantizer_speed);
    let repeat = match settings.loop_count {
        Some(count) => Repeat::Finite(count),
        None => Repeat::Infinite,
    };
    encoder
        .set_repeat(repeat)
        .map_err(|e| AssemblerError::encode(format!("Failed to set loop count: {e}")))?;

    let delay = Delay::from_numer_denom_ms(settings.frame_delay_ms, 1);
    for frame in frames.iter() {
        encoder
            .encode_frame(image::Frame::from_parts(frame.image.clone(), 0, 0, delay))
            .map_err(|e| {
                AssemblerError::encode(format!(
                    "Failed to encode frame '{}': {e}",
                    frame.source.display()
                ))
            })?;
    }

    Ok(())
}

/// Encodes `frames` to `dest`, replacing any existing file.
///
/// The stream goes to a temporary file in the destination directory first and
/// is renamed over `dest` only once complete. Returns the size written.
pub fn write_gif(
    frames: &FrameSequence,
    settings: &AssemblySettings,
    dest: &Path,
) -> AssemblerResult<u64> {
    let parent = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".gif-assembler-")
        .suffix(".gif")
        .tempfile_in(parent)
        .map_err(|e| AssemblerError::io(format!("Cannot write to {}: {e}", parent.display())))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        encode_gif(frames, settings, &mut writer)?;
        writer.flush()?;
    }

    // Temp files are owner-only; take the mode of the file being replaced, or
    // of a freshly created one so the umask applies
    let permissions = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(dest)
        .and_then(|f| f.metadata())
        .map_err(|e| AssemblerError::io(format!("Cannot write {}: {e}", dest.display())))?
        .permissions();
    tmp.as_file().set_permissions(permissions)?;

    tmp.persist(dest)
        .map_err(|e| AssemblerError::io(format!("Cannot write {}: {}", dest.display(), e.error)))?;

    let size = std::fs::metadata(dest)?.len();
    debug!("Encoded {} frames into {} ({} bytes)", frames.len(), dest.display(), size);
    Ok(size)
}
