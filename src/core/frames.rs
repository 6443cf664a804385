//! Decoded frames held in memory until encoding.

use std::path::PathBuf;
use image::RgbaImage;
use crate::utils::{AssemblerError, AssemblerResult};

/// A single decoded image and the file it came from.
#[derive(Debug, Clone)]
pub struct Frame {
    pub source: PathBuf,
    pub image: RgbaImage,
}

impl Frame {
    pub fn new(source: impl Into<PathBuf>, image: RgbaImage) -> Self {
        Self {
            source: source.into(),
            image,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Ordered frames; the GIF keeps insertion order.
///
/// All frames share the first frame's dimensions.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame, rejecting one whose size differs from the first.
    pub fn push(&mut self, frame: Frame) -> AssemblerResult<()> {
        if let Some(expected) = self.dimensions() {
            let found = frame.dimensions();
            if found != expected {
                return Err(AssemblerError::DimensionMismatch {
                    path: frame.source,
                    expected,
                    found,
                });
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Dimensions of the first frame, if any.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(Frame::dimensions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}
