pub mod collector;
pub mod encoder;
pub mod gifsicle;

pub use collector::{collect_frames, decode_frame, list_frame_sources};
pub use encoder::{encode_gif, write_gif};
pub use gifsicle::{Gifsicle, OptimizeOutcome};
