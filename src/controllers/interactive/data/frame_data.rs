use crate::core::data::pixel_buffer::PixelBuffer;
use std::time::Duration;

/// A completed frame for the submission numbered `generation`.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
