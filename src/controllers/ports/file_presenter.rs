use crate::core::data::pixel_buffer::PixelBuffer;
use std::io;
use std::path::Path;

/// Persists a rendered frame. Implementations decide the file format and
/// whether alpha survives.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()>;
}
