use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Binary P6 output. Alpha is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn encode<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
        let width = buffer.pixel_rect().width();
        let height = buffer.pixel_rect().height();

        // P6: binary RGB, then width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", width, height)?;
        writeln!(writer, "255")?;
        writer.write_all(&buffer.rgb_bytes())?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        Self::encode(buffer, BufWriter::new(File::create(filepath)?))
    }
}
