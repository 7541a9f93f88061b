use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary (`P6`) PPM writer. Missing parent directories are created.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        let pixel_rect = buffer.pixel_rect();

        // P6 header: magic, width, height, max channel value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", pixel_rect.width(), pixel_rect.height())?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())?;
        writer.flush()
    }
}
