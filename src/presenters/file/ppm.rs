use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (P6), creating parent directories as needed.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(frame: &FrameBuffer, mut out: impl Write) -> std::io::Result<()> {
        let pixel_rect = frame.pixel_rect();

        // P6: binary RGB, then width, height and max channel value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", pixel_rect.width(), pixel_rect.height())?;
        writeln!(out, "255")?;
        out.write_all(&rgba_to_rgb(frame.buffer()))?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        Self::encode(frame, BufWriter::new(File::create(filepath)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    fn frame() -> FrameBuffer {
        let pixel_rect = PixelRect::new(2, 1).unwrap();
        FrameBuffer::from_data(pixel_rect, vec![255, 0, 0, 255, 1, 2, 3, 255]).unwrap()
    }

    #[test]
    fn test_encode_writes_header_and_rgb_payload() {
        let mut out = Vec::new();

        PpmFilePresenter::encode(&frame(), &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 1, 2, 3]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_directories_and_file() {
        let dir = std::env::temp_dir().join(format!("ppm-presenter-{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");

        PpmFilePresenter::new().present(&frame(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(written.len(), b"P6\n2 1\n255\n".len() + 6);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
