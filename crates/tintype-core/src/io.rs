//! Loading and saving image files.
//!
//! This is the only layer that touches the filesystem or a codec; the filter
//! engine itself operates purely on [`ImageBuffer`] values. Decoding and
//! encoding go through the `image` crate, with the output format inferred
//! from the path extension on save.

use std::path::Path;

use thiserror::Error;

use crate::buffer::ImageBuffer;

/// Errors that can occur while loading or saving an image.
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be opened or read.
    #[error("Failed to read image file: {0}")]
    Read(String),

    /// The file contents are not a decodable image.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Encoding or writing the output file failed.
    #[error("Failed to encode image: {0}")]
    Encode(String),

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Decode the image file at `path` into an [`ImageBuffer`].
///
/// Any alpha channel or non-RGB color type is converted to RGB8 on the way in.
///
/// # Errors
///
/// Returns [`IoError::Read`] if the file cannot be opened and
/// [`IoError::Decode`] if its contents cannot be decoded.
pub fn load_image(path: impl AsRef<Path>) -> Result<ImageBuffer, IoError> {
    let reader = image::ImageReader::open(path).map_err(|e| IoError::Read(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;

    Ok(ImageBuffer::from_rgb_image(img.into_rgb8()))
}

/// Encode `buffer` and write it to `path`, with the format chosen from the
/// path's extension (e.g. `.png`, `.jpg`).
///
/// # Errors
///
/// Returns [`IoError::InvalidDimensions`] for a zero-sized buffer and
/// [`IoError::Encode`] if encoding or writing fails.
pub fn save_image(buffer: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), IoError> {
    if buffer.is_empty() {
        return Err(IoError::InvalidDimensions {
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    buffer
        .to_rgb_image()
        .save(path)
        .map_err(|e| IoError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tintype-io-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_empty_buffer_fails() {
        let buf = ImageBuffer::new(0, 10);
        let result = save_image(&buf, temp_path("empty.png"));
        assert!(matches!(result, Err(IoError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_image(temp_path("does-not-exist.png"));
        assert!(matches!(result, Err(IoError::Read(_))));
    }

    #[test]
    fn test_load_garbage_fails_to_decode() {
        let path = temp_path("garbage.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let result = load_image(&path);
        assert!(matches!(result, Err(IoError::Decode(_))));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_png_save_load_round_trip() {
        let mut buf = ImageBuffer::new(3, 2);
        buf.set(0, 0, Rgb::new(255, 0, 0));
        buf.set(1, 0, Rgb::new(0, 255, 0));
        buf.set(2, 0, Rgb::new(0, 0, 255));
        buf.set(0, 1, Rgb::new(12, 34, 56));

        let path = temp_path("roundtrip.png");
        save_image(&buf, &path).unwrap();

        // PNG is lossless, so pixels must come back exactly.
        let restored = load_image(&path).unwrap();
        assert_eq!(restored, buf);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_jpeg_save_succeeds() {
        let buf = ImageBuffer::new(8, 8);
        let path = temp_path("gray.jpg");
        save_image(&buf, &path).unwrap();

        let restored = load_image(&path).unwrap();
        assert_eq!(restored.width(), 8);
        assert_eq!(restored.height(), 8);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_error_display() {
        let err = IoError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (10) must be non-zero"
        );
    }
}
