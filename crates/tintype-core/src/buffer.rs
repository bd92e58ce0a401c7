//! In-memory image buffer: a dense width x height grid of RGB pixels.

use crate::color::Rgb;

/// A width x height grid of [`Rgb`] pixels in row-major order, indexed by
/// (x, y) with x in [0, width) and y in [0, height).
///
/// The buffer is owned by the caller; filters either mutate it through a
/// `&mut` borrow or (for rotation) allocate and return a new one. Out-of-range
/// channel values produced by the unclamped filters live here untouched and
/// are only narrowed to bytes when converting to an [`image::RgbImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a blank (black) buffer with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width as usize) * (height as usize)],
        }
    }

    /// Create a buffer from existing pixel data in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel access out of bounds: ({}, {}) in {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the pixel at (x, y). Panics on out-of-bounds access.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y). Panics on out-of-bounds access.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    /// Create a buffer from an [`image::RgbImage`].
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Rgb::new(p.0[0] as i32, p.0[1] as i32, p.0[2] as i32))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an [`image::RgbImage`] for encoding.
    ///
    /// Channels are narrowed to their low byte, matching how unclamped values
    /// land in packed 8-bit raster storage.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let px = self.get(x, y);
            image::Rgb([px.r as u8, px.g as u8, px.b as u8])
        })
    }
}
