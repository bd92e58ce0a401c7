//! Per-pixel filters: grayscale, invert, and sepia.
//!
//! Each filter visits every pixel independently and mutates the buffer in
//! place through the caller's handle.

use crate::buffer::ImageBuffer;
use crate::color::Rgb;

/// Convert the image to grayscale by setting every channel to the integer
/// average of the pixel's three channels.
pub fn grayscale(image: &mut ImageBuffer) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let px = image.get(x, y);
            let avg = (px.r + px.g + px.b) / 3;
            image.set(x, y, Rgb::new(avg, avg, avg));
        }
    }
}

/// Invert the image: every channel becomes `255 - channel`.
pub fn invert(image: &mut ImageBuffer) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let px = image.get(x, y);
            image.set(x, y, Rgb::new(255 - px.r, 255 - px.g, 255 - px.b));
        }
    }
}

/// Convert the image to sepia using the fixed coefficient matrix
///
/// ```text
/// r' = 0.393 r + 0.769 g + 0.189 b
/// g' = 0.349 r + 0.686 g + 0.168 b
/// b' = 0.272 r + 0.534 g + 0.131 b
/// ```
///
/// Results are truncated to integers and deliberately not clamped, so bright
/// pixels can exceed 255. Known latent defect carried over from the original
/// filter definition.
pub fn sepia(image: &mut ImageBuffer) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let px = image.get(x, y);
            let (r, g, b) = (px.r as f64, px.g as f64, px.b as f64);
            image.set(
                x,
                y,
                Rgb::new(
                    (0.393 * r + 0.769 * g + 0.189 * b) as i32,
                    (0.349 * r + 0.686 * g + 0.168 * b) as i32,
                    (0.272 * r + 0.534 * g + 0.131 * b) as i32,
                ),
            );
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
