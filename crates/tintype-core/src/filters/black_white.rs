//! Stylized black/white filter thresholded at the median luminance.

use crate::buffer::ImageBuffer;
use crate::color::Rgb;

/// Squared-weighted luminance used for the black/white threshold.
///
/// The weights are the usual ITU-R BT.601 channel sensitivities applied to
/// squared channel values, which biases the threshold toward bright regions.
fn luminance(px: Rgb) -> f64 {
    0.299 * (px.r * px.r) as f64 + 0.587 * (px.g * px.g) as f64 + 0.114 * (px.b * px.b) as f64
}

/// Convert the image to pure black and white (no gray).
///
/// Two passes over the whole image:
/// 1. Collect the luminance of every pixel and find the median (mean of the
///    two central values for an even pixel count).
/// 2. Set each pixel to white if its luminance is at least the median,
///    otherwise black.
///
/// The first pass completes before any pixel is written. Empty images are
/// left untouched.
pub fn black_white(image: &mut ImageBuffer) {
    let mut values = Vec::with_capacity(image.pixel_count() as usize);
    for x in 0..image.width() {
        for y in 0..image.height() {
            values.push(luminance(image.get(x, y)));
        }
    }

    if values.is_empty() {
        return;
    }

    values.sort_by(f64::total_cmp);

    let n = values.len();
    let median = if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    };

    for x in 0..image.width() {
        for y in 0..image.height() {
            let px = if luminance(image.get(x, y)) >= median {
                Rgb::WHITE
            } else {
                Rgb::BLACK
            };
            image.set(x, y, px);
        }
    }
}
