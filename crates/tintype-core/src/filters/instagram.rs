//! Multi-pass "Instagram" style filter: a warm color shift followed by two
//! overlay blends (a halo for vignetting and a decorative grain layer).

use crate::buffer::ImageBuffer;
use crate::color::Rgb;

/// Apply the Instagram-style filter to the image in place.
///
/// Three sequential full-image passes, each completing before the next:
/// 1. Warm shift: `r <- r * 1.2`, `b <- b / 1.5` (truncated, unclamped),
///    green unchanged.
/// 2. Blend 65% of the image with 35% of `halo` per channel.
/// 3. Blend 95% of the image with 5% of `grain` per channel.
///
/// Both overlays are supplied by the caller (typically loaded with
/// [`load_image`](crate::io::load_image)) and must have the same dimensions
/// as `image`. A mismatched overlay is a caller bug and panics on the first
/// out-of-bounds pixel access.
pub fn instagram(image: &mut ImageBuffer, halo: &ImageBuffer, grain: &ImageBuffer) {
    warm_shift(image);
    blend(image, halo, 0.65, 0.35);
    blend(image, grain, 0.95, 0.05);
}

/// Warm the image by boosting red and cutting blue.
fn warm_shift(image: &mut ImageBuffer) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let px = image.get(x, y);
            image.set(
                x,
                y,
                Rgb::new((px.r as f64 * 1.2) as i32, px.g, (px.b as f64 / 1.5) as i32),
            );
        }
    }
}

/// Overlay blend: replace each channel with the weighted average of the image
/// and an equal-sized overlay.
fn blend(image: &mut ImageBuffer, overlay: &ImageBuffer, image_weight: f64, overlay_weight: f64) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let a = image.get(x, y);
            let b = overlay.get(x, y);
            image.set(
                x,
                y,
                Rgb::new(
                    (a.r as f64 * image_weight + b.r as f64 * overlay_weight) as i32,
                    (a.g as f64 * image_weight + b.g as f64 * overlay_weight) as i32,
                    (a.b as f64 * image_weight + b.b as f64 * overlay_weight) as i32,
                ),
            );
        }
    }
}
