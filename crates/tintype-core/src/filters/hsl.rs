//! Hue, saturation, and lightness adjustments.
//!
//! Each filter converts a pixel to HSL, overwrites one component, and
//! converts back. The new component value is taken as-is, without range
//! validation, matching the permissiveness of the color types themselves.

use crate::buffer::ImageBuffer;

/// Set every pixel's hue to `hue` (degrees, nominally 0-360).
pub fn set_hue(image: &mut ImageBuffer, hue: f32) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let mut hsl = image.get(x, y).to_hsl();
            hsl.hue = hue;
            image.set(x, y, hsl.to_rgb());
        }
    }
}

/// Set every pixel's saturation to `saturation` (fraction, nominally 0-1).
pub fn set_saturation(image: &mut ImageBuffer, saturation: f32) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let mut hsl = image.get(x, y).to_hsl();
            hsl.saturation = saturation;
            image.set(x, y, hsl.to_rgb());
        }
    }
}

/// Set every pixel's lightness to `lightness` (fraction, nominally 0-1).
pub fn set_lightness(image: &mut ImageBuffer, lightness: f32) {
    for x in 0..image.width() {
        for y in 0..image.height() {
            let mut hsl = image.get(x, y).to_hsl();
            hsl.lightness = lightness;
            image.set(x, y, hsl.to_rgb());
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::Rgb;
    use proptest::prelude::*;

    proptest! {
        /// Property: zero saturation produces a gray pixel for any input.
        #[test]
        fn prop_zero_saturation_is_gray(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
            let mut img = ImageBuffer::from_pixels(1, 1, vec![Rgb::new(r, g, b)]);
            set_saturation(&mut img, 0.0);
            let px = img.get(0, 0);
            prop_assert_eq!(px.r, px.g);
            prop_assert_eq!(px.g, px.b);
        }

        /// Property: setting hue keeps channels inside [0, 255] for in-range input.
        #[test]
        fn prop_set_hue_stays_in_range(
            r in 0i32..=255,
            g in 0i32..=255,
            b in 0i32..=255,
            hue in 0.0f32..360.0,
        ) {
            let mut img = ImageBuffer::from_pixels(1, 1, vec![Rgb::new(r, g, b)]);
            set_hue(&mut img, hue);
            let px = img.get(0, 0);
            prop_assert!((0..=255).contains(&px.r));
            prop_assert!((0..=255).contains(&px.g));
            prop_assert!((0..=255).contains(&px.b));
        }
    }
}
