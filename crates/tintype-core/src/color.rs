//! RGB and HSL color models and the conversions between them.
//!
//! `Rgb` is the storage type for every pixel in an [`ImageBuffer`](crate::ImageBuffer).
//! `Hsl` is a transient view derived from an `Rgb` for the hue/saturation/lightness
//! filters; it is never stored in a buffer.

use serde::{Deserialize, Serialize};

/// An RGB pixel with integer channels, nominally in 0-255.
///
/// Channels are `i32` rather than `u8` because the sepia filter and the warm
/// shift in the Instagram filter intentionally leave values past 255
/// unclamped. The overshoot is representable here and only narrowed to bytes
/// at the codec boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: i32,
    /// Green channel.
    pub g: i32,
    /// Blue channel.
    pub b: i32,
}

impl Rgb {
    /// Pure black (0, 0, 0).
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Pure white (255, 255, 255).
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a pixel from raw channel values. No range validation.
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSL.
    ///
    /// Standard conversion: lightness is the mean of the largest and smallest
    /// normalized channel, saturation is chroma relative to lightness (zero
    /// for achromatic pixels, which also get hue 0), and hue is derived from
    /// whichever channel is largest, in degrees [0, 360).
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic: hue is undefined, zero by convention.
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let hue = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Hsl {
            hue,
            saturation,
            lightness,
        }
    }
}

/// An HSL pixel: hue in degrees (nominally 0-360), saturation and lightness
/// as fractions (nominally 0-1).
///
/// Fields are plain and unvalidated; callers are responsible for sane ranges.
/// An out-of-range hue is still converted (it is reduced mod 360 on the way
/// back to RGB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub hue: f32,
    /// Saturation fraction.
    pub saturation: f32,
    /// Lightness fraction.
    pub lightness: f32,
}

impl Hsl {
    /// Create an HSL value from raw components. No range validation.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert back to RGB with integer channels in [0, 255].
    ///
    /// Standard inverse conversion via chroma and the hue sector. Channel
    /// values are truncated, not rounded, so a round trip through HSL may be
    /// off by one per channel.
    pub fn to_rgb(self) -> Rgb {
        let h = self.hue.rem_euclid(360.0);

        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = self.lightness - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: ((r + m) * 255.0) as i32,
            g: ((g + m) * 255.0) as i32,
            b: ((b + m) * 255.0) as i32,
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
