//! The filter engine: pure functions from image to image.
//!
//! Every filter here mutates the caller's buffer in place through a `&mut`
//! borrow; the only allocating transformation is
//! [`rotate90`](crate::transform::rotate90), which lives in the transform
//! module. Filters are independent and freely composable.

mod basic;
mod black_white;
mod hsl;
mod instagram;

pub use basic::{grayscale, invert, sepia};
pub use black_white::black_white;
pub use hsl::{set_hue, set_lightness, set_saturation};
pub use instagram::instagram;
