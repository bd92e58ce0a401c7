//! Tintype Core - Image filter library
//!
//! This crate provides the core image processing functionality for Tintype:
//! an RGB image buffer, RGB/HSL color math, a set of whole-image filters
//! (grayscale, invert, sepia, median-luminance black/white, an Instagram-style
//! warm-and-blend filter, and HSL component adjustments), 90-degree rotation,
//! and thin load/save helpers over the `image` crate.
//!
//! # Example
//!
//! ```ignore
//! use tintype_core::{filters, io, transform};
//!
//! let mut img = io::load_image("photo.jpg")?;
//! filters::sepia(&mut img);
//! let rotated = transform::rotate90(&img);
//! io::save_image(&rotated, "photo-sepia.png")?;
//! ```

pub mod buffer;
pub mod color;
pub mod filters;
pub mod io;
pub mod transform;

pub use buffer::ImageBuffer;
pub use color::{Hsl, Rgb};
pub use filters::{
    black_white, grayscale, instagram, invert, sepia, set_hue, set_lightness, set_saturation,
};
pub use io::{load_image, save_image, IoError};
pub use transform::rotate90;
