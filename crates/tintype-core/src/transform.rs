//! Geometric transforms.

use crate::buffer::ImageBuffer;

/// Rotate the image 90 degrees clockwise.
///
/// Unlike the in-place filters, rotation allocates and returns a new buffer
/// with swapped dimensions; the source image is left unmodified. The pixel at
/// (x, y) lands at (new_width - 1 - y, x) in the result.
pub fn rotate90(image: &ImageBuffer) -> ImageBuffer {
    let mut rotated = ImageBuffer::new(image.height(), image.width());
    for x in 0..image.width() {
        for y in 0..image.height() {
            rotated.set(rotated.width() - 1 - y, x, image.get(x, y));
        }
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    /// 3x2 image with a distinct value per pixel.
    fn numbered_image() -> ImageBuffer {
        ImageBuffer::from_pixels(
            3,
            2,
            (1..=6).map(|v| Rgb::new(v, v, v)).collect(),
        )
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let img = numbered_image();
        let rotated = rotate90(&img);
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
    }

    #[test]
    fn test_origin_maps_to_top_right() {
        // (0, 0) of a WxH image lands at (H - 1, 0) of the HxW result.
        let mut img = ImageBuffer::new(3, 2);
        img.set(0, 0, Rgb::WHITE);

        let rotated = rotate90(&img);
        assert_eq!(rotated.get(1, 0), Rgb::WHITE);
    }

    #[test]
    fn test_full_pixel_mapping() {
        // Layout before:   1 2 3     after:   4 1
        //                  4 5 6              5 2
        //                                     6 3
        let rotated = rotate90(&numbered_image());
        let expected: Vec<i32> = vec![4, 1, 5, 2, 6, 3];
        let mut actual = Vec::new();
        for y in 0..rotated.height() {
            for x in 0..rotated.width() {
                actual.push(rotated.get(x, y).r);
            }
        }
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_source_is_unmodified() {
        let img = numbered_image();
        let before = img.clone();
        let _rotated = rotate90(&img);
        assert_eq!(img, before);
    }

    #[test]
    fn test_four_rotations_restore_image() {
        let img = numbered_image();
        let restored = rotate90(&rotate90(&rotate90(&rotate90(&img))));
        assert_eq!(restored, img);
    }

    #[test]
    fn test_single_pixel_rotation() {
        let mut img = ImageBuffer::new(1, 1);
        img.set(0, 0, Rgb::new(7, 8, 9));
        let rotated = rotate90(&img);
        assert_eq!(rotated.get(0, 0), Rgb::new(7, 8, 9));
    }

    #[test]
    fn test_empty_image_rotation() {
        let rotated = rotate90(&ImageBuffer::new(0, 0));
        assert!(rotated.is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
