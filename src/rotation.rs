//! Coordinate rotation utilities
//!
//! This module provides functions for applying rotation transformations to pixel
//! coordinates when mapping to the frame buffer.
//!
//! The ST7565 stores pixels page-major: each byte is a vertical strip of 8
//! pixels within one page, with the top pixel in the MSB, and a page is 128
//! consecutive bytes. The frame buffer uses the same layout so it can be
//! streamed to the controller unchanged.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation, 128x64
//! - **Rotate90**: 90° clockwise, 64x128
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise (or 90° counter-clockwise)
//!
//! ## Example
//!
//! ```
//! use st7565::{rotation::apply_rotation, Rotation};
//!
//! // Pixel (0,0) is the top of the first column strip
//! let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate0);
//! assert_eq!(idx, 0);
//! assert_eq!(bit, 0x80);
//!
//! // Pixel (0,9) is one pixel down in the second page
//! let (idx, bit) = apply_rotation(0, 9, 128, 64, Rotation::Rotate0);
//! assert_eq!(idx, 128);
//! assert_eq!(bit, 0x40);
//! ```

use crate::config::Rotation;

/// Apply rotation transformation to get buffer index and bit mask
///
/// Converts logical (x, y) coordinates to physical buffer location (byte_index, bit_mask)
/// based on the specified rotation.
///
/// # Arguments
///
/// * `x` - X coordinate in the rotated frame
/// * `y` - Y coordinate in the rotated frame
/// * `width` - Physical width in pixels
/// * `height` - Physical height in pixels (must be multiple of 8)
/// * `rotation` - Rotation mode
///
/// # Returns
///
/// Returns a tuple of (byte_index, bit_mask):
/// - `byte_index`: Index into the buffer array
/// - `bit_mask`: Bit mask within the byte (0x80 for the top pixel of a page)
pub fn apply_rotation(x: u32, y: u32, width: u32, height: u32, rotation: Rotation) -> (usize, u8) {
    let (px, py) = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - 1 - y, x),
        Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
        Rotation::Rotate270 => (y, height - 1 - x),
    };
    let index = ((py / 8) * width + px) as usize;
    let bit = 0x80 >> (py % 8);
    (index, bit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate0() {
        let (idx, bit) = apply_rotation(5, 0, 128, 64, Rotation::Rotate0);
        assert_eq!(idx, 5);
        assert_eq!(bit, 0x80);

        let (idx, bit) = apply_rotation(5, 7, 128, 64, Rotation::Rotate0);
        assert_eq!(idx, 5);
        assert_eq!(bit, 0x01);

        let (idx, bit) = apply_rotation(127, 63, 128, 64, Rotation::Rotate0);
        assert_eq!(idx, 1023);
        assert_eq!(bit, 0x01);
    }

    #[test]
    fn test_rotate180() {
        // Logical origin is the physical bottom-right pixel
        let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate180);
        assert_eq!(idx, 1023);
        assert_eq!(bit, 0x01);

        let (idx, bit) = apply_rotation(127, 63, 128, 64, Rotation::Rotate180);
        assert_eq!(idx, 0);
        assert_eq!(bit, 0x80);
    }

    #[test]
    fn test_rotate90() {
        // Logical origin is the physical top-right pixel
        let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate90);
        assert_eq!(idx, 127);
        assert_eq!(bit, 0x80);

        // Moving right in the rotated frame moves down physically
        let (idx, bit) = apply_rotation(9, 0, 128, 64, Rotation::Rotate90);
        assert_eq!(idx, 128 + 127);
        assert_eq!(bit, 0x40);
    }

    #[test]
    fn test_rotate270() {
        // Logical origin is the physical bottom-left pixel
        let (idx, bit) = apply_rotation(0, 0, 128, 64, Rotation::Rotate270);
        assert_eq!(idx, 7 * 128);
        assert_eq!(bit, 0x01);

        let (idx, bit) = apply_rotation(63, 127, 128, 64, Rotation::Rotate270);
        assert_eq!(idx, 127);
        assert_eq!(bit, 0x80);
    }
}
