//! Fixed-pitch bitmap fonts
//!
//! Every glyph is five pixel columns wide and one page (8 pixels) tall. Text
//! output pads each glyph with two blank columns, so a character cell is
//! [`PITCH`] columns wide and a 128 column row holds 18 characters.
//!
//! Two fonts are built in, both views of the same bitmap table:
//!
//! - [`Font::COMPACT`]: printable ASCII, codes 0x20..=0x7E. Text is masked
//!   to 7 bits before lookup.
//! - [`Font::EXTENDED`]: the full code page 437 style set, codes 0x08..=0xFE.
//!
//! ```
//! use st7565::Font;
//!
//! assert_eq!(Font::COMPACT.glyph(b'A'), Some(&[0x3E, 0x48, 0x88, 0x48, 0x3E]));
//! assert_eq!(Font::COMPACT.glyph(0xB0), None);
//! assert!(Font::EXTENDED.glyph(0xB0).is_some());
//! ```

use crate::glyphs::GLYPHS;

/// Pixel columns per glyph bitmap
pub const GLYPH_WIDTH: u8 = 5;

/// Pixel columns per character cell, glyph plus spacing
pub const PITCH: u8 = 7;

const ALL: &[[u8; 5]] = &GLYPHS;
const PRINTABLE: &[[u8; 5]] = ALL.split_at(0x20).1.split_at(95).0;

/// A bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    glyphs: &'static [[u8; GLYPH_WIDTH as usize]],
    /// Code stored at index 0 of `glyphs`
    first: u8,
    min: u8,
    max: u8,
}

impl Font {
    /// Printable ASCII font
    pub const COMPACT: Self = Self {
        glyphs: PRINTABLE,
        first: 0x20,
        min: 0x20,
        max: 0x7E,
    };

    /// Extended 8-bit font
    pub const EXTENDED: Self = Self {
        glyphs: ALL,
        first: 0x00,
        min: 0x08,
        max: 0xFE,
    };

    /// Look up the bitmap for `code`
    ///
    /// Returns `None` for codes outside the renderable range.
    pub fn glyph(&self, code: u8) -> Option<&'static [u8; GLYPH_WIDTH as usize]> {
        if !(self.min..=self.max).contains(&code) {
            return None;
        }
        self.glyphs.get(usize::from(code - self.first))
    }

    /// Lowest renderable code
    pub fn min_code(&self) -> u8 {
        self.min
    }

    /// Highest renderable code
    pub fn max_code(&self) -> u8 {
        self.max
    }

    /// Whether text should be masked to 7 bits before lookup
    pub fn is_seven_bit(&self) -> bool {
        self.max < 0x80
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::COMPACT
    }
}
