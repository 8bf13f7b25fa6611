//! Cursor to controller address translation
//!
//! The ST7565 addresses display RAM by page (8 pixel rows) and column. Text
//! rows count from the top of the panel while the controller numbers pages
//! from the bottom, so row 0 selects page 7. Some modules additionally rotate
//! the page index and shift the segment lines; [`Variant`] carries both.

use crate::command::{SET_COLUMN_LOWER, SET_COLUMN_UPPER, SET_PAGE};
use crate::config::Variant;

/// Build the page select, column low and column high commands for a cell
///
/// Inputs are not range checked; callers validate against the variant first.
/// The shifted column is truncated to 7 bits, so on the Adafruit variant
/// column 127 addresses column 0 of the controller.
///
/// ```
/// use st7565::{address::address_commands, Variant};
///
/// assert_eq!(address_commands(Variant::STANDARD, 0, 0), [0xB7, 0x00, 0x10]);
/// assert_eq!(address_commands(Variant::ADAFRUIT, 0, 0), [0xB3, 0x01, 0x10]);
/// ```
pub fn address_commands(variant: Variant, column: u8, row: u8) -> [u8; 3] {
    let page = (7 - (row & 7)) ^ variant.page_xor;
    let column = column.wrapping_add(variant.column_offset);
    [
        SET_PAGE | page,
        SET_COLUMN_LOWER | (column & 0x0F),
        SET_COLUMN_UPPER | ((column >> 4) & 0x07),
    ]
}
