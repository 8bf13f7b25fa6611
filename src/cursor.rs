//! Text cursor position and wrap arithmetic
//!
//! The cursor is the column and text row the next data byte lands on. It is
//! tracked on the host side because the controller's own column counter
//! cannot be read back over a write-only serial bus.

use crate::config::{Variant, WIDTH};

/// A cursor position on the text grid
///
/// `column` is in pixels (0-127), `row` is in 8-pixel text rows
/// (0 to [`Variant::rows`] - 1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Pixel column
    pub column: u8,
    /// Text row
    pub row: u8,
}

impl Position {
    /// Top-left corner
    pub const ORIGIN: Self = Self { column: 0, row: 0 };

    /// Create a position
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Whether the position is addressable on `variant`
    pub fn is_valid(self, variant: Variant) -> bool {
        self.column < WIDTH && self.row < variant.rows
    }

    /// Column after a cell of `width` columns starting here
    ///
    /// Returns `None` when the cell would reach the right edge, in which case
    /// the cell has to start on the next row instead.
    pub fn advance(self, width: u8) -> Option<u8> {
        let end = u16::from(self.column) + u16::from(width);
        if end >= u16::from(WIDTH) {
            None
        } else {
            Some(end as u8)
        }
    }

    /// Row below this one, wrapping to the top
    pub fn next_row(self, variant: Variant) -> u8 {
        if self.row + 1 >= variant.rows {
            0
        } else {
            self.row + 1
        }
    }

    /// Row above this one, wrapping to the bottom
    pub fn previous_row(self, variant: Variant) -> u8 {
        match self.row.checked_sub(1) {
            Some(row) if row < variant.rows => row,
            _ => variant.rows - 1,
        }
    }
}
