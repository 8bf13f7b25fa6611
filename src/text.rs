//! Text output
//!
//! Characters are drawn one 7-column cell at a time at the cursor. A cell
//! that would reach the right edge starts on the next row instead, so glyphs
//! are never split. Rows wrap from the bottom back to the top.
//!
//! [`Display::write_text`] also interprets a small set of in-band control
//! codes. Operands marked *hex* are two ASCII hex digits, either case.
//!
//! | Code | Operands | Effect |
//! |------|----------|--------|
//! | `0x0A` | | Newline |
//! | `0x01` | count (hex) | Blank `count` cells |
//! | `0x02` | size low (hex), size high (hex), `size` bytes (hex) | Write raw column bytes |
//! | `0x03` | one byte | Font select, reserved and ignored |
//! | `0x04` | column, row (raw bytes) | Move the cursor |
//! | `0x05` | count (hex) | Skip `count` columns without erasing |
//! | `0x08` | | Erase the previous cell and move back onto it |
//! | `0x80` | | Draw a block cursor, cursor does not move |
//!
//! ```rust,no_run
//! # use st7565::{Builder, Display, DisplayInterface};
//! # struct Bus;
//! # impl DisplayInterface for Bus {
//! #     type Error = ();
//! #     fn send_command(&mut self, _: u8) -> Result<(), ()> { Ok(()) }
//! #     fn send_data(&mut self, _: &[u8]) -> Result<(), ()> { Ok(()) }
//! #     fn reset<D: embedded_hal::delay::DelayNs>(&mut self, _: &mut D, _: u32) -> Result<(), ()> { Ok(()) }
//! # }
//! # let config = match Builder::new().build() { Ok(c) => c, Err(_) => return };
//! # let mut display = Display::new(Bus, config);
//! // Two blank cells, "Temp", then a jump to column 64 of row 3
//! let _ = display.write_text(b"\x0102Temp\x04\x40\x0321.5");
//! ```

use core::fmt;

use log::{trace, warn};

use crate::config::WIDTH;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::font::{GLYPH_WIDTH, PITCH};
use crate::interface::DisplayInterface;

/// Move to the start of the next row
pub const NEWLINE: u8 = b'\n';
/// Insert blank cells
pub const BLANK_CELLS: u8 = 0x01;
/// Write raw column bytes
pub const RAW_PATTERN: u8 = 0x02;
/// Select font (reserved)
pub const SELECT_FONT: u8 = 0x03;
/// Jump to a column and row
pub const GOTO: u8 = 0x04;
/// Skip columns
pub const SKIP_COLUMNS: u8 = 0x05;
/// Erase the previous cell
pub const BACKSPACE: u8 = 0x08;
/// Draw the block cursor
pub const CURSOR: u8 = 0x80;

/// Column byte of the block cursor, a full cell minus the bottom two rows
const CURSOR_FILL: u8 = 0xFC;

/// Start of the last cell on a row when cells are laid out from column 0
const LAST_CELL: u8 = (WIDTH / PITCH - 1) * PITCH;

/// Hex-decoded raw bytes are forwarded in chunks of this size
const RAW_CHUNK: usize = 16;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Render a byte stream at the cursor
    ///
    /// Printable codes are looked up in the configured font; control codes
    /// are interpreted as described in the [module docs](crate::text). Codes
    /// without a glyph are skipped. With a 7-bit font every byte except
    /// [`CURSOR`] is masked to 7 bits first.
    ///
    /// # Errors
    ///
    /// Stops at the first failure. Everything drawn before it stays on the
    /// display.
    pub fn write_text(&mut self, text: &[u8]) -> DisplayResult<I> {
        let mut bytes = text.iter().copied();
        while let Some(byte) = bytes.next() {
            self.interpret(byte, &mut bytes)?;
        }
        Ok(())
    }

    /// Draw one glyph bitmap plus spacing at the cursor
    pub fn write_glyph(&mut self, glyph: &[u8; GLYPH_WIDTH as usize]) -> DisplayResult<I> {
        let column = match self.position().advance(PITCH) {
            Some(column) => column,
            None => {
                self.newline()?;
                PITCH
            }
        };
        let mut cell = [0u8; PITCH as usize];
        cell[..GLYPH_WIDTH as usize].copy_from_slice(glyph);
        self.send_data(&cell)?;
        self.set_column(column);
        Ok(())
    }

    /// Write column bytes straight to display RAM
    ///
    /// Bytes run left to right from the cursor. Reaching the right edge
    /// continues at the start of the next row.
    pub fn write_raw_pattern(&mut self, data: &[u8]) -> DisplayResult<I> {
        let mut rest = data;
        while !rest.is_empty() {
            let room = usize::from(WIDTH.saturating_sub(self.position().column));
            if room == 0 {
                self.newline()?;
                continue;
            }
            let (chunk, tail) = rest.split_at(room.min(rest.len()));
            self.send_data(chunk)?;
            if chunk.len() == room {
                self.newline()?;
            } else {
                self.set_column(self.position().column + chunk.len() as u8);
            }
            rest = tail;
        }
        Ok(())
    }

    /// Erase the cell before the cursor and move onto it
    ///
    /// At the start of a row this steps back onto the last cell written on
    /// the row above, wherever that row's text started. If the row above was
    /// never left by a newline since the last clear, the last whole cell of a
    /// row laid out from column 0 is used.
    pub fn backspace(&mut self) -> DisplayResult<I> {
        let position = self.position();
        let (column, row, crossed) = match position.column.checked_sub(PITCH) {
            Some(column) => (column, position.row, false),
            None => {
                let row = position.previous_row(self.config().variant);
                let column = self
                    .row_end(row)
                    .map_or(LAST_CELL, |end| end.saturating_sub(PITCH));
                (column, row, true)
            }
        };
        self.goto(column, row)?;
        self.send_data(&[0; PITCH as usize])?;
        self.goto(column, row)?;
        if crossed {
            self.set_row_end(row, column);
        }
        Ok(())
    }

    /// Draw a block cursor at the cursor position without moving it
    pub fn draw_cursor(&mut self) -> DisplayResult<I> {
        let position = self.position();
        let width = PITCH.min(WIDTH - position.column);
        let block = [CURSOR_FILL; PITCH as usize];
        self.send_data(&block[..usize::from(width)])?;
        self.goto(position.column, position.row)
    }

    fn interpret(&mut self, byte: u8, bytes: &mut impl Iterator<Item = u8>) -> DisplayResult<I> {
        if byte == CURSOR {
            return self.draw_cursor();
        }
        let font = self.config().font;
        let code = if font.is_seven_bit() { byte & 0x7F } else { byte };

        match code {
            NEWLINE => self.newline(),
            BLANK_CELLS => {
                let count = Self::hex_operand(code, bytes)?;
                for _ in 0..count {
                    self.write_glyph(&[0; GLYPH_WIDTH as usize])?;
                }
                Ok(())
            }
            RAW_PATTERN => self.raw_escape(bytes),
            SELECT_FONT => {
                let selector = Self::operand(code, bytes)?;
                trace!("st7565: font select {} ignored", selector);
                Ok(())
            }
            GOTO => {
                let column = Self::operand(code, bytes)?;
                let row = Self::operand(code, bytes)?;
                self.goto(column, row)
            }
            SKIP_COLUMNS => {
                let count = Self::hex_operand(code, bytes)?;
                let position = self.position();
                match position.advance(count) {
                    Some(column) => self.goto(column, position.row),
                    None => self.newline(),
                }
            }
            BACKSPACE => self.backspace(),
            _ => match font.glyph(code) {
                Some(glyph) => self.write_glyph(glyph),
                None => {
                    trace!("st7565: no glyph for 0x{:02X}", code);
                    Ok(())
                }
            },
        }
    }

    fn raw_escape(&mut self, bytes: &mut impl Iterator<Item = u8>) -> DisplayResult<I> {
        let low = Self::hex_operand(RAW_PATTERN, bytes)?;
        let high = Self::hex_operand(RAW_PATTERN, bytes)?;
        let mut remaining = usize::from(u16::from_le_bytes([low, high]));
        let mut chunk = [0u8; RAW_CHUNK];
        while remaining > 0 {
            let len = remaining.min(RAW_CHUNK);
            for slot in &mut chunk[..len] {
                *slot = Self::hex_operand(RAW_PATTERN, bytes)?;
            }
            self.write_raw_pattern(&chunk[..len])?;
            remaining -= len;
        }
        Ok(())
    }

    fn operand(code: u8, bytes: &mut impl Iterator<Item = u8>) -> Result<u8, Error<I>> {
        bytes.next().ok_or(Error::TruncatedEscape { code })
    }

    fn hex_operand(code: u8, bytes: &mut impl Iterator<Item = u8>) -> Result<u8, Error<I>> {
        let high = Self::hex_digit(Self::operand(code, bytes)?)?;
        let low = Self::hex_digit(Self::operand(code, bytes)?)?;
        Ok((high << 4) | low)
    }

    fn hex_digit(byte: u8) -> Result<u8, Error<I>> {
        char::from(byte)
            .to_digit(16)
            .map(|digit| digit as u8)
            .ok_or(Error::InvalidHexDigit(byte))
    }
}

/// Formatted output goes through [`Display::write_text`]
///
/// Rust strings are UTF-8, so only ASCII text and the control codes below
/// 0x80 are useful here.
impl<I> fmt::Write for Display<I>
where
    I: DisplayInterface,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s.as_bytes()).map_err(|e| {
            warn!("st7565: text output failed: {}", e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Variant};
    use crate::cursor::Position;
    use crate::font::Font;
    use crate::mock::{MockInterface, Op};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::fmt::Write;

    const GLYPH_A: [u8; 7] = [0x3E, 0x48, 0x88, 0x48, 0x3E, 0, 0];
    const GLYPH_H: [u8; 7] = [0xFE, 0x10, 0x10, 0x10, 0xFE, 0, 0];
    const GLYPH_I: [u8; 7] = [0x00, 0x22, 0xBE, 0x02, 0x00, 0, 0];
    const GLYPH_BANG: [u8; 7] = [0x00, 0x00, 0xFA, 0x00, 0x00, 0, 0];

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new().build().unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn extended_display() -> Display<MockInterface> {
        let config = Builder::new().font(Font::EXTENDED).build().unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn mock(display: &Display<MockInterface>) -> &MockInterface {
        display.interface_ref()
    }

    #[test]
    fn test_single_glyph() {
        let mut display = test_display();
        display.write_text(b"A").unwrap();
        assert_eq!(mock(&display).data(), GLYPH_A.to_vec());
        assert_eq!(display.position(), Position::new(7, 0));
    }

    #[test]
    fn test_hi_newline_bang() {
        let mut display = test_display();
        display.write_text(b"Hi\n!").unwrap();

        let panel = mock(&display);
        assert_eq!(&panel.row(0)[0..7], &GLYPH_H);
        assert_eq!(&panel.row(0)[7..14], &GLYPH_I);
        assert_eq!(&panel.row(1)[0..7], &GLYPH_BANG);
        assert_eq!(display.position(), Position::new(7, 1));
    }

    #[test]
    fn test_glyph_wraps_whole_at_right_edge() {
        let mut display = test_display();
        display.goto(119, 2).unwrap();
        display.write_text(b"A").unwrap();
        assert_eq!(display.position(), Position::new(126, 2));

        display.write_text(b"A").unwrap();
        assert_eq!(display.position(), Position::new(7, 3));
        let panel = mock(&display);
        assert_eq!(&panel.row(2)[119..126], &GLYPH_A);
        assert_eq!(&panel.row(2)[126..128], &[0, 0]);
        assert_eq!(&panel.row(3)[0..7], &GLYPH_A);
    }

    #[test]
    fn test_wrap_from_last_row_returns_to_top() {
        let mut display = test_display();
        display.goto(125, 7).unwrap();
        display.write_text(b"A").unwrap();
        assert_eq!(display.position(), Position::new(7, 0));
    }

    #[test]
    fn test_newline_on_adafruit_uses_ninth_row() {
        let config = Builder::new().variant(Variant::ADAFRUIT).build().unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        display.goto(30, 7).unwrap();
        display.write_text(b"\n").unwrap();
        assert_eq!(display.position(), Position::new(0, 8));
        display.write_text(b"\n").unwrap();
        assert_eq!(display.position(), Position::new(0, 0));
    }

    #[test]
    fn test_blank_cells() {
        let mut display = test_display();
        display.write_text(b"\x0103A").unwrap();
        let mut expected = vec![0u8; 21];
        expected.extend_from_slice(&GLYPH_A);
        assert_eq!(mock(&display).data(), expected);
        assert_eq!(display.position(), Position::new(28, 0));
    }

    #[test]
    fn test_raw_pattern_escape() {
        let mut display = test_display();
        display.write_text(b"\x02030001fFA5").unwrap();
        assert_eq!(mock(&display).data(), vec![0x01, 0xFF, 0xA5]);
        assert_eq!(display.position(), Position::new(3, 0));
    }

    #[test]
    fn test_raw_pattern_wraps_rows() {
        let mut display = test_display();
        display.goto(120, 0).unwrap();
        display.write_raw_pattern(&[0xFF; 10]).unwrap();
        assert_eq!(display.position(), Position::new(2, 1));
        let panel = mock(&display);
        assert_eq!(&panel.row(0)[120..128], &[0xFF; 8]);
        assert_eq!(&panel.row(1)[0..2], &[0xFF; 2]);
    }

    #[test]
    fn test_goto_escape_uses_raw_operands() {
        let mut display = test_display();
        display.write_text(b"\x04\x0A\x02A").unwrap();
        assert_eq!(&mock(&display).row(2)[10..17], &GLYPH_A);
        assert_eq!(display.position(), Position::new(17, 2));
    }

    #[test]
    fn test_goto_escape_out_of_range() {
        let mut display = test_display();
        let result = display.write_text(b"\x04\x80\x00");
        assert!(matches!(
            result,
            Err(Error::OutOfRange { column: 128, row: 0 })
        ));
    }

    #[test]
    fn test_skip_columns_does_not_erase() {
        let mut display = test_display();
        display.write_text(b"AAA").unwrap();
        display.goto(0, 0).unwrap();
        display.write_text(b"\x0507").unwrap();
        assert_eq!(display.position(), Position::new(7, 0));
        assert_eq!(&mock(&display).row(0)[7..14], &GLYPH_A);

        display.write_text(b"\x05FF").unwrap();
        assert_eq!(display.position(), Position::new(0, 1));
    }

    #[test]
    fn test_font_select_is_consumed() {
        let mut display = test_display();
        display.write_text(b"\x03AA").unwrap();
        assert_eq!(mock(&display).data(), GLYPH_A.to_vec());
    }

    #[test]
    fn test_backspace_erases_previous_cell() {
        let mut display = test_display();
        display.write_text(b"AH\x08").unwrap();
        assert_eq!(display.position(), Position::new(7, 0));
        let panel = mock(&display);
        assert_eq!(&panel.row(0)[0..7], &GLYPH_A);
        assert_eq!(&panel.row(0)[7..14], &[0; 7]);
    }

    #[test]
    fn test_backspace_at_row_start_goes_up() {
        let mut display = test_display();
        display.goto(0, 1).unwrap();
        display.backspace().unwrap();
        assert_eq!(display.position(), Position::new(LAST_CELL, 0));

        display.goto(0, 0).unwrap();
        display.backspace().unwrap();
        assert_eq!(display.position(), Position::new(119, 7));
    }

    #[test]
    fn test_backspace_rewinds_onto_unaligned_wrapped_cell() {
        let mut display = test_display();
        display.goto(3, 0).unwrap();
        // 17 cells fit from column 3, the B wraps onto row 1
        display.write_text(b"AAAAAAAAAAAAAAAAAB").unwrap();
        assert_eq!(display.position(), Position::new(7, 1));
        assert_eq!(&mock(&display).row(0)[115..122], &GLYPH_A);

        display.backspace().unwrap();
        display.backspace().unwrap();
        assert_eq!(display.position(), Position::new(115, 0));
        let panel = mock(&display);
        assert_eq!(&panel.row(0)[108..115], &GLYPH_A);
        assert_eq!(&panel.row(0)[115..122], &[0; 7]);
        assert_eq!(&panel.row(1)[0..7], &[0; 7]);
    }

    #[test]
    fn test_backspace_after_newline_erases_last_glyph() {
        let mut display = test_display();
        display.write_text(b"Hi\n\x08").unwrap();
        assert_eq!(display.position(), Position::new(7, 0));
        let panel = mock(&display);
        assert_eq!(&panel.row(0)[0..7], &GLYPH_H);
        assert_eq!(&panel.row(0)[7..14], &[0; 7]);

        // Coming back up again keeps walking the same row
        display.write_text(b"\n\x08").unwrap();
        assert_eq!(display.position(), Position::new(0, 0));
    }

    #[test]
    fn test_clear_forgets_row_ends() {
        let mut display = test_display();
        display.write_text(b"Hi\n").unwrap();
        display.clear().unwrap();
        display.goto(0, 1).unwrap();
        display.backspace().unwrap();
        assert_eq!(display.position(), Position::new(LAST_CELL, 0));
    }

    #[test]
    fn test_cursor_block_keeps_position() {
        let mut display = test_display();
        display.write_text(b"A\x80").unwrap();
        assert_eq!(display.position(), Position::new(7, 0));
        assert_eq!(&mock(&display).row(0)[7..14], &[0xFC; 7]);
        // Controller column is put back under the cursor
        assert_eq!(
            &mock(&display).ops[mock(&display).ops.len() - 3..],
            &[Op::Command(0xB7), Op::Command(0x07), Op::Command(0x10)]
        );
    }

    #[test]
    fn test_cursor_block_clipped_at_edge() {
        let mut display = test_display();
        display.goto(124, 0).unwrap();
        display.draw_cursor().unwrap();
        assert_eq!(mock(&display).data(), vec![0xFC; 4]);
    }

    #[test]
    fn test_seven_bit_masking() {
        let mut display = test_display();
        display.write_text(&[0xC1]).unwrap();
        assert_eq!(mock(&display).data(), GLYPH_A.to_vec());

        let mut display = extended_display();
        display.write_text(&[0xC1]).unwrap();
        let glyph = Font::EXTENDED.glyph(0xC1).unwrap();
        assert_eq!(&mock(&display).data()[..5], glyph);
    }

    #[test]
    fn test_extended_font_draws_low_codes() {
        let mut display = extended_display();
        display.write_text(&[0x09]).unwrap();
        assert_eq!(display.position(), Position::new(7, 0));

        let mut display = test_display();
        display.write_text(&[0x09, 0x7F]).unwrap();
        assert!(mock(&display).ops.is_empty());
        assert_eq!(display.position(), Position::ORIGIN);
    }

    #[test]
    fn test_truncated_escape() {
        let mut display = test_display();
        assert!(matches!(
            display.write_text(b"A\x01F"),
            Err(Error::TruncatedEscape { code: BLANK_CELLS })
        ));
        // Output before the escape stays
        assert_eq!(mock(&display).data(), GLYPH_A.to_vec());

        let mut display = test_display();
        assert!(matches!(
            display.write_text(b"\x04\x00"),
            Err(Error::TruncatedEscape { code: GOTO })
        ));
        assert!(matches!(
            display.write_text(b"\x02010"),
            Err(Error::TruncatedEscape { code: RAW_PATTERN })
        ));
    }

    #[test]
    fn test_invalid_hex_digit() {
        let mut display = test_display();
        assert!(matches!(
            display.write_text(b"\x01G1"),
            Err(Error::InvalidHexDigit(b'G'))
        ));
    }

    #[test]
    fn test_interface_error_stops_stream() {
        let config = Builder::new().build().unwrap();
        let mut display = Display::new(MockInterface::failing_at(1), config);
        assert!(matches!(display.write_text(b"AAA"), Err(Error::Interface(_))));
        assert_eq!(display.position(), Position::new(7, 0));
        assert_eq!(mock(&display).ops.len(), 1);
    }

    #[test]
    fn test_fmt_write() {
        let mut display = test_display();
        write!(display, "{}", 42).unwrap();
        assert_eq!(display.position(), Position::new(14, 0));
        let data: Vec<u8> = mock(&display).data();
        assert_eq!(data.len(), 14);
    }
}
