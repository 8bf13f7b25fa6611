//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use st7565::{Builder, BuilderError};
//!
//! // Contrast is a 6-bit register
//! let result = Builder::new().contrast(64).build();
//! assert!(matches!(result, Err(BuilderError::InvalidContrast(64))));
//!
//! // Resistor ratio is 3 bits wide
//! let result = Builder::new().resistor_ratio(8).build();
//! assert!(result.is_err());
//! ```

use crate::display::DisplayMode;
use crate::interface::DisplayInterface;

/// Highest value accepted by the electronic volume register
pub const MAX_CONTRAST: u8 = 0x3F;

/// Highest V0 regulator resistor ratio
pub const MAX_RESISTOR_RATIO: u8 = 0x07;

/// Highest display start line
pub const MAX_START_LINE: u8 = 0x3F;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The command sequence that hit it was abandoned part way.
    Interface(I::Error),
    /// Cursor position outside the addressable grid
    ///
    /// Columns run 0..128, rows 0..[`Variant::rows`](crate::config::Variant::rows).
    OutOfRange {
        /// Requested column
        column: u8,
        /// Requested row
        row: u8,
    },
    /// Contrast above [`MAX_CONTRAST`]
    InvalidContrast(u8),
    /// Mode change not allowed from the current mode
    InvalidTransition {
        /// Mode the display was in
        from: DisplayMode,
        /// Mode that was requested
        to: DisplayMode,
    },
    /// Text stream ended inside an escape sequence
    TruncatedEscape {
        /// Escape code whose operands were cut off
        code: u8,
    },
    /// Escape operand byte is not an ASCII hex digit
    InvalidHexDigit(u8),
    /// Frame buffer is too small for the display
    ///
    /// The provided buffer must be at least `BUFFER_SIZE` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::OutOfRange { column, row } => {
                write!(f, "Position out of range: column {column}, row {row}")
            }
            Self::InvalidContrast(value) => {
                write!(f, "Invalid contrast {value} (max {MAX_CONTRAST})")
            }
            Self::InvalidTransition { from, to } => {
                write!(f, "Invalid mode transition: {from:?} -> {to:?}")
            }
            Self::TruncatedEscape { code } => {
                write!(f, "Text ended inside escape sequence 0x{code:02X}")
            }
            Self::InvalidHexDigit(byte) => write!(f, "Invalid hex digit 0x{byte:02X}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Contrast above [`MAX_CONTRAST`]
    InvalidContrast(u8),
    /// Resistor ratio above [`MAX_RESISTOR_RATIO`]
    InvalidResistorRatio(u8),
    /// Start line above [`MAX_START_LINE`]
    InvalidStartLine(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidContrast(value) => {
                write!(f, "Invalid contrast {value} (max {MAX_CONTRAST})")
            }
            Self::InvalidResistorRatio(value) => {
                write!(f, "Invalid resistor ratio {value} (max {MAX_RESISTOR_RATIO})")
            }
            Self::InvalidStartLine(value) => {
                write!(f, "Invalid start line {value} (max {MAX_START_LINE})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
