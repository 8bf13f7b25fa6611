//! ST7565 Graphic LCD Driver
//!
//! A driver for 128x64 dot-matrix LCD modules built around the ST7565
//! controller, talking over a write-only SPI bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Cursor-addressed text with a built-in 5x7 font (ASCII or extended 8-bit)
//! - In-band formatting codes for spacing, raw bitmaps, cursor jumps and backspace
//! - Standby and sleep power modes
//! - Standard and Adafruit module wiring
//! - `embedded-graphics` integration (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7565::{Builder, Display, Interface, Variant};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let a0 = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, a0, rst);
//! let config = match Builder::new().variant(Variant::ADAFRUIT).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.initialize(&mut delay);
//! let _ = display.write_text(b"Hello\nworld");
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Cursor to controller address translation
pub mod address;
/// ST7565 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Text cursor position
pub mod cursor;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in bitmap fonts
pub mod font;
mod glyphs;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;
/// Text output and formatting codes
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use config::{Bias, Builder, Config, PAGES, Rotation, Timing, Variant, WIDTH};
pub use cursor::Position;
pub use display::{Display, DisplayMode};
pub use error::{BuilderError, Error};
pub use font::Font;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};

#[cfg(feature = "graphics")]
pub use graphics::{BUFFER_SIZE, GraphicDisplay};
