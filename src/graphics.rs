//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which wraps [`Display`]
//! and implements the [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem.
//!
//! Drawing only touches a RAM frame buffer; [`GraphicDisplay::flush`] streams
//! the whole buffer to the controller through the same raw write path text
//! output uses. Text and graphics can be mixed, the last write wins.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use st7565::{GraphicDisplay, BUFFER_SIZE};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use st7565::{Builder, Display, Interface};
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
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let display_driver = Display::new(interface, config);
//! let mut display = GraphicDisplay::new(display_driver, [0u8; BUFFER_SIZE]);
//!
//! let _ = Rectangle::new(Point::new(2, 2), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(90, 20), 30)
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "ST7565",
//!     Point::new(4, 50),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! // Push the frame to the panel
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::config::{PAGES, WIDTH};
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::apply_rotation;

/// Frame buffer size in bytes: 8 pages of 128 columns
pub const BUFFER_SIZE: usize = PAGES as usize * WIDTH as usize;

/// Display with a graphics frame buffer
///
/// This wrapper around [`Display`] provides embedded-graphics support
/// and manages the page-major frame buffer.
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Buffer type implementing `AsMut<[u8]>`, at least [`BUFFER_SIZE`] bytes
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// Page-major pixel buffer
    buffer: B,
}

type GraphicsResult<I> = core::result::Result<(), Error<I>>;
type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than [`BUFFER_SIZE`]. Use
    /// [`try_new`](Self::try_new) to get an error instead.
    pub fn new(display: Display<I>, mut buffer: B) -> Self {
        assert!(
            buffer.as_mut().len() >= BUFFER_SIZE,
            "buffer too small: required {} bytes, got {}",
            BUFFER_SIZE,
            buffer.as_mut().len()
        );
        Self { display, buffer }
    }

    /// Try to create a new GraphicDisplay, returning an error if the buffer is too small
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer holds fewer than
    /// [`BUFFER_SIZE`] bytes.
    pub fn try_new(display: Display<I>, mut buffer: B) -> GraphicsNewResult<I, Self> {
        let provided = buffer.as_mut().len();
        if provided < BUFFER_SIZE {
            return Err(Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided,
            });
        }
        Ok(Self { display, buffer })
    }

    /// Send the frame buffer to the display
    ///
    /// Writes every page from the top-left corner and leaves the text
    /// cursor at (0, 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if there's a communication error. The
    /// panel may then show a partly updated frame.
    pub fn flush(&mut self) -> GraphicsResult<I> {
        self.display.goto(0, 0)?;
        self.display
            .write_raw_pattern(&self.buffer.as_mut()[..BUFFER_SIZE])?;
        self.display.goto(0, 0)
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Text output and power control go through here.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Give back the display and the buffer
    pub fn release(self) -> (Display<I>, B) {
        (self.display, self.buffer)
    }

    /// Set a single pixel
    ///
    /// Internal method used by the [`DrawTarget`] implementation.
    /// Coordinates are in the rotated frame and must already be in bounds.
    fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        let rotation = self.display.config().rotation;
        let (index, bit) = apply_rotation(
            x,
            y,
            u32::from(WIDTH),
            u32::from(PAGES) * 8,
            rotation,
        );

        let Some(byte) = self.buffer.as_mut().get_mut(index) else {
            return;
        };
        match color {
            BinaryColor::On => *byte |= bit,
            BinaryColor::Off => *byte &= !bit,
        }
    }
}

impl<I, B> DrawTarget for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            self.set_pixel(x, y, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        self.buffer.as_mut()[..BUFFER_SIZE].fill(fill);
        Ok(())
    }
}

impl<I, B> OriginDimensions for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let (width, height) = self.display.config().rotated_size();
        Size::new(width, height)
    }
}
