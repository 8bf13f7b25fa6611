//! ST7565 command definitions
//!
//! Every ST7565 instruction is a single byte sent with the A0 line low. Several
//! commands carry their argument in the low bits of the opcode (page address,
//! column nibbles, power control flags); those are documented as bases to OR
//! the argument into.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7565::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Select page 3, column 0
//! let _ = interface.send_command(command::SET_PAGE | 3);
//! let _ = interface.send_command(command::SET_COLUMN_LOWER);
//! let _ = interface.send_command(command::SET_COLUMN_UPPER);
//!
//! // Eight pixel columns of data
//! let _ = interface.send_data(&[0xFF, 0x81, 0x81, 0xFF]);
//! ```

// Display control

/// Display off (0xAE)
///
/// Blanks the panel. Display RAM is kept.
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Display start line base (0x40)
///
/// OR in the RAM line (0-63) shown at the top of the panel.
pub const SET_DISP_START_LINE: u8 = 0x40;

/// Normal display (0xA6), set pixels are dark
pub const SET_DISP_NORMAL: u8 = 0xA6;

/// Reverse display (0xA7), set pixels are light
pub const SET_DISP_REVERSE: u8 = 0xA7;

/// All points normal (0xA4)
///
/// Panel shows display RAM contents.
pub const SET_ALLPTS_NORMAL: u8 = 0xA4;

/// All points on (0xA5)
///
/// Forces every pixel on regardless of RAM. Combined with display off this
/// selects the power-save path of the controller.
pub const SET_ALLPTS_ON: u8 = 0xA5;

// Addressing

/// Page address base (0xB0)
///
/// OR in the page number (0-8).
pub const SET_PAGE: u8 = 0xB0;

/// Column address upper nibble base (0x10)
///
/// OR in bits 4-6 of the column address.
pub const SET_COLUMN_UPPER: u8 = 0x10;

/// Column address lower nibble base (0x00)
///
/// OR in bits 0-3 of the column address.
pub const SET_COLUMN_LOWER: u8 = 0x00;

// Panel wiring

/// Segment driver direction normal (0xA0)
pub const SET_ADC_NORMAL: u8 = 0xA0;

/// Segment driver direction reversed (0xA1)
pub const SET_ADC_REVERSE: u8 = 0xA1;

/// Common output scan direction normal (0xC0)
pub const SET_COM_NORMAL: u8 = 0xC0;

/// Common output scan direction reversed (0xC8)
pub const SET_COM_REVERSE: u8 = 0xC8;

/// LCD bias 1/9 (0xA2)
pub const SET_BIAS_9: u8 = 0xA2;

/// LCD bias 1/7 (0xA3)
pub const SET_BIAS_7: u8 = 0xA3;

// Power

/// Power control base (0x28)
///
/// OR in the circuit enable flags:
/// - 0x04: voltage converter (VC)
/// - 0x02: voltage regulator (VR)
/// - 0x01: voltage follower (VF)
pub const SET_POWER_CONTROL: u8 = 0x28;

/// Voltage converter enable flag for [`SET_POWER_CONTROL`]
pub const POWER_CONVERTER: u8 = 0x04;

/// Voltage regulator enable flag for [`SET_POWER_CONTROL`]
pub const POWER_REGULATOR: u8 = 0x02;

/// Voltage follower enable flag for [`SET_POWER_CONTROL`]
pub const POWER_FOLLOWER: u8 = 0x01;

/// V0 regulator resistor ratio base (0x20)
///
/// OR in the ratio (0-7).
pub const SET_RESISTOR_RATIO: u8 = 0x20;

/// Electronic volume mode set (0x81)
///
/// Must be followed by [`SET_VOLUME_SECOND`] carrying the contrast value.
pub const SET_VOLUME_FIRST: u8 = 0x81;

/// Electronic volume register base (0x00)
///
/// OR in the contrast value (0-63).
pub const SET_VOLUME_SECOND: u8 = 0x00;

/// Static indicator off (0xAC)
pub const SET_STATIC_OFF: u8 = 0xAC;

/// Static indicator on (0xAD)
///
/// Must be followed by [`SET_STATIC_REG`] carrying the blink mode.
pub const SET_STATIC_ON: u8 = 0xAD;

/// Static indicator register base (0x00)
///
/// OR in the mode: 0 = off, 1 = blink ~0.5s, 2 = blink ~1s, 3 = always on.
pub const SET_STATIC_REG: u8 = 0x00;

/// Static indicator register value used for standby and wakeup
pub const STATIC_ALWAYS_ON: u8 = 0x03;

// System

/// Internal reset (0xE2)
///
/// Resets the controller registers. Display RAM is not initialized.
pub const INTERNAL_RESET: u8 = 0xE2;
