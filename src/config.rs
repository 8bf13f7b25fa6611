//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_CONTRAST, MAX_RESISTOR_RATIO, MAX_START_LINE};
use crate::font::Font;

/// Display width in pixels (and column addresses)
pub const WIDTH: u8 = 128;

/// Number of 8-pixel pages backing the 64-pixel-tall panel
pub const PAGES: u8 = 8;

/// Panel wiring variant
///
/// Captures the constants that differ between module vendors. The Adafruit
/// breakout wires the controller with its pages rotated by four and its
/// segments shifted by one, and exposes a ninth addressable row that shares
/// page RAM with row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
    /// Number of addressable text rows
    pub rows: u8,
    /// Pattern XORed into the page index
    pub page_xor: u8,
    /// Offset added to every column address
    pub column_offset: u8,
    /// Contrast used when the builder is not given one
    pub default_contrast: u8,
}

impl Variant {
    /// Plain ST7565 module
    pub const STANDARD: Self = Self {
        rows: 8,
        page_xor: 0,
        column_offset: 0,
        default_contrast: 0x00,
    };

    /// Adafruit ST7565 breakout
    pub const ADAFRUIT: Self = Self {
        rows: 9,
        page_xor: 4,
        column_offset: 1,
        default_contrast: 0x18,
    };
}

impl Default for Variant {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// LCD bias ratio
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Bias {
    /// 1/7 bias
    #[default]
    OneSeventh,
    /// 1/9 bias
    OneNinth,
}

/// Display rotation relative to native orientation
///
/// Only used by the buffered graphics adapter; text always runs in the
/// native orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Delays used during reset and power-up, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// How long RST is held low
    pub reset_hold_ms: u32,
    /// Settle time after enabling the voltage converter
    pub converter_settle_ms: u32,
    /// Settle time after enabling the voltage regulator
    pub regulator_settle_ms: u32,
    /// Settle time after enabling the voltage follower
    pub follower_settle_ms: u32,
}

impl Timing {
    /// No delays at all, for test doubles and simulators
    pub const ZERO: Self = Self {
        reset_hold_ms: 0,
        converter_settle_ms: 0,
        regulator_settle_ms: 0,
        follower_settle_ms: 0,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reset_hold_ms: 500,
            converter_settle_ms: 50,
            regulator_settle_ms: 50,
            follower_settle_ms: 10,
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7565 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel wiring variant
    pub variant: Variant,
    /// Font used for text output
    pub font: Font,
    /// Initial contrast (0-63)
    pub contrast: u8,
    /// LCD bias
    pub bias: Bias,
    /// Reverse segment driver direction
    pub adc_reverse: bool,
    /// Reverse common output scan direction
    pub com_reverse: bool,
    /// RAM line shown at the top of the panel (0-63)
    pub start_line: u8,
    /// V0 regulator resistor ratio (0-7)
    pub resistor_ratio: u8,
    /// Rotation applied by the graphics adapter
    pub rotation: Rotation,
    /// Reset and power-up delays
    pub timing: Timing,
}

impl Config {
    /// Get the width and height seen by the graphics adapter after rotation
    pub fn rotated_size(&self) -> (u32, u32) {
        let width = u32::from(WIDTH);
        let height = u32::from(PAGES) * 8;
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => (width, height),
            Rotation::Rotate90 | Rotation::Rotate270 => (height, width),
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7565::{Builder, Font, Variant};
///
/// let config = match Builder::new()
///     .variant(Variant::ADAFRUIT)
///     .font(Font::EXTENDED)
///     .com_reverse(true)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.contrast, 0x18);
/// ```
#[must_use]
pub struct Builder {
    variant: Variant,
    font: Font,
    /// Falls back to the variant's default when unset
    contrast: Option<u8>,
    bias: Bias,
    adc_reverse: bool,
    com_reverse: bool,
    start_line: u8,
    resistor_ratio: u8,
    rotation: Rotation,
    timing: Timing,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            variant: Variant::STANDARD,
            font: Font::COMPACT,
            contrast: None,
            bias: Bias::OneSeventh,
            adc_reverse: false,
            com_reverse: false,
            start_line: 0,
            // Strongest regulator gain, what most modules ship with
            resistor_ratio: MAX_RESISTOR_RATIO,
            rotation: Rotation::Rotate0,
            timing: Timing::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel wiring variant
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the text font
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the initial contrast (0-63)
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = Some(value);
        self
    }

    /// Set LCD bias
    pub fn bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }

    /// Reverse the segment driver direction (mirror horizontally)
    pub fn adc_reverse(mut self, value: bool) -> Self {
        self.adc_reverse = value;
        self
    }

    /// Reverse the common output scan direction (mirror vertically)
    pub fn com_reverse(mut self, value: bool) -> Self {
        self.com_reverse = value;
        self
    }

    /// Set the display start line (0-63)
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value;
        self
    }

    /// Set the V0 regulator resistor ratio (0-7)
    pub fn resistor_ratio(mut self, value: u8) -> Self {
        self.resistor_ratio = value;
        self
    }

    /// Set rotation for the graphics adapter
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set reset and power-up delays
    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] if contrast, resistor ratio or start line
    /// does not fit its register.
    pub fn build(self) -> Result<Config, BuilderError> {
        let contrast = self.contrast.unwrap_or(self.variant.default_contrast);
        if contrast > MAX_CONTRAST {
            return Err(BuilderError::InvalidContrast(contrast));
        }
        if self.resistor_ratio > MAX_RESISTOR_RATIO {
            return Err(BuilderError::InvalidResistorRatio(self.resistor_ratio));
        }
        if self.start_line > MAX_START_LINE {
            return Err(BuilderError::InvalidStartLine(self.start_line));
        }
        Ok(Config {
            variant: self.variant,
            font: self.font,
            contrast,
            bias: self.bias,
            adc_reverse: self.adc_reverse,
            com_reverse: self.com_reverse,
            start_line: self.start_line,
            resistor_ratio: self.resistor_ratio,
            rotation: self.rotation,
            timing: self.timing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.variant, Variant::STANDARD);
        assert_eq!(config.contrast, 0);
        assert_eq!(config.resistor_ratio, 7);
        assert_eq!(config.bias, Bias::OneSeventh);
        assert_eq!(config.timing.reset_hold_ms, 500);
    }

    #[test]
    fn test_contrast_follows_variant() {
        let config = Builder::new().variant(Variant::ADAFRUIT).build().unwrap();
        assert_eq!(config.contrast, 0x18);

        let config = Builder::new()
            .variant(Variant::ADAFRUIT)
            .contrast(0x20)
            .build()
            .unwrap();
        assert_eq!(config.contrast, 0x20);
    }

    #[test]
    fn test_register_limits() {
        assert_eq!(
            Builder::new().contrast(64).build().err(),
            Some(BuilderError::InvalidContrast(64))
        );
        assert_eq!(
            Builder::new().resistor_ratio(8).build().err(),
            Some(BuilderError::InvalidResistorRatio(8))
        );
        assert_eq!(
            Builder::new().start_line(64).build().err(),
            Some(BuilderError::InvalidStartLine(64))
        );
        assert!(Builder::new().contrast(63).start_line(63).build().is_ok());
    }

    #[test]
    fn test_rotated_size() {
        let config = Builder::new().rotation(Rotation::Rotate90).build().unwrap();
        assert_eq!(config.rotated_size(), (64, 128));
        let config = Builder::new().build().unwrap();
        assert_eq!(config.rotated_size(), (128, 64));
    }
}
