//! Core display operations
//!
//! [`Display`] owns the interface and tracks everything the controller cannot
//! report back: the cursor, the power mode and the contrast last written.
//!
//! ## Modes
//!
//! ```text
//!                initialize (from any mode)
//!                        |
//!                        v
//!   Standby <-------- Active --------> Sleep
//!      |   exit_standby   ^    wakeup    ^
//!      +------------------+              |
//!      +--------------- sleep -----------+
//! ```
//!
//! Standby keeps the oscillator and display RAM alive and resumes instantly.
//! Sleep stops the oscillator; [`Display::wakeup`] resets the controller
//! registers and reprograms the contrast. Neither clears display RAM.

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::address::address_commands;
use crate::command::{
    DISPLAY_OFF, DISPLAY_ON, INTERNAL_RESET, POWER_CONVERTER, POWER_FOLLOWER, POWER_REGULATOR,
    SET_ADC_NORMAL, SET_ADC_REVERSE, SET_ALLPTS_NORMAL, SET_ALLPTS_ON, SET_BIAS_7, SET_BIAS_9,
    SET_COM_NORMAL, SET_COM_REVERSE, SET_DISP_NORMAL, SET_DISP_REVERSE, SET_DISP_START_LINE,
    SET_POWER_CONTROL, SET_RESISTOR_RATIO, SET_STATIC_OFF, SET_STATIC_ON, SET_STATIC_REG,
    SET_VOLUME_FIRST, SET_VOLUME_SECOND, STATIC_ALWAYS_ON,
};
use crate::config::{Bias, Config, PAGES, WIDTH};
use crate::cursor::Position;
use crate::error::{Error, MAX_CONTRAST};
use crate::interface::DisplayInterface;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Rows with a remembered end column, enough for the aliased ninth row
const TRACKED_ROWS: usize = PAGES as usize + 1;

/// Power mode of the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Not yet initialized since construction
    #[default]
    Uninitialized,
    /// Powered and showing display RAM
    Active,
    /// Display off, static indicator on, oscillator running
    Standby,
    /// Display off, oscillator stopped
    Sleep,
}

/// Core display driver for ST7565
///
/// This struct provides low-level operations for the ST7565 controller:
/// power sequencing, cursor addressing and clearing. Text output lives in
/// [`crate::text`]; for embedded-graphics support, use `GraphicDisplay`
/// (requires `graphics` feature).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Cursor, committed only after the controller accepted the address
    position: Position,
    mode: DisplayMode,
    /// Contrast last written, restored on wakeup
    contrast: u8,
    /// Column the cursor was at when it last left each row by a newline
    row_ends: [Option<u8>; TRACKED_ROWS],
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`Display::initialize`].
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            contrast: config.contrast,
            config,
            position: Position::ORIGIN,
            mode: DisplayMode::Uninitialized,
            row_ends: [None; TRACKED_ROWS],
        }
    }

    /// Reset, power up and clear the display
    ///
    /// Allowed from every mode, which makes it the recovery path after an
    /// interface error left the controller in an unknown state.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("st7565: initializing from {:?}", self.mode);
        let timing = self.config.timing;
        self.interface
            .reset(delay, timing.reset_hold_ms)
            .map_err(Error::Interface)?;

        self.send_command(match self.config.bias {
            Bias::OneSeventh => SET_BIAS_7,
            Bias::OneNinth => SET_BIAS_9,
        })?;
        self.send_command(if self.config.adc_reverse {
            SET_ADC_REVERSE
        } else {
            SET_ADC_NORMAL
        })?;
        self.send_command(if self.config.com_reverse {
            SET_COM_REVERSE
        } else {
            SET_COM_NORMAL
        })?;
        self.send_command(SET_DISP_START_LINE | self.config.start_line)?;

        // Power circuits must come up in order
        self.send_command(SET_POWER_CONTROL | POWER_CONVERTER)?;
        delay.delay_ms(timing.converter_settle_ms);
        self.send_command(SET_POWER_CONTROL | POWER_CONVERTER | POWER_REGULATOR)?;
        delay.delay_ms(timing.regulator_settle_ms);
        self.send_command(SET_POWER_CONTROL | POWER_CONVERTER | POWER_REGULATOR | POWER_FOLLOWER)?;
        delay.delay_ms(timing.follower_settle_ms);

        self.send_command(SET_RESISTOR_RATIO | self.config.resistor_ratio)?;
        self.send_command(DISPLAY_ON)?;
        self.send_command(SET_ALLPTS_NORMAL)?;
        self.send_contrast(self.contrast)?;

        self.clear()?;
        self.mode = DisplayMode::Active;
        debug!("st7565: active");
        Ok(())
    }

    /// Blank the whole display RAM and home the cursor
    pub fn clear(&mut self) -> DisplayResult<I> {
        const BLANK: [u8; WIDTH as usize] = [0; WIDTH as usize];
        self.row_ends = [None; TRACKED_ROWS];
        for row in 0..self.config.variant.rows {
            self.goto(0, row)?;
            self.send_data(&BLANK)?;
        }
        self.goto(0, 0)
    }

    /// Move the cursor to `column` (0-127) and text `row`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the position does not exist on the
    /// configured variant. The cursor is left where it was.
    pub fn goto(&mut self, column: u8, row: u8) -> DisplayResult<I> {
        let target = Position::new(column, row);
        if !target.is_valid(self.config.variant) {
            return Err(Error::OutOfRange { column, row });
        }
        for command in address_commands(self.config.variant, column, row) {
            self.send_command(command)?;
        }
        trace!("st7565: cursor at ({}, {})", column, row);
        self.position = target;
        Ok(())
    }

    /// Current cursor position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the cursor to the start of the next row, wrapping to the top
    ///
    /// The column the cursor left is remembered so a later backspace from
    /// the row below rewinds onto the last cell written here.
    pub fn newline(&mut self) -> DisplayResult<I> {
        let from = self.position;
        self.goto(0, from.next_row(self.config.variant))?;
        self.set_row_end(from.row, from.column);
        Ok(())
    }

    /// Blank the panel but keep it powered and RAM intact
    ///
    /// Only allowed while [`DisplayMode::Active`].
    pub fn enter_standby(&mut self) -> DisplayResult<I> {
        self.transition(
            &[DisplayMode::Active],
            DisplayMode::Standby,
            &[
                SET_STATIC_ON,
                SET_STATIC_REG | STATIC_ALWAYS_ON,
                DISPLAY_OFF,
                SET_ALLPTS_ON,
            ],
        )
    }

    /// Resume from standby
    pub fn exit_standby(&mut self) -> DisplayResult<I> {
        self.transition(
            &[DisplayMode::Standby],
            DisplayMode::Active,
            &[SET_ALLPTS_NORMAL, DISPLAY_ON],
        )
    }

    /// Enter the power-save sleep state
    ///
    /// Allowed from Active and Standby.
    pub fn sleep(&mut self) -> DisplayResult<I> {
        self.transition(
            &[DisplayMode::Active, DisplayMode::Standby],
            DisplayMode::Sleep,
            &[SET_STATIC_OFF, DISPLAY_OFF, SET_ALLPTS_ON],
        )
    }

    /// Leave sleep, restoring the current contrast
    pub fn wakeup(&mut self) -> DisplayResult<I> {
        self.transition(
            &[DisplayMode::Sleep],
            DisplayMode::Active,
            &[
                INTERNAL_RESET,
                SET_VOLUME_FIRST,
                SET_VOLUME_SECOND | (self.contrast & MAX_CONTRAST),
                SET_ALLPTS_NORMAL,
                DISPLAY_ON,
                SET_STATIC_ON,
                SET_STATIC_REG | STATIC_ALWAYS_ON,
            ],
        )
    }

    /// Set contrast (electronic volume, 0-63)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContrast`] above 63 without sending anything.
    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        if value > MAX_CONTRAST {
            return Err(Error::InvalidContrast(value));
        }
        self.send_contrast(value)?;
        self.contrast = value;
        Ok(())
    }

    /// Swap lit and unlit pixels without touching RAM
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            SET_DISP_REVERSE
        } else {
            SET_DISP_NORMAL
        })
    }

    /// Current power mode
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Contrast last written
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_ref(&self) -> &I {
        &self.interface
    }

    /// Record a column move made by data writes
    ///
    /// The controller advances its column counter on every data byte, so no
    /// command is needed.
    pub(crate) fn set_column(&mut self, column: u8) {
        self.position.column = column;
    }

    /// Column where text on `row` ended when the cursor last left it
    pub(crate) fn row_end(&self, row: u8) -> Option<u8> {
        self.row_ends.get(usize::from(row)).copied().flatten()
    }

    pub(crate) fn set_row_end(&mut self, row: u8, column: u8) {
        if let Some(end) = self.row_ends.get_mut(usize::from(row)) {
            *end = Some(column);
        }
    }

    /// Send a command to the display controller
    pub(crate) fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    pub(crate) fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    fn send_contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.send_command(SET_VOLUME_FIRST)?;
        self.send_command(SET_VOLUME_SECOND | (value & MAX_CONTRAST))
    }

    fn transition(
        &mut self,
        from: &[DisplayMode],
        to: DisplayMode,
        commands: &[u8],
    ) -> DisplayResult<I> {
        if !from.contains(&self.mode) {
            warn!("st7565: refusing {:?} -> {:?}", self.mode, to);
            return Err(Error::InvalidTransition {
                from: self.mode,
                to,
            });
        }
        for command in commands {
            self.send_command(*command)?;
        }
        debug!("st7565: {:?} -> {:?}", self.mode, to);
        self.mode = to;
        Ok(())
    }
}
