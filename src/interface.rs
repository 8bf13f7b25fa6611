//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7565 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7565 requires:
//! - SPI bus (SID + SCLK, chip select handled by the [`SpiDevice`])
//! - 2 GPIO pins:
//!   - **A0**: Command/Data select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!
//! The controller has no busy line; every byte is accepted as soon as it is
//! clocked in.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7565::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse reset, holding the line low for 500ms
//! let _ = interface.reset(&mut delay, 500);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to ST7565 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits, or with a
/// recording double in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus, an I/O expander driving A0),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set A0 low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display data bytes to the controller
    ///
    /// Each byte is one 8-pixel column of the currently addressed page; the
    /// controller advances its column address after every byte.
    ///
    /// The implementation must:
    /// 1. Set A0 high (data mode)
    /// 2. Send the data bytes over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set A0 and RST low
    /// 2. Wait `hold_ms` milliseconds
    /// 3. Set RST high
    ///
    /// # Errors
    ///
    /// Returns an error if a GPIO write fails.
    #[allow(clippy::type_complexity)]
    fn reset<D: DelayNs>(&mut self, delay: &mut D, hold_ms: u32)
    -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for ST7565
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// The interface owns the bus for its whole lifetime; [`Interface::release`]
/// hands the parts back.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `A0` - Command/Data pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use st7565::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // A0 OutputPin
///     MockPin,  // RST OutputPin
/// );
///
/// // Use with Display
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<SPI, A0, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Command/Data select pin (low=command, high=data)
    a0: A0,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, A0, RST> Interface<SPI, A0, RST>
where
    SPI: SpiDevice,
    A0: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `a0` - Command/Data pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, a0: A0, rst: RST) -> Self {
        Self { spi, a0, rst }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, A0, RST) {
        (self.spi, self.a0, self.rst)
    }
}

impl<SPI, A0, RST, PinErr> DisplayInterface for Interface<SPI, A0, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    A0: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.a0.set_low().map_err(|e| InterfaceError::Pin(e))?;
        self.spi
            .write(&[command])
            .map_err(|e| InterfaceError::Spi(e))?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.a0.set_high().map_err(|e| InterfaceError::Pin(e))?;
        self.spi.write(data).map_err(|e| InterfaceError::Spi(e))?;
        Ok(())
    }

    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        hold_ms: u32,
    ) -> InterfaceResult<(), Self::Error> {
        self.a0.set_low().map_err(|e| InterfaceError::Pin(e))?;
        self.rst.set_low().map_err(|e| InterfaceError::Pin(e))?;
        delay.delay_ms(hold_ms);
        self.rst.set_high().map_err(|e| InterfaceError::Pin(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        A0(bool),
        Rst(bool),
        Write(u8),
        Delay(u32),
    }

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl core::fmt::Display for MockError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "mock error")
        }
    }

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockSpi<'a> {
        log: &'a RefCell<Vec<Event>>,
        fail: bool,
    }

    impl SpiErrorType for MockSpi<'_> {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi<'_> {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.log
                        .borrow_mut()
                        .extend(bytes.iter().map(|b| Event::Write(*b)));
                }
            }
            Ok(())
        }
    }

    struct MockPin<'a> {
        log: &'a RefCell<Vec<Event>>,
        is_a0: bool,
    }

    impl ErrorType for MockPin<'_> {
        type Error = MockError;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let event = if self.is_a0 {
                Event::A0(false)
            } else {
                Event::Rst(false)
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            let event = if self.is_a0 {
                Event::A0(true)
            } else {
                Event::Rst(true)
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    struct MockDelay<'a> {
        log: &'a RefCell<Vec<Event>>,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::Delay(ms));
        }
    }

    fn interface(
        log: &RefCell<Vec<Event>>,
        fail: bool,
    ) -> Interface<MockSpi<'_>, MockPin<'_>, MockPin<'_>> {
        Interface::new(
            MockSpi { log, fail },
            MockPin { log, is_a0: true },
            MockPin { log, is_a0: false },
        )
    }

    #[test]
    fn test_command_drives_a0_low() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log, false);
        iface.send_command(0xAF).unwrap();
        assert_eq!(log.borrow().as_slice(), &[Event::A0(false), Event::Write(0xAF)]);
    }

    #[test]
    fn test_data_drives_a0_high() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log, false);
        iface.send_data(&[0x12, 0x34]).unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            &[Event::A0(true), Event::Write(0x12), Event::Write(0x34)]
        );
    }

    #[test]
    fn test_reset_holds_line_low_for_requested_time() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log, false);
        let mut delay = MockDelay { log: &log };
        iface.reset(&mut delay, 500).unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::A0(false),
                Event::Rst(false),
                Event::Delay(500),
                Event::Rst(true)
            ]
        );
    }

    #[test]
    fn test_spi_failure_is_reported() {
        let log = RefCell::new(Vec::new());
        let mut iface = interface(&log, true);
        let result = iface.send_command(0xAF);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
    }
}
