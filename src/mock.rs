//! Recording interface double for unit tests
//!
//! Records every operation and replays the addressing commands against a
//! simulated display RAM so tests can check what ended up on the panel.

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{SET_STATIC_ON, SET_VOLUME_FIRST};
use crate::interface::DisplayInterface;

/// Columns in controller RAM, including the four unused by the panel
const RAM_COLUMNS: usize = 132;
/// Pages in controller RAM, including the icon page
const RAM_PAGES: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Reset(u32),
    Command(u8),
    Data(Vec<u8>),
}

#[derive(Debug, PartialEq)]
pub(crate) struct MockError;

#[derive(Debug)]
pub(crate) struct MockInterface {
    pub ops: Vec<Op>,
    /// Fail the operation with this index (counted over all operations)
    pub fail_at: Option<usize>,
    calls: usize,
    ram: [[u8; RAM_COLUMNS]; RAM_PAGES],
    page: usize,
    column: usize,
    /// Next command byte is an operand, not an instruction
    operand_pending: bool,
}

impl MockInterface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_at: None,
            calls: 0,
            ram: [[0; RAM_COLUMNS]; RAM_PAGES],
            page: 0,
            column: 0,
            operand_pending: false,
        }
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::new()
        }
    }

    fn tick(&mut self) -> Result<(), MockError> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            Err(MockError)
        } else {
            Ok(())
        }
    }

    /// All command bytes in order
    pub fn commands(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// All data bytes in order, concatenated
    pub fn data(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Data(d) => Some(d.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Forget recorded operations but keep RAM contents
    pub fn forget(&mut self) {
        self.ops.clear();
    }

    /// Simulated RAM of a text row on the standard variant
    pub fn row(&self, row: usize) -> &[u8] {
        &self.ram[7 - row][..128]
    }

    fn decode(&mut self, command: u8) {
        if self.operand_pending {
            self.operand_pending = false;
            return;
        }
        match command {
            0x00..=0x0F => self.column = (self.column & 0x70) | usize::from(command & 0x0F),
            0x10..=0x17 => {
                self.column = (self.column & 0x0F) | (usize::from(command & 0x07) << 4);
            }
            0xB0..=0xB8 => self.page = usize::from(command & 0x0F),
            SET_VOLUME_FIRST | SET_STATIC_ON => self.operand_pending = true,
            _ => {}
        }
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.tick()?;
        self.ops.push(Op::Command(command));
        self.decode(command);
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tick()?;
        self.ops.push(Op::Data(data.to_vec()));
        for byte in data {
            if self.column < RAM_COLUMNS {
                self.ram[self.page][self.column] = *byte;
            }
            self.column += 1;
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D, hold_ms: u32) -> Result<(), Self::Error> {
        self.tick()?;
        delay.delay_ms(hold_ms);
        self.ops.push(Op::Reset(hold_ms));
        Ok(())
    }
}

/// Delay that records requested milliseconds instead of sleeping
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.ms.push(ms);
    }
}
