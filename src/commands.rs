//! Device-level commands: reset, store/restore, step and 6 dB adjustments.
//!
//! Commands are single-byte transactions with no data phase. Step commands
//! move a wiper by exactly 1 and saturate at the ends of the range in
//! hardware; 6 dB commands double or halve the wiper value in hardware.

use crate::consts::cmd;
use crate::consts::MAX_RDAC_REGISTER;
use crate::device::Ad525x;
use crate::error::{Error, Result};
use crate::transport::TwoWire;
use log::debug;

/// A device command and, where applicable, the wiper it targets.
///
/// [`Command::opcode`] composes the command byte: a fixed opcode for the
/// whole-device commands, OR'd with the 2-bit wiper index for the per-wiper
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Return the device to the idle state.
    Nop,
    /// Reload one wiper from its EEMEM shadow register.
    RestoreWiper(u8),
    /// Reload all four wipers from their EEMEM shadow registers.
    RestoreAllWipers,
    /// Save one wiper's current position to its EEMEM shadow register.
    StoreWiper(u8),
    /// Decrement one wiper by a single step.
    DecrementStep(u8),
    /// Decrement all wipers by a single step.
    DecrementAllSteps,
    /// Halve one wiper's value (-6 dB).
    Decrement6dB(u8),
    /// Halve all wipers' values (-6 dB).
    DecrementAll6dB,
    /// Increment one wiper by a single step.
    IncrementStep(u8),
    /// Increment all wipers by a single step.
    IncrementAllSteps,
    /// Double one wiper's value (+6 dB).
    Increment6dB(u8),
    /// Double all wipers' values (+6 dB).
    IncrementAll6dB,
}

impl Command {
    /// Composes the command byte, validating the wiper index where one is
    /// carried (above 3 fails with [`Error::BadRegister`]).
    pub fn opcode(self) -> Result<u8> {
        let (base, rdac) = match self {
            Command::Nop => (cmd::NOP, None),
            Command::RestoreWiper(rdac) => (cmd::RESTORE_RDAC, Some(rdac)),
            Command::RestoreAllWipers => (cmd::RESTORE_ALL_RDAC, None),
            Command::StoreWiper(rdac) => (cmd::STORE_RDAC, Some(rdac)),
            Command::DecrementStep(rdac) => (cmd::DEC_RDAC_STEP, Some(rdac)),
            Command::DecrementAllSteps => (cmd::DEC_ALL_RDAC_STEP, None),
            Command::Decrement6dB(rdac) => (cmd::DEC_RDAC_6DB, Some(rdac)),
            Command::DecrementAll6dB => (cmd::DEC_ALL_RDAC_6DB, None),
            Command::IncrementStep(rdac) => (cmd::INC_RDAC_STEP, Some(rdac)),
            Command::IncrementAllSteps => (cmd::INC_ALL_RDAC_STEP, None),
            Command::Increment6dB(rdac) => (cmd::INC_RDAC_6DB, Some(rdac)),
            Command::IncrementAll6dB => (cmd::INC_ALL_RDAC_6DB, None),
        };
        match rdac {
            Some(rdac) if rdac > MAX_RDAC_REGISTER => Err(Error::BadRegister),
            Some(rdac) => Ok(base | rdac),
            None => Ok(base),
        }
    }
}

impl<B: TwoWire> Ad525x<B> {
    /// Issues a command to the device.
    pub fn command(&mut self, command: Command) -> Result<()> {
        let result = self.command_inner(command);
        self.record(result)
    }

    fn command_inner(&mut self, command: Command) -> Result<()> {
        self.check_initialized()?;
        let opcode = command.opcode()?;
        debug!("command: {:?} (0x{:02X})", command, opcode);
        self.write_command(opcode)
    }

    /// Returns the device to the idle state (NOP).
    pub fn reset_device(&mut self) -> Result<()> {
        self.command(Command::Nop)
    }

    /// Restores the wiper value for `rdac` from its EEMEM register.
    pub fn restore_wiper(&mut self, rdac: u8) -> Result<()> {
        self.command(Command::RestoreWiper(rdac))
    }

    /// Restores all wiper values from their EEMEM registers.
    pub fn restore_all_wipers(&mut self) -> Result<()> {
        self.command(Command::RestoreAllWipers)
    }

    /// Stores the current wiper value for `rdac` in its EEMEM register.
    pub fn store_wiper(&mut self, rdac: u8) -> Result<()> {
        self.command(Command::StoreWiper(rdac))
    }

    /// Decrements the wiper value for `rdac` by 1. Saturates at 0.
    pub fn decrement_wiper(&mut self, rdac: u8) -> Result<()> {
        self.command(Command::DecrementStep(rdac))
    }

    /// Increments the wiper value for `rdac` by 1. Saturates at the maximum.
    pub fn increment_wiper(&mut self, rdac: u8) -> Result<()> {
        self.command(Command::IncrementStep(rdac))
    }

    /// Halves the wiper value for `rdac` (-6 dB).
    pub fn decrement_wiper_6db(&mut self, rdac: u8) -> Result<()> {
        self.command(Command::Decrement6dB(rdac))
    }

    /// Doubles the wiper value for `rdac` (+6 dB).
    pub fn increment_wiper_6db(&mut self, rdac: u8) -> Result<()> {
        self.command(Command::Increment6dB(rdac))
    }

    /// Decrements all wiper values by 1.
    pub fn decrement_all_wipers(&mut self) -> Result<()> {
        self.command(Command::DecrementAllSteps)
    }

    /// Increments all wiper values by 1.
    pub fn increment_all_wipers(&mut self) -> Result<()> {
        self.command(Command::IncrementAllSteps)
    }

    /// Halves all wiper values (-6 dB).
    pub fn decrement_all_wipers_6db(&mut self) -> Result<()> {
        self.command(Command::DecrementAll6dB)
    }

    /// Doubles all wiper values (+6 dB).
    pub fn increment_all_wipers_6db(&mut self) -> Result<()> {
        self.command(Command::IncrementAll6dB)
    }
}
