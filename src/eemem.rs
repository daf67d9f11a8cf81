//! EEMEM (non-volatile) register operations.
//!
//! There are 16 EEMEM registers. Registers 0-3 shadow the 4 RDAC wiper
//! settings and are subject to the wiper-value check; registers 4-15 hold
//! arbitrary user bytes that survive power cycles.

use crate::consts;
use crate::device::Ad525x;
use crate::error::{Error, Result};
use crate::transport::TwoWire;
use log::debug;

impl<B: TwoWire> Ad525x<B> {
    /// Writes `value` to EEMEM register `reg` (0-15).
    ///
    /// For the wiper-shadow registers (0-3), a `value` below the variant
    /// maximum fails with [`Error::BadWiperSetting`]. A `reg` above 15
    /// fails with [`Error::BadRegister`]; registers 4-15 accept any byte.
    pub fn write_eemem(&mut self, reg: u8, value: u8) -> Result<()> {
        let result = self.write_eemem_inner(reg, value);
        self.record(result)
    }

    fn write_eemem_inner(&mut self, reg: u8, value: u8) -> Result<()> {
        self.check_initialized()?;
        if reg <= consts::MAX_RDAC_SHADOW_REGISTER && value < self.max_wiper_value() {
            return Err(Error::BadWiperSetting);
        }
        if reg > consts::MAX_EEMEM_REGISTER {
            return Err(Error::BadRegister);
        }

        debug!("write_eemem: EEMEM{} = 0x{:02X}", reg, value);
        self.write_data(consts::EEMEM_REGISTER | reg, value)
    }

    /// Reads EEMEM register `reg` (0-15).
    pub fn read_eemem(&mut self, reg: u8) -> Result<u8> {
        let result = self.read_eemem_inner(reg);
        self.record(result)
    }

    fn read_eemem_inner(&mut self, reg: u8) -> Result<u8> {
        self.check_initialized()?;
        if reg > consts::MAX_EEMEM_REGISTER {
            return Err(Error::BadRegister);
        }

        self.read_data_byte(consts::EEMEM_REGISTER | reg)
    }

    /// Reads an EEMEM register, returning 0 on any error.
    ///
    /// Compatibility shim; 0 is also valid stored data, so check
    /// [`Ad525x::last_error_code`]. Prefer [`Ad525x::read_eemem`].
    pub fn read_eemem_or_zero(&mut self, reg: u8) -> u8 {
        self.read_eemem(reg).unwrap_or(0)
    }
}
