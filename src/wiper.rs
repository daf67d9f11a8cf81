//! RDAC (wiper) register operations.

use crate::consts;
use crate::device::Ad525x;
use crate::error::{Error, Result};
use crate::transport::TwoWire;
use log::debug;

impl<B: TwoWire> Ad525x<B> {
    /// Sets the wiper position for RDAC register `rdac` (0-3).
    ///
    /// `value` must not exceed [`Ad525x::max_wiper_value`] for the variant
    /// (63 for the AD5253, 255 for the AD5254), else
    /// [`Error::BadWiperSetting`]. An `rdac` above 3 fails with
    /// [`Error::BadRegister`]. Transport errors propagate unchanged.
    pub fn write_wiper(&mut self, rdac: u8, value: u8) -> Result<()> {
        let result = self.write_wiper_inner(rdac, value);
        self.record(result)
    }

    fn write_wiper_inner(&mut self, rdac: u8, value: u8) -> Result<()> {
        self.check_initialized()?;
        if rdac > consts::MAX_RDAC_REGISTER {
            return Err(Error::BadRegister);
        }
        if value > self.max_wiper_value() {
            return Err(Error::BadWiperSetting);
        }

        debug!("write_wiper: RDAC{} = {}", rdac, value);
        self.write_data(consts::RDAC_REGISTER | rdac, value)
    }

    /// Reads the current wiper position of RDAC register `rdac` (0-3).
    pub fn read_wiper(&mut self, rdac: u8) -> Result<u8> {
        let result = self.read_wiper_inner(rdac);
        self.record(result)
    }

    fn read_wiper_inner(&mut self, rdac: u8) -> Result<u8> {
        self.check_initialized()?;
        if rdac > consts::MAX_RDAC_REGISTER {
            return Err(Error::BadRegister);
        }

        self.read_data_byte(consts::RDAC_REGISTER | rdac)
    }

    /// Reads a wiper position, returning 0 on any error.
    ///
    /// Compatibility shim: 0 is also a valid
    /// wiper position, so check [`Ad525x::last_error_code`] to tell the two
    /// apart. Prefer [`Ad525x::read_wiper`].
    pub fn read_wiper_or_zero(&mut self, rdac: u8) -> u8 {
        self.read_wiper(rdac).unwrap_or(0)
    }
}
