//! Factory resistance-tolerance registers.
//!
//! Each wiper has a pair of read-only registers holding the factory-measured
//! deviation of actual resistance from nominal, as a signed percentage split
//! into an integer byte and a fractional byte.

use crate::consts;
use crate::device::Ad525x;
use crate::error::{Error, Result};
use crate::transport::TwoWire;
use log::debug;

const SIGN_MASK: u8 = 0x80;

/// Decodes the raw tolerance register pair into a signed percentage.
///
/// The integer byte's high bit is a sign flag over a 7-bit magnitude. The
/// fractional byte is walked from bit 7 down to bit 0 with weights 2^-1
/// through 2^-8, and the accumulated fraction is added to the signed
/// integer part.
///
/// The fractional bit weighting is suspected to disagree with the
/// datasheet; it is kept for compatibility until a verified mapping
/// replaces it.
pub fn decode_tolerance(integer: u8, fraction: u8) -> f32 {
    let mut output = f32::from(integer & !SIGN_MASK);
    if integer & SIGN_MASK != 0 {
        output = -output;
    }

    for i in 0..8 {
        if fraction & (SIGN_MASK >> i) != 0 {
            output += 1.0 / f32::from(2u16 << i);
        }
    }

    output
}

impl<B: TwoWire> Ad525x<B> {
    /// Reads the factory RAB tolerance for wiper `rdac` (0-3), in percent.
    ///
    /// Values vary from device to device and register to register. An
    /// `rdac` above 3 fails with [`Error::BadRegister`]; either register
    /// read failing aborts with that error.
    pub fn read_tolerance(&mut self, rdac: u8) -> Result<f32> {
        let result = self.read_tolerance_inner(rdac);
        self.record(result)
    }

    fn read_tolerance_inner(&mut self, rdac: u8) -> Result<f32> {
        self.check_initialized()?;
        if rdac > consts::MAX_RDAC_REGISTER {
            return Err(Error::BadRegister);
        }

        // The wiper index sits in bits 2:1; bit 0 picks integer or fraction.
        let instr_addr = consts::TOLERANCE_REGISTER | (rdac << 1);
        let integer = self.read_data_byte(instr_addr | consts::TOL_INT)?;
        let fraction = self.read_data_byte(instr_addr | consts::TOL_FRACTION)?;

        let tolerance = decode_tolerance(integer, fraction);
        debug!(
            "read_tolerance: RDAC{} raw=({:02X}, {:02X}) -> {}%",
            rdac, integer, fraction, tolerance
        );
        Ok(tolerance)
    }

    /// Reads a factory tolerance, returning 0.0 on any error.
    ///
    /// Compatibility shim: 0.0 is also a valid tolerance, so check
    /// [`Ad525x::last_error_code`]. Prefer [`Ad525x::read_tolerance`].
    pub fn read_tolerance_or_zero(&mut self, rdac: u8) -> f32 {
        self.read_tolerance(rdac).unwrap_or(0.0)
    }
}
