//! Errors shared by every operation in this crate.

use thiserror::Error;

/// Errors that can occur when driving an AD5253/AD5254 device.
///
/// The set is closed and each variant carries a stable numeric code
/// (see [`Error::code`]) matching the codes the device family's tooling
/// has always logged. Codes 1-4 are reported by the two-wire transport
/// and are propagated verbatim; the remaining codes are raised by the
/// driver's own validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Data too long to fit in the transport's transmit buffer.
    #[error("Data too long to fit in transmit buffer")]
    DataTooLong,
    /// Device did not acknowledge its address.
    #[error("Received NACK on transmit of address")]
    AddressNack,
    /// Device did not acknowledge a data byte.
    #[error("Received NACK on transmit of data")]
    DataNack,
    /// Any other failure reported by the two-wire transport.
    #[error("Other two-wire bus error")]
    BusError,
    /// Register index outside the range valid for its class.
    #[error("Invalid register")]
    BadRegister,
    /// Wiper value above the variant's maximum.
    #[error("Invalid wiper setting")]
    BadWiperSetting,
    /// The transport returned a different number of bytes than requested.
    #[error("Invalid number of bytes read from register")]
    BadReadSize,
    /// Address selector does not fit in 2 bits.
    #[error("Bad device address - device address must be in [0, 3]")]
    BadDeviceAddress,
    /// Capability not supplied by the selected interface.
    #[error("Function not implemented on interface")]
    NotImplemented,
    /// Operation attempted before a successful `initialize`.
    #[error("Communication has not been initialized")]
    NotInitialized,
}

impl Error {
    /// Stable numeric code for logs and wire compatibility. `0` is reserved
    /// for "no error" and is never produced by an `Error` value; use
    /// [`crate::Ad525x::last_error_code`] to observe it.
    pub fn code(&self) -> u8 {
        match self {
            Error::DataTooLong => 1,
            Error::AddressNack => 2,
            Error::DataNack => 3,
            Error::BusError => 4,
            Error::BadRegister => 5,
            Error::BadWiperSetting => 6,
            Error::BadReadSize => 7,
            Error::BadDeviceAddress => 8,
            Error::NotImplemented => 9,
            Error::NotInitialized => 10,
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
