//! Two-wire transport collaborator contract.

use crate::error::Result;

/// Blocking two-wire (I2C master) transport used by [`crate::Ad525x`].
///
/// The driver issues every register access as one transaction: a
/// `begin_transaction` / one or two `write_byte` calls / `end_transaction`
/// sequence, optionally followed by `request_bytes` for the read phase.
///
/// Implementations report failures with the shared error taxonomy:
/// `end_transaction` and `request_bytes` return [`crate::Error::DataTooLong`],
/// [`crate::Error::AddressNack`], [`crate::Error::DataNack`], or
/// [`crate::Error::BusError`] (codes 1-4). The driver never translates or
/// retries these; they surface to the caller exactly as reported.
pub trait TwoWire {
    /// Opens the bus session. Called once from a successful
    /// [`crate::Ad525x::initialize`]. Infallible, as bus setup that can fail
    /// belongs to transport construction.
    fn open(&mut self) {}

    /// Starts a transaction addressed to the 7-bit `address`.
    fn begin_transaction(&mut self, address: u8);

    /// Queues one byte into the current transaction. Called one or two
    /// times between `begin_transaction` and `end_transaction`.
    fn write_byte(&mut self, byte: u8);

    /// Transmits the queued transaction and reports its outcome.
    fn end_transaction(&mut self) -> Result<()>;

    /// Reads `buf.len()` bytes from the device at `address`, returning the
    /// number of bytes actually received. The driver treats a count other
    /// than `buf.len()` as [`crate::Error::BadReadSize`].
    fn request_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<usize>;
}

impl<T: TwoWire + ?Sized> TwoWire for &mut T {
    fn open(&mut self) {
        T::open(self)
    }

    fn begin_transaction(&mut self, address: u8) {
        T::begin_transaction(self, address)
    }

    fn write_byte(&mut self, byte: u8) {
        T::write_byte(self, byte)
    }

    fn end_transaction(&mut self) -> Result<()> {
        T::end_transaction(self)
    }

    fn request_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
        T::request_bytes(self, address, buf)
    }
}
