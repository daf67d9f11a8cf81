//! Device handle and byte-level register access.

use crate::consts;
use crate::error::{Error, Result};
use crate::transport::TwoWire;
use log::{debug, trace};

/// Device variant, selected at construction.
///
/// The AD5253 and AD5254 share the register map and command set and differ
/// only in wiper resolution; the variant pins down the maximum wiper value
/// used for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// AD5253: 64-position potentiometer, wiper values 0..=63.
    Ad5253,
    /// AD5254: 256-position potentiometer, wiper values 0..=255.
    Ad5254,
}

impl Variant {
    /// Maximum wiper value for this variant.
    pub fn max_wiper_value(self) -> u8 {
        match self {
            Variant::Ad5253 => 63,
            Variant::Ad5254 => 255,
        }
    }
}

/// A handle to one AD5253/AD5254 on a two-wire bus.
///
/// The handle is created uninitialized with [`Ad525x::new`] and becomes
/// usable only after a successful [`Ad525x::initialize`]. Every public
/// operation validates locally first (initialization, index bounds, value
/// bounds) and only then touches the transport, so a validation failure
/// never generates bus traffic.
///
/// Operations return `Result` and additionally record their outcome in a
/// per-handle last-error slot (success clears it), which backs the
/// `*_or_zero` compatibility shims whose return value cannot distinguish
/// an error from a genuine zero.
///
/// **Note:** operations take `&mut self` and the handle performs no internal
/// locking; serialize access externally if it is shared.
#[derive(Debug)]
pub struct Ad525x<B> {
    bus: B,
    variant: Variant,
    address: u8,
    initialized: bool,
    last_error: Option<Error>,
}

impl<B: TwoWire> Ad525x<B> {
    /// Creates an uninitialized handle for the given bus and variant.
    ///
    /// No bus traffic occurs until [`Ad525x::initialize`] succeeds; until
    /// then every operation fails with [`Error::NotInitialized`].
    pub fn new(bus: B, variant: Variant) -> Self {
        Self {
            bus,
            variant,
            address: 0,
            initialized: false,
            last_error: None,
        }
    }

    /// Initializes communication with the device selected by the 2-bit
    /// address pins, `(AD1 << 1) | AD0`.
    ///
    /// Composes the full 7-bit address `0x2C | selector`, opens the bus
    /// session, and marks the handle initialized. A selector above 3 fails
    /// with [`Error::BadDeviceAddress`] and leaves the handle uninitialized.
    pub fn initialize(&mut self, selector: u8) -> Result<()> {
        if selector > consts::MAX_ADDR_SELECTOR {
            self.initialized = false;
            return self.record(Err(Error::BadDeviceAddress));
        }

        self.address = consts::BASE_I2C_ADDR | selector;
        self.bus.open();
        self.initialized = true;
        debug!(
            "Initialized AD525x ({:?}) at address 0x{:02X}",
            self.variant, self.address
        );
        self.record(Ok(()))
    }

    /// Full 7-bit bus address. Meaningful only after `initialize` succeeds.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// The variant this handle was constructed for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Maximum wiper value accepted by [`Ad525x::write_wiper`].
    pub fn max_wiper_value(&self) -> u8 {
        self.variant.max_wiper_value()
    }

    /// Whether `initialize` has succeeded on this handle.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Outcome of the most recent operation; `None` after a success.
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    /// Numeric code of the most recent operation's outcome, `0` for success.
    ///
    /// This is the error channel for the `*_or_zero` read shims, whose
    /// return value is ambiguous on failure.
    pub fn last_error_code(&self) -> u8 {
        self.last_error.map_or(0, |e| e.code())
    }

    // Stores the outcome in the last-error slot and hands it back.
    pub(crate) fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        self.last_error = result.as_ref().err().copied();
        result
    }

    pub(crate) fn check_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    // --- Byte-level access ---
    // One register write is a single (instruction, data) transaction.

    pub(crate) fn write_data(&mut self, instr_addr: u8, data: u8) -> Result<()> {
        trace!(
            "write_data: addr=0x{:02X} instr=0x{:02X} data=0x{:02X}",
            self.address,
            instr_addr,
            data
        );
        self.bus.begin_transaction(self.address);
        self.bus.write_byte(instr_addr);
        self.bus.write_byte(data);
        self.bus.end_transaction()
    }

    pub(crate) fn write_command(&mut self, cmd_byte: u8) -> Result<()> {
        trace!(
            "write_command: addr=0x{:02X} cmd=0x{:02X}",
            self.address,
            cmd_byte
        );
        self.bus.begin_transaction(self.address);
        self.bus.write_byte(cmd_byte);
        self.bus.end_transaction()
    }

    // Sets the instruction pointer, then reads N bytes back. Returns an
    // owned array; a short or long read is a BadReadSize.
    pub(crate) fn read_data<const N: usize>(&mut self, instr_addr: u8) -> Result<[u8; N]> {
        self.bus.begin_transaction(self.address);
        self.bus.write_byte(instr_addr);
        self.bus.end_transaction()?;

        let mut buf = [0u8; N];
        let received = self.bus.request_bytes(self.address, &mut buf)?;
        if received != N {
            log::warn!(
                "read_data: instr=0x{:02X} expected {} byte(s), received {}",
                instr_addr,
                N,
                received
            );
            return Err(Error::BadReadSize);
        }
        trace!(
            "read_data: addr=0x{:02X} instr=0x{:02X} -> {:02X?}",
            self.address,
            instr_addr,
            buf
        );
        Ok(buf)
    }

    pub(crate) fn read_data_byte(&mut self, instr_addr: u8) -> Result<u8> {
        let buf: [u8; 1] = self.read_data(instr_addr)?;
        Ok(buf[0])
    }
}
