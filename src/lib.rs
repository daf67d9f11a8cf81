//! # ad525x
//!
//! A driver for the registers of the Analog Devices AD5253 and AD5254 quad
//! I2C digital potentiometers.
//!
//! The two variants share a register map and command set and differ only in
//! wiper resolution: the AD5253 has 64 positions (wiper values 0-63), the
//! AD5254 has 256 (0-255). Each chip carries:
//!
//! *   Four **RDAC** registers — the live, volatile wiper positions
//!     ([`Ad525x::write_wiper`], [`Ad525x::read_wiper`]).
//! *   Sixteen **EEMEM** registers — non-volatile storage that survives
//!     power cycles. Registers 0-3 shadow the wiper settings; 4-15 hold
//!     arbitrary user bytes ([`Ad525x::write_eemem`], [`Ad525x::read_eemem`]).
//! *   Per-wiper factory **tolerance** registers — read-only signed
//!     percentages measured at the factory ([`Ad525x::read_tolerance`]).
//! *   A single-byte **command** interface — reset, store/restore between
//!     RDAC and EEMEM, and step or 6 dB (double/halve) wiper adjustments,
//!     per wiper or for all four at once ([`commands::Command`]).
//!
//! The crate owns the register-addressing protocol and its validation; the
//! two-wire bus itself is a collaborator supplied by the caller through the
//! [`TwoWire`] trait, so the driver runs against any blocking I2C master
//! (or a mock, as the test suite does).
//!
//! ## Addressing
//!
//! The base 7-bit address is `0x2C`. The chip's `AD1`/`AD0` pins contribute
//! a 2-bit selector, so up to four devices share one bus:
//! `address = 0x2C | (AD1 << 1) | AD0`. Pass the selector to
//! [`Ad525x::initialize`]; until it succeeds, every operation fails with
//! [`Error::NotInitialized`].
//!
//! ## Errors
//!
//! Every operation returns [`Result`] over a closed [`Error`] taxonomy with
//! stable numeric codes ([`Error::code`]): codes 1-4 come verbatim from the
//! transport, 5-10 from the driver's own validation. The handle also keeps
//! the most recent outcome ([`Ad525x::last_error_code`], 0 = success) for
//! the `*_or_zero` read shims whose zero return value is ambiguous.
//!
//! ## Basic usage
//!
//! ```
//! use ad525x::{Ad525x, Result, TwoWire, Variant};
//! use std::collections::HashMap;
//!
//! // Stand-in bus; a real application wires `TwoWire` to its I2C master.
//! #[derive(Default)]
//! struct LoopbackWire {
//!     regs: HashMap<u8, u8>,
//!     frame: Vec<u8>,
//!     pointer: Option<u8>,
//! }
//!
//! impl TwoWire for LoopbackWire {
//!     fn begin_transaction(&mut self, _address: u8) {
//!         self.frame.clear();
//!     }
//!     fn write_byte(&mut self, byte: u8) {
//!         self.frame.push(byte);
//!     }
//!     fn end_transaction(&mut self) -> Result<()> {
//!         match self.frame[..] {
//!             [instr, value] => {
//!                 self.regs.insert(instr, value);
//!             }
//!             [instr] if instr & 0x80 == 0 => self.pointer = Some(instr),
//!             _ => {} // command byte, nothing to echo
//!         }
//!         Ok(())
//!     }
//!     fn request_bytes(&mut self, _address: u8, buf: &mut [u8]) -> Result<usize> {
//!         let instr = self.pointer.take().unwrap_or(0);
//!         for (i, byte) in buf.iter_mut().enumerate() {
//!             *byte = self.regs.get(&(instr + i as u8)).copied().unwrap_or(0);
//!         }
//!         Ok(buf.len())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut pot = Ad525x::new(LoopbackWire::default(), Variant::Ad5253);
//!
//!     // AD1 and AD0 pins both tied low.
//!     pot.initialize(0b00)?;
//!     assert_eq!(pot.address(), 0x2C);
//!
//!     pot.write_wiper(0, 42)?;
//!     assert_eq!(pot.read_wiper(0)?, 42);
//!
//!     // Persist wiper 0 so it is restored at the next power-up.
//!     pot.store_wiper(0)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Hardware setup notes
//!
//! *   I2C pull-up resistors are required externally.
//!     The EEMEM write cycle takes the device a few milliseconds; pacing
//!     between store commands is the caller's responsibility.
//! *   The handle is not internally synchronized (`&mut self` everywhere);
//!     share it across threads only behind external serialization.

mod consts;
mod device;
mod eemem;
mod error;
mod wiper;

pub mod commands;
pub mod tolerance;
pub mod transport;

pub use commands::Command;
pub use device::{Ad525x, Variant};
pub use error::{Error, Result};
pub use tolerance::decode_tolerance;
pub use transport::TwoWire;

/// Base 7-bit I2C address shared by the device family.
pub use consts::BASE_I2C_ADDR;
