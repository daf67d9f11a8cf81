//! Shared mock two-wire bus for the integration tests.

#![allow(dead_code)] // Not every test binary uses every helper.

use ad525x::{Error, Result, TwoWire};
use std::collections::HashMap;

/// In-memory bus that behaves like an AD525x on the wire: register writes
/// are stored by instruction byte and echoed back on reads, command bytes
/// (high bit set) are recorded, and failures can be injected.
#[derive(Default)]
pub struct MockWire {
    /// Register state keyed by instruction byte.
    pub regs: HashMap<u8, u8>,
    /// Every (instruction, data) register write, in order.
    pub writes: Vec<(u8, u8)>,
    /// Every single-byte command, in order.
    pub commands: Vec<u8>,
    /// Addresses seen by `begin_transaction`.
    pub addresses: Vec<u8>,
    /// Count of transport calls (transactions begun + byte requests).
    pub transactions: usize,
    /// Whether `open` was called.
    pub opened: bool,
    /// When set, every `end_transaction` fails with this error.
    pub fail_end: Option<Error>,
    /// When set, `request_bytes` reports zero bytes received.
    pub short_read: bool,
    frame: Vec<u8>,
    pointer: Option<u8>,
}

impl MockWire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a register so a later read returns `value`.
    pub fn preload(&mut self, instr: u8, value: u8) {
        self.regs.insert(instr, value);
    }
}

impl TwoWire for MockWire {
    fn open(&mut self) {
        self.opened = true;
    }

    fn begin_transaction(&mut self, address: u8) {
        self.transactions += 1;
        self.addresses.push(address);
        self.frame.clear();
    }

    fn write_byte(&mut self, byte: u8) {
        self.frame.push(byte);
    }

    fn end_transaction(&mut self) -> Result<()> {
        if let Some(err) = self.fail_end {
            return Err(err);
        }
        match self.frame[..] {
            [instr, value] => {
                self.regs.insert(instr, value);
                self.writes.push((instr, value));
            }
            // Command bytes have the high bit set; a bare register
            // instruction just positions the read pointer.
            [byte] if byte & 0x80 != 0 => self.commands.push(byte),
            [instr] => self.pointer = Some(instr),
            _ => {}
        }
        Ok(())
    }

    fn request_bytes(&mut self, _address: u8, buf: &mut [u8]) -> Result<usize> {
        self.transactions += 1;
        if self.short_read {
            return Ok(0);
        }
        let instr = self.pointer.take().ok_or(Error::BusError)?;
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.regs.get(&(instr + i as u8)).copied().unwrap_or(0);
        }
        Ok(buf.len())
    }
}
