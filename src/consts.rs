//! Internal constants, register-class bases, and command opcodes.

/// Base 7-bit I2C address. The full address is `BASE_I2C_ADDR | (AD1 << 1) | AD0`.
pub const BASE_I2C_ADDR: u8 = 0x2C;

/// Largest value of the 2-bit `(AD1 << 1) | AD0` address selector.
pub const MAX_ADDR_SELECTOR: u8 = 3;

// --- Instruction-address bytes ---
// The top bits of the instruction byte select the register class; the low
// bits carry the register index.

/// RDAC (wiper) register class. Low 2 bits select one of the 4 wipers.
pub const RDAC_REGISTER: u8 = 0x00;
/// EEMEM (non-volatile) register class. Low 4 bits select one of 16 registers.
pub const EEMEM_REGISTER: u8 = 0x20;
/// Factory tolerance register class (read-only). Bits 2:1 select the wiper,
/// bit 0 selects the integer or fractional part.
pub const TOLERANCE_REGISTER: u8 = 0x38;
/// Tolerance sub-selector: integer part.
pub const TOL_INT: u8 = 0x00;
/// Tolerance sub-selector: fractional part.
pub const TOL_FRACTION: u8 = 0x01;

/// Highest RDAC register index (4 wipers, zero-based).
pub const MAX_RDAC_REGISTER: u8 = 3;
/// Highest EEMEM register index (16 registers, zero-based).
pub const MAX_EEMEM_REGISTER: u8 = 15;
/// EEMEM registers 0..=3 shadow the 4 RDAC wiper settings.
pub const MAX_RDAC_SHADOW_REGISTER: u8 = 3;

// --- Command Opcodes ---
// Single-byte commands, no data phase. The top bits select the command
// class; for the per-wiper commands the low 2 bits carry the wiper index.
pub mod cmd {
    /// Return the device to the idle state.
    pub const NOP: u8 = 0x80;
    pub const RESTORE_RDAC: u8 = 0x88;
    pub const STORE_RDAC: u8 = 0x90;
    pub const DEC_RDAC_6DB: u8 = 0x98;
    pub const DEC_ALL_RDAC_6DB: u8 = 0xA0;
    pub const DEC_RDAC_STEP: u8 = 0xA8;
    pub const DEC_ALL_RDAC_STEP: u8 = 0xB0;
    pub const RESTORE_ALL_RDAC: u8 = 0xB8;
    pub const INC_RDAC_6DB: u8 = 0xC0;
    pub const INC_ALL_RDAC_6DB: u8 = 0xC8;
    pub const INC_RDAC_STEP: u8 = 0xD0;
    pub const INC_ALL_RDAC_STEP: u8 = 0xD8;
}
