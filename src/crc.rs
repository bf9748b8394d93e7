//! CRC-16/XMODEM (poly 0x1021, init 0x0000, MSB first, no reflection,
//! no final XOR).
//!
//! The returned value is the raw shift register, so any checksum can be fed
//! back in as the seed of the next call to continue over more data.

use std::io;

/// Generator polynomial, x^16 + x^12 + x^5 + 1.
pub const POLY: u16 = 0x1021;

/// Seed used for SIBO records and plain XMODEM.
pub const INIT: u16 = SEED_XMODEM;

/// Checksum of the ASCII bytes `"123456789"` starting from [`INIT`].
pub const CHECK: u16 = 0x31C3;

/// Plain CRC-16/XMODEM seed.
pub const SEED_XMODEM: u16 = 0x0000;
/// Same polynomial seeded with all ones gives CRC-16/CCITT-FALSE.
pub const SEED_CCITT_FALSE: u16 = 0xFFFF;
/// Same polynomial seeded with 0x1D0F gives CRC-16/AUG-CCITT.
pub const SEED_AUG_CCITT: u16 = 0x1D0F;

/// Byte-at-a-time lookup table, computed at compile time.
pub static TABLE: [u16; 256] = make_table();

const fn make_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = shift_byte(0, i as u8);
        i += 1;
    }
    table
}

/// Fold one byte into the register, one bit at a time.
#[inline]
const fn shift_byte(crc: u16, byte: u8) -> u16 {
    let mut crc = crc ^ ((byte as u16) << 8);
    let mut bit = 0;
    while bit < 8 {
        let msb_set = (crc & 0x8000) != 0;
        crc = (crc & 0x7FFF) << 1;
        if msb_set {
            crc ^= POLY;
        }
        bit += 1;
    }
    crc
}

/// Update `crc` with every byte of `data` using the lookup table.
///
/// An empty slice returns `crc` unchanged. Splitting `data` anywhere and
/// feeding the first result in as the seed of the second call gives the same
/// value as one call over the whole slice.
#[inline]
pub fn crc16(crc: u16, data: &[u8]) -> u16 {
    data.iter().fold(crc, |crc, &byte| {
        let idx = ((crc >> 8) as u8 ^ byte) as usize;
        (crc << 8) ^ TABLE[idx]
    })
}

/// Bit-by-bit version of [`crc16`]. Slow, but needs no table and can run in
/// const context.
pub const fn crc16_bitwise(crc: u16, data: &[u8]) -> u16 {
    let mut crc = crc;
    let mut i = 0;
    while i < data.len() {
        crc = shift_byte(crc, data[i]);
        i += 1;
    }
    crc
}

const _: () = assert!(crc16_bitwise(INIT, b"123456789") == CHECK);

/// Running checksum for data that arrives in pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    seed: u16,
    state: u16,
}

impl Crc16 {
    /// State seeded with [`INIT`].
    pub const fn new() -> Self {
        Self::with_seed(INIT)
    }

    /// State seeded with `seed`, e.g. a checksum from an earlier call.
    pub const fn with_seed(seed: u16) -> Self {
        Self { seed, state: seed }
    }

    /// Fold `data` into the running checksum.
    pub fn update(&mut self, data: &[u8]) {
        self.state = crc16(self.state, data);
    }

    /// Checksum of everything fed so far.
    pub const fn value(&self) -> u16 {
        self.state
    }

    /// Go back to the seed this state was created with.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Crc16 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
