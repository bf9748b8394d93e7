//! CRC-16/XMODEM checksums for Psion SIBO records.
//! Provides the table-driven engine, a bitwise reference, a streaming
//! state and a helper for checking stored checksums.

pub mod crc;
pub mod verify;

pub use self::crc::{Crc16, crc16, crc16_bitwise};
pub use self::verify::{ChecksumMismatch, verify, verify_seeded};
