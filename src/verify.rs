use crate::crc::{INIT, crc16};

/// A stored checksum that does not match the data it was stored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("checksum mismatch: expected 0x{expected:04X}, computed 0x{computed:04X}")]
pub struct ChecksumMismatch {
    pub expected: u16,
    pub computed: u16,
}

/// Check `data` against a checksum stored alongside it, the way SIBO bitmap
/// descriptors are checked (seed 0).
pub fn verify(expected: u16, data: &[u8]) -> Result<(), ChecksumMismatch> {
    verify_seeded(INIT, expected, data)
}

/// Like [`verify`], starting the checksum from `seed`.
pub fn verify_seeded(seed: u16, expected: u16, data: &[u8]) -> Result<(), ChecksumMismatch> {
    let computed = crc16(seed, data);
    if computed == expected {
        Ok(())
    } else {
        log::debug!(
            "checksum mismatch over {} bytes: expected 0x{expected:04X}, computed 0x{computed:04X}",
            data.len()
        );
        Err(ChecksumMismatch { expected, computed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::{CHECK, SEED_CCITT_FALSE};

    #[test]
    fn accepts_matching_checksum() {
        assert_eq!(verify(CHECK, b"123456789"), Ok(()));
        assert_eq!(verify_seeded(SEED_CCITT_FALSE, 0x29B1, b"123456789"), Ok(()));
    }

    #[test]
    fn reports_both_values_on_mismatch() {
        let err = verify(0x1234, b"123456789").unwrap_err();
        assert_eq!(err.expected, 0x1234);
        assert_eq!(err.computed, CHECK);
        assert_eq!(
            err.to_string(),
            "checksum mismatch: expected 0x1234, computed 0x31C3"
        );
    }

    #[test]
    fn empty_record_checks_against_seed() {
        assert!(verify(0, &[]).is_ok());
        assert!(verify(1, &[]).is_err());
    }
}
