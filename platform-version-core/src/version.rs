//! The dyld availability service packs a `major.minor.subminor` triple into
//! one 32-bit word. This module owns that encoding.

/// Pack a version triple into the word understood by the dyld availability
/// service: 16 bits of major, 8 of minor, 8 of subminor.
///
/// Lossy by contract: fields wider than their slot silently truncate, which
/// mirrors the service's own encoding rule.
#[must_use]
pub const fn encode(major: u32, minor: u32, subminor: u32) -> u32 {
    ((major & 0xffff) << 16) | ((minor & 0xff) << 8) | (subminor & 0xff)
}

/// Split a packed version word back into its (truncated) triple.
#[must_use]
pub const fn decode(word: u32) -> (u32, u32, u32) {
    (word >> 16, (word >> 8) & 0xff, word & 0xff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_each_field() {
        assert_eq!(encode(10, 15, 7), 0x000a_0f07);
        assert_eq!(encode(11, 0, 0), 0x000b_0000);
        assert_eq!(encode(14, 4, 1), 0x000e_0401);
        assert_eq!(encode(u32::MAX, u32::MAX, u32::MAX), 0xffff_ffff);
    }

    #[test]
    fn oversized_fields_truncate_instead_of_failing() {
        assert_eq!(encode(0x0001_0002, 0x103, 0x104), encode(2, 3, 4));
        assert_eq!(encode(0, 256, 0), 0);
    }

    #[test]
    fn decode_inverts_encode_on_in_range_fields() {
        assert_eq!(decode(encode(10, 13, 7)), (10, 13, 7));
        assert_eq!(decode(encode(65536 + 12, 256 + 6, 256)), (12, 6, 0));
    }
}
