#[inline]
pub(crate) fn load_u64_le(bytes: &[u8]) -> u64 {
    (bytes[0] as u64)
        | (bytes[1] as u64) << 8
        | (bytes[2] as u64) << 16
        | (bytes[3] as u64) << 24
        | (bytes[4] as u64) << 32
        | (bytes[5] as u64) << 40
        | (bytes[6] as u64) << 48
        | (bytes[7] as u64) << 56
}

/// Loads up to 7 trailing bytes as the low bytes of a little-endian word,
/// with `len` (mod 256) in the most significant byte.
#[inline]
pub(crate) fn load_tail_u64_le(tail: &[u8], len: usize) -> u64 {
    debug_assert!(tail.len() < 8);
    tail.iter()
        .enumerate()
        .fold((len as u64) << 56, |word, (i, &b)| word | (b as u64) << (8 * i))
}

#[inline]
pub(crate) fn store_u64_le(out: &mut [u8], value: u64) {
    out[..8].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_u64_le() {
        assert_eq!(load_u64_le(&[1, 0, 0, 0, 0, 0, 0, 0]), 1);
        assert_eq!(
            load_u64_le(&[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]),
            0x0102030405060708
        );
        assert_eq!(load_u64_le(b"somepseu"), 0x75657370656d6f73);
    }

    #[test]
    fn test_load_tail_u64_le() {
        assert_eq!(load_tail_u64_le(&[], 0), 0);
        assert_eq!(load_tail_u64_le(&[], 8), 0x0800000000000000);
        assert_eq!(load_tail_u64_le(&[0xaa], 1), 0x01000000000000aa);
        assert_eq!(
            load_tail_u64_le(&[1, 2, 3, 4, 5, 6, 7], 15),
            0x0f07060504030201
        );
        // only the low 8 bits of the length survive
        assert_eq!(load_tail_u64_le(&[0xff], 257), 0x01000000000000ff);
    }

    #[test]
    fn test_store_u64_le() {
        let mut out = [0u8; 16];
        store_u64_le(&mut out, 0x0102030405060708);
        store_u64_le(&mut out[8..], u64::MAX);
        assert_eq!(
            out,
            [8, 7, 6, 5, 4, 3, 2, 1, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }
}
