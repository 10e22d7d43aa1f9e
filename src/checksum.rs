use subtle::ConstantTimeEq as _;

use crate::{alphabet::BASE, Alphabet};

/// Longest supported checksum, in base-62 digits.
pub const MAX_LENGTH: usize = 3;

/// Two 32-bit rolling hashes, seeded with the high and low halves of the token.
fn hash(data: &[u8], token: u64) -> u32 {
    fn step(hash: u32, byte: u8) -> u32 {
        let hash = (hash << 5).wrapping_sub(hash).wrapping_add(u32::from(byte));
        hash ^ (hash >> 16)
    }

    let (high, low) = data.iter().fold(((token >> 32) as u32, token as u32), |(high, low), &byte| {
        (step(high, byte), step(low, byte))
    });

    high ^ low
}

/// Writes the keyed checksum of `data` as `buffer.len()` base-62 digits,
/// least significant digit first.
pub fn encode(data: &[u8], token: u64, alphabet: Alphabet, buffer: &mut [u8]) {
    let mut n = hash(data, token);

    for byte in buffer {
        *byte = alphabet.digit_at((n % u32::from(BASE)) as u8);
        n /= u32::from(BASE);
    }
}

/// Checks `tag` against the checksum of `data` in constant time.
pub fn verify(data: &[u8], tag: &[u8], token: u64, alphabet: Alphabet) -> bool {
    if tag.is_empty() || tag.len() > MAX_LENGTH {
        return false;
    }

    let mut buffer = [0; MAX_LENGTH];
    let expected = &mut buffer[..tag.len()];
    encode(data, token, alphabet, expected);

    expected.ct_eq(tag).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded<const N: usize>(data: &[u8], token: u64, alphabet: Alphabet) -> String {
        let mut buffer = [0; N];
        encode(data, token, alphabet, &mut buffer);
        String::from_utf8(buffer.to_vec()).unwrap()
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encoded::<2>(b"hello", 30, Alphabet::Alphabetical), "Qg");
        assert_eq!(encoded::<3>(b"hello", 30, Alphabet::Alphabetical), "QgE");
        assert_eq!(encoded::<2>(b"", 30, Alphabet::Alphabetical), "u0");
        assert_eq!(encoded::<3>(b"usr_", 0xDEAD_BEEF_00C0_FFEE, Alphabet::Ascii), "Yy1");
    }

    #[test]
    fn test_deterministic() {
        let first = encoded::<3>(b"usr_3Qb7i7777777777", 42, Alphabet::Ascii);
        for _ in 0..10 {
            assert_eq!(encoded::<3>(b"usr_3Qb7i7777777777", 42, Alphabet::Ascii), first);
        }
    }

    #[test]
    fn test_shorter_is_prefix_of_longer() {
        let short = encoded::<1>(b"abc", 7, Alphabet::Alphabetical);
        let long = encoded::<3>(b"abc", 7, Alphabet::Alphabetical);
        assert!(long.starts_with(&short));
    }

    #[test]
    fn test_verify() {
        assert!(verify(b"hello", b"Qg", 30, Alphabet::Alphabetical));
        assert!(verify(b"hello", b"Q", 30, Alphabet::Alphabetical));

        assert!(!verify(b"hello", b"Qh", 30, Alphabet::Alphabetical));
        assert!(!verify(b"hellp", b"Qg", 30, Alphabet::Alphabetical));
        assert!(!verify(b"hello", b"", 30, Alphabet::Alphabetical));
        assert!(!verify(b"hello", b"QgE0", 30, Alphabet::Alphabetical));
    }
}
