use std::time::{Duration, SystemTime};

use crate::{alphabet::BASE, Alphabet, EPOCH};

/// Writes the seconds elapsed since [`EPOCH`] as `buffer.len()` base-62 digits,
/// most significant digit first and padded with the zero symbol.
///
/// Instants before [`EPOCH`] encode as all zero symbols. Values needing more
/// digits than the buffer holds keep only the least significant ones.
pub fn encode(instant: SystemTime, alphabet: Alphabet, buffer: &mut [u8]) {
    let mut n = instant
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |since_unix| since_unix.as_secs().saturating_sub(EPOCH));

    for byte in buffer.iter_mut().rev() {
        *byte = alphabet.digit_at((n % u64::from(BASE)) as u8);
        n /= u64::from(BASE);
    }
}

/// Reads base-62 digits written by [`encode`] back into an instant.
///
/// Returns `None` if a byte is not part of `alphabet`.
pub fn decode(digits: &[u8], alphabet: Alphabet) -> Option<SystemTime> {
    let mut total: u64 = 0;

    for &symbol in digits {
        let value = alphabet.index_of(symbol)?;
        total = total.checked_mul(u64::from(BASE))?.checked_add(u64::from(value))?;
    }

    SystemTime::UNIX_EPOCH.checked_add(Duration::from_secs(EPOCH.checked_add(total)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(seconds)
    }

    fn encoded<const N: usize>(instant: SystemTime, alphabet: Alphabet) -> String {
        let mut buffer = [0; N];
        encode(instant, alphabet, &mut buffer);
        String::from_utf8(buffer.to_vec()).unwrap()
    }

    #[test]
    fn test_padding_and_carry() {
        assert_eq!(encoded::<6>(at(EPOCH + 1), Alphabet::Ascii), "000001");
        assert_eq!(encoded::<6>(at(EPOCH + 60), Alphabet::Ascii), "00000y");
        assert_eq!(encoded::<6>(at(EPOCH + 61), Alphabet::Ascii), "00000z");
        assert_eq!(encoded::<6>(at(EPOCH + 62), Alphabet::Ascii), "000010");
    }

    #[test]
    fn test_known_instant() {
        // 2025-10-19T00:00:00Z
        let instant = at(1_760_832_000);

        assert_eq!(encoded::<5>(instant, Alphabet::Alphabetical), "3Qb7i");
        assert_eq!(encoded::<6>(instant, Alphabet::Ascii), "03qB7I"); // cspell:disable-line
    }

    #[test]
    fn test_overflow_keeps_low_digits() {
        assert_eq!(encoded::<4>(at(1_760_832_000), Alphabet::Alphabetical), "Qb7i");
        assert_eq!(encoded::<4>(at(EPOCH + 62u64.pow(4)), Alphabet::Ascii), "0000");
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(encoded::<5>(at(EPOCH), Alphabet::Ascii), "00000");
        assert_eq!(encoded::<5>(at(EPOCH - 1), Alphabet::Ascii), "00000");
        assert_eq!(encoded::<5>(SystemTime::UNIX_EPOCH, Alphabet::Ascii), "00000");
        assert_eq!(
            encoded::<5>(SystemTime::UNIX_EPOCH - Duration::from_secs(1), Alphabet::Ascii),
            "00000"
        );
    }

    #[test]
    fn test_round_trip() {
        for seconds in [0, 1, 61, 62, 3_843, 3_844, 916_132_831] {
            let instant = at(EPOCH + seconds);
            for alphabet in [Alphabet::Alphabetical, Alphabet::Ascii] {
                let mut buffer = [0; 5];
                encode(instant, alphabet, &mut buffer);
                assert_eq!(decode(&buffer, alphabet), Some(instant));
            }
        }
    }

    #[test]
    fn test_sort_order() {
        let mut previous = encoded::<5>(at(EPOCH), Alphabet::Ascii);
        for seconds in (1..2_000_000).step_by(997) {
            let current = encoded::<5>(at(EPOCH + seconds), Alphabet::Ascii);
            assert!(previous < current, "{previous} >= {current}");
            previous = current;
        }
    }

    #[test]
    fn test_decode_invalid_symbol() {
        assert_eq!(decode(b"00_01", Alphabet::Ascii), None);
        assert_eq!(decode(b"0000-", Alphabet::Alphabetical), None);
    }
}
