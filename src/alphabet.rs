// cspell:disable
const ALPHABETICAL: [u8; 62] = *b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ASCII: [u8; 62] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
// cspell:enable

const _: () = assert!(is_bijective(&ALPHABETICAL));
const _: () = assert!(is_bijective(&ASCII));

/// Number of symbols in every [`Alphabet`].
pub const BASE: u8 = 62;

/// The ordering of the 62 base-62 digits.
///
/// The ordering decides which symbol stands for which value, so identifiers
/// can only be decoded and validated with the same alphabet they were generated with.
///
/// Only [`Alphabet::Ascii`] orders its symbols like their byte values. Use it when
/// identifiers must sort chronologically as plain byte strings (e.g. in a database index).
///
/// # Example
///
/// ```
/// use sleek_id::Alphabet;
///
/// assert_eq!(Alphabet::Alphabetical.digit_at(10), b'a');
/// assert_eq!(Alphabet::Ascii.digit_at(10), b'A');
///
/// assert_eq!(Alphabet::Ascii.index_of(b'z'), Some(61));
/// assert_eq!(Alphabet::Ascii.index_of(b'-'), None);
/// ```
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum Alphabet {
    /// Digits, then lowercase letters, then uppercase letters.
    #[default]
    Alphabetical,
    /// Digits, then uppercase letters, then lowercase letters (raw byte order).
    Ascii,
}

impl Alphabet {
    /// Returns all 62 symbols in value order.
    #[must_use]
    pub const fn symbols(self) -> &'static [u8; 62] {
        match self {
            Self::Alphabetical => &ALPHABETICAL,
            Self::Ascii => &ASCII,
        }
    }

    /// Returns the symbol for `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not smaller than 62.
    #[must_use]
    pub const fn digit_at(self, value: u8) -> u8 {
        self.symbols()[value as usize]
    }

    /// Returns the value of `symbol`, or `None` if it is not part of the alphabet.
    #[must_use]
    pub fn index_of(self, symbol: u8) -> Option<u8> {
        self.symbols()
            .iter()
            .position(|&s| s == symbol)
            .and_then(|index| u8::try_from(index).ok())
    }

    /// Returns the symbol for zero, used for padding.
    #[must_use]
    pub const fn zero(self) -> u8 {
        self.digit_at(0)
    }
}

const fn is_bijective(symbols: &[u8; 62]) -> bool {
    let mut i = 0;
    while i < symbols.len() {
        if !symbols[i].is_ascii_alphanumeric() {
            return false;
        }
        let mut j = i + 1;
        while j < symbols.len() {
            if symbols[i] == symbols[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_value() {
        for alphabet in [Alphabet::Alphabetical, Alphabet::Ascii] {
            for value in 0..BASE {
                assert_eq!(alphabet.index_of(alphabet.digit_at(value)), Some(value));
            }
        }
    }

    #[test]
    fn test_orderings() {
        assert_eq!(Alphabet::Alphabetical.digit_at(35), b'z');
        assert_eq!(Alphabet::Alphabetical.digit_at(36), b'A');
        assert_eq!(Alphabet::Ascii.digit_at(35), b'Z');
        assert_eq!(Alphabet::Ascii.digit_at(36), b'a');

        assert!(Alphabet::Ascii.symbols().windows(2).all(|w| w[0] < w[1]));
        assert!(!Alphabet::Alphabetical.symbols().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_symbols() {
        for symbol in [b'_', b'-', b' ', 0, 0xFF] {
            assert_eq!(Alphabet::Alphabetical.index_of(symbol), None);
            assert_eq!(Alphabet::Ascii.index_of(symbol), None);
        }
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut symbols = ASCII;
        symbols[61] = b'0';
        assert!(!is_bijective(&symbols));
    }
}
