use crate::Alphabet;

/// Default delimiter between prefix and the encoded part.
pub const DEFAULT_DELIMITER: u8 = b'_';

/// Default checksum token.
///
/// Every deployment should replace it with its own secret value, otherwise
/// anybody can forge identifiers which pass validation.
pub const DEFAULT_CHECKSUM_TOKEN: u64 = 0x5EED_1D00_C0FF_EE42;

/// Default checksum length in characters.
pub const DEFAULT_CHECKSUM_LENGTH: usize = 2;

/// Default length of the random segment in characters.
pub const DEFAULT_RANDOM_LENGTH: usize = 12;

/// Default timestamp length in characters.
pub const DEFAULT_TIMESTAMP_LENGTH: usize = 5;

/// Configuration of a [`Generator`](crate::Generator).
///
/// Zero values for `delimiter`, `checksum_length`, `random_length` and
/// `timestamp_length` mean "unset" and fall back to the defaults.
///
/// | Field              | Default                    | Allowed  |
/// |--------------------|----------------------------|----------|
/// | `delimiter`        | `b'_'`                     | ASCII    |
/// | `checksum_token`   | [`DEFAULT_CHECKSUM_TOKEN`] | any      |
/// | `checksum_length`  | 2                          | 1 to 3   |
/// | `random_length`    | 12                         | 1 or more|
/// | `timestamp_length` | 5                          | 4 to 6   |
/// | `alphabet`         | [`Alphabet::Alphabetical`] | any      |
///
/// A timestamp of 4 characters covers about 170 days, 5 characters about
/// 29 years and 6 characters about 1800 years after 2024-01-01.
///
/// With the `serde` feature, missing fields deserialize to their defaults:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use sleek_id::{Alphabet, GeneratorConfig};
///
/// let config: GeneratorConfig =
///     serde_json::from_str(r#"{ "checksum_token": 30, "alphabet": "ascii" }"#).unwrap();
///
/// assert_eq!(config.checksum_token, 30);
/// assert_eq!(config.alphabet, Alphabet::Ascii);
/// assert_eq!(config.timestamp_length, 5);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GeneratorConfig {
    pub delimiter: u8,
    pub checksum_token: u64,
    pub checksum_length: usize,
    pub random_length: usize,
    pub timestamp_length: usize,
    pub alphabet: Alphabet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            checksum_token: DEFAULT_CHECKSUM_TOKEN,
            checksum_length: DEFAULT_CHECKSUM_LENGTH,
            random_length: DEFAULT_RANDOM_LENGTH,
            timestamp_length: DEFAULT_TIMESTAMP_LENGTH,
            alphabet: Alphabet::default(),
        }
    }
}
