use std::{fmt, ops::RangeInclusive, time::SystemTime};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    alphabet::BASE,
    checksum,
    config::{DEFAULT_CHECKSUM_LENGTH, DEFAULT_DELIMITER, DEFAULT_RANDOM_LENGTH, DEFAULT_TIMESTAMP_LENGTH},
    timestamp, Alphabet, DefaultEntropySource, EntropySource, Error, GeneratorConfig, SleekId,
};

const TIMESTAMP_LENGTHS: RangeInclusive<usize> = 4..=6;
const CHECKSUM_LENGTHS: RangeInclusive<usize> = 1..=checksum::MAX_LENGTH;

/// Generates, inspects and validates identifiers.
///
/// A `Generator` is built once from a [`GeneratorConfig`] and never changes afterwards.
/// It holds no mutable state, so a single instance can be shared by reference
/// (or in an `Arc`) between any number of threads.
///
/// Identifiers can only be inspected and validated by a generator with the same
/// delimiter, checksum token, checksum length, timestamp length and alphabet.
///
/// # Example
///
/// ```
/// use sleek_id::{Generator, GeneratorConfig};
///
/// let generator = Generator::new(GeneratorConfig {
///     checksum_token: 0x0123_4567_89AB_CDEF,
///     ..GeneratorConfig::default()
/// })?;
///
/// let id = generator.generate("usr")?;
///
/// assert_eq!(id.len(), generator.id_len("usr"));
/// assert_eq!(generator.prefix(&id), "usr");
/// assert!(generator.timestamp(&id).is_some());
/// assert!(generator.validate(&id));
/// assert!(generator.validate_with_prefix("usr", &id));
/// assert!(!generator.validate_with_prefix("org", &id));
/// # Ok::<(), sleek_id::Error>(())
/// ```
pub struct Generator<S = DefaultEntropySource> {
    delimiter: u8,
    checksum_token: u64,
    checksum_length: usize,
    random_length: usize,
    timestamp_length: usize,
    alphabet: Alphabet,
    source: S,
}

impl Generator {
    /// Creates a generator using the [`DefaultEntropySource`].
    ///
    /// # Errors
    ///
    /// Fails if the configuration is out of bounds, see [`Generator::with_entropy_source`].
    pub fn new(config: GeneratorConfig) -> Result<Self, Error> {
        Self::with_entropy_source(config, DefaultEntropySource::default())
    }
}

impl<S: EntropySource> Generator<S> {
    /// Creates a generator using the given entropy source.
    ///
    /// # Errors
    ///
    /// - [`Error::TimestampLengthOutOfRange`] if the timestamp length is not between 4 and 6.
    /// - [`Error::ChecksumLengthOutOfRange`] if the checksum length is larger than 3.
    /// - [`Error::InvalidDelimiter`] if the delimiter is not an ASCII character.
    pub fn with_entropy_source(config: GeneratorConfig, source: S) -> Result<Self, Error> {
        let delimiter = match config.delimiter {
            0 => DEFAULT_DELIMITER,
            delimiter if delimiter.is_ascii() => delimiter,
            _ => return Err(Error::InvalidDelimiter),
        };

        let checksum_length = match config.checksum_length {
            0 => DEFAULT_CHECKSUM_LENGTH,
            n if CHECKSUM_LENGTHS.contains(&n) => n,
            _ => return Err(Error::ChecksumLengthOutOfRange),
        };

        let timestamp_length = match config.timestamp_length {
            0 => DEFAULT_TIMESTAMP_LENGTH,
            n if TIMESTAMP_LENGTHS.contains(&n) => n,
            _ => return Err(Error::TimestampLengthOutOfRange),
        };

        let random_length = match config.random_length {
            0 => DEFAULT_RANDOM_LENGTH,
            n => n,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            delimiter = %char::from(delimiter),
            checksum_length,
            random_length,
            timestamp_length,
            alphabet = ?config.alphabet,
            "sleek id generator created"
        );

        Ok(Self {
            delimiter,
            checksum_token: config.checksum_token,
            checksum_length,
            random_length,
            timestamp_length,
            alphabet: config.alphabet,
            source,
        })
    }

    /// Generates a new identifier with the configured random segment length.
    ///
    /// The prefix is not checked. A prefix containing the delimiter still validates,
    /// but [`Generator::prefix`] and [`Generator::timestamp`] will stop at its first delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSourceUnavailable`] if the entropy source fails.
    pub fn generate(&self, prefix: &str) -> Result<SleekId, Error> {
        self.generate_with_random_length(prefix, self.random_length)
    }

    /// Generates a new identifier with a random segment of `random_length` characters.
    ///
    /// Each random character is a secure random byte modulo 62. The slight bias
    /// this introduces is fine for uniqueness, but the segment must not be used as a secret.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRandomLength`] if `random_length` is zero.
    /// - [`Error::RandomSourceUnavailable`] if the entropy source fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_with_random_length(&self, prefix: &str, random_length: usize) -> Result<SleekId, Error> {
        if random_length == 0 {
            return Err(Error::InvalidRandomLength);
        }

        let timestamp_start = prefix.len() + 1;
        let random_start = timestamp_start + self.timestamp_length;
        let checksum_start = random_start + random_length;

        let mut id = vec![0; checksum_start + self.checksum_length];

        id[..prefix.len()].copy_from_slice(prefix.as_bytes());
        id[prefix.len()] = self.delimiter;

        timestamp::encode(self.source.now(), self.alphabet, &mut id[timestamp_start..random_start]);

        let random = &mut id[random_start..checksum_start];
        self.source.fill(random)?;
        for byte in random {
            *byte = self.alphabet.digit_at(*byte % BASE);
        }

        let (body, tag) = id.split_at_mut(checksum_start);
        checksum::encode(body, self.checksum_token, self.alphabet, tag);

        // Safety: The prefix is valid UTF-8 and all other bytes are ASCII.
        let id = unsafe { String::from_utf8_unchecked(id) };

        Ok(SleekId::from_string(id))
    }

    /// Returns the prefix of an identifier.
    ///
    /// That is everything before the first delimiter, or an empty string if there is no delimiter.
    ///
    /// # Example
    ///
    /// ```
    /// use sleek_id::{Generator, GeneratorConfig};
    ///
    /// let generator = Generator::new(GeneratorConfig::default())?;
    ///
    /// assert_eq!(generator.prefix("usr_3Qb7i7777777777Kq"), "usr"); // cspell:disable-line
    /// assert_eq!(generator.prefix("no-delimiter"), "");
    /// # Ok::<(), sleek_id::Error>(())
    /// ```
    #[must_use]
    pub fn prefix<'a>(&self, id: &'a str) -> &'a str {
        // The delimiter is ASCII, so its position is always a char boundary.
        self.delimiter_position(id.as_bytes()).map_or("", |end| &id[..end])
    }

    /// Returns the creation time of an identifier, truncated to seconds.
    ///
    /// Decoding does not check the identifier. Returns `None` if there is no delimiter,
    /// if the identifier ends before the timestamp does, or if the timestamp contains a
    /// character outside the alphabet. Use [`Generator::validate`] to check an identifier.
    #[must_use]
    pub fn timestamp(&self, id: impl AsRef<[u8]>) -> Option<SystemTime> {
        let id = id.as_ref();
        let start = self.delimiter_position(id)? + 1;
        let digits = id.get(start..start + self.timestamp_length)?;
        timestamp::decode(digits, self.alphabet)
    }

    /// Checks the checksum of an identifier.
    ///
    /// Never fails loudly: malformed input of any kind just returns `false`.
    #[must_use]
    pub fn validate(&self, id: impl AsRef<[u8]>) -> bool {
        self.check(id.as_ref()).is_ok()
    }

    /// Checks that an identifier has the given prefix and a valid checksum.
    #[must_use]
    pub fn validate_with_prefix(&self, prefix: &str, id: impl AsRef<[u8]>) -> bool {
        self.check_with_prefix(prefix, id.as_ref()).is_ok()
    }

    /// Parses and validates an identifier.
    ///
    /// # Errors
    ///
    /// - [`Error::TooShort`] if the string cannot hold a timestamp and a checksum.
    /// - [`Error::ChecksumMismatch`] if the checksum does not match.
    pub fn parse(&self, id: &str) -> Result<SleekId, Error> {
        self.check(id.as_bytes())?;
        Ok(SleekId::from_string(id.to_owned()))
    }

    /// Parses and validates an identifier with the given prefix.
    ///
    /// # Errors
    ///
    /// - [`Error::PrefixMismatch`] if the string does not start with prefix and delimiter.
    /// - Otherwise the same errors as [`Generator::parse`].
    pub fn parse_with_prefix(&self, prefix: &str, id: &str) -> Result<SleekId, Error> {
        self.check_with_prefix(prefix, id.as_bytes())?;
        Ok(SleekId::from_string(id.to_owned()))
    }

    /// Returns the length of identifiers generated by [`Generator::generate`] for `prefix`.
    #[must_use]
    pub fn id_len(&self, prefix: &str) -> usize {
        prefix.len() + 1 + self.timestamp_length + self.random_length + self.checksum_length
    }

    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    #[must_use]
    pub const fn checksum_length(&self) -> usize {
        self.checksum_length
    }

    #[must_use]
    pub const fn random_length(&self) -> usize {
        self.random_length
    }

    #[must_use]
    pub const fn timestamp_length(&self) -> usize {
        self.timestamp_length
    }

    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    fn delimiter_position(&self, id: &[u8]) -> Option<usize> {
        id.iter().position(|&byte| byte == self.delimiter)
    }

    fn check(&self, id: &[u8]) -> Result<(), Error> {
        if id.len() < self.checksum_length + self.timestamp_length {
            return Err(Error::TooShort);
        }

        let (body, tag) = id.split_at(id.len() - self.checksum_length);

        if checksum::verify(body, tag, self.checksum_token, self.alphabet) {
            Ok(())
        } else {
            Err(Error::ChecksumMismatch)
        }
    }

    fn check_with_prefix(&self, prefix: &str, id: &[u8]) -> Result<(), Error> {
        let has_prefix = id
            .strip_prefix(prefix.as_bytes())
            .and_then(|rest| rest.first())
            .is_some_and(|&byte| byte == self.delimiter);

        if has_prefix {
            self.check(id)
        } else {
            Err(Error::PrefixMismatch)
        }
    }
}

impl<S> fmt::Debug for Generator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("delimiter", &char::from(self.delimiter))
            .field("checksum_length", &self.checksum_length)
            .field("random_length", &self.random_length)
            .field("timestamp_length", &self.timestamp_length)
            .field("alphabet", &self.alphabet)
            .finish_non_exhaustive()
    }
}
