use std::fmt;

/// Errors that can occur when building a generator, generating identifiers or parsing them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Error {
    /// The configured timestamp length is not between 4 and 6.
    TimestampLengthOutOfRange,
    /// The configured checksum length is larger than 3.
    ChecksumLengthOutOfRange,
    /// The configured delimiter is not an ASCII byte.
    InvalidDelimiter,
    /// The requested random segment length is zero.
    InvalidRandomLength,
    /// The entropy source could not provide secure random bytes.
    RandomSourceUnavailable,
    /// The identifier is too short to hold a timestamp and a checksum.
    TooShort,
    /// The identifier does not start with the expected prefix and delimiter.
    PrefixMismatch,
    /// The checksum of the identifier does not match its content.
    ChecksumMismatch,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match *self {
            Self::TimestampLengthOutOfRange => "timestamp length must be between 4 and 6",
            Self::ChecksumLengthOutOfRange => "checksum length must be between 1 and 3",
            Self::InvalidDelimiter => "delimiter must be an ASCII character",
            Self::InvalidRandomLength => "random length must not be zero",
            Self::RandomSourceUnavailable => "secure random bytes are unavailable",
            Self::TooShort => "identifier is too short",
            Self::PrefixMismatch => "identifier has an unexpected prefix",
            Self::ChecksumMismatch => "identifier checksum does not match",
        };
        write!(f, "{message}")
    }
}
