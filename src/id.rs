use std::{borrow::Borrow, fmt, ops::Deref};

/// An identifier produced by a [`Generator`](crate::Generator).
///
/// The layout is `prefix`, delimiter, timestamp, random segment and checksum:
///
/// ```text
/// usr_3Qb7i7777777777Kq
/// ^^^ prefix
///    ^ delimiter
///     ^^^^^ timestamp
///          ^^^^^^^^^^ random
///                    ^^ checksum
/// ```
///
/// A `SleekId` carries no metadata of its own. Prefix, timestamp and validity can
/// only be recovered with a generator configured like the one which created it.
///
/// Ordering is the plain byte order of the string. With [`Alphabet::Ascii`](crate::Alphabet::Ascii)
/// identifiers sharing a prefix therefore sort by their creation time (in seconds).
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SleekId(Box<str>);

impl SleekId {
    /// Wraps a string which is known to be an identifier.
    pub(crate) fn from_string(id: String) -> Self {
        Self(id.into_boxed_str())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the length of the identifier in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the identifier is empty, which never happens for generated identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SleekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SleekId").field(&self.as_str()).finish()
    }
}

impl fmt::Display for SleekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for SleekId {
    type Target = str;
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for SleekId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for SleekId {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<str> for SleekId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<SleekId> for String {
    fn from(id: SleekId) -> Self {
        id.0.into_string()
    }
}

impl From<SleekId> for Box<str> {
    fn from(id: SleekId) -> Self {
        id.0
    }
}

impl PartialEq<str> for SleekId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SleekId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
