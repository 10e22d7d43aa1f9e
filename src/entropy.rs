use std::time::SystemTime;

#[cfg(feature = "rand")]
use rand::{rngs::OsRng, RngCore as _};

use crate::Error;

/// Trait for entropy sources.
///
/// An entropy source provides the current time and the secure random bytes
/// a [`Generator`](crate::Generator) needs. Implement it to plug in another
/// random number generator or a fixed source for tests.
///
/// # Example
///
/// ```
/// use std::time::{Duration, SystemTime};
///
/// use sleek_id::{EntropySource, Error, Generator, GeneratorConfig};
///
/// struct FixedSource;
///
/// impl EntropySource for FixedSource {
///     fn now(&self) -> SystemTime {
///         SystemTime::UNIX_EPOCH + Duration::from_secs(1_760_832_000)
///     }
///     fn fill(&self, dest: &mut [u8]) -> Result<(), Error> {
///         dest.fill(7);
///         Ok(())
///     }
/// }
///
/// let config = GeneratorConfig { checksum_token: 30, random_length: 10, ..GeneratorConfig::default() };
/// let generator = Generator::with_entropy_source(config, FixedSource)?;
///
/// // cspell:disable-next-line
/// assert_eq!(generator.generate("usr")?.as_str(), "usr_3Qb7i7777777777Kq");
/// # Ok::<(), Error>(())
/// ```
pub trait EntropySource {
    /// Returns the current time.
    fn now(&self) -> SystemTime;

    /// Fills `dest` with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSourceUnavailable`] if no secure random bytes can be obtained.
    fn fill(&self, dest: &mut [u8]) -> Result<(), Error>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn now(&self) -> SystemTime {
        (**self).now()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), Error> {
        (**self).fill(dest)
    }
}

/// Standard entropy source.
///
/// Uses the system clock and the random number generator of the operating system
/// (through the `rand` crate). So if the `rand` feature is disabled, this entropy
/// source is not available.
#[cfg(feature = "rand")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardEntropySource;

#[cfg(feature = "rand")]
impl EntropySource for StandardEntropySource {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn fill(&self, dest: &mut [u8]) -> Result<(), Error> {
        OsRng.try_fill_bytes(dest).map_err(|_error| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_error, "operating system random source failed");
            Error::RandomSourceUnavailable
        })
    }
}

/// No-Operation entropy source.
///
/// An entropy source which never provides random bytes, so every attempt to
/// generate an identifier fails with [`Error::RandomSourceUnavailable`].
/// Validation and inspection work as usual.
///
/// This entropy source is the default source if the `rand` feature is not enabled.
///
/// # Example
///
/// ```
/// use sleek_id::{Error, Generator, GeneratorConfig, NoEntropySource};
///
/// let generator = Generator::with_entropy_source(GeneratorConfig::default(), NoEntropySource)?;
///
/// assert_eq!(generator.generate("usr"), Err(Error::RandomSourceUnavailable));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEntropySource;

impl EntropySource for NoEntropySource {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn fill(&self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::RandomSourceUnavailable)
    }
}

/// The entropy source used by [`Generator::new`](crate::Generator::new).
#[cfg(feature = "rand")]
pub type DefaultEntropySource = StandardEntropySource;

/// The entropy source used by [`Generator::new`](crate::Generator::new).
#[cfg(not(feature = "rand"))]
pub type DefaultEntropySource = NoEntropySource;
