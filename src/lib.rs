//! # Sleek IDs
//!
//! This crate generates and validates compact identifiers with a readable prefix,
//! an embedded creation time, a random segment and a keyed checksum:
//!
//! ```text
//! <prefix>_<timestamp><random><checksum>
//! ```
//!
//! - Identifiers sharing a prefix sort by their creation time (in seconds) when
//!   [`Alphabet::Ascii`] is used.
//! - The checksum catches corrupted and casually guessed identifiers without any
//!   database round-trip. It is keyed with a secret token, but it is no MAC and
//!   does not stop a determined attacker.
//! - Uniqueness comes from the random segment only. There is no coordination
//!   between generators.
//!
//! ## Generating Identifiers
//!
//! Identifiers are generated by a [`Generator`], which is built once from a [`GeneratorConfig`]:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use sleek_id::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig {
//!     checksum_token: 0x0123_4567_89AB_CDEF, // keep this secret!
//!     ..GeneratorConfig::default()
//! })?;
//!
//! let id = generator.generate("usr")?;
//!
//! println!("Generated id: {id}");
//! # Ok(()) }
//! ```
//!
//! The length of the random segment can be chosen per call:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! # use sleek_id::{Generator, GeneratorConfig};
//! # let generator = Generator::new(GeneratorConfig::default())?;
//! let id = generator.generate_with_random_length("usr", 20)?;
//!
//! assert_eq!(id.len(), 3 + 1 + 5 + 20 + 2);
//! # Ok(()) }
//! ```
//!
//! ## Inspecting and Validating Identifiers
//!
//! The same generator (or one with an identical configuration) recovers the prefix
//! and the creation time, and checks the checksum:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! # use sleek_id::{Generator, GeneratorConfig};
//! # let generator = Generator::new(GeneratorConfig::default())?;
//! let id = generator.generate("usr")?;
//!
//! assert_eq!(generator.prefix(&id), "usr");
//! assert!(generator.timestamp(&id).is_some());
//!
//! assert!(generator.validate(&id));
//! assert!(generator.validate_with_prefix("usr", &id));
//!
//! assert!(!generator.validate("usr_garbage"));
//! # Ok(()) }
//! ```
//!
//! Validation never fails loudly. For the reason of a failure, use [`Generator::parse`].
//!
//! ## Feature Flags
//!
//! - **`rand`**: Uses the `rand` crate for secure random bytes from the operating system, enabled by default.
//! - **`serde`**: Serialization of [`SleekId`] and [`GeneratorConfig`] via `Serde`, optional.
//! - **`tracing`**: Emits `tracing` events and spans, optional.
//!

mod alphabet;
mod checksum;
mod config;
mod entropy;
mod error;
mod generator;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod timestamp;

pub use alphabet::Alphabet;
pub use config::{
    GeneratorConfig, DEFAULT_CHECKSUM_LENGTH, DEFAULT_CHECKSUM_TOKEN, DEFAULT_DELIMITER, DEFAULT_RANDOM_LENGTH,
    DEFAULT_TIMESTAMP_LENGTH,
};
#[cfg(feature = "rand")]
pub use entropy::StandardEntropySource;
pub use entropy::{DefaultEntropySource, EntropySource, NoEntropySource};
pub use error::Error;
pub use generator::Generator;
pub use id::SleekId;

/// Reference instant of all timestamps, in seconds since the Unix epoch (2024-01-01T00:00:00Z).
pub const EPOCH: u64 = 1_704_067_200;
