//! Structured command-line flag values.
//!
//! A flag value is either inline JSON/YAML text or `@path` naming a
//! `.json`, `.yaml` or `.yml` file. Inline YAML must start with `---`,
//! inline JSON with `{` or `[`.
//!
//! # Example
//! ```
//! use complexflag::unmarshal;
//! let value = unmarshal(r#"{"name": "John", "age": 23}"#).unwrap();
//! assert_eq!(value.as_object().unwrap()["name"], "John");
//! ```

use serde::de::DeserializeOwned;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

pub mod classify;
pub mod decode;
pub mod error;
pub mod format;
pub mod fs;
mod yaml;

pub use classify::{classify, Classified, Source};
pub use decode::{decode_generic, decode_into, Decoded};
pub use error::{DecodeError, ErrorKind, FlagError};
pub use format::Format;
pub use fs::{EntryKind, FileSystem, LocalFs};

/// Resolves flag values against a filesystem.
#[derive(Debug, Clone, Default)]
pub struct Resolver<F = LocalFs> {
    fs: F,
}

impl<F: FileSystem> Resolver<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn classify(&self, raw: &str) -> Result<Classified, FlagError> {
        classify(&self.fs, raw)
    }

    /// Classifies `raw` and decodes it into a generic object or array.
    pub fn unmarshal(&self, raw: &str) -> Result<Decoded, FlagError> {
        let classified = self.classify(raw)?;
        decode_generic(&classified.content, classified.format)
    }

    /// Classifies `raw` and decodes it into `T`.
    pub fn unmarshal_into<T: DeserializeOwned>(&self, raw: &str) -> Result<T, FlagError> {
        let classified = self.classify(raw)?;
        decode_into(&classified.content, classified.format)
    }
}

/// [`Resolver::unmarshal`] on the local filesystem.
pub fn unmarshal(raw: &str) -> Result<Decoded, FlagError> {
    Resolver::new(LocalFs).unmarshal(raw)
}

/// [`Resolver::unmarshal_into`] on the local filesystem.
///
/// # Example
/// ```
/// let list: Vec<u32> = complexflag::unmarshal_into("---\n- 1\n- 2").unwrap();
/// assert_eq!(list, [1, 2]);
/// ```
pub fn unmarshal_into<T: DeserializeOwned>(raw: &str) -> Result<T, FlagError> {
    Resolver::new(LocalFs).unmarshal_into(raw)
}

/// Value parser for `clap`: `#[arg(long, value_parser = complexflag::parse_flag)]`.
pub fn parse_flag(raw: &str) -> Result<Decoded, String> {
    unmarshal(raw).map_err(|e| e.to_string())
}

/// Typed flag value, decoded through [`unmarshal_into`] by [`FromStr`].
///
/// # Example
/// ```
/// use complexflag::FlagValue;
/// let tags: FlagValue<Vec<String>> = r#"["a", "b"]"#.parse().unwrap();
/// assert_eq!(tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlagValue<T>(pub T);

impl<T> FlagValue<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for FlagValue<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromStr for FlagValue<T> {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        unmarshal_into(s).map(FlagValue)
    }
}

impl<T: fmt::Display> fmt::Display for FlagValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
