//! Error types for value access and serde conversion.
//!
//! This module contains the [`Error`] type which represents every failure the
//! crate can report. Missing fields are not errors: lookups by name return
//! `None`.
//!
//! # Example
//!
//! ```
//! use ion_ci::{Error, OwnList, OwnValue, Result, wrap};
//!
//! fn third(list: &OwnValue) -> Result<()> {
//!     let view = wrap(list);
//!     match view.as_list().map(|list| list.get(2)) {
//!         Some(Ok(_)) => Ok(()),
//!         Some(Err(Error::IndexOutOfRange { index, len })) => {
//!             println!("index {index} is past the end ({len} elements)");
//!             Err(Error::IndexOutOfRange { index, len })
//!         }
//!         Some(Err(e)) => Err(e),
//!         None => Ok(()),
//!     }
//! }
//!
//! let list = OwnValue::from(OwnList::from(vec![OwnValue::from(1)]));
//! assert!(third(&list).is_err());
//! ```

use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{de, ser};

use crate::Tag;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when accessing,
/// mutating or converting values.
///
/// # Variants
///
/// - [`IndexOutOfRange`](Error::IndexOutOfRange) - Positional access past the end of a sequence
/// - [`TypeMismatch`](Error::TypeMismatch) - A value was not of the kind a caller asked for
/// - [`KeyMustBeString`](Error::KeyMustBeString) - A serialized map used a non-string key
/// - [`UnknownVariant`](Error::UnknownVariant) - An enum variant name did not resolve
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Message(String),

    /// A position was outside `[0, len)`.
    ///
    /// Sequence access never turns a bad position into `None`, so an index bug
    /// is not mistaken for missing data.
    IndexOutOfRange { index: usize, len: usize },

    /// The value held a different kind than the one requested.
    ///
    /// Returned by the serde deserializer, e.g. when a Rust struct meets a list
    /// value.
    TypeMismatch { expected: &'static str, found: Tag },

    /// Struct field names must be text.
    ///
    /// Returned when serializing a map whose keys are not strings.
    KeyMustBeString,

    UnknownVariant(String),
}

#[cfg(feature = "serde")]
impl ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    fn unknown_variant(variant: &str, _expected: &'static [&'static str]) -> Self {
        Error::UnknownVariant(variant.to_owned())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::IndexOutOfRange { index, len } => formatter.write_str(&format!(
                "index out of range: the len is {len} but the index is {index}"
            )),
            Error::TypeMismatch { expected, found } => {
                formatter.write_str(&format!("type mismatch: expected {expected}, got {found}"))
            }
            Error::KeyMustBeString => formatter.write_str("map key must be a string"),
            Error::UnknownVariant(name) => {
                formatter.write_str(&format!("unknown enum variant: {name}"))
            }
        }
    }
}

impl std::error::Error for Error {}
