//! Case-insensitive views over Ion-style struct and sequence values.
//!
//! The crate has an owned value model ([`OwnValue`], [`OwnList`],
//! [`OwnStruct`]) whose field lookup is exact, and a decorator layer that
//! borrows it and resolves field names ignoring ASCII case. [`wrap`] is the way
//! in; see [`case_insensitive`] for the details.
//!
//! ```
//! use ion_ci::{OwnStruct, OwnValue, wrap};
//!
//! let row: OwnStruct = [("UserName", "ada")].into_iter().collect();
//! let row = OwnValue::from(row);
//!
//! assert!(row.get("username").unwrap().is_none());
//! assert_eq!(
//!     wrap(&row).get("username").unwrap().unwrap().as_text(),
//!     Some("ada")
//! );
//! ```
//!
//! Both access strategies implement the [`ReadableValue`] family of traits, so
//! code written against them, such as the serde [`Deserializer`], takes either.

pub mod case_insensitive;
#[cfg(feature = "serde")]
pub mod de;
mod error;
mod index;
mod raw;
#[cfg(feature = "serde")]
pub mod ser;
mod tag;
mod util;
pub mod value;
mod value_trait;

pub use case_insensitive::*;
#[cfg(feature = "serde")]
pub use de::{Deserializer, from_readable, from_value, from_value_ci};
pub use error::*;
pub use index::*;
pub use raw::*;
#[cfg(feature = "serde")]
pub use ser::{Serializer, to_value};
pub use tag::*;
pub use value::*;
pub use value_trait::*;
