//! Case-insensitive views over structs and sequences.
//!
//! [`wrap`] is the entry point. It leaves nulls and scalars alone and puts
//! containers behind a decorator that borrows them: [`CiStruct`] resolves field
//! names ignoring ASCII case, [`CiList`] hands out its elements decorated. Every
//! child is wrapped the moment it is retrieved and not before, so the cost of a
//! traversal follows the values touched, not the size of the tree.
//!
//! Stored data is never re-cased: names are enumerated exactly as stored, and
//! mutation through a decorator uses the name it is given.
//!
//! # Example
//!
//! ```
//! use ion_ci::{OwnStruct, OwnValue, wrap};
//!
//! let item: OwnStruct = [("X", 1)].into_iter().collect();
//! let mut row = OwnStruct::new();
//! row.add("Items", vec![OwnValue::from(item)]);
//! let row = OwnValue::from(row);
//!
//! let view = wrap(&row);
//! let x = view
//!     .get("items").unwrap().unwrap()
//!     .get(0).unwrap().unwrap()
//!     .get("x").unwrap().unwrap();
//! assert_eq!(x.as_int(), Some(1));
//! ```

mod ci_list;
mod ci_struct;
mod ci_value;
mod dispatch;
mod name_index;
mod trait_impl;

pub use ci_list::*;
pub use ci_struct::*;
pub use ci_value::*;
pub use dispatch::*;
pub use name_index::{DuplicatePolicy, fold_case};
pub use trait_impl::*;
