//! Schema-driven CSV encoding for record collections.
//!
//! This library turns a homogeneous slice of record values into RFC 4180
//! CSV: a header row derived from the record type's field declarations,
//! followed by one data row per element. Record types describe their own
//! shape through the [`Record`] trait (usually via the [`record!`] macro),
//! and the [`Encoder`] stringifies each field by its semantic kind while
//! the csv crate handles quoting, escaping, and buffering.
//!
//! # Example
//!
//! ```
//! use csvenc::Encoder;
//!
//! struct Person {
//!     name: String,
//!     id: i64,
//! }
//!
//! csvenc::record!(Person {
//!     name as "name": text,
//!     id as "id": int,
//! });
//!
//! let people = vec![
//!     Person { name: "Harry Sheldon".to_string(), id: 1 },
//!     Person { name: "Arkady".to_string(), id: 2 },
//! ];
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode(&people)?;
//! let out = String::from_utf8(encoder.into_inner()?).unwrap();
//! assert_eq!(out, "name,id\nHarry Sheldon,1\nArkady,2\n");
//! # Ok::<(), csvenc::EncodeError>(())
//! ```

pub mod encoder;
pub mod error;
pub mod schema;

mod macros;

// Re-export the public surface at the crate root.
pub use encoder::Encoder;
pub use error::EncodeError;
pub use schema::{Field, FieldValue, Record};
