//! Immutable value containers with structural equality and hashing.
//!
//! This crate provides:
//! - [`Values`] - An ordered, immutable sequence compared element by element
//! - [`Mapping`] - An ordered key/value association built on [`Values`]
//! - [`Encapsulated`] - Strongly-typed wrappers over raw scalars, declared with
//!   [`encapsulated_primitive!`] and [`encapsulated_id!`]
//! - [`Difference`] - The first point where two containers diverge
//! - [`Error`] - Errors from strict mapping construction
//!
//! Every type here compares and hashes by content. Two containers rebuilt
//! from different source instances holding the same values are equal, with
//! no per-type configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod diff;
pub mod encapsulated;
pub mod error;
pub mod mapping;
pub mod values;

pub use config::{DuplicateKeys, MappingOptions};
pub use diff::Difference;
pub use encapsulated::Encapsulated;
pub use error::{Error, ErrorKind, Result};
pub use mapping::Mapping;
pub use uuid::Uuid;
pub use values::Values;

// Paths used by the declaration macros from downstream crates.
#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use serde;
}
