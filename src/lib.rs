//! deepeq - Value containers that compare by content
//!
//! This crate re-exports the foundation layer for convenient access.
//! For detailed documentation, see [`deepeq_foundation`].
//!
//! # Architecture
//!
//! ```text
//! Mapping<K, V>   — ordered key/value pairs       (mapping)
//!   └─ Values<T>  — immutable ordered sequence    (values)
//!        └─ T     — often an encapsulated primitive (encapsulated)
//! ```

pub use deepeq_foundation as foundation;

pub use deepeq_foundation::{
    Difference, DuplicateKeys, Encapsulated, Error, ErrorKind, Mapping, MappingOptions, Result,
    Uuid, Values, encapsulated_id, encapsulated_primitive, values,
};
