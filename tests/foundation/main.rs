//! Integration tests for the foundation layer
//!
//! Tests for the value containers: Values, Mapping, encapsulated primitives,
//! difference reporting, and errors.

mod diff;
mod errors;
