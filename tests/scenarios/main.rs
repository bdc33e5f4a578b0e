//! Scenario tests for whole records
//!
//! Tests records built from encapsulated primitives, Values, and Mapping:
//! rebuilt collections, projected mappings, unique identifiers, and strict
//! construction with a subscriber installed.

mod fixtures;
mod identifiers;
mod logging;
