//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use deepeq_foundation::{Error, ErrorKind, Mapping, MappingOptions};

#[test]
fn error_duplicate_key_display() {
    let err = Error::duplicate_key("north", 1, 4);
    assert!(matches!(err.kind, ErrorKind::DuplicateKey { .. }));
    let msg = err.to_string();
    assert!(msg.contains("\"north\""));
    assert!(msg.contains("position 4"));
    assert!(msg.contains("first seen at 1"));
}

#[test]
fn error_context_from_options_label() {
    let options = MappingOptions::strict().with_label("extra values by type");
    let err = Mapping::try_from_pairs([('a', 1), ('a', 2)], &options).unwrap_err();

    assert_eq!(err.context.as_deref(), Some("extra values by type"));
    assert!(err.to_string().ends_with("while building extra values by type"));
}

#[test]
fn error_without_label_has_no_context() {
    let err = Mapping::try_from_pairs([('a', 1), ('a', 2)], &MappingOptions::strict()).unwrap_err();
    assert!(err.context.is_none());
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::duplicate_key(0, 0, 1));
}

#[test]
fn error_kinds_compare() {
    let a = Error::duplicate_key(1, 0, 1);
    let b = Error::duplicate_key(1, 0, 1);
    assert_eq!(a, b);
    assert_ne!(a, b.clone().with_context("elsewhere"));
}
