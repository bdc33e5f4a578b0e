//! Strict construction with a subscriber installed.

use crate::fixtures::{SomeEnum, negatives};
use deepeq_foundation::{ErrorKind, Mapping, MappingOptions};
use tracing_subscriber::filter::LevelFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}

#[test]
fn strict_projection_rejects_repeated_enum_key() {
    init_tracing();

    let source = [
        (SomeEnum::Value, vec![-1, -2]),
        (SomeEnum::AnotherValue, vec![-3]),
        (SomeEnum::Value, vec![-4]),
    ];
    let err = Mapping::try_project(
        &source,
        |(key, _)| *key,
        |(_, raws)| negatives(raws),
        &MappingOptions::strict().with_label("extra values by type"),
    )
    .unwrap_err();

    assert_eq!(
        err.kind,
        ErrorKind::DuplicateKey {
            key: "Value".to_string(),
            first: 0,
            duplicate: 2,
        }
    );
}

#[test]
fn permissive_projection_keeps_repeated_enum_key() {
    init_tracing();

    let source = [(SomeEnum::Value, vec![-1]), (SomeEnum::Value, vec![-2])];
    let m = Mapping::try_project(
        &source,
        |(key, _)| *key,
        |(_, raws)| negatives(raws),
        &MappingOptions::permissive(),
    )
    .unwrap();

    assert_eq!(m.len(), 2);
    assert_eq!(m.get(&SomeEnum::Value), Some(&negatives(&[-1])));
}
