//! Encapsulated identifiers compare by the wrapped value.

use crate::fixtures::{RootObject, SomeEncapsulatedId, root_object};
use std::collections::HashSet;

#[test]
fn records_with_different_ids_are_not_equal() {
    let o1 = root_object(SomeEncapsulatedId::create_unique());
    let o2 = RootObject {
        some_encapsulated_id: SomeEncapsulatedId::create_unique(),
        ..o1.clone()
    };
    assert_ne!(o1, o2);
    assert_ne!(o1.some_encapsulated_id, o2.some_encapsulated_id);
}

#[test]
fn records_with_same_id_are_equal() {
    let id = SomeEncapsulatedId::create_unique();
    assert_eq!(root_object(id), root_object(id));
}

#[test]
fn id_rebuilt_from_raw_keeps_record_equal() {
    let o1 = root_object(SomeEncapsulatedId::create_unique());
    let o2 = RootObject {
        some_encapsulated_id: SomeEncapsulatedId::from_raw(o1.some_encapsulated_id.raw()),
        ..o1.clone()
    };
    assert_eq!(o1, o2);
}

#[test]
fn records_deduplicate_in_hash_set() {
    let id = SomeEncapsulatedId::create_unique();
    let mut set = HashSet::new();
    set.insert(root_object(id));
    set.insert(root_object(id));
    set.insert(root_object(SomeEncapsulatedId::create_unique()));
    assert_eq!(set.len(), 2);
}
