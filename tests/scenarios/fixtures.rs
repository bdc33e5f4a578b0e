//! Record shapes shared by the scenarios.

use deepeq_foundation::{Mapping, Values, encapsulated_id, encapsulated_primitive};

encapsulated_primitive! {
    /// An integer meant to be positive.
    pub struct PositiveInteger(i32);

    /// An integer meant to be negative.
    pub struct NegativeInteger(i32);
}

encapsulated_id! {
    /// Identifies a root record.
    pub struct SomeEncapsulatedId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SomeEnum {
    Value,
    AnotherValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SomeObjectContainingPositiveIntegerProperties {
    pub positive_integer: PositiveInteger,
    pub negative_integer: NegativeInteger,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RootObject {
    pub some_encapsulated_id: SomeEncapsulatedId,
    pub values: Values<PositiveInteger>,
    pub extra_values_by_type: Mapping<SomeEnum, Values<NegativeInteger>>,
    pub complex_object: SomeObjectContainingPositiveIntegerProperties,
}

pub fn negatives(raws: &[i32]) -> Values<NegativeInteger> {
    Values::map(raws.iter().copied(), NegativeInteger::from_raw)
}

/// Builds the reference record with the given identifier.
pub fn root_object(id: SomeEncapsulatedId) -> RootObject {
    RootObject {
        some_encapsulated_id: id,
        values: Values::gather([PositiveInteger::from_raw(1), PositiveInteger::from_raw(2)]),
        extra_values_by_type: Mapping::gather([
            (SomeEnum::Value, negatives(&[-1, -2])),
            (SomeEnum::AnotherValue, negatives(&[-3, -4])),
        ]),
        complex_object: SomeObjectContainingPositiveIntegerProperties {
            positive_integer: PositiveInteger::from_raw(3),
            negative_integer: NegativeInteger::from_raw(-5),
        },
    }
}
