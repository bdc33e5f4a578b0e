//! Encapsulated primitives: strongly-typed wrappers over a raw scalar.
//!
//! An encapsulated primitive gives a distinct domain meaning to a raw value
//! (an `i32` that is "a positive integer", a UUID that is "an order id").
//! Construction goes through named factories only, and the raw value comes
//! back out through [`Encapsulated::raw`] or a `From` conversion. There is no
//! conversion in the other direction.
//!
//! Types are declared with [`encapsulated_primitive!`](crate::encapsulated_primitive)
//! and [`encapsulated_id!`](crate::encapsulated_id):
//!
//! ```
//! use deepeq_foundation::{encapsulated_id, encapsulated_primitive};
//!
//! encapsulated_primitive! {
//!     /// A strictly positive count.
//!     pub struct PositiveInteger(i32);
//! }
//!
//! encapsulated_id! {
//!     /// Identifies an order.
//!     pub struct OrderId;
//! }
//!
//! let n = PositiveInteger::from_raw(3);
//! assert_eq!(n.raw(), 3);
//! assert_eq!(i32::from(n), 3);
//! assert_ne!(OrderId::create_unique(), OrderId::create_unique());
//! ```

use std::fmt;
use std::hash::Hash;

use crate::values::Values;

/// Common interface of every encapsulated primitive.
///
/// Implemented by the declaration macros; implement it by hand only for
/// wrappers that need extra derives the macros do not provide.
pub trait Encapsulated: Copy + Eq + Hash + fmt::Debug {
    /// The wrapped scalar type.
    type Raw: Copy + Eq + Hash;

    /// Wraps a raw value. Always succeeds.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Returns the wrapped raw value.
    fn raw(self) -> Self::Raw;
}

impl<P: Encapsulated> Values<P> {
    /// Wraps each raw value, in order.
    pub fn from_raw_values<I>(raws: I) -> Self
    where
        I: IntoIterator<Item = P::Raw>,
    {
        Self::map(raws, P::from_raw)
    }

    /// Returns the raw values, in order.
    #[must_use]
    pub fn to_raw_values(&self) -> Values<P::Raw> {
        self.map_to(|p| p.raw())
    }
}

/// Declares one or more encapsulated primitives over a raw scalar type.
///
/// Each generated type is a `Copy` newtype with a private field, structural
/// `PartialEq`/`Eq`/`Hash`/`Ord` taken from the raw type, a `from_raw`
/// factory, a `raw` accessor, `From<Type> for Raw`, `Debug` as
/// `Type(raw)` and `Display` as the raw value.
///
/// The raw type must implement `Copy`, `Eq`, `Hash`, `Ord`, `Debug` and
/// `Display`. With the `serde` feature the type also serializes as its bare
/// raw value, so the raw type must implement `Serialize` and `Deserialize`.
#[macro_export]
macro_rules! encapsulated_primitive {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($raw:ty);
    )+) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name($raw);

        impl $name {
            /// Wraps a raw value.
            #[must_use]
            pub const fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            /// Returns the wrapped raw value.
            #[must_use]
            pub const fn raw(self) -> $raw {
                self.0
            }
        }

        impl $crate::Encapsulated for $name {
            type Raw = $raw;

            fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            fn raw(self) -> $raw {
                self.0
            }
        }

        impl ::core::convert::From<$name> for $raw {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, concat!(stringify!($name), "({:?})"), self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        $crate::__encapsulated_serde!($name, $raw);
    )+};
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __encapsulated_serde {
    ($name:ident, $raw:ty) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$raw as $crate::__private::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __encapsulated_serde {
    ($name:ident, $raw:ty) => {};
}

/// Declares one or more UUID-backed encapsulated identifiers.
///
/// Generates everything [`encapsulated_primitive!`](crate::encapsulated_primitive)
/// does with [`Uuid`](crate::Uuid) as the raw type, plus `create_unique()`,
/// which wraps a fresh random (v4) UUID.
#[macro_export]
macro_rules! encapsulated_id {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    )+) => {$(
        $crate::encapsulated_primitive! {
            $(#[$meta])*
            $vis struct $name($crate::Uuid);
        }

        impl $name {
            /// Wraps a freshly generated, globally unique identifier.
            #[must_use]
            pub fn create_unique() -> Self {
                Self($crate::Uuid::new_v4())
            }
        }
    )+};
}
