//! Ordered value sequences with structural equality.
//!
//! [`Values`] is a thin wrapper around `im`'s persistent vector. Elements are
//! copied in eagerly when the sequence is built, so a `Values` never observes
//! later changes to the collection it was built from. After construction it is
//! read-only.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// Seed for [`Values::structural_hash`].
const HASH_SEED: u64 = 17;
/// Multiplier for [`Values::structural_hash`].
const HASH_FACTOR: u64 = 31;

/// Immutable, order-sensitive sequence with structural equality and hashing.
///
/// Two sequences are equal iff they have the same length and equal elements
/// at every position, no matter which source collections they were built
/// from. Cloning is O(1); clones share the same backing storage.
///
/// ```
/// use deepeq_foundation::Values;
///
/// let a = Values::gather([1, 2]);
/// let b: Values<i32> = vec![1, 2].into();
/// assert_eq!(a, b);
/// assert_ne!(a, Values::gather([2, 1]));
/// ```
#[derive(Clone)]
pub struct Values<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> Values<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self(im::Vector::new())
    }

    /// Copies every element of `source`, in order.
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self(source.into_iter().collect())
    }

    /// Like [`Values::from_source`], but an absent source yields the empty
    /// sequence.
    pub fn from_optional<I>(source: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        source.map_or_else(Self::empty, Self::from_source)
    }

    /// Builds a sequence from a list of items.
    ///
    /// Equivalent to [`Values::from_source`]; reads better at call sites that
    /// spell out the elements, e.g. `Values::gather([a, b, c])`.
    pub fn gather<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_source(items)
    }

    /// Wraps exactly one element.
    #[must_use]
    pub fn single(item: T) -> Self {
        Self(im::Vector::unit(item))
    }

    /// Applies `f` to each element of `source`, in order, collecting the
    /// results into a new sequence.
    pub fn map<S, I, F>(source: I, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        F: FnMut(S) -> T,
    {
        Self(source.into_iter().map(f).collect())
    }

    /// Like [`Values::map`], but an absent source yields the empty sequence.
    pub fn map_optional<S, I, F>(source: Option<I>, f: F) -> Self
    where
        I: IntoIterator<Item = S>,
        F: FnMut(S) -> T,
    {
        match source {
            Some(source) => Self::map(source, f),
            None => Self::empty(),
        }
    }

    /// Returns a new sequence with `f` applied to each element of this one.
    pub fn map_to<U, F>(&self, f: F) -> Values<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        Values(self.0.iter().map(f).collect())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    /// Returns an iterator over the elements in stored order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns true if any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.0.iter().any(|item| item == value)
    }

    /// Compares against a sequence that may be absent.
    ///
    /// An absent sequence is treated as empty, so this is true only if both
    /// sides hold the same elements (or `self` is empty and `other` is
    /// `None`).
    #[must_use]
    pub fn eq_optional(&self, other: Option<&Self>) -> bool
    where
        T: PartialEq,
    {
        match other {
            Some(other) => self == other,
            None => self.is_empty(),
        }
    }

    /// Returns a deterministic, position-sensitive hash of the elements.
    ///
    /// Computed as `hash = hash * 31 + element_hash` starting from 17, with
    /// each element hashed by a fixed-key hasher. Equal sequences produce
    /// the same value in every process built with the same toolchain;
    /// `DefaultHasher` does not promise stability across Rust releases.
    #[must_use]
    pub fn structural_hash(&self) -> u64
    where
        T: Hash,
    {
        self.0.iter().fold(HASH_SEED, |acc, item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            acc.wrapping_mul(HASH_FACTOR)
                .wrapping_add(hasher.finish())
        })
    }
}

impl<T: Clone> Default for Values<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Values<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Values<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T: Clone + PartialEq> PartialEq for Values<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for Values<T> {}

impl<T: Clone + Hash> Hash for Values<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for Values<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_source(iter)
    }
}

impl<T: Clone> From<Vec<T>> for Values<T> {
    fn from(source: Vec<T>) -> Self {
        Self::from_source(source)
    }
}

impl<T: Clone> From<&[T]> for Values<T> {
    fn from(source: &[T]) -> Self {
        Self::from_source(source.iter().cloned())
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Values<T> {
    fn from(source: [T; N]) -> Self {
        Self::from_source(source)
    }
}

impl<T: Clone> IntoIterator for Values<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Values<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Values<T>
where
    T: Clone + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Values<T>
where
    T: Clone + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

/// Builds a [`Values`] from a comma-separated list of elements.
///
/// ```
/// use deepeq_foundation::{Values, values};
///
/// assert_eq!(values![1, 2, 3], Values::gather([1, 2, 3]));
///
/// let none: Values<u8> = values![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::Values::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Values::gather([$($item),+])
    };
}
