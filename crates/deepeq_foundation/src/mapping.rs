//! Key/value mappings built on [`Values`].
//!
//! A [`Mapping`] is an ordered sequence of `(key, value)` pairs. It is an
//! association list, not a hash map: equality and hashing come straight from
//! the underlying pair sequence, so iteration order is significant and
//! repeated keys are kept unless a strict constructor is used.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::config::MappingOptions;
use crate::error::{Error, Result};
use crate::values::Values;

/// Immutable, ordered sequence of key/value pairs with structural equality.
///
/// Two mappings are equal iff their pairs are equal position by position.
/// Mappings holding the same associations in a different order are **not**
/// equal:
///
/// ```
/// use deepeq_foundation::Mapping;
///
/// let a = Mapping::gather([("x", 1), ("y", 2)]);
/// let b = Mapping::gather([("x", 1), ("y", 2)]);
/// let c = Mapping::gather([("y", 2), ("x", 1)]);
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Clone)]
pub struct Mapping<K, V>(Values<(K, V)>)
where
    K: Clone,
    V: Clone;

impl<K: Clone, V: Clone> Mapping<K, V> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn empty() -> Self {
        Self(Values::empty())
    }

    /// Copies every pair of an existing association, in its iteration order.
    ///
    /// Accepts anything that yields owned pairs: a `Vec<(K, V)>`, a
    /// `BTreeMap<K, V>`, another `Mapping`, and so on. Repeated keys are kept.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self(Values::from_source(pairs))
    }

    /// Clones every pair of a borrowed association, in its iteration order.
    pub fn from_borrowed<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: 'a,
        V: 'a,
    {
        Self::from_pairs(pairs.into_iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// Like [`Mapping::from_pairs`], but an absent source yields the empty
    /// mapping.
    pub fn from_optional<I>(pairs: Option<I>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self(Values::from_optional(pairs))
    }

    /// Builds a mapping from a list of pairs.
    pub fn gather<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_pairs(pairs)
    }

    /// Wraps exactly one pair.
    #[must_use]
    pub fn single(key: K, value: V) -> Self {
        Self(Values::single((key, value)))
    }

    /// Builds one pair per element of `source`, in source order.
    ///
    /// `key_of` and `value_of` both see each element, so heterogeneous
    /// sources can be folded into a mapping without first materializing
    /// pairs. Repeated keys are kept; see [`Mapping::try_project`] for a
    /// strict variant.
    pub fn project<S, I, FK, FV>(source: I, mut key_of: FK, mut value_of: FV) -> Self
    where
        I: IntoIterator<Item = S>,
        FK: FnMut(&S) -> K,
        FV: FnMut(&S) -> V,
    {
        Self::from_pairs(
            source
                .into_iter()
                .map(|item| (key_of(&item), value_of(&item))),
        )
    }

    /// Like [`Mapping::project`], honoring `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateKey`](crate::ErrorKind::DuplicateKey) if
    /// `options` rejects duplicates and two source elements produce the same
    /// key.
    pub fn try_project<S, I, FK, FV>(
        source: I,
        mut key_of: FK,
        mut value_of: FV,
        options: &MappingOptions,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        FK: FnMut(&S) -> K,
        FV: FnMut(&S) -> V,
        K: Eq + Hash + fmt::Debug,
    {
        Self::collect_checked(
            source
                .into_iter()
                .map(|item| (key_of(&item), value_of(&item))),
            options,
        )
    }

    /// Like [`Mapping::from_pairs`], honoring `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateKey`](crate::ErrorKind::DuplicateKey) if
    /// `options` rejects duplicates and a key repeats.
    pub fn try_from_pairs<I>(pairs: I, options: &MappingOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Eq + Hash + fmt::Debug,
    {
        Self::collect_checked(pairs, options)
    }

    fn collect_checked<I>(pairs: I, options: &MappingOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Eq + Hash + fmt::Debug,
    {
        let mut seen: HashMap<K, usize> = HashMap::new();
        let mut collected = Vec::new();

        for (position, (key, value)) in pairs.into_iter().enumerate() {
            if let Some(&first) = seen.get(&key) {
                if options.rejects_duplicates() {
                    debug!(?key, first, duplicate = position, "rejecting duplicate mapping key");
                    let err = Error::duplicate_key(&key, first, position);
                    return Err(match &options.label {
                        Some(label) => err.with_context(label.clone()),
                        None => err,
                    });
                }
                trace!(?key, first, duplicate = position, "keeping duplicate mapping key");
            } else {
                seen.insert(key.clone(), position);
            }
            collected.push((key, value));
        }

        Ok(Self(Values::from(collected)))
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the pairs in stored order.
    pub fn iter(&self) -> im::vector::Iter<'_, (K, V)> {
        self.0.iter()
    }

    /// Returns an iterator over keys, in stored order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over values, in stored order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Returns the value of the first pair whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: PartialEq,
    {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns true if any pair has the key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.get(key).is_some()
    }

    /// Returns a new mapping with the same keys, in the same order, and `f`
    /// applied to each value.
    pub fn map_values<W, F>(&self, mut f: F) -> Mapping<K, W>
    where
        W: Clone,
        F: FnMut(&V) -> W,
    {
        Mapping(self.0.map_to(|(k, v)| (k.clone(), f(v))))
    }

    /// Returns the underlying pair sequence.
    #[must_use]
    pub fn as_pairs(&self) -> &Values<(K, V)> {
        &self.0
    }

    /// Consumes the mapping, returning the underlying pair sequence.
    #[must_use]
    pub fn into_pairs(self) -> Values<(K, V)> {
        self.0
    }

    /// Compares against a mapping that may be absent, treating `None` as
    /// empty.
    #[must_use]
    pub fn eq_optional(&self, other: Option<&Self>) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        self.0.eq_optional(other.map(|m| &m.0))
    }

    /// Deterministic, order-sensitive hash of the pairs.
    ///
    /// See [`Values::structural_hash`].
    #[must_use]
    pub fn structural_hash(&self) -> u64
    where
        K: Hash,
        V: Hash,
    {
        self.0.structural_hash()
    }
}

impl<K: Clone, V: Clone> Default for Mapping<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: Clone + fmt::Debug, V: Clone + fmt::Debug> fmt::Debug for Mapping<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Clone + PartialEq, V: Clone + PartialEq> PartialEq for Mapping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Clone + Eq, V: Clone + Eq> Eq for Mapping<K, V> {}

impl<K: Clone + Hash, V: Clone + Hash> Hash for Mapping<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<K: Clone, V: Clone> FromIterator<(K, V)> for Mapping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Clone, V: Clone> From<Vec<(K, V)>> for Mapping<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Clone, V: Clone, const N: usize> From<[(K, V); N]> for Mapping<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Clone, V: Clone> From<Values<(K, V)>> for Mapping<K, V> {
    fn from(pairs: Values<(K, V)>) -> Self {
        Self(pairs)
    }
}

impl<K: Clone, V: Clone> From<Mapping<K, V>> for Values<(K, V)> {
    fn from(mapping: Mapping<K, V>) -> Self {
        mapping.0
    }
}

impl<K: Clone, V: Clone> IntoIterator for Mapping<K, V> {
    type Item = (K, V);
    type IntoIter = im::vector::ConsumingIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K: Clone, V: Clone> IntoIterator for &'a Mapping<K, V> {
    type Item = &'a (K, V);
    type IntoIter = im::vector::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Mapping<K, V>
where
    K: Clone + serde::Serialize,
    V: Clone + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Mapping<K, V>
where
    K: Clone + serde::Deserialize<'de>,
    V: Clone + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        <Values<(K, V)> as serde::Deserialize>::deserialize(deserializer).map(Self)
    }
}
