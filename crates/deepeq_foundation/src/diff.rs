//! Locating where two containers diverge.
//!
//! Equality only answers yes or no. When a test assertion fails it helps to
//! know *where* two sequences stop matching, so [`Values::first_difference`]
//! and [`Mapping::first_difference`] report the first divergence.

use std::fmt;

use crate::mapping::Mapping;
use crate::values::Values;

// =============================================================================
// Difference
// =============================================================================

/// The first point at which two sequences differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difference<'a, T> {
    /// One sequence is a strict prefix of the other.
    Length {
        /// Length of the left-hand sequence.
        left: usize,
        /// Length of the right-hand sequence.
        right: usize,
    },
    /// Elements at `index` are not equal.
    Element {
        /// Position of the first unequal pair.
        index: usize,
        /// Element from the left-hand sequence.
        left: &'a T,
        /// Element from the right-hand sequence.
        right: &'a T,
    },
}

impl<T> Difference<'_, T> {
    /// Returns the position where the sequences diverge.
    ///
    /// For a length difference this is the length of the shorter sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Length { left, right } => (*left).min(*right),
            Self::Element { index, .. } => *index,
        }
    }

    /// Returns true if this is a length difference.
    #[must_use]
    pub fn is_length(&self) -> bool {
        matches!(self, Self::Length { .. })
    }
}

impl<T: fmt::Debug> fmt::Display for Difference<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { left, right } => {
                write!(f, "lengths differ: {left} vs {right}")
            }
            Self::Element { index, left, right } => {
                write!(f, "element {index} differs: {left:?} vs {right:?}")
            }
        }
    }
}

// =============================================================================
// Container integration
// =============================================================================

impl<T: Clone + PartialEq> Values<T> {
    /// Returns the first difference between `self` and `other`, or `None` if
    /// they are equal.
    ///
    /// ```
    /// use deepeq_foundation::{Difference, Values};
    ///
    /// let a = Values::gather([1, 2, 3]);
    /// let b = Values::gather([1, 5, 3]);
    /// assert_eq!(
    ///     a.first_difference(&b),
    ///     Some(Difference::Element { index: 1, left: &2, right: &5 })
    /// );
    /// assert_eq!(a.first_difference(&a.clone()), None);
    /// ```
    #[must_use]
    pub fn first_difference<'a>(&'a self, other: &'a Self) -> Option<Difference<'a, T>> {
        let mismatch = self
            .iter()
            .zip(other.iter())
            .enumerate()
            .find(|(_, (left, right))| left != right);

        if let Some((index, (left, right))) = mismatch {
            return Some(Difference::Element { index, left, right });
        }

        (self.len() != other.len()).then(|| Difference::Length {
            left: self.len(),
            right: other.len(),
        })
    }
}

impl<K: Clone + PartialEq, V: Clone + PartialEq> Mapping<K, V> {
    /// Returns the first differing pair between `self` and `other`, or
    /// `None` if they are equal.
    #[must_use]
    pub fn first_difference<'a>(&'a self, other: &'a Self) -> Option<Difference<'a, (K, V)>> {
        self.as_pairs().first_difference(other.as_pairs())
    }
}
