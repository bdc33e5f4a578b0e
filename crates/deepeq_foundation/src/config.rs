//! Construction options for mappings.

/// How repeated keys are treated while building a [`Mapping`](crate::Mapping).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Keep every pair, including repeats, in source order.
    #[default]
    Allow,
    /// Fail on the first repeated key.
    Reject,
}

/// Options for the fallible [`Mapping`](crate::Mapping) constructors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingOptions {
    /// Duplicate key handling.
    pub duplicate_keys: DuplicateKeys,

    /// Label attached to errors, e.g. the name of the field being built.
    pub label: Option<String>,
}

impl MappingOptions {
    /// Keeps duplicate keys. Same as [`MappingOptions::default`].
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Rejects duplicate keys.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::Reject,
            ..Self::default()
        }
    }

    /// Builder method to set duplicate key handling.
    #[must_use]
    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }

    /// Builder method to set the error label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns true if repeated keys are rejected.
    #[must_use]
    pub fn rejects_duplicates(&self) -> bool {
        self.duplicate_keys == DuplicateKeys::Reject
    }
}
