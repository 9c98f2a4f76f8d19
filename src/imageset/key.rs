//! Composite grouping keys.

use std::fmt;

use serde::Serialize;

/// An ordered tuple of metadata values that associates descriptors across
/// channels into one image set.
///
/// Component order mirrors the key schema of the matcher, so two keys with
/// the same values in a different order are different keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupingKey(Vec<String>);

impl GroupingKey {
    /// Returns the key components in schema order.
    pub fn components(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for GroupingKey {
    fn from(components: Vec<String>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[&str; N]> for GroupingKey {
    fn from(components: [&str; N]) -> Self {
        components.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for GroupingKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for GroupingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
