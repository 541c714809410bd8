// Immutable key + members container produced by grouping operators

use serde::Serialize;

/// A key paired with the ordered elements that share it.
///
/// Constructed once, during the buffering pass of `group_by` or `to_lookup`,
/// and immutable afterward. Elements keep their original source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grouping<K, E> {
    key: K,
    elements: Vec<E>,
}

impl<K, E> Grouping<K, E> {
    pub(crate) fn new(key: K, elements: Vec<E>) -> Self {
        Grouping { key, elements }
    }

    /// The group's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The group's members, in original source order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// The number of members in the group.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the group's members.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }
}

impl<K, E> IntoIterator for Grouping<K, E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, E> IntoIterator for &'a Grouping<K, E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
