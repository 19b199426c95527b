//! Open-tag bookkeeping.
//!
//! `OpenTagStack` records which pairable tags have had their open markup
//! inserted but not yet their close markup. It is append-only apart from
//! `remove`, which drops every occurrence of an index wherever it sits, so
//! it is not a strict LIFO.

use crate::types::TagIndex;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenTagStack {
    entries: Vec<TagIndex>,
}

impl OpenTagStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally. Duplicates are allowed.
    pub fn push(&mut self, index: TagIndex) {
        self.entries.push(index);
    }

    /// Remove every occurrence of `index`. Returns how many were removed.
    pub fn remove(&mut self, index: TagIndex) -> usize {
        let before = self.entries.len();
        self.entries.retain(|&open| open != index);
        before - self.entries.len()
    }

    pub fn contains(&self, index: TagIndex) -> bool {
        self.entries.contains(&index)
    }

    /// Most recently opened tag.
    pub fn last(&self) -> Option<TagIndex> {
        self.entries.last().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TagIndex> + '_ {
        self.entries.iter().copied()
    }

    pub fn as_slice(&self) -> &[TagIndex] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<TagIndex> for OpenTagStack {
    fn from_iter<I: IntoIterator<Item = TagIndex>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(indices: &[usize]) -> OpenTagStack {
        indices.iter().map(|&i| TagIndex(i)).collect()
    }

    #[test]
    fn test_remove_drops_every_occurrence() {
        let mut open = stack(&[1, 3, 1, 5]);
        assert_eq!(open.remove(TagIndex(1)), 2);
        assert_eq!(open, stack(&[3, 5]));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut open = stack(&[2, 4]);
        assert_eq!(open.remove(TagIndex(9)), 0);
        assert_eq!(open, stack(&[2, 4]));
    }

    #[test]
    fn test_push_allows_duplicates() {
        let mut open = OpenTagStack::new();
        open.push(TagIndex(0));
        open.push(TagIndex(0));
        assert_eq!(open.len(), 2);
        assert!(open.contains(TagIndex(0)));
        assert!(!open.contains(TagIndex(1)));
    }

    #[test]
    fn test_last_is_most_recent() {
        let open = stack(&[0, 4, 2]);
        assert_eq!(open.last(), Some(TagIndex(2)));
        assert_eq!(OpenTagStack::new().last(), None);
    }
}
