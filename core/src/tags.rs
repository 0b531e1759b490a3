//! `TagList`: a set of [`Symbol`]s with standard set algebra.

use std::collections::BTreeSet;
use std::iter::FromIterator;

use crate::symbol::Symbol;

/// A set of [`Symbol`]s. Iteration order is the `Symbol`'s interned id
/// order (via `BTreeSet`), which is deterministic within a process but
/// carries no semantic meaning beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(BTreeSet<Symbol>);

impl TagList {
    /// An empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `tag` is a member.
    #[must_use]
    pub fn contains(&self, tag: Symbol) -> bool {
        self.0.contains(&tag)
    }

    /// Insert `tag`. Returns `true` if it was not already present.
    pub fn insert(&mut self, tag: Symbol) -> bool {
        self.0.insert(tag)
    }

    /// Remove `tag`. Returns `true` if it was present.
    pub fn remove(&mut self, tag: Symbol) -> bool {
        self.0.remove(&tag)
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the tags.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }

    /// `self ⊆ other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// `self` and `other` share no members.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// `self ∪ other`, as a new set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }

    /// `self \ other`, as a new set.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).copied().collect())
    }

    /// Mutate in place: `self ← self ∪ other`.
    pub fn union_with(&mut self, other: &Self) {
        self.0.extend(other.0.iter().copied());
    }

    /// Mutate in place: `self ← self \ other`.
    pub fn difference_with(&mut self, other: &Self) {
        for tag in &other.0 {
            self.0.remove(tag);
        }
    }
}

impl FromIterator<Symbol> for TagList {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = Symbol;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Symbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
