use std::ops::{Add, BitAnd, BitOr};

use crate::{HpoTerm, HpoTermId, Ontology};

/// A set of unique [`HpoTermId`]s, ordered by ascending id
///
/// The group is the building block for all term relationships: direct
/// parents and children, the cached ancestor and descendant closures and
/// the membership of an [`HpoSet`](`crate::HpoSet`) all use it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HpoGroup {
    ids: Vec<HpoTermId>,
}

impl HpoGroup {
    /// Constructs a new, empty `HpoGroup`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty `HpoGroup` with the given capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the group contains no ids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of ids in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds an [`HpoTermId`] to the group
    ///
    /// Returns `true` if the id was not yet present
    pub fn insert<I: Into<HpoTermId>>(&mut self, id: I) -> bool {
        let id = id.into();
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Appends an id without maintaining order or uniqueness
    ///
    /// Callers must guarantee that `id` is larger than every id already
    /// present, otherwise lookups on the group become meaningless.
    fn push_unchecked(&mut self, id: HpoTermId) {
        self.ids.push(id);
    }

    /// Returns `true` if the group contains the id
    #[must_use]
    pub fn contains(&self, id: &HpoTermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns the id at the given position, if present
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HpoTermId> {
        self.ids.get(index)
    }

    /// Returns an iterator of the contained [`HpoTermId`]s
    pub fn iter(&self) -> HpoTermIds<'_> {
        HpoTermIds::new(self.ids.iter())
    }
}

impl FromIterator<HpoTermId> for HpoGroup {
    fn from_iter<T: IntoIterator<Item = HpoTermId>>(iter: T) -> Self {
        let mut group = HpoGroup::new();
        for id in iter {
            group.insert(id);
        }
        group
    }
}

impl<'a> IntoIterator for &'a HpoGroup {
    type Item = HpoTermId;
    type IntoIter = HpoTermIds<'a>;

    fn into_iter(self) -> HpoTermIds<'a> {
        self.iter()
    }
}

/// An iterator of [`HpoTermId`]s
pub struct HpoTermIds<'a> {
    inner: std::slice::Iter<'a, HpoTermId>,
}

impl<'a> HpoTermIds<'a> {
    fn new(inner: std::slice::Iter<'a, HpoTermId>) -> Self {
        Self { inner }
    }
}

impl Iterator for HpoTermIds<'_> {
    type Item = HpoTermId;
    fn next(&mut self) -> Option<HpoTermId> {
        self.inner.next().copied()
    }
}

impl BitOr for &HpoGroup {
    type Output = HpoGroup;

    /// The union of both groups
    fn bitor(self, rhs: &HpoGroup) -> HpoGroup {
        let mut group = HpoGroup::with_capacity(self.len() + rhs.len());
        let mut lhs_iter = self.ids.iter().peekable();
        let mut rhs_iter = rhs.ids.iter().peekable();
        loop {
            match (lhs_iter.peek(), rhs_iter.peek()) {
                (Some(&&a), Some(&&b)) => {
                    if a < b {
                        group.push_unchecked(a);
                        lhs_iter.next();
                    } else if b < a {
                        group.push_unchecked(b);
                        rhs_iter.next();
                    } else {
                        group.push_unchecked(a);
                        lhs_iter.next();
                        rhs_iter.next();
                    }
                }
                (Some(&&a), None) => {
                    group.push_unchecked(a);
                    lhs_iter.next();
                }
                (None, Some(&&b)) => {
                    group.push_unchecked(b);
                    rhs_iter.next();
                }
                (None, None) => return group,
            }
        }
    }
}

impl BitAnd for &HpoGroup {
    type Output = HpoGroup;

    /// The intersection of both groups
    fn bitand(self, rhs: &HpoGroup) -> HpoGroup {
        let (small, large) = if self.len() < rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut group = HpoGroup::with_capacity(small.len());
        for id in &small.ids {
            if large.contains(id) {
                group.push_unchecked(*id);
            }
        }
        group
    }
}

impl Add<HpoTermId> for &HpoGroup {
    type Output = HpoGroup;

    /// A new group with `id` included
    fn add(self, id: HpoTermId) -> HpoGroup {
        let mut group = self.clone();
        group.insert(id);
        group
    }
}

/// Iterates [`HpoTerm`]s from an owned [`HpoGroup`]
///
/// Used where the group is computed on the fly, e.g. the common ancestors
/// of two terms, and cannot be borrowed from the ontology.
pub struct Combined<'a> {
    inner: HpoGroup,
    ontology: &'a Ontology,
    idx: usize,
}

impl<'a> Combined<'a> {
    pub(crate) fn new(inner: HpoGroup, ontology: &'a Ontology) -> Self {
        Self {
            inner,
            ontology,
            idx: 0,
        }
    }

    /// Returns the number of terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the underlying id group
    #[must_use]
    pub fn ids(&self) -> &HpoGroup {
        &self.inner
    }
}

impl<'a> Iterator for Combined<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.idx;
        self.idx += 1;
        match self.inner.get(index) {
            Some(term_id) => self.ontology.hpo(*term_id),
            None => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn group(ids: &[u32]) -> HpoGroup {
        ids.iter().map(|id| HpoTermId::from_u32(*id)).collect()
    }

    #[test]
    fn insert_keeps_order_and_uniqueness() {
        let mut g = HpoGroup::new();
        assert!(g.insert(3u32));
        assert!(g.insert(1u32));
        assert!(g.insert(2u32));
        assert!(!g.insert(2u32));

        let ids: Vec<HpoTermId> = g.iter().collect();
        assert_eq!(
            ids,
            vec![
                HpoTermId::from_u32(1),
                HpoTermId::from_u32(2),
                HpoTermId::from_u32(3)
            ]
        );
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn union() {
        let result = &group(&[1, 2, 3]) | &group(&[2, 4]);
        assert_eq!(result, group(&[1, 2, 3, 4]));

        let result = &group(&[1, 2, 3]) | &group(&[1, 2, 4, 5]);
        assert_eq!(result, group(&[1, 2, 3, 4, 5]));

        let result = &group(&[]) | &group(&[7]);
        assert_eq!(result, group(&[7]));
    }

    #[test]
    fn intersection() {
        let result = &group(&[1, 2, 3]) & &group(&[1, 2, 4, 5]);
        assert_eq!(result, group(&[1, 2]));

        let result = &group(&[1, 2, 3]) & &group(&[4, 5]);
        assert!(result.is_empty());
    }

    #[test]
    fn add_id() {
        let result = &group(&[2, 3]) + 1u32.into();
        assert_eq!(result, group(&[1, 2, 3]));

        let result = &group(&[2, 3]) + 3u32.into();
        assert_eq!(result, group(&[2, 3]));
    }

    #[test]
    fn iterate_twice() {
        let g = group(&[1, 2, 3]);
        let mut ids = Vec::new();
        for id in &g {
            ids.push(id);
        }
        for id in &g {
            ids.push(id);
        }
        assert_eq!(ids.len(), 6);
    }
}
