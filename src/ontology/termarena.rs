use std::collections::btree_map::{BTreeMap, Values, ValuesMut};

use crate::term::internal::HpoTermInternal;
use crate::HpoTermId;

/// Owns all term records, ordered by [`HpoTermId`]
///
/// The ordering guarantees that iteration, and with it search results,
/// are stable and ascending by term id.
#[derive(Default)]
pub(crate) struct Arena {
    terms: BTreeMap<HpoTermId, HpoTermInternal>,
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Inserts a term, returning `false` if the id was already taken
    ///
    /// An existing term is never overwritten.
    pub fn insert(&mut self, term: HpoTermInternal) -> bool {
        let id = *term.id();
        if self.terms.contains_key(&id) {
            return false;
        }
        self.terms.insert(id, term);
        true
    }

    pub fn get(&self, id: HpoTermId) -> Option<&HpoTermInternal> {
        self.terms.get(&id)
    }

    pub fn get_unchecked(&self, id: HpoTermId) -> &HpoTermInternal {
        self.terms
            .get(&id)
            .unwrap_or_else(|| panic!("the term {id} must be present in the arena"))
    }

    pub fn get_mut(&mut self, id: HpoTermId) -> Option<&mut HpoTermInternal> {
        self.terms.get_mut(&id)
    }

    pub fn get_unchecked_mut(&mut self, id: HpoTermId) -> &mut HpoTermInternal {
        self.terms
            .get_mut(&id)
            .unwrap_or_else(|| panic!("the term {id} must be present in the arena"))
    }

    pub fn values(&self) -> Values<'_, HpoTermId, HpoTermInternal> {
        self.terms.values()
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, HpoTermId, HpoTermInternal> {
        self.terms.values_mut()
    }

    pub fn keys(&self) -> Vec<HpoTermId> {
        self.terms.keys().copied().collect()
    }
}
