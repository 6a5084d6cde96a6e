//! [`HpoTerm`]s are the nodes of the ontology graph.
//!
//! Every term is a child of at least one other term (except for the root
//! term `HP:0000001 | All`). The relationship is modeled bi-directionally,
//! so every non-leaf term also knows its children. On top of the direct
//! edges, the full ancestor and descendant closures of every term are
//! cached when the ontology is built, which makes containment checks and
//! common-ancestor queries cheap.
//!
//! Terms are associated with genes and diseases. Those associations are
//! inherited upwards: an annotation of a term is visible on all its
//! ancestors. The reverse is deliberately not true, see
//! [`Gene`](`crate::annotations::Gene`).
//!
//! Each term is identified by a unique [`HpoTermId`].

use crate::Ontology;

mod group;
mod hpoterm;
mod information_content;
pub(crate) mod internal;
mod termid;

pub use group::{Combined, HpoGroup, HpoTermIds};
pub use hpoterm::{HpoTerm, TermPath};
pub use information_content::{InformationContent, InformationContentKind};
pub use termid::HpoTermId;

/// A set of parent [`HpoTermId`]s
pub type HpoParents = HpoGroup;

/// A set of child [`HpoTermId`]s
pub type HpoChildren = HpoGroup;

/// Iterates [`HpoTerm`]s from a borrowed [`HpoGroup`]
pub struct Iter<'a> {
    ids: HpoTermIds<'a>,
    ontology: &'a Ontology,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(ids: HpoTermIds<'a>, ontology: &'a Ontology) -> Self {
        Iter { ids, ontology }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|id| {
            HpoTerm::try_new(self.ontology, id)
                .expect("linked HpoTermIds are always part of the ontology")
        })
    }
}

impl std::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTermIterator")
    }
}
