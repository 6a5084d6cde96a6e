//! Statistical enrichment of genes and diseases in sets of HPO terms
//!
//! Use these methods to check which genes or diseases are
//! over-represented in a phenotype profile, e.g. the clinical information
//! of a patient. The only implemented test is the hypergeometric
//! distribution, see [`hypergeom`].

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::annotations::{AnnotationId, DecipherDiseaseId, GeneId, OmimDiseaseId, OrphaDiseaseId};
use crate::HpoTerm;

pub mod hypergeom;

/// An enrichment result for a single gene or disease
///
/// Returned by the enrichment methods in [`hypergeom`].
#[derive(Debug)]
pub struct Enrichment<T> {
    id: T,
    pvalue: f64,
    count: u64,
    enrichment: f64,
}

impl<T: AnnotationId> Enrichment<T> {
    pub(crate) fn new(id: T, pvalue: f64, count: u64, enrichment: f64) -> Self {
        Self {
            id,
            pvalue,
            count,
            enrichment,
        }
    }

    /// The id of the enriched item, e.g. a [`GeneId`]
    pub fn id(&self) -> &T {
        &self.id
    }

    /// The probability to observe at least this count by chance
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// The number of terms in the query set that carry the item
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The fold enrichment over the background population
    pub fn enrichment(&self) -> f64 {
        self.enrichment
    }
}

/// Per-item occurrence counts across a collection of terms
///
/// Every term contributes each of its (propagated) annotations once, so
/// the count of an item is the number of terms it is linked to, directly
/// or through a descendant.
pub(crate) struct SampleSet<T> {
    size: u64,
    counts: HashMap<u32, u64>,
    kind: PhantomData<T>,
}

fn count_annotations<'a, T, F, I>(terms: T, mut annotation_ids: F) -> (u64, HashMap<u32, u64>)
where
    T: IntoIterator<Item = HpoTerm<'a>>,
    F: FnMut(&HpoTerm<'a>) -> I,
    I: IntoIterator<Item = u32>,
{
    let mut size = 0u64;
    let mut counts: HashMap<u32, u64> = HashMap::new();
    for term in terms {
        size += 1;
        for id in annotation_ids(&term) {
            counts.entry(id).and_modify(|count| *count += 1).or_insert(1);
        }
    }
    (size, counts)
}

impl SampleSet<GeneId> {
    /// Gene counts of all terms in the iterator
    pub fn gene<'a, T: IntoIterator<Item = HpoTerm<'a>>>(terms: T) -> Self {
        let (size, counts) = count_annotations(terms, |term| {
            term.gene_ids().iter().map(AnnotationId::as_u32).collect::<Vec<u32>>()
        });
        Self {
            size,
            counts,
            kind: PhantomData,
        }
    }
}

impl SampleSet<OmimDiseaseId> {
    /// OMIM disease counts of all terms in the iterator
    pub fn omim_disease<'a, T: IntoIterator<Item = HpoTerm<'a>>>(terms: T) -> Self {
        let (size, counts) = count_annotations(terms, |term| {
            term.omim_disease_ids()
                .iter()
                .map(AnnotationId::as_u32)
                .collect::<Vec<u32>>()
        });
        Self {
            size,
            counts,
            kind: PhantomData,
        }
    }
}

impl SampleSet<OrphaDiseaseId> {
    /// Orphanet disease counts of all terms in the iterator
    pub fn orpha_disease<'a, T: IntoIterator<Item = HpoTerm<'a>>>(terms: T) -> Self {
        let (size, counts) = count_annotations(terms, |term| {
            term.orpha_disease_ids()
                .iter()
                .map(AnnotationId::as_u32)
                .collect::<Vec<u32>>()
        });
        Self {
            size,
            counts,
            kind: PhantomData,
        }
    }
}

impl SampleSet<DecipherDiseaseId> {
    /// DECIPHER disease counts of all terms in the iterator
    pub fn decipher_disease<'a, T: IntoIterator<Item = HpoTerm<'a>>>(terms: T) -> Self {
        let (size, counts) = count_annotations(terms, |term| {
            term.decipher_disease_ids()
                .iter()
                .map(AnnotationId::as_u32)
                .collect::<Vec<u32>>()
        });
        Self {
            size,
            counts,
            kind: PhantomData,
        }
    }
}

impl<T: AnnotationId> SampleSet<T> {
    /// The number of terms the counts were taken from
    pub fn len(&self) -> u64 {
        self.size
    }

    /// The number of terms linked to the item, directly or through a
    /// descendant
    pub fn get(&self, key: &T) -> Option<&u64> {
        self.counts.get(&key.as_u32())
    }
}

impl<'a, T: AnnotationId> IntoIterator for &'a SampleSet<T> {
    type Item = (T, u64);
    type IntoIter = Counts<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        Counts {
            inner: self.counts.iter(),
            kind: self.kind,
        }
    }
}

/// Iterates the `(id, count)` pairs of a [`SampleSet`]
pub(crate) struct Counts<'a, K> {
    inner: std::collections::hash_map::Iter<'a, u32, u64>,
    kind: PhantomData<K>,
}

impl<K: AnnotationId> Iterator for Counts<'_, K> {
    type Item = (K, u64);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (K::from(*k), *v))
    }
}

/// Conversion used for count ratios; counts stay far below 2^32, so the
/// conversion through `u32` is exact.
fn f64_from_u64(n: u64) -> f64 {
    let exact: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large u64");
    exact.into()
}
