//! An [`HpoSet`] models a phenotype profile, e.g. the clinical
//! information of a patient or the symptoms of a disease.

use crate::annotations::{DecipherDiseases, Genes, OmimDiseases, OrphaDiseases};
use crate::similarity::{
    Builtins, GroupSimilarity, Similarity, SimilarityCombiner, StandardCombiner,
};
use crate::term::{HpoGroup, InformationContentKind, Iter};
use crate::{HpoError, HpoResult, HpoTerm, HpoTermId, Ontology, Query};

/// A set of unique, unordered HPO terms
///
/// Sets are compared to each other via [`HpoSet::similarity`], aggregated
/// via [`HpoSet::information_content`] and reduced to their most specific
/// members via [`HpoSet::child_nodes`].
///
/// # Examples
///
/// ```
/// use hpolib::{HpoSet, Ontology};
/// use hpolib::similarity::{Builtins, StandardCombiner};
/// use hpolib::term::InformationContentKind;
///
/// let ontology = Ontology::from_standard("tests/data").unwrap();
///
/// let patient_1 = HpoSet::from_queries(&ontology, ["HP:0002943", "HP:0008458"]).unwrap();
/// let patient_2 = HpoSet::from_queries(&ontology, ["HP:0002650", "HP:0009121"]).unwrap();
///
/// let similarity = patient_1.similarity(
///     &patient_2,
///     &Builtins::new("graphic", InformationContentKind::Omim).unwrap(),
///     &StandardCombiner::default(),
/// );
/// assert!(similarity > 0.0 && similarity < 1.0);
/// ```
#[must_use]
pub struct HpoSet<'a> {
    ontology: &'a Ontology,
    group: HpoGroup,
}

impl<'a> HpoSet<'a> {
    /// Constructs an `HpoSet` from a group of term ids
    pub fn new(ontology: &'a Ontology, group: HpoGroup) -> Self {
        Self { ontology, group }
    }

    /// Constructs an `HpoSet` from an iterable of queries
    ///
    /// Every query is resolved through
    /// [`Ontology::get_hpo_object`](`crate::Ontology::get_hpo_object`),
    /// so ids, id strings and term names can be mixed.
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if a query does not resolve to a term
    pub fn from_queries<I, Q>(ontology: &'a Ontology, queries: I) -> HpoResult<Self>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        let mut group = HpoGroup::new();
        for query in queries {
            group.insert(ontology.get_hpo_object(query)?.id());
        }
        Ok(Self::new(ontology, group))
    }

    /// Constructs a reduced `HpoSet` for robust comparisons
    ///
    /// This is the counterpart of a plain [`HpoSet::from_queries`] for
    /// noisy input data:
    ///
    /// - queries that do not resolve are skipped instead of failing
    /// - obsolete terms are replaced by their `replaced_by` term when
    ///   one is recorded, otherwise dropped
    /// - modifier terms are removed
    /// - the set is reduced to its [`HpoSet::child_nodes`]
    pub fn basic_from_queries<I, Q>(ontology: &'a Ontology, queries: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Query>,
    {
        let mut group = HpoGroup::new();
        for query in queries {
            if let Ok(term) = ontology.get_hpo_object(query) {
                group.insert(term.id());
            }
        }
        let mut set = Self::new(ontology, group);
        set.replace_obsolete();
        set.remove_obsolete();
        set.remove_modifier();
        set.child_nodes()
    }

    /// Constructs an `HpoSet` from its serialized form, see
    /// [`HpoSet::serialize`]
    ///
    /// The order of the ids is irrelevant.
    ///
    /// # Errors
    ///
    /// - [`HpoError::ParseIntError`] if a token is not an integer
    /// - [`HpoError::NotFound`] if an id is not part of the ontology
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::{HpoSet, Ontology};
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// let set = HpoSet::from_serialized(&ontology, "2943+2650").unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.serialize(), "2650+2943");
    /// ```
    pub fn from_serialized(ontology: &'a Ontology, serialized: &str) -> HpoResult<Self> {
        let mut group = HpoGroup::new();
        for token in serialized.split('+') {
            let id = HpoTermId::from_u32(token.parse::<u32>()?);
            if ontology.get(id).is_none() {
                return Err(HpoError::NotFound(id.to_string()));
            }
            group.insert(id);
        }
        Ok(Self::new(ontology, group))
    }

    /// Serializes the set as `+`-separated term ids, ascending
    #[must_use]
    pub fn serialize(&self) -> String {
        let ids: Vec<String> = self
            .group
            .iter()
            .map(|id| id.as_u32().to_string())
            .collect();
        ids.join("+")
    }

    /// The number of terms in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.group.len()
    }

    /// Returns `true` if the set contains no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    /// Returns `true` if the set contains the term id
    #[must_use]
    pub fn contains(&self, id: &HpoTermId) -> bool {
        self.group.contains(id)
    }

    /// The term at the given position, ascending by id
    #[must_use]
    pub fn get(&self, index: usize) -> Option<HpoTerm<'a>> {
        let id = self.group.get(index)?;
        HpoTerm::try_new(self.ontology, *id).ok()
    }

    /// The ids of the set members
    #[must_use]
    pub fn term_ids(&self) -> &HpoGroup {
        &self.group
    }

    /// A new set containing only the most specific terms
    ///
    /// Terms that are ancestors of another member are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::{HpoSet, Ontology};
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// // Scoliosis is an ancestor of Thoracic scoliosis
    /// let set = HpoSet::from_queries(&ontology, ["Scoliosis", "Thoracic scoliosis"]).unwrap();
    /// let children = set.child_nodes();
    ///
    /// assert_eq!(children.len(), 1);
    /// assert!(children.contains(&2943u32.into()));
    /// ```
    pub fn child_nodes(&self) -> HpoSet<'a> {
        let group = self
            .group
            .iter()
            .filter(|candidate| {
                !self.iter().any(|member| {
                    member.all_parent_ids().contains(candidate)
                })
            })
            .collect();
        HpoSet::new(self.ontology, group)
    }

    /// Removes all modifier terms in place
    ///
    /// Modifier terms are `Clinical modifier` and all its descendants.
    pub fn remove_modifier(&mut self) {
        let group: HpoGroup = self
            .iter()
            .filter(|term| !term.is_modifier())
            .map(|term| term.id())
            .collect();
        self.group = group;
    }

    /// A new set without modifier terms
    pub fn without_modifier(&self) -> HpoSet<'a> {
        let group = self
            .iter()
            .filter(|term| !term.is_modifier())
            .map(|term| term.id())
            .collect();
        HpoSet::new(self.ontology, group)
    }

    /// Removes all obsolete terms in place
    pub fn remove_obsolete(&mut self) {
        let group: HpoGroup = self
            .iter()
            .filter(|term| !term.is_obsolete())
            .map(|term| term.id())
            .collect();
        self.group = group;
    }

    /// A new set without obsolete terms
    pub fn without_obsolete(&self) -> HpoSet<'a> {
        let group = self
            .iter()
            .filter(|term| !term.is_obsolete())
            .map(|term| term.id())
            .collect();
        HpoSet::new(self.ontology, group)
    }

    /// Replaces obsolete terms by their recorded replacement in place
    ///
    /// Obsolete terms without a `replaced_by` entry stay in the set; use
    /// [`HpoSet::remove_obsolete`] to get rid of them.
    pub fn replace_obsolete(&mut self) {
        let group: HpoGroup = self
            .iter()
            .map(|term| term.replacement_id().unwrap_or_else(|| term.id()))
            .collect();
        self.group = group;
    }

    /// A new set with obsolete terms replaced by their recorded
    /// replacement
    pub fn with_replaced_obsolete(&self) -> HpoSet<'a> {
        let group = self
            .iter()
            .map(|term| term.replacement_id().unwrap_or_else(|| term.id()))
            .collect();
        HpoSet::new(self.ontology, group)
    }

    /// The union of all genes associated with the member terms
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::{HpoSet, Ontology};
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    /// let set = HpoSet::from_queries(&ontology, ["Scoliosis"]).unwrap();
    ///
    /// let fbn1 = ontology.gene_by_name("FBN1").unwrap();
    /// assert!(set.all_genes().contains(fbn1.id()));
    /// ```
    #[must_use]
    pub fn all_genes(&self) -> Genes {
        self.iter()
            .fold(Genes::default(), |acc, term| &acc | term.gene_ids())
    }

    /// The union of all OMIM diseases associated with the member terms
    #[must_use]
    pub fn omim_diseases(&self) -> OmimDiseases {
        self.iter()
            .fold(OmimDiseases::default(), |acc, term| {
                &acc | term.omim_disease_ids()
            })
    }

    /// The union of all Orphanet diseases associated with the member
    /// terms
    #[must_use]
    pub fn orpha_diseases(&self) -> OrphaDiseases {
        self.iter()
            .fold(OrphaDiseases::default(), |acc, term| {
                &acc | term.orpha_disease_ids()
            })
    }

    /// The union of all DECIPHER diseases associated with the member
    /// terms
    #[must_use]
    pub fn decipher_diseases(&self) -> DecipherDiseases {
        self.iter()
            .fold(DecipherDiseases::default(), |acc, term| {
                &acc | term.decipher_disease_ids()
            })
    }

    /// Aggregated information content statistics of the set
    ///
    /// # Errors
    ///
    /// [`HpoError::DomainError`] for an empty set
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::{HpoSet, Ontology};
    /// use hpolib::term::InformationContentKind;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    /// let set = HpoSet::from_queries(&ontology, ["Scoliosis", "Thoracic scoliosis"]).unwrap();
    ///
    /// let stats = set.information_content(InformationContentKind::Omim).unwrap();
    /// assert_eq!(stats.all().len(), 2);
    /// assert!(stats.max() >= stats.mean());
    /// ```
    pub fn information_content(
        &self,
        kind: InformationContentKind,
    ) -> HpoResult<SetInformationContent> {
        if self.is_empty() {
            return Err(HpoError::DomainError(
                "information content of an empty set".to_string(),
            ));
        }
        let all: Vec<f64> = self
            .iter()
            .map(|term| term.information_content().get_kind(kind))
            .collect();
        let total = all.iter().sum::<f64>();
        let max = all.iter().copied().fold(0.0, f64::max);
        let count: u32 = all
            .len()
            .try_into()
            .expect("sets are far smaller than u32::MAX");
        Ok(SetInformationContent {
            mean: total / f64::from(count),
            total,
            max,
            all,
        })
    }

    /// Statistics over the pairwise distances of all set members
    ///
    /// Distances are the path lengths via the closest common ancestor.
    /// Sets with fewer than two terms yield all-zero statistics. Term
    /// pairs without a common ancestor are skipped.
    #[must_use]
    pub fn variance(&self) -> Variance {
        let mut distances = Vec::new();
        for (term_a, term_b) in self.combinations_one_way() {
            if let Ok(path) = term_a.path_to_other(&term_b) {
                distances.push(path.len());
            }
        }
        if distances.is_empty() {
            return Variance::default();
        }
        let total: usize = distances.iter().sum();
        let count: u32 = distances
            .len()
            .try_into()
            .expect("sets are far smaller than u32::MAX");
        Variance {
            mean: f64::from(u32::try_from(total).expect("distance sum fits into u32"))
                / f64::from(count),
            min: *distances.iter().min().expect("distances are not empty"),
            max: *distances.iter().max().expect("distances are not empty"),
            distances,
        }
    }

    /// All ordered term pairs, including self-pairs
    ///
    /// A set of `n` terms yields `n * n` pairs.
    pub fn combinations(&self) -> Combinations<'a, '_> {
        Combinations {
            set: self,
            idx_a: 0,
            idx_b: 0,
        }
    }

    /// All unordered term pairs, excluding self-pairs
    ///
    /// A set of `n` terms yields `n * (n - 1) / 2` pairs.
    pub fn combinations_one_way(&self) -> CombinationsOneWay<'a, '_> {
        CombinationsOneWay {
            set: self,
            idx_a: 0,
            idx_b: 1,
        }
    }

    /// The similarity score to another set
    ///
    /// Builds the matrix of pairwise term similarities and reduces it
    /// with the combiner. Empty sets on either side yield `0.0`.
    #[must_use]
    pub fn similarity(
        &self,
        other: &HpoSet,
        similarity: &impl Similarity,
        combiner: &impl SimilarityCombiner,
    ) -> f64 {
        GroupSimilarity::new(combiner, similarity).calculate(self, other)
    }

    /// The similarity score to another set, with all parameters given by
    /// name
    ///
    /// `kind` selects the information content table (`gene`, `omim`,
    /// `orpha`, `decipher`), `method` the pairwise kernel (see
    /// [`Builtins::new`]) and `combine` the matrix reduction (see
    /// [`StandardCombiner::new`]).
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] for unknown names
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::{HpoSet, Ontology};
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    /// let set_1 = HpoSet::from_queries(&ontology, ["Thoracic scoliosis"]).unwrap();
    /// let set_2 = HpoSet::from_queries(&ontology, ["Scoliosis"]).unwrap();
    ///
    /// let score = set_1.similarity_by_name(&set_2, "omim", "graphic", "funSimAvg").unwrap();
    /// assert!(score > 0.8);
    ///
    /// assert!(set_1.similarity_by_name(&set_2, "omim", "no-such-method", "funSimAvg").is_err());
    /// ```
    pub fn similarity_by_name(
        &self,
        other: &HpoSet,
        kind: &str,
        method: &str,
        combine: &str,
    ) -> HpoResult<f64> {
        let kind = InformationContentKind::try_from(kind)?;
        let similarity = Builtins::new(method, kind)?;
        let combiner = StandardCombiner::new(combine, kind)?;
        Ok(self.similarity(other, &similarity, &combiner))
    }

    /// An iterator of the member terms, ascending by id
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.group.iter(), self.ontology)
    }
}

impl<'a> IntoIterator for &'a HpoSet<'a> {
    type Item = HpoTerm<'a>;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Aggregated information content of an [`HpoSet`], see
/// [`HpoSet::information_content`]
pub struct SetInformationContent {
    mean: f64,
    total: f64,
    max: f64,
    all: Vec<f64>,
}

impl SetInformationContent {
    /// The mean information content of the set members
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The sum of all information content values
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The largest information content value
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// All information content values, ascending by term id
    #[must_use]
    pub fn all(&self) -> &[f64] {
        &self.all
    }
}

/// Pairwise-distance statistics of an [`HpoSet`], see
/// [`HpoSet::variance`]
#[derive(Default, Debug)]
pub struct Variance {
    mean: f64,
    min: usize,
    max: usize,
    distances: Vec<usize>,
}

impl Variance {
    /// The mean distance between all term pairs
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The smallest pairwise distance
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// The largest pairwise distance
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// All pairwise distances
    #[must_use]
    pub fn distances(&self) -> &[usize] {
        &self.distances
    }
}

/// All ordered term pairs of a set, including self-pairs
///
/// Yielded by [`HpoSet::combinations`].
pub struct Combinations<'a, 'b> {
    set: &'b HpoSet<'a>,
    idx_a: usize,
    idx_b: usize,
}

impl<'a> Iterator for Combinations<'a, '_> {
    type Item = (HpoTerm<'a>, HpoTerm<'a>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx_b >= self.set.len() {
            self.idx_a += 1;
            self.idx_b = 0;
        }
        let term_a = self.set.get(self.idx_a)?;
        let term_b = self.set.get(self.idx_b)?;
        self.idx_b += 1;
        Some((term_a, term_b))
    }
}

/// All unordered term pairs of a set, excluding self-pairs
///
/// Yielded by [`HpoSet::combinations_one_way`].
pub struct CombinationsOneWay<'a, 'b> {
    set: &'b HpoSet<'a>,
    idx_a: usize,
    idx_b: usize,
}

impl<'a> Iterator for CombinationsOneWay<'a, '_> {
    type Item = (HpoTerm<'a>, HpoTerm<'a>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx_b >= self.set.len() {
            self.idx_a += 1;
            self.idx_b = self.idx_a + 1;
        }
        let term_a = self.set.get(self.idx_a)?;
        let term_b = self.set.get(self.idx_b)?;
        self.idx_b += 1;
        Some((term_a, term_b))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures;
    use crate::similarity::{Equal, GraphIc};

    fn set<'a>(ontology: &'a Ontology, ids: &[u32]) -> HpoSet<'a> {
        let mut group = HpoGroup::new();
        for id in ids {
            group.insert(*id);
        }
        HpoSet::new(ontology, group)
    }

    #[test]
    fn from_queries_fails_on_unknown() {
        let ontology = fixtures::ontology();
        assert!(HpoSet::from_queries(&ontology, ["HP:0002650", "HP:9999999"]).is_err());
        assert!(HpoSet::from_queries(&ontology, ["No such name"]).is_err());
    }

    #[test]
    fn deduplicates_members() {
        let ontology = fixtures::ontology();
        let set = HpoSet::from_queries(&ontology, ["HP:0002650", "Scoliosis"]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serialize_round_trip() {
        let ontology = fixtures::ontology();
        let original = set(&ontology, &[2943, 2650, 8458]);

        let serialized = original.serialize();
        assert_eq!(serialized, "2650+2943+8458");

        let restored = HpoSet::from_serialized(&ontology, &serialized).unwrap();
        assert_eq!(restored.term_ids(), original.term_ids());

        // order of the serialized form is irrelevant
        let restored = HpoSet::from_serialized(&ontology, "8458+2650+2943").unwrap();
        assert_eq!(restored.term_ids(), original.term_ids());
    }

    #[test]
    fn serialize_rejects_unknown_ids() {
        let ontology = fixtures::ontology();
        assert!(HpoSet::from_serialized(&ontology, "2650+999999").is_err());
        assert!(HpoSet::from_serialized(&ontology, "2650+foo").is_err());
    }

    #[test]
    fn child_nodes_keeps_most_specific() {
        let ontology = fixtures::ontology();
        let scoliosis_and_child = set(&ontology, &[2650, 2943]);

        let children = scoliosis_and_child.child_nodes();
        assert_eq!(children.len(), 1);
        assert!(children.contains(&2943u32.into()));

        // siblings both stay
        let siblings = set(&ontology, &[2943, 2751]);
        assert_eq!(siblings.child_nodes().len(), 2);
    }

    #[test]
    fn modifier_removal() {
        let ontology = fixtures::ontology();
        let mut with_modifier = set(&ontology, &[2650, 12824]);

        let cleaned = with_modifier.without_modifier();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(with_modifier.len(), 2);

        with_modifier.remove_modifier();
        assert_eq!(with_modifier.len(), 1);
        assert!(with_modifier.contains(&2650u32.into()));
    }

    #[test]
    fn obsolete_replacement() {
        let ontology = fixtures::ontology();
        let mut with_obsolete = set(&ontology, &[925, 40]);

        let replaced = with_obsolete.with_replaced_obsolete();
        assert!(replaced.contains(&2650u32.into()));
        assert!(!replaced.contains(&40u32.into()));
        assert_eq!(replaced.len(), 2);

        with_obsolete.replace_obsolete();
        assert!(with_obsolete.contains(&2650u32.into()));
        assert!(!with_obsolete.contains(&40u32.into()));
    }

    #[test]
    fn basic_set_reduction() {
        let ontology = fixtures::ontology();
        // obsolete term, modifier, unknown query, parent and child
        let queries = ["HP:0000040", "HP:0012824", "HP:9999999", "HP:0002650", "HP:0002943"];
        let set = HpoSet::basic_from_queries(&ontology, queries);

        // 40 -> 2650 (replaced), 2650 is an ancestor of 2943, modifier
        // and unknown dropped
        assert_eq!(set.len(), 1);
        assert!(set.contains(&2943u32.into()));
    }

    #[test]
    fn annotation_unions() {
        let ontology = fixtures::ontology();
        let vertebral = set(&ontology, &[925]);

        assert_eq!(vertebral.all_genes().len(), 3);
        assert_eq!(vertebral.omim_diseases().len(), 2);
        assert_eq!(vertebral.orpha_diseases().len(), 2);
        assert_eq!(vertebral.decipher_diseases().len(), 1);

        let empty = set(&ontology, &[]);
        assert!(empty.all_genes().is_empty());
        assert!(empty.omim_diseases().is_empty());
    }

    #[test]
    fn information_content_stats() {
        let ontology = fixtures::ontology();
        let both = set(&ontology, &[2650, 2943]);

        let stats = both
            .information_content(InformationContentKind::Omim)
            .unwrap();
        let ic_scoliosis = (3.0f64 / 2.0).ln();
        let ic_thoracic = (3.0f64).ln();

        assert_eq!(stats.all().len(), 2);
        assert!((stats.total() - (ic_scoliosis + ic_thoracic)).abs() < 1e-9);
        assert!((stats.max() - ic_thoracic).abs() < 1e-9);
        assert!((stats.mean() - (ic_scoliosis + ic_thoracic) / 2.0).abs() < 1e-9);

        let empty = set(&ontology, &[]);
        assert!(empty
            .information_content(InformationContentKind::Omim)
            .is_err());
    }

    #[test]
    fn variance_distances() {
        let ontology = fixtures::ontology();

        let siblings = set(&ontology, &[2943, 2751]);
        let variance = siblings.variance();
        assert!((variance.mean() - 2.0).abs() < 1e-9);
        assert_eq!(variance.min(), 2);
        assert_eq!(variance.max(), 2);
        assert_eq!(variance.distances(), &[2]);

        let three = set(&ontology, &[925, 2650, 2943]);
        let variance = three.variance();
        assert_eq!(variance.min(), 1);
        assert_eq!(variance.max(), 3);
        assert_eq!(variance.distances().len(), 3);
        assert!((variance.mean() - 2.0).abs() < 1e-9);

        let single = set(&ontology, &[2650]);
        let variance = single.variance();
        assert_eq!(variance.distances().len(), 0);
        assert!(variance.mean().abs() < f64::EPSILON);
    }

    #[test]
    fn combinations_include_self_pairs() {
        let ontology = fixtures::ontology();
        let pair = set(&ontology, &[2650, 2943]);

        let pairs: Vec<(u32, u32)> = pair
            .combinations()
            .map(|(a, b)| (a.id().as_u32(), b.id().as_u32()))
            .collect();
        assert_eq!(
            pairs,
            vec![(2650, 2650), (2650, 2943), (2943, 2650), (2943, 2943)]
        );
    }

    #[test]
    fn combinations_one_way_excludes_self_pairs() {
        let ontology = fixtures::ontology();
        let three = set(&ontology, &[925, 2650, 2943]);

        let pairs: Vec<(u32, u32)> = three
            .combinations_one_way()
            .map(|(a, b)| (a.id().as_u32(), b.id().as_u32()))
            .collect();
        assert_eq!(pairs, vec![(925, 2650), (925, 2943), (2650, 2943)]);
    }

    #[test]
    fn set_similarity_of_identical_sets_is_one() {
        let ontology = fixtures::ontology();
        let a = set(&ontology, &[2650, 2943, 8458]);
        let b = set(&ontology, &[2650, 2943, 8458]);

        let score = a.similarity(&b, &GraphIc::new(), &StandardCombiner::FunSimAvg);
        assert!((score - 1.0).abs() < 1e-9);

        let score = a.similarity(&b, &Equal::new(), &StandardCombiner::FunSimAvg);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn set_similarity_with_empty_set_is_zero() {
        let ontology = fixtures::ontology();
        let a = set(&ontology, &[2650, 2943]);
        let empty = set(&ontology, &[]);

        assert!(a
            .similarity(&empty, &GraphIc::new(), &StandardCombiner::FunSimAvg)
            .abs()
            < f64::EPSILON);
        assert!(empty
            .similarity(&a, &GraphIc::new(), &StandardCombiner::FunSimAvg)
            .abs()
            < f64::EPSILON);
    }

    #[test]
    fn set_similarity_known_value() {
        let ontology = fixtures::ontology();
        let a = set(&ontology, &[2943]);
        let b = set(&ontology, &[2650]);

        // single-term sets: the set score equals the pairwise score
        let score = a.similarity(&b, &GraphIc::new(), &StandardCombiner::FunSimAvg);
        assert!((score - 7.0 / 8.0).abs() < 1e-9);

        // BMWA weighs both maxima with their term's IC, the single
        // maximum is the same on both sides
        let score = a.similarity(
            &b,
            &GraphIc::new(),
            &StandardCombiner::Bmwa(InformationContentKind::Omim),
        );
        assert!((score - 7.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn set_similarity_by_name() {
        let ontology = fixtures::ontology();
        let a = set(&ontology, &[2943]);
        let b = set(&ontology, &[2650]);

        let score = a.similarity_by_name(&b, "omim", "graphic", "funSimAvg").unwrap();
        assert!((score - 7.0 / 8.0).abs() < 1e-9);

        assert!(a.similarity_by_name(&b, "omim", "foo", "funSimAvg").is_err());
        assert!(a.similarity_by_name(&b, "omim", "graphic", "foo").is_err());
        assert!(a.similarity_by_name(&b, "foo", "graphic", "funSimAvg").is_err());
    }
}
