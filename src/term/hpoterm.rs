use crate::annotations::{
    DecipherDiseaseIterator, DecipherDiseases, GeneIterator, Genes, OmimDiseaseIterator,
    OmimDiseases, OrphaDiseaseIterator, OrphaDiseases,
};
use crate::similarity::Similarity;
use crate::term::internal::HpoTermInternal;
use crate::term::{Combined, HpoGroup, InformationContent, Iter};
use crate::{HpoError, HpoResult, HpoTermId, Ontology, MODIFIER_ROOT_ID};

/// A single term of the ontology
///
/// `HpoTerm` is a cheap, copyable view into the ontology. It provides
/// access to the term metadata, graph traversals, path queries and
/// similarity calculations.
///
/// Get terms from the [`Ontology`], e.g. via [`Ontology::hpo`] or
/// [`Ontology::get_hpo_object`].
#[derive(Debug, Clone, Copy)]
pub struct HpoTerm<'a> {
    term: &'a HpoTermInternal,
    ontology: &'a Ontology,
}

impl<'a> HpoTerm<'a> {
    /// Constructs an `HpoTerm` for the given id
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the id does not match an existing term
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::{HpoTerm, Ontology};
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// assert!(HpoTerm::try_new(&ontology, 118u32).is_ok());
    /// assert!(HpoTerm::try_new(&ontology, 666_666u32).is_err());
    /// ```
    pub fn try_new<I: Into<HpoTermId>>(ontology: &'a Ontology, term: I) -> HpoResult<HpoTerm<'a>> {
        let id = term.into();
        let term = ontology
            .get(id)
            .ok_or_else(|| HpoError::NotFound(id.to_string()))?;
        Ok(HpoTerm::new(ontology, term))
    }

    pub(crate) fn new(ontology: &'a Ontology, term: &'a HpoTermInternal) -> HpoTerm<'a> {
        HpoTerm { term, ontology }
    }

    /// The [`HpoTermId`] of the term, e.g. `HP:0002650`
    #[must_use]
    pub fn id(&self) -> HpoTermId {
        *self.term.id()
    }

    /// The display name, e.g. `Scoliosis`
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.term.name()
    }

    /// The long definition of the term
    ///
    /// Empty if the source data does not define one.
    #[must_use]
    pub fn definition(&self) -> &'a str {
        self.term.definition()
    }

    /// The comment of the term, empty if not present
    #[must_use]
    pub fn comment(&self) -> &'a str {
        self.term.comment()
    }

    /// All synonym names of the term
    #[must_use]
    pub fn synonyms(&self) -> &'a [String] {
        self.term.synonyms()
    }

    /// Alternative (merged) term ids
    #[must_use]
    pub fn alt_ids(&self) -> &'a [HpoTermId] {
        self.term.alt_ids()
    }

    /// The ids of the direct parent terms
    #[must_use]
    pub fn parent_ids(&self) -> &'a HpoGroup {
        self.term.parents()
    }

    /// An iterator of the direct parent terms
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    /// let term = ontology.hpo(2650u32).unwrap();
    ///
    /// assert_eq!(term.parents().count(), 1);
    /// ```
    pub fn parents(&self) -> Iter<'a> {
        Iter::new(self.term.parents().iter(), self.ontology)
    }

    /// The ids of all direct and indirect ancestors, excluding the term
    /// itself
    #[must_use]
    pub fn all_parent_ids(&self) -> &'a HpoGroup {
        self.term.all_parents()
    }

    /// An iterator of all ancestors
    pub fn all_parents(&self) -> Iter<'a> {
        Iter::new(self.term.all_parents().iter(), self.ontology)
    }

    /// The ids of the direct child terms
    #[must_use]
    pub fn children_ids(&self) -> &'a HpoGroup {
        self.term.children()
    }

    /// An iterator of the direct child terms
    pub fn children(&self) -> Iter<'a> {
        Iter::new(self.term.children().iter(), self.ontology)
    }

    /// The ids of all direct and indirect descendants, excluding the term
    /// itself
    #[must_use]
    pub fn all_children_ids(&self) -> &'a HpoGroup {
        self.term.all_children()
    }

    /// An iterator of all descendants
    pub fn all_children(&self) -> Iter<'a> {
        Iter::new(self.term.all_children().iter(), self.ontology)
    }

    /// The ids of the **strict** common ancestors of `self` and `other`
    ///
    /// Neither `self` nor `other` are part of the result, even when one
    /// is an ancestor of the other. Use
    /// [`HpoTerm::all_common_ancestor_ids`] for the inclusive variant,
    /// which is what similarity kernels operate on.
    #[must_use]
    pub fn common_ancestor_ids(&self, other: &HpoTerm) -> HpoGroup {
        self.all_parent_ids() & other.all_parent_ids()
    }

    /// The ids of the **shared** ancestors of `self` and `other`
    ///
    /// Both terms count as their own ancestor here: if `self == other`
    /// the term itself is included, if one term is an ancestor of the
    /// other it is part of the result.
    #[must_use]
    pub fn all_common_ancestor_ids(&self, other: &HpoTerm) -> HpoGroup {
        &(self.all_parent_ids() + self.id()) & &(other.all_parent_ids() + other.id())
    }

    /// The ids of ancestors of `self` **or** `other` (strict union)
    #[must_use]
    pub fn union_ancestor_ids(&self, other: &HpoTerm) -> HpoGroup {
        self.all_parent_ids() | other.all_parent_ids()
    }

    /// The ids of ancestors of `self` **or** `other`, including both
    /// terms themselves
    #[must_use]
    pub fn all_union_ancestor_ids(&self, other: &HpoTerm) -> HpoGroup {
        &(self.all_parent_ids() + self.id()) | &(other.all_parent_ids() + other.id())
    }

    /// An iterator of the strict common ancestors
    ///
    /// See [`HpoTerm::common_ancestor_ids`].
    #[must_use]
    pub fn common_ancestors(&self, other: &HpoTerm) -> Combined<'a> {
        Combined::new(self.common_ancestor_ids(other), self.ontology)
    }

    /// An iterator of the shared ancestors, including the terms
    /// themselves
    ///
    /// See [`HpoTerm::all_common_ancestor_ids`].
    #[must_use]
    pub fn all_common_ancestors(&self, other: &HpoTerm) -> Combined<'a> {
        Combined::new(self.all_common_ancestor_ids(other), self.ontology)
    }

    /// An iterator of the ancestors of either term, including both terms
    #[must_use]
    pub fn all_union_ancestors(&self, other: &HpoTerm) -> Combined<'a> {
        Combined::new(self.all_union_ancestor_ids(other), self.ontology)
    }

    /// An iterator of all associated [`Gene`](`crate::annotations::Gene`)s
    ///
    /// Genes linked to any descendant are included, see
    /// [`Ontology::link_gene_term`].
    pub fn genes(&self) -> GeneIterator<'a> {
        GeneIterator::new(self.term.genes(), self.ontology)
    }

    /// The ids of all associated genes, including inherited ones
    #[must_use]
    pub fn gene_ids(&self) -> &'a Genes {
        self.term.genes()
    }

    /// An iterator of all associated OMIM diseases
    pub fn omim_diseases(&self) -> OmimDiseaseIterator<'a> {
        OmimDiseaseIterator::new(self.term.omim_diseases(), self.ontology)
    }

    /// The ids of all associated OMIM diseases, including inherited ones
    #[must_use]
    pub fn omim_disease_ids(&self) -> &'a OmimDiseases {
        self.term.omim_diseases()
    }

    /// An iterator of all associated Orphanet diseases
    pub fn orpha_diseases(&self) -> OrphaDiseaseIterator<'a> {
        OrphaDiseaseIterator::new(self.term.orpha_diseases(), self.ontology)
    }

    /// The ids of all associated Orphanet diseases, including inherited
    /// ones
    #[must_use]
    pub fn orpha_disease_ids(&self) -> &'a OrphaDiseases {
        self.term.orpha_diseases()
    }

    /// An iterator of all associated DECIPHER diseases
    pub fn decipher_diseases(&self) -> DecipherDiseaseIterator<'a> {
        DecipherDiseaseIterator::new(self.term.decipher_diseases(), self.ontology)
    }

    /// The ids of all associated DECIPHER diseases, including inherited
    /// ones
    #[must_use]
    pub fn decipher_disease_ids(&self) -> &'a DecipherDiseases {
        self.term.decipher_diseases()
    }

    /// The ids of OMIM diseases that are explicitly **not** associated
    /// with the term
    ///
    /// Negative associations are direct links only, they are not
    /// inherited and do not contribute to information content or
    /// similarity scores.
    #[must_use]
    pub fn omim_excluded_disease_ids(&self) -> &'a OmimDiseases {
        self.term.omim_excluded_diseases()
    }

    /// The ids of Orphanet diseases that are explicitly **not**
    /// associated with the term
    #[must_use]
    pub fn orpha_excluded_disease_ids(&self) -> &'a OrphaDiseases {
        self.term.orpha_excluded_diseases()
    }

    /// The ids of DECIPHER diseases that are explicitly **not**
    /// associated with the term
    #[must_use]
    pub fn decipher_excluded_disease_ids(&self) -> &'a DecipherDiseases {
        self.term.decipher_excluded_diseases()
    }

    /// The [`InformationContent`] of the term
    #[must_use]
    pub fn information_content(&self) -> &'a InformationContent {
        self.term.information_content()
    }

    /// Calculates the similarity of `self` and `other` with the provided
    /// algorithm
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    /// use hpolib::similarity::{Builtins, Similarity};
    /// use hpolib::term::InformationContentKind;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    /// let term1 = ontology.hpo(2650u32).unwrap();
    /// let term2 = ontology.hpo(2943u32).unwrap();
    ///
    /// let sim = Builtins::new("graphic", InformationContentKind::Omim).unwrap();
    /// assert!(term1.similarity_score(&term2, &sim) > 0.8);
    /// ```
    #[must_use]
    pub fn similarity_score(&self, other: &HpoTerm, similarity: &impl Similarity) -> f64 {
        similarity.calculate(self, other)
    }

    /// Returns `true` if `self` is a direct or indirect child of `other`
    #[must_use]
    pub fn child_of(&self, other: &HpoTerm) -> bool {
        self.all_parent_ids().contains(&other.id())
    }

    /// Returns `true` if `self` is a direct or indirect parent of
    /// `other`
    #[must_use]
    pub fn parent_of(&self, other: &HpoTerm) -> bool {
        other.child_of(self)
    }

    /// Returns `true` if the term is flagged as obsolete
    #[must_use]
    pub fn is_obsolete(&self) -> bool {
        self.term.obsolete()
    }

    /// The replacement term of an obsolete term, if one is recorded
    ///
    /// When the source data lists several `replaced_by` ids, the first
    /// one is used.
    #[must_use]
    pub fn replaced_by(&self) -> Option<HpoTerm<'a>> {
        self.term
            .replacement()
            .and_then(|term_id| self.ontology.hpo(term_id))
    }

    /// The id of the replacement term, if one is recorded
    #[must_use]
    pub fn replacement_id(&self) -> Option<HpoTermId> {
        self.term.replacement()
    }

    /// Returns `true` if the term is `Clinical modifier` or one of its
    /// descendants
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// assert!(ontology.hpo(12824u32).unwrap().is_modifier());
    /// assert!(!ontology.hpo(2650u32).unwrap().is_modifier());
    /// ```
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        self.id() == MODIFIER_ROOT_ID || self.all_parent_ids().contains(&MODIFIER_ROOT_ID)
    }

    /// The number of steps of the shortest parent traversal to the root
    #[must_use]
    pub fn shortest_path_to_root(&self) -> usize {
        self.parents()
            .map(|parent| parent.shortest_path_to_root() + 1)
            .min()
            .unwrap_or(0)
    }

    /// The number of steps of the longest parent traversal to the root
    #[must_use]
    pub fn longest_path_to_root(&self) -> usize {
        self.parents()
            .map(|parent| parent.longest_path_to_root() + 1)
            .max()
            .unwrap_or(0)
    }

    /// The shortest upward path from `self` to the ancestor `other`
    ///
    /// Returns the number of steps and the full path, starting at `self`
    /// and ending at `other`. When several paths have the same length,
    /// the one passing the smallest term ids is chosen, so the result is
    /// deterministic.
    ///
    /// # Errors
    ///
    /// [`HpoError::DomainError`] if `other` is neither `self` nor one of
    /// its ancestors
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    /// let scoliosis = ontology.hpo(2650u32).unwrap();
    /// let vertebral = ontology.hpo(925u32).unwrap();
    ///
    /// let (steps, path) = scoliosis.shortest_path_to_parent(&vertebral).unwrap();
    /// assert_eq!(steps, 2);
    /// assert_eq!(path.len(), 3);
    ///
    /// assert!(vertebral.shortest_path_to_parent(&scoliosis).is_err());
    /// ```
    pub fn shortest_path_to_parent(
        &self,
        other: &HpoTerm,
    ) -> HpoResult<(usize, Vec<HpoTermId>)> {
        if self.id() == other.id() {
            return Ok((0, vec![self.id()]));
        }
        if !self.all_parent_ids().contains(&other.id()) {
            return Err(HpoError::DomainError(format!(
                "{} is not a parent of {}",
                other.id(),
                self.id()
            )));
        }
        let mut best: Option<(usize, Vec<HpoTermId>)> = None;
        for parent in self.parents() {
            if parent.id() != other.id() && !parent.all_parent_ids().contains(&other.id()) {
                continue;
            }
            let (steps, path) = parent.shortest_path_to_parent(other)?;
            if best.as_ref().map_or(true, |(len, _)| steps + 1 < *len) {
                let mut ids = Vec::with_capacity(path.len() + 1);
                ids.push(self.id());
                ids.extend(path);
                best = Some((steps + 1, ids));
            }
        }
        best.ok_or_else(|| {
            HpoError::InvariantViolation(format!(
                "ancestor {} of {} is not reachable via direct parents",
                other.id(),
                self.id()
            ))
        })
    }

    /// The shortest connection between `self` and `other` via a common
    /// ancestor
    ///
    /// The reported [`TermPath`] starts at `self`, climbs up to the
    /// common ancestor that minimizes the total number of steps and
    /// descends to `other`. `path(a, b)` and `path(b, a)` have the same
    /// length; the sequence of the latter is the exact reverse, with the
    /// up/down step counts swapped.
    ///
    /// # Errors
    ///
    /// [`HpoError::DomainError`] if the terms share no common ancestor,
    /// e.g. when one of them is obsolete
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    /// let scoliosis = ontology.hpo(2650u32).unwrap();
    /// let axial = ontology.hpo(9121u32).unwrap();
    ///
    /// let path = scoliosis.path_to_other(&axial).unwrap();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.steps_up(), 3);
    /// assert_eq!(path.steps_down(), 0);
    /// ```
    pub fn path_to_other(&self, other: &HpoTerm) -> HpoResult<TermPath> {
        let ancestors = self.all_common_ancestor_ids(other);
        if ancestors.is_empty() {
            return Err(HpoError::DomainError(format!(
                "no common ancestor of {} and {}",
                self.id(),
                other.id()
            )));
        }
        let mut best: Option<TermPath> = None;
        for ancestor_id in &ancestors {
            let ancestor = HpoTerm::try_new(self.ontology, ancestor_id)?;
            let (up, up_path) = self.shortest_path_to_parent(&ancestor)?;
            let (down, down_path) = other.shortest_path_to_parent(&ancestor)?;
            if best.as_ref().map_or(true, |path| up + down < path.len()) {
                let mut ids = up_path;
                ids.extend(down_path.into_iter().rev().skip(1));
                best = Some(TermPath::new(ids, up, down));
            }
        }
        Ok(best.expect("at least one common ancestor was present"))
    }

    /// The number of steps between `self` and `other` via a common
    /// ancestor, if the terms are connected
    #[must_use]
    pub fn distance_to_term(&self, other: &HpoTerm) -> Option<usize> {
        self.path_to_other(other).ok().map(|path| path.len())
    }
}

impl PartialEq for HpoTerm<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for HpoTerm<'_> {}

/// The result of a path query between two terms
///
/// Carries the traversed term ids, starting at the query term and ending
/// at the target term, and the number of upward and downward steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermPath {
    ids: Vec<HpoTermId>,
    steps_up: usize,
    steps_down: usize,
}

impl TermPath {
    fn new(ids: Vec<HpoTermId>, steps_up: usize, steps_down: usize) -> Self {
        Self {
            ids,
            steps_up,
            steps_down,
        }
    }

    /// The total number of steps, i.e. edges, of the path
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps_up + self.steps_down
    }

    /// `true` if start and end are the same term
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The term ids of the path, including both endpoints
    #[must_use]
    pub fn ids(&self) -> &[HpoTermId] {
        &self.ids
    }

    /// Steps from the start term up to the common ancestor
    #[must_use]
    pub fn steps_up(&self) -> usize {
        self.steps_up
    }

    /// Steps from the common ancestor down to the end term
    #[must_use]
    pub fn steps_down(&self) -> usize {
        self.steps_down
    }
}

#[cfg(test)]
mod test {
    use crate::fixtures;
    use crate::HpoTermId;

    #[test]
    fn term_metadata() {
        let ontology = fixtures::ontology();
        let term = ontology.hpo(2650u32).unwrap();

        assert_eq!(term.id(), "HP:0002650");
        assert_eq!(term.name(), "Scoliosis");
        assert!(!term.is_obsolete());
        assert!(term.replaced_by().is_none());
    }

    #[test]
    fn parents_and_children() {
        let ontology = fixtures::ontology();
        let term = ontology.hpo(2650u32).unwrap();

        assert!(term.parent_ids().contains(&10674u32.into()));
        assert_eq!(term.children_ids().len(), 5);
        for child in [2943u32, 2751, 100_884, 2944, 8458] {
            assert!(term.children_ids().contains(&child.into()));
        }

        // all ancestors up to the root, excluding the term itself
        assert_eq!(term.all_parent_ids().len(), 6);
        assert!(!term.all_parent_ids().contains(&2650u32.into()));
    }

    #[test]
    fn ancestors_and_descendants_are_inverse() {
        let ontology = fixtures::ontology();
        for term in &ontology {
            for ancestor_id in term.all_parent_ids() {
                let ancestor = ontology.hpo(ancestor_id).unwrap();
                assert!(ancestor.all_children_ids().contains(&term.id()));
            }
            for descendant_id in term.all_children_ids() {
                let descendant = ontology.hpo(descendant_id).unwrap();
                assert!(descendant.all_parent_ids().contains(&term.id()));
            }
        }
    }

    #[test]
    fn no_term_is_its_own_ancestor() {
        let ontology = fixtures::ontology();
        for term in &ontology {
            assert!(!term.all_parent_ids().contains(&term.id()));
            assert!(!term.all_children_ids().contains(&term.id()));
        }
    }

    #[test]
    fn parents_are_ancestors() {
        let ontology = fixtures::ontology();
        for term in &ontology {
            for parent in term.parent_ids() {
                assert!(term.all_parent_ids().contains(&parent));
            }
        }
    }

    #[test]
    fn common_ancestors_strict_and_shared() {
        let ontology = fixtures::ontology();
        let scoliosis = ontology.hpo(2650u32).unwrap();
        let thoracic = ontology.hpo(2943u32).unwrap();

        // parent-child relation: the parent is only part of the shared set
        let strict = scoliosis.common_ancestor_ids(&thoracic);
        let shared = scoliosis.all_common_ancestor_ids(&thoracic);
        assert!(!strict.contains(&2650u32.into()));
        assert!(shared.contains(&2650u32.into()));
        assert_eq!(strict.len() + 1, shared.len());

        // identical terms: only the shared set contains the term
        let strict = scoliosis.common_ancestor_ids(&scoliosis);
        let shared = scoliosis.all_common_ancestor_ids(&scoliosis);
        assert!(!strict.contains(&2650u32.into()));
        assert!(shared.contains(&2650u32.into()));
    }

    #[test]
    fn paths_to_root() {
        let ontology = fixtures::ontology();
        let root = ontology.hpo(1u32).unwrap();
        let scoliosis = ontology.hpo(2650u32).unwrap();

        assert_eq!(root.shortest_path_to_root(), 0);
        assert_eq!(root.longest_path_to_root(), 0);
        assert_eq!(scoliosis.shortest_path_to_root(), 6);
        assert_eq!(scoliosis.longest_path_to_root(), 6);
    }

    #[test]
    fn path_to_parent() {
        let ontology = fixtures::ontology();
        let scoliosis = ontology.hpo(2650u32).unwrap();
        let axial = ontology.hpo(9121u32).unwrap();

        let (steps, path) = scoliosis.shortest_path_to_parent(&axial).unwrap();
        assert_eq!(steps, 3);
        assert_eq!(
            path,
            vec![
                HpoTermId::from_u32(2650),
                HpoTermId::from_u32(10674),
                HpoTermId::from_u32(925),
                HpoTermId::from_u32(9121)
            ]
        );

        // self-path
        let (steps, path) = scoliosis.shortest_path_to_parent(&scoliosis).unwrap();
        assert_eq!(steps, 0);
        assert_eq!(path, vec![HpoTermId::from_u32(2650)]);

        // not an ancestor
        assert!(axial.shortest_path_to_parent(&scoliosis).is_err());
    }

    #[test]
    fn path_via_common_ancestor() {
        let ontology = fixtures::ontology();
        let thoracic = ontology.hpo(2943u32).unwrap();
        let kypho = ontology.hpo(2751u32).unwrap();

        let path = thoracic.path_to_other(&kypho).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.steps_up(), 1);
        assert_eq!(path.steps_down(), 1);
        assert_eq!(
            path.ids(),
            &[
                HpoTermId::from_u32(2943),
                HpoTermId::from_u32(2650),
                HpoTermId::from_u32(2751)
            ]
        );
    }

    #[test]
    fn path_is_symmetric() {
        let ontology = fixtures::ontology();
        let scoliosis = ontology.hpo(2650u32).unwrap();
        let limb = ontology.hpo(2813u32).unwrap();

        let forward = scoliosis.path_to_other(&limb).unwrap();
        let backward = limb.path_to_other(&scoliosis).unwrap();

        assert_eq!(forward.len(), backward.len());
        assert_eq!(forward.steps_up(), backward.steps_down());
        assert_eq!(forward.steps_down(), backward.steps_up());

        let mut reversed = forward.ids().to_vec();
        reversed.reverse();
        assert_eq!(reversed, backward.ids());
    }

    #[test]
    fn modifier_detection() {
        let ontology = fixtures::ontology();
        assert!(ontology.hpo(12823u32).unwrap().is_modifier());
        assert!(ontology.hpo(12824u32).unwrap().is_modifier());
        assert!(!ontology.hpo(2650u32).unwrap().is_modifier());
    }

    #[test]
    fn obsolete_replacement() {
        let ontology = fixtures::ontology();
        let obsolete = ontology.hpo(40u32).unwrap();

        assert!(obsolete.is_obsolete());
        assert_eq!(obsolete.replacement_id(), Some(2650u32.into()));
        assert_eq!(obsolete.replaced_by().unwrap().name(), "Scoliosis");
    }
}
