//! The [`Ontology`] owns all terms, genes and diseases and is the main
//! interface of the crate.
//!
//! It is built once from the standard JAX master data via
//! [`Ontology::from_standard`] and is read-only afterwards. Queries hand
//! out cheap [`HpoTerm`] views that borrow the ontology.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use core::fmt::Debug;

use tracing::debug;

use crate::annotations::{Disease, Gene, GeneId};
use crate::annotations::{DecipherDisease, DecipherDiseaseId};
use crate::annotations::{OmimDisease, OmimDiseaseId};
use crate::annotations::{OrphaDisease, OrphaDiseaseId};
use crate::term::internal::HpoTermInternal;
use crate::term::{HpoParents, HpoTerm, InformationContentKind, TermPath};
use crate::{parser, HpoError, HpoResult, HpoTermId};
use crate::{DISEASE_FILENAME, GENE_FILENAME, OBO_FILENAME};

mod termarena;
use termarena::Arena;

/// The full ontology with all terms, genes and diseases
///
/// Build it from the data provided by [JAX](https://hpo.jax.org/):
///
/// - the ontology itself: `hp.obo`
/// - gene associations: `phenotype_to_genes.txt`
/// - disease associations: `phenotype.hpoa`
///
/// all placed in one folder that is passed to [`Ontology::from_standard`].
#[derive(Default)]
pub struct Ontology {
    hpo_terms: Arena,
    genes: HashMap<GeneId, Gene>,
    omim_diseases: HashMap<OmimDiseaseId, OmimDisease>,
    orpha_diseases: HashMap<OrphaDiseaseId, OrphaDisease>,
    decipher_diseases: HashMap<DecipherDiseaseId, DecipherDisease>,
    custom_ic: HashMap<String, HashMap<HpoTermId, f64>>,
    root: Option<HpoTermId>,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.hpo_terms.len())
    }
}

/// Public query API
impl Ontology {
    /// Builds the ontology from a folder with the JAX master data
    ///
    /// The folder must contain `hp.obo`, `phenotype_to_genes.txt` and
    /// `phenotype.hpoa`.
    ///
    /// # Errors
    ///
    /// - [`HpoError::CannotOpenFile`] if one of the files is missing
    /// - [`HpoError::ParseError`] for malformed input data
    /// - [`HpoError::InvariantViolation`] if the parsed data does not
    ///   form a single-rooted acyclic hierarchy
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// assert!(ontology.hpo(1u32).is_some());
    /// assert!(ontology.hpo(666_666u32).is_none());
    /// ```
    pub fn from_standard<P: AsRef<Path>>(folder: P) -> HpoResult<Self> {
        let mut ontology = Ontology::default();
        let path = folder.as_ref();
        parser::load_from_standard_files(
            &path.join(OBO_FILENAME),
            &path.join(GENE_FILENAME),
            &path.join(DISEASE_FILENAME),
            &mut ontology,
        )?;
        ontology.calculate_information_content();
        ontology.validate_root()?;
        debug!(
            "built ontology with {} terms, {} genes",
            ontology.len(),
            ontology.genes.len()
        );
        Ok(ontology)
    }

    /// The number of terms in the ontology
    #[must_use]
    pub fn len(&self) -> usize {
        self.hpo_terms.len()
    }

    /// Returns `true` if the ontology contains no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The [`HpoTerm`] with the given id, if present
    pub fn hpo<I: Into<HpoTermId>>(&self, term_id: I) -> Option<HpoTerm<'_>> {
        HpoTerm::try_new(self, term_id).ok()
    }

    /// An iterator of all terms, ascending by id
    pub fn hpos(&self) -> OntologyIterator<'_> {
        OntologyIterator {
            inner: self.hpo_terms.values(),
            ontology: self,
        }
    }

    /// The root term `HP:0000001 | All`
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the ontology was assembled by hand and
    /// never validated
    pub fn root(&self) -> HpoResult<HpoTerm<'_>> {
        let root_id = self
            .root
            .ok_or_else(|| HpoError::NotFound("root term".to_string()))?;
        HpoTerm::try_new(self, root_id)
    }

    /// Resolves a query to a single term
    ///
    /// The query can be
    ///
    /// - an [`HpoTermId`] or `u32`
    /// - a canonical id string, e.g. `"HP:0002650"`
    /// - a term name or synonym, e.g. `"Scoliosis"` (first exact,
    ///   case-insensitive match wins)
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if no term matches
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// let term = ontology.get_hpo_object("Scoliosis").unwrap();
    /// assert_eq!(term.id(), "HP:0002650");
    ///
    /// let term = ontology.get_hpo_object("HP:0002650").unwrap();
    /// assert_eq!(term.name(), "Scoliosis");
    ///
    /// let term = ontology.get_hpo_object(2650u32).unwrap();
    /// assert_eq!(term.name(), "Scoliosis");
    /// ```
    pub fn get_hpo_object(&self, query: impl Into<Query>) -> HpoResult<HpoTerm<'_>> {
        match query.into() {
            Query::Id(id) => self
                .hpo(id)
                .ok_or_else(|| HpoError::NotFound(id.to_string())),
            Query::Name(name) => self.synonym_match(&name),
        }
    }

    /// The term with exactly this name
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if no term carries the name
    pub fn match_name(&self, name: &str) -> HpoResult<HpoTerm<'_>> {
        for term in self.hpo_terms.values() {
            if term.name() == name {
                return Ok(HpoTerm::new(self, term));
            }
        }
        Err(HpoError::NotFound(format!("term with name {name}")))
    }

    /// The first term whose name or synonym equals the query,
    /// case-insensitive
    ///
    /// An exact name match on any term wins over a synonym match. Among
    /// synonym matches the term with the smallest id wins.
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if neither names nor synonyms match
    pub fn synonym_match(&self, query: &str) -> HpoResult<HpoTerm<'_>> {
        let mut synonym_hit = None;
        for term in self.hpo_terms.values() {
            if term.name().eq_ignore_ascii_case(query) {
                return Ok(HpoTerm::new(self, term));
            }
            if synonym_hit.is_none()
                && term
                    .synonyms()
                    .iter()
                    .any(|synonym| synonym.eq_ignore_ascii_case(query))
            {
                synonym_hit = Some(term);
            }
        }
        synonym_hit
            .map(|term| HpoTerm::new(self, term))
            .ok_or_else(|| HpoError::NotFound(format!("term with name or synonym {query}")))
    }

    /// A lazy iterator of all terms whose name contains the query,
    /// case-insensitive, ascending by term id
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// let hits: Vec<String> = ontology
    ///     .search("scoliosis")
    ///     .map(|term| term.name().to_string())
    ///     .collect();
    /// assert!(hits.contains(&"Thoracic scoliosis".to_string()));
    /// ```
    pub fn search(&self, query: &str) -> Search<'_> {
        Search {
            inner: self.hpos(),
            query: query.to_lowercase(),
            synonyms: false,
        }
    }

    /// Like [`Ontology::search`], but also matches against synonyms
    pub fn synonym_search(&self, query: &str) -> Search<'_> {
        Search {
            inner: self.hpos(),
            query: query.to_lowercase(),
            synonyms: true,
        }
    }

    /// The shortest path between the terms of two queries
    ///
    /// # Errors
    ///
    /// - [`HpoError::NotFound`] if a query does not resolve
    /// - [`HpoError::DomainError`] if the terms are not connected
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::Ontology;
    ///
    /// let ontology = Ontology::from_standard("tests/data").unwrap();
    ///
    /// let path = ontology.path("HP:0002650", "HP:0009121").unwrap();
    /// assert_eq!(path.len(), 3);
    /// ```
    pub fn path(
        &self,
        query1: impl Into<Query>,
        query2: impl Into<Query>,
    ) -> HpoResult<TermPath> {
        let term1 = self.get_hpo_object(query1)?;
        let term2 = self.get_hpo_object(query2)?;
        term1.path_to_other(&term2)
    }

    /// The [`Gene`] with the given id, if present
    pub fn gene(&self, gene_id: &GeneId) -> Option<&Gene> {
        self.genes.get(gene_id)
    }

    /// The [`Gene`] with the given HUGO symbol, if present
    pub fn gene_by_name(&self, symbol: &str) -> Option<&Gene> {
        self.genes.values().find(|gene| gene.name() == symbol)
    }

    /// An iterator of all genes
    pub fn genes(&self) -> std::collections::hash_map::Values<'_, GeneId, Gene> {
        self.genes.values()
    }

    /// The [`OmimDisease`] with the given id, if present
    pub fn omim_disease(&self, disease_id: &OmimDiseaseId) -> Option<&OmimDisease> {
        self.omim_diseases.get(disease_id)
    }

    /// An iterator of all OMIM diseases
    pub fn omim_diseases(
        &self,
    ) -> std::collections::hash_map::Values<'_, OmimDiseaseId, OmimDisease> {
        self.omim_diseases.values()
    }

    /// The [`OrphaDisease`] with the given id, if present
    pub fn orpha_disease(&self, disease_id: &OrphaDiseaseId) -> Option<&OrphaDisease> {
        self.orpha_diseases.get(disease_id)
    }

    /// An iterator of all Orphanet diseases
    pub fn orpha_diseases(
        &self,
    ) -> std::collections::hash_map::Values<'_, OrphaDiseaseId, OrphaDisease> {
        self.orpha_diseases.values()
    }

    /// The [`DecipherDisease`] with the given id, if present
    pub fn decipher_disease(&self, disease_id: &DecipherDiseaseId) -> Option<&DecipherDisease> {
        self.decipher_diseases.get(disease_id)
    }

    /// An iterator of all DECIPHER diseases
    pub fn decipher_diseases(
        &self,
    ) -> std::collections::hash_map::Values<'_, DecipherDiseaseId, DecipherDisease> {
        self.decipher_diseases.values()
    }

    /// Stores a custom information content table under a key
    ///
    /// An existing table under the same key is replaced as a whole.
    pub fn set_custom_ic(&mut self, key: &str, table: HashMap<HpoTermId, f64>) {
        self.custom_ic.insert(key.to_string(), table);
    }

    /// The custom information content of a term, if the key and the term
    /// are present in a table stored via [`Ontology::set_custom_ic`]
    #[must_use]
    pub fn custom_ic(&self, key: &str, term_id: HpoTermId) -> Option<f64> {
        self.custom_ic.get(key)?.get(&term_id).copied()
    }
}

/// Methods to add annotations
///
/// These methods are used during the build and should rarely be needed
/// by clients. They do not recompute information content; call
/// [`Ontology::calculate_information_content`] once all annotations are
/// linked.
impl Ontology {
    /// Adds a gene, or returns the existing record's id
    ///
    /// The name of the first insertion wins, a repeated `add_gene` with a
    /// different name is a no-op that returns the existing id.
    ///
    /// # Errors
    ///
    /// [`HpoError::ParseIntError`] if `gene_id` is not an integer id
    pub fn add_gene(&mut self, gene_name: &str, gene_id: &str) -> HpoResult<GeneId> {
        let id = GeneId::try_from(gene_id)?;
        if let Entry::Vacant(entry) = self.genes.entry(id) {
            entry.insert(Gene::new(id, gene_name));
        }
        Ok(id)
    }

    /// Adds an OMIM disease, or returns the existing record's id
    ///
    /// # Errors
    ///
    /// [`HpoError::ParseIntError`] if `disease_id` is not an integer id
    pub fn add_omim_disease(
        &mut self,
        disease_name: &str,
        disease_id: &str,
    ) -> HpoResult<OmimDiseaseId> {
        let id = OmimDiseaseId::try_from(disease_id)?;
        if let Entry::Vacant(entry) = self.omim_diseases.entry(id) {
            entry.insert(OmimDisease::new(id, disease_name));
        }
        Ok(id)
    }

    /// Adds an Orphanet disease, or returns the existing record's id
    ///
    /// # Errors
    ///
    /// [`HpoError::ParseIntError`] if `disease_id` is not an integer id
    pub fn add_orpha_disease(
        &mut self,
        disease_name: &str,
        disease_id: &str,
    ) -> HpoResult<OrphaDiseaseId> {
        let id = OrphaDiseaseId::try_from(disease_id)?;
        if let Entry::Vacant(entry) = self.orpha_diseases.entry(id) {
            entry.insert(OrphaDisease::new(id, disease_name));
        }
        Ok(id)
    }

    /// Adds a DECIPHER disease, or returns the existing record's id
    ///
    /// # Errors
    ///
    /// [`HpoError::ParseIntError`] if `disease_id` is not an integer id
    pub fn add_decipher_disease(
        &mut self,
        disease_name: &str,
        disease_id: &str,
    ) -> HpoResult<DecipherDiseaseId> {
        let id = DecipherDiseaseId::try_from(disease_id)?;
        if let Entry::Vacant(entry) = self.decipher_diseases.entry(id) {
            entry.insert(DecipherDisease::new(id, disease_name));
        }
        Ok(id)
    }

    /// A mutable reference to the [`Gene`] with the given id
    pub fn gene_mut(&mut self, gene_id: &GeneId) -> Option<&mut Gene> {
        self.genes.get_mut(gene_id)
    }

    /// A mutable reference to the [`OmimDisease`] with the given id
    pub fn omim_disease_mut(&mut self, disease_id: &OmimDiseaseId) -> Option<&mut OmimDisease> {
        self.omim_diseases.get_mut(disease_id)
    }

    /// A mutable reference to the [`OrphaDisease`] with the given id
    pub fn orpha_disease_mut(&mut self, disease_id: &OrphaDiseaseId) -> Option<&mut OrphaDisease> {
        self.orpha_diseases.get_mut(disease_id)
    }

    /// A mutable reference to the [`DecipherDisease`] with the given id
    pub fn decipher_disease_mut(
        &mut self,
        disease_id: &DecipherDiseaseId,
    ) -> Option<&mut DecipherDisease> {
        self.decipher_diseases.get_mut(disease_id)
    }

    /// Links a gene to the term and, transitively, to all its ancestors
    ///
    /// The term side of the link is fully propagated. The gene side is
    /// **not** touched, callers record the direct link via
    /// [`Gene::add_term`](`crate::annotations::Gene::add_term`).
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the term does not exist
    pub fn link_gene_term(&mut self, term_id: HpoTermId, gene_id: GeneId) -> HpoResult<()> {
        let ancestors = self.ancestors_of(term_id)?;
        if self.hpo_terms.get_unchecked_mut(term_id).add_gene(gene_id) {
            // ancestors of an already-linked term are linked as well
            for ancestor in &ancestors {
                self.hpo_terms.get_unchecked_mut(ancestor).add_gene(gene_id);
            }
        }
        Ok(())
    }

    /// Links an OMIM disease to the term and all its ancestors
    ///
    /// See [`Ontology::link_gene_term`] for the propagation contract.
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the term does not exist
    pub fn link_omim_disease_term(
        &mut self,
        term_id: HpoTermId,
        disease_id: OmimDiseaseId,
    ) -> HpoResult<()> {
        let ancestors = self.ancestors_of(term_id)?;
        if self
            .hpo_terms
            .get_unchecked_mut(term_id)
            .add_omim_disease(disease_id)
        {
            for ancestor in &ancestors {
                self.hpo_terms
                    .get_unchecked_mut(ancestor)
                    .add_omim_disease(disease_id);
            }
        }
        Ok(())
    }

    /// Links an Orphanet disease to the term and all its ancestors
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the term does not exist
    pub fn link_orpha_disease_term(
        &mut self,
        term_id: HpoTermId,
        disease_id: OrphaDiseaseId,
    ) -> HpoResult<()> {
        let ancestors = self.ancestors_of(term_id)?;
        if self
            .hpo_terms
            .get_unchecked_mut(term_id)
            .add_orpha_disease(disease_id)
        {
            for ancestor in &ancestors {
                self.hpo_terms
                    .get_unchecked_mut(ancestor)
                    .add_orpha_disease(disease_id);
            }
        }
        Ok(())
    }

    /// Links a DECIPHER disease to the term and all its ancestors
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the term does not exist
    pub fn link_decipher_disease_term(
        &mut self,
        term_id: HpoTermId,
        disease_id: DecipherDiseaseId,
    ) -> HpoResult<()> {
        let ancestors = self.ancestors_of(term_id)?;
        if self
            .hpo_terms
            .get_unchecked_mut(term_id)
            .add_decipher_disease(disease_id)
        {
            for ancestor in &ancestors {
                self.hpo_terms
                    .get_unchecked_mut(ancestor)
                    .add_decipher_disease(disease_id);
            }
        }
        Ok(())
    }

    /// Records that an OMIM disease explicitly does not present the
    /// phenotype
    ///
    /// Negative links stay on the named term, they are not propagated.
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the term does not exist
    pub fn link_negative_omim_disease_term(
        &mut self,
        term_id: HpoTermId,
        disease_id: OmimDiseaseId,
    ) -> HpoResult<()> {
        self.term_mut_or_not_found(term_id)?
            .add_omim_excluded_disease(disease_id);
        Ok(())
    }

    /// Records that an Orphanet disease explicitly does not present the
    /// phenotype
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the term does not exist
    pub fn link_negative_orpha_disease_term(
        &mut self,
        term_id: HpoTermId,
        disease_id: OrphaDiseaseId,
    ) -> HpoResult<()> {
        self.term_mut_or_not_found(term_id)?
            .add_orpha_excluded_disease(disease_id);
        Ok(())
    }

    /// Records that a DECIPHER disease explicitly does not present the
    /// phenotype
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] if the term does not exist
    pub fn link_negative_decipher_disease_term(
        &mut self,
        term_id: HpoTermId,
        disease_id: DecipherDiseaseId,
    ) -> HpoResult<()> {
        self.term_mut_or_not_found(term_id)?
            .add_decipher_excluded_disease(disease_id);
        Ok(())
    }

    /// Calculates the information content of every term for every
    /// annotation kind
    ///
    /// Call this once **after** all terms are added, connected and all
    /// genes and diseases are linked.
    pub fn calculate_information_content(&mut self) {
        let n_genes = self.genes.len();
        let n_omim = self.omim_diseases.len();
        let n_orpha = self.orpha_diseases.len();
        let n_decipher = self.decipher_diseases.len();

        self.calculate_ic_kind(InformationContentKind::Gene, n_genes, |term| {
            term.genes().len()
        });
        self.calculate_ic_kind(InformationContentKind::Omim, n_omim, |term| {
            term.omim_diseases().len()
        });
        self.calculate_ic_kind(InformationContentKind::Orpha, n_orpha, |term| {
            term.orpha_diseases().len()
        });
        self.calculate_ic_kind(InformationContentKind::Decipher, n_decipher, |term| {
            term.decipher_diseases().len()
        });
    }

    fn calculate_ic_kind(
        &mut self,
        kind: InformationContentKind,
        total: usize,
        count: fn(&HpoTermInternal) -> usize,
    ) {
        if total == 0 {
            // the kind keeps its default sentinel value
            return;
        }
        let total = total as f64;
        for term in self.hpo_terms.values_mut() {
            let ic = match count(term) {
                0 => 0.0,
                n => -((n as f64) / total).ln(),
            };
            term.information_content_mut().set_kind(kind, ic);
        }
    }
}

/// Crate-internal build steps
impl Ontology {
    /// Adds a term record
    ///
    /// Returns [`HpoError::InvariantViolation`] if the id is already
    /// present.
    pub(crate) fn add_term(&mut self, term: HpoTermInternal) -> HpoResult<HpoTermId> {
        let id = *term.id();
        if self.hpo_terms.insert(term) {
            Ok(id)
        } else {
            Err(HpoError::InvariantViolation(format!(
                "duplicate term {id}"
            )))
        }
    }

    /// Records the `is_a` edge `child -> parent`
    ///
    /// Must be called before [`Ontology::create_cache`].
    pub(crate) fn add_parent(&mut self, parent_id: HpoTermId, child_id: HpoTermId) -> HpoResult<()> {
        match self.hpo_terms.get(parent_id) {
            None => {
                return Err(HpoError::ParseError(format!(
                    "unknown is_a target {parent_id}"
                )))
            }
            Some(parent) if parent.obsolete() => {
                return Err(HpoError::InvariantViolation(format!(
                    "obsolete term {parent_id} used as is_a target"
                )))
            }
            Some(_) => {}
        }
        if self.hpo_terms.get(child_id).is_none() {
            return Err(HpoError::ParseError(format!(
                "unknown term {child_id} in is_a relationship"
            )));
        }
        self.hpo_terms.get_unchecked_mut(parent_id).add_child(child_id);
        self.hpo_terms.get_unchecked_mut(child_id).add_parent(parent_id);
        Ok(())
    }

    /// Computes the ancestor and descendant closure of every term
    ///
    /// # Errors
    ///
    /// [`HpoError::InvariantViolation`] if the `is_a` hierarchy contains
    /// a cycle
    pub(crate) fn create_cache(&mut self) -> HpoResult<()> {
        for id in self.hpo_terms.keys() {
            let mut path = Vec::new();
            self.cache_ancestors(id, &mut path)?;
        }

        // the descendant closure is the inverse of the ancestor closure
        let mut links: Vec<(HpoTermId, HpoTermId)> = Vec::new();
        for term in self.hpo_terms.values() {
            for ancestor in term.all_parents() {
                links.push((ancestor, *term.id()));
            }
        }
        for (ancestor, descendant) in links {
            self.hpo_terms
                .get_unchecked_mut(ancestor)
                .all_children_mut()
                .insert(descendant);
        }
        Ok(())
    }

    fn cache_ancestors(&mut self, term_id: HpoTermId, path: &mut Vec<HpoTermId>) -> HpoResult<()> {
        if self.hpo_terms.get_unchecked(term_id).ancestors_cached() {
            return Ok(());
        }
        if path.contains(&term_id) {
            return Err(HpoError::InvariantViolation(format!(
                "cycle in the is_a hierarchy at {term_id}"
            )));
        }
        path.push(term_id);
        let parents = self.hpo_terms.get_unchecked(term_id).parents().clone();
        let mut ancestors = HpoParents::default();
        for parent_id in &parents {
            self.cache_ancestors(parent_id, path)?;
            for ancestor in self.hpo_terms.get_unchecked(parent_id).all_parents() {
                ancestors.insert(ancestor);
            }
        }
        path.pop();
        let term = self.hpo_terms.get_unchecked_mut(term_id);
        *term.all_parents_mut() = &ancestors | &parents;
        Ok(())
    }

    /// Determines the root term
    ///
    /// # Errors
    ///
    /// [`HpoError::InvariantViolation`] unless exactly one non-obsolete
    /// term without parents exists
    pub(crate) fn validate_root(&mut self) -> HpoResult<()> {
        let mut roots = self
            .hpo_terms
            .values()
            .filter(|term| !term.obsolete() && term.parents().is_empty());
        match (roots.next(), roots.next()) {
            (Some(root), None) => {
                self.root = Some(*root.id());
                Ok(())
            }
            (None, _) => Err(HpoError::InvariantViolation(
                "the ontology has no root term".to_string(),
            )),
            (Some(first), Some(second)) => Err(HpoError::InvariantViolation(format!(
                "more than one root term: {} and {}",
                first.id(),
                second.id()
            ))),
        }
    }

    pub(crate) fn get(&self, term_id: HpoTermId) -> Option<&HpoTermInternal> {
        self.hpo_terms.get(term_id)
    }

    fn ancestors_of(&self, term_id: HpoTermId) -> HpoResult<HpoParents> {
        Ok(self
            .hpo_terms
            .get(term_id)
            .ok_or_else(|| HpoError::NotFound(term_id.to_string()))?
            .all_parents()
            .clone())
    }

    fn term_mut_or_not_found(&mut self, term_id: HpoTermId) -> HpoResult<&mut HpoTermInternal> {
        self.hpo_terms
            .get_mut(term_id)
            .ok_or_else(|| HpoError::NotFound(term_id.to_string()))
    }
}

/// A query accepted by [`Ontology::get_hpo_object`]
#[derive(Debug, Clone)]
pub enum Query {
    /// Lookup by term id
    Id(HpoTermId),
    /// Lookup by name or synonym
    Name(String),
}

impl From<HpoTermId> for Query {
    fn from(id: HpoTermId) -> Self {
        Query::Id(id)
    }
}

impl From<u32> for Query {
    fn from(id: u32) -> Self {
        Query::Id(id.into())
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        match HpoTermId::try_from(value) {
            Ok(id) => Query::Id(id),
            Err(_) => Query::Name(value.to_string()),
        }
    }
}

impl From<&String> for Query {
    fn from(value: &String) -> Self {
        Query::from(value.as_str())
    }
}

/// An iterator of all terms of the ontology, ascending by id
pub struct OntologyIterator<'a> {
    inner: std::collections::btree_map::Values<'a, HpoTermId, HpoTermInternal>,
    ontology: &'a Ontology,
}

impl<'a> Iterator for OntologyIterator<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|term| HpoTerm::new(self.ontology, term))
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = HpoTerm<'a>;
    type IntoIter = OntologyIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.hpos()
    }
}

/// A lazy substring search over term names, see [`Ontology::search`]
pub struct Search<'a> {
    inner: OntologyIterator<'a>,
    query: String,
    synonyms: bool,
}

impl<'a> Iterator for Search<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        for term in self.inner.by_ref() {
            if term.name().to_lowercase().contains(&self.query) {
                return Some(term);
            }
            if self.synonyms
                && term
                    .synonyms()
                    .iter()
                    .any(|synonym| synonym.to_lowercase().contains(&self.query))
            {
                return Some(term);
            }
        }
        None
    }
}


/// Tests running against the data fixture in `tests/data`, exercising
/// the full parser pipeline
#[cfg(test)]
mod test_from_standard {
    use super::*;

    fn ontology() -> Ontology {
        Ontology::from_standard("tests/data").expect("the test fixture must load")
    }

    #[test]
    fn scoliosis_metadata() {
        let ontology = ontology();
        let scoliosis = ontology.get_hpo_object("HP:0002650").unwrap();

        assert_eq!(scoliosis.name(), "Scoliosis");
        assert!(scoliosis.parent_ids().contains(&10674u32.into()));

        for child in [2943u32, 2751, 100_884, 2944, 8458] {
            assert!(
                scoliosis.children_ids().contains(&child.into()),
                "HP:0002650 must have the child {child}"
            );
        }
        assert_eq!(scoliosis.children_ids().len(), 5);
    }

    #[test]
    fn path_between_terms() {
        let ontology = ontology();

        let path = ontology.path("HP:0002650", "HP:0009121").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(
            path.ids(),
            &[
                HpoTermId::from_u32(2650),
                HpoTermId::from_u32(10674),
                HpoTermId::from_u32(925),
                HpoTermId::from_u32(9121)
            ]
        );
        assert_eq!(path.steps_up(), 3);
        assert_eq!(path.steps_down(), 0);

        // the reverse path has the same length, reversed sequence and
        // swapped direction counts
        let reverse = ontology.path("HP:0009121", "HP:0002650").unwrap();
        assert_eq!(reverse.len(), path.len());
        assert_eq!(reverse.steps_up(), path.steps_down());
        assert_eq!(reverse.steps_down(), path.steps_up());
        let mut reversed_ids = reverse.ids().to_vec();
        reversed_ids.reverse();
        assert_eq!(reversed_ids, path.ids());
    }

    #[test]
    fn graph_invariants() {
        let ontology = ontology();

        let mut roots = 0;
        for term in &ontology {
            // no term is its own ancestor or descendant
            assert!(!term.all_parent_ids().contains(&term.id()));
            assert!(!term.all_children_ids().contains(&term.id()));

            // direct parents are ancestors
            for parent in term.parent_ids() {
                assert!(term.all_parent_ids().contains(&parent));
            }

            // ancestors and descendants are inverse
            for ancestor_id in term.all_parent_ids() {
                let ancestor = ontology.hpo(ancestor_id).unwrap();
                assert!(ancestor.all_children_ids().contains(&term.id()));
            }

            if term.parent_ids().is_empty() && !term.is_obsolete() {
                roots += 1;
            }
        }
        assert_eq!(roots, 1);
        assert_eq!(ontology.root().unwrap().id(), "HP:0000001");
    }

    #[test]
    fn annotation_propagation_is_asymmetric() {
        let ontology = ontology();

        let fbn1 = ontology.gene_by_name("FBN1").unwrap();

        // direct links only on the gene
        assert!(fbn1.hpo_terms().contains(&2943u32.into()));
        assert!(fbn1.hpo_terms().contains(&2650u32.into()));
        assert!(!fbn1.hpo_terms().contains(&925u32.into()));
        assert_eq!(fbn1.hpo_terms().len(), 2);

        // full propagation on the terms
        for ancestor in [2650u32, 10_674, 925, 9121, 11_842, 118, 1] {
            let term = ontology.hpo(ancestor).unwrap();
            assert!(
                term.gene_ids().contains(fbn1.id()),
                "FBN1 must be annotated on {}",
                term.id()
            );
        }
        let sibling = ontology.hpo(2944u32).unwrap();
        assert!(!sibling.gene_ids().contains(fbn1.id()));
    }

    #[test]
    fn negative_disease_links() {
        let ontology = ontology();
        let marfan = 154_700u32.into();

        let compensatory = ontology.hpo(100_884u32).unwrap();
        assert!(compensatory.omim_excluded_disease_ids().contains(&marfan));
        assert!(!compensatory.omim_disease_ids().contains(&marfan));

        // negative links are not propagated
        let scoliosis = ontology.hpo(2650u32).unwrap();
        assert!(!scoliosis.omim_excluded_disease_ids().contains(&marfan));

        // and recorded on the disease record
        let disease = ontology.omim_disease(&marfan).unwrap();
        assert!(disease.negative_hpo_terms().contains(&100_884u32.into()));
        assert!(!disease.hpo_terms().contains(&100_884u32.into()));
    }

    #[test]
    fn information_content() {
        let ontology = ontology();
        let scoliosis = ontology.hpo(2650u32).unwrap();

        // 2 of 3 OMIM diseases and 2 of 3 genes
        let expected = (3.0f64 / 2.0).ln();
        assert!((scoliosis.information_content().omim_disease() - expected).abs() < 1e-9);
        assert!((scoliosis.information_content().gene() - expected).abs() < 1e-9);

        // unannotated terms carry the sentinel value
        let severity = ontology.hpo(12824u32).unwrap();
        assert!(severity.information_content().omim_disease().abs() < f64::EPSILON);
    }

    #[test]
    fn obsolete_terms() {
        let ontology = ontology();
        let obsolete = ontology.hpo(40u32).unwrap();

        assert!(obsolete.is_obsolete());
        assert!(obsolete.parent_ids().is_empty());
        assert_eq!(obsolete.replaced_by().unwrap().id(), "HP:0002650");
    }

    #[test]
    fn search_and_matches() {
        let ontology = ontology();

        assert_eq!(ontology.search("scoliosis").count(), 6);
        assert_eq!(ontology.synonym_search("spine").count(), 2);

        assert_eq!(
            ontology.synonym_match("curved spine").unwrap().id(),
            "HP:0002650"
        );
        assert!(ontology.match_name("Scoliosis").is_ok());
        assert!(ontology.match_name("Curved spine").is_err());
    }
}
