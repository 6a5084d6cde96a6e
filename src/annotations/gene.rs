use core::fmt::Debug;
use std::collections::HashSet;
use std::fmt::Display;

use crate::annotations::AnnotationId;
use crate::set::HpoSet;
use crate::term::HpoGroup;
use crate::{HpoError, HpoResult, HpoTermId, Ontology};

/// A set of [`GeneId`]s
pub type Genes = HashSet<GeneId>;

/// The unique identifier of a [`Gene`]
///
/// This is the HGNC id of the gene. When the source data carries only an
/// NCBI gene id, that id is stored instead; HGNC is authoritative when
/// both are available.
#[derive(Clone, Copy, Default, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct GeneId {
    inner: u32,
}

impl From<u32> for GeneId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl TryFrom<&str> for GeneId {
    type Error = HpoError;

    /// Parses a gene id from `123`, `HGNC:123` or `NCBIGene:123`
    fn try_from(value: &str) -> HpoResult<Self> {
        let number = match value.rsplit_once(':') {
            Some((_, number)) => number,
            None => value,
        };
        Ok(GeneId {
            inner: number.parse::<u32>()?,
        })
    }
}

impl Display for GeneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl AnnotationId for GeneId {
    fn as_u32(&self) -> u32 {
        self.inner
    }
}

/// A single gene, identified by [`GeneId`] and HUGO symbol
///
/// The gene knows the HPO terms it is **directly** annotated with. Terms
/// inherited by ancestor terms are not part of [`Gene::hpo_terms`]; the
/// upward inheritance is only recorded on the term side. Adding ancestor
/// ids back onto the gene would change enrichment and similarity results
/// and is therefore not done.
#[derive(Default, Debug, Clone)]
pub struct Gene {
    id: GeneId,
    name: String,
    hpos: HpoGroup,
}

impl Gene {
    /// Initializes a new gene
    ///
    /// This method should rarely, if ever, be used directly. Use
    /// [`Ontology::add_gene`](`crate::Ontology::add_gene`) instead, which
    /// guarantees one record per id.
    #[must_use]
    pub fn new(id: GeneId, name: &str) -> Gene {
        Gene {
            id,
            name: name.to_string(),
            hpos: HpoGroup::default(),
        }
    }

    /// The [`GeneId`] of the gene
    #[must_use]
    pub fn id(&self) -> &GeneId {
        &self.id
    }

    /// The HUGO symbol of the gene, e.g. `FBN1`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The HUGO symbol of the gene, alias of [`Gene::name`]
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.name
    }

    /// Records a direct link to an HPO term
    ///
    /// Returns `true` if the term was not yet linked
    pub fn add_term<I: Into<HpoTermId>>(&mut self, term_id: I) -> bool {
        self.hpos.insert(term_id)
    }

    /// The directly linked HPO terms
    #[must_use]
    pub fn hpo_terms(&self) -> &HpoGroup {
        &self.hpos
    }

    /// An [`HpoSet`] of the directly linked terms, e.g. to compare the
    /// phenotype of the gene to a patient
    #[must_use]
    pub fn to_hpo_set<'a>(&self, ontology: &'a Ontology) -> HpoSet<'a> {
        HpoSet::new(ontology, self.hpos.clone())
    }
}

impl PartialEq for Gene {
    fn eq(&self, other: &Gene) -> bool {
        self.id == other.id
    }
}

impl Eq for Gene {}

/// Iterates [`Gene`]s from a set of [`GeneId`]s
pub struct GeneIterator<'a> {
    ontology: &'a Ontology,
    genes: std::collections::hash_set::Iter<'a, GeneId>,
}

impl<'a> GeneIterator<'a> {
    /// Initializes a new `GeneIterator`
    ///
    /// The ontology is required because the actual [`Gene`] records are
    /// stored there.
    #[must_use]
    pub fn new(genes: &'a Genes, ontology: &'a Ontology) -> Self {
        GeneIterator {
            genes: genes.iter(),
            ontology,
        }
    }
}

impl<'a> Iterator for GeneIterator<'a> {
    type Item = &'a Gene;
    fn next(&mut self) -> Option<Self::Item> {
        self.genes.next().map(|gene_id| {
            self.ontology
                .gene(gene_id)
                .expect("linked GeneIds are always part of the ontology")
        })
    }
}

impl Debug for GeneIterator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeneIterator")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gene_id_from_str() {
        assert_eq!(GeneId::try_from("2200").unwrap(), GeneId::from(2200u32));
        assert_eq!(GeneId::try_from("HGNC:3603").unwrap(), GeneId::from(3603u32));
        assert_eq!(
            GeneId::try_from("NCBIGene:2200").unwrap(),
            GeneId::from(2200u32)
        );
        assert!(GeneId::try_from("FBN1").is_err());
    }

    #[test]
    fn gene_records_direct_terms_only() {
        let mut gene = Gene::new(GeneId::from(2200u32), "FBN1");
        assert!(gene.add_term(2943u32));
        assert!(!gene.add_term(2943u32));
        assert_eq!(gene.hpo_terms().len(), 1);
        assert_eq!(gene.name(), "FBN1");
        assert_eq!(gene.symbol(), "FBN1");
    }
}
