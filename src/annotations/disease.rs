use core::fmt::Debug;
use std::collections::HashSet;
use std::fmt::Display;

use crate::annotations::AnnotationId;
use crate::set::HpoSet;
use crate::term::HpoGroup;
use crate::{HpoError, HpoResult, HpoTermId, Ontology};

/// Common methods of all disease kinds
///
/// The three sources (OMIM, Orphanet, DECIPHER) have independent id
/// spaces, so each is represented by its own type. All of them behave the
/// same way, which this trait captures.
pub trait Disease: PartialEq + Sized {
    /// The id type of the disease kind, e.g. [`OmimDiseaseId`]
    type Id: AnnotationId;

    /// Initializes a new disease
    ///
    /// Use the `Ontology::add_*_disease` methods instead, which guarantee
    /// one record per id.
    fn new(id: Self::Id, name: &str) -> Self;

    /// The id of the disease
    fn id(&self) -> &Self::Id;

    /// The display name of the disease
    fn name(&self) -> &str;

    /// Records a direct link to an HPO term
    ///
    /// Returns `true` if the term was not yet linked
    fn add_term<I: Into<HpoTermId>>(&mut self, term_id: I) -> bool;

    /// Records a direct negative link, i.e. the disease explicitly does
    /// not present the phenotype
    ///
    /// Returns `true` if the term was not yet linked negatively
    fn add_negative_term<I: Into<HpoTermId>>(&mut self, term_id: I) -> bool;

    /// The directly linked HPO terms
    ///
    /// Terms inherited by ancestors are not included, matching
    /// [`Gene::hpo_terms`](`crate::annotations::Gene::hpo_terms`).
    fn hpo_terms(&self) -> &HpoGroup;

    /// The directly linked negative HPO terms
    fn negative_hpo_terms(&self) -> &HpoGroup;

    /// An [`HpoSet`] of the directly linked terms, e.g. to compare the
    /// disease phenotype to a patient
    fn to_hpo_set<'a>(&self, ontology: &'a Ontology) -> HpoSet<'a> {
        HpoSet::new(ontology, self.hpo_terms().clone())
    }
}

macro_rules! disease_kind {
    (
        $(#[$doc:meta])*
        $disease:ident, $id:ident, $set:ident, $iterator:ident, $prefix:literal, $getter:ident
    ) => {
        /// The unique identifier of a
        #[doc = concat!("[`", stringify!($disease), "`]")]
        #[derive(Clone, Copy, Default, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
        pub struct $id {
            inner: u32,
        }

        impl From<u32> for $id {
            fn from(inner: u32) -> Self {
                Self { inner }
            }
        }

        impl TryFrom<&str> for $id {
            type Error = HpoError;
            fn try_from(value: &str) -> HpoResult<Self> {
                Ok($id {
                    inner: value.parse::<u32>()?,
                })
            }
        }

        impl Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}:{}", $prefix, self.inner)
            }
        }

        impl AnnotationId for $id {
            fn as_u32(&self) -> u32 {
                self.inner
            }
        }

        /// A set of
        #[doc = concat!("[`", stringify!($id), "`]s")]
        pub type $set = HashSet<$id>;

        $(#[$doc])*
        ///
        /// The disease holds its directly linked HPO terms, both positive
        /// and negative. See [`Disease`] for the common interface.
        #[derive(Debug, Clone)]
        pub struct $disease {
            id: $id,
            name: String,
            hpos: HpoGroup,
            negative_hpos: HpoGroup,
        }

        impl Disease for $disease {
            type Id = $id;

            fn new(id: $id, name: &str) -> Self {
                Self {
                    id,
                    name: name.to_string(),
                    hpos: HpoGroup::default(),
                    negative_hpos: HpoGroup::default(),
                }
            }

            fn id(&self) -> &$id {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn add_term<I: Into<HpoTermId>>(&mut self, term_id: I) -> bool {
                self.hpos.insert(term_id)
            }

            fn add_negative_term<I: Into<HpoTermId>>(&mut self, term_id: I) -> bool {
                self.negative_hpos.insert(term_id)
            }

            fn hpo_terms(&self) -> &HpoGroup {
                &self.hpos
            }

            fn negative_hpo_terms(&self) -> &HpoGroup {
                &self.negative_hpos
            }
        }

        impl PartialEq for $disease {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $disease {}

        /// Iterates
        #[doc = concat!("[`", stringify!($disease), "`]s")]
        /// from a set of ids
        pub struct $iterator<'a> {
            ontology: &'a Ontology,
            diseases: std::collections::hash_set::Iter<'a, $id>,
        }

        impl<'a> $iterator<'a> {
            /// Initializes a new iterator
            ///
            /// The ontology is required because the actual disease
            /// records are stored there.
            #[must_use]
            pub fn new(diseases: &'a $set, ontology: &'a Ontology) -> Self {
                Self {
                    diseases: diseases.iter(),
                    ontology,
                }
            }
        }

        impl<'a> Iterator for $iterator<'a> {
            type Item = &'a $disease;
            fn next(&mut self) -> Option<Self::Item> {
                self.diseases.next().map(|id| {
                    self.ontology
                        .$getter(id)
                        .expect("linked disease ids are always part of the ontology")
                })
            }
        }

        impl Debug for $iterator<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($iterator))
            }
        }
    };
}

disease_kind!(
    /// A single OMIM disease, identified by its MIM number
    OmimDisease,
    OmimDiseaseId,
    OmimDiseases,
    OmimDiseaseIterator,
    "OMIM",
    omim_disease
);

disease_kind!(
    /// A single Orphanet disease, identified by its ORPHA code
    OrphaDisease,
    OrphaDiseaseId,
    OrphaDiseases,
    OrphaDiseaseIterator,
    "ORPHA",
    orpha_disease
);

disease_kind!(
    /// A single DECIPHER syndrome
    DecipherDisease,
    DecipherDiseaseId,
    DecipherDiseases,
    DecipherDiseaseIterator,
    "DECIPHER",
    decipher_disease
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disease_ids() {
        let omim = OmimDiseaseId::try_from("154700").unwrap();
        assert_eq!(omim.to_string(), "OMIM:154700");
        assert_eq!(omim.as_u32(), 154_700);

        let orpha = OrphaDiseaseId::from(1900u32);
        assert_eq!(orpha.to_string(), "ORPHA:1900");

        let decipher = DecipherDiseaseId::from(18u32);
        assert_eq!(decipher.to_string(), "DECIPHER:18");

        assert!(OmimDiseaseId::try_from("OMIM:154700").is_err());
    }

    #[test]
    fn positive_and_negative_links() {
        let mut disease = OmimDisease::new(154_700u32.into(), "Marfan syndrome");
        assert!(disease.add_term(2943u32));
        assert!(!disease.add_term(2943u32));
        assert!(disease.add_negative_term(100_884u32));

        assert_eq!(disease.hpo_terms().len(), 1);
        assert_eq!(disease.negative_hpo_terms().len(), 1);
        assert!(!disease.hpo_terms().contains(&100_884u32.into()));
    }

    #[test]
    fn identity_by_id() {
        let a = OmimDisease::new(1u32.into(), "first name");
        let b = OmimDisease::new(1u32.into(), "other name");
        assert_eq!(a, b);
    }
}
