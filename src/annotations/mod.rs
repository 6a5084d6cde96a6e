//! Genes and diseases are linked to HPO terms and make up the annotation
//! layer of the ontology.
//!
//! The underlying principle for all annotations is the same:
//! - Each record (gene or disease) has a unique numerical identifier
//!   within its kind and exists exactly once per ontology.
//! - Each record knows the HPO terms it is **directly** linked to.
//! - On the term side, annotations are inherited upwards along `is_a`
//!   edges, so a term reports the annotations of all its descendants as
//!   well.
//!
//! Diseases come in three flavors with independent id spaces:
//! [`OmimDisease`], [`OrphaDisease`] and [`DecipherDisease`]. Each can
//! additionally be linked *negatively* to a term ("disease explicitly
//! does not present this phenotype"). Negative links are stored verbatim,
//! they are not inherited and not used for information content or
//! similarity.

use core::fmt::Debug;
use core::hash::Hash;
use std::fmt::Display;

mod disease;
mod gene;

pub use disease::{
    DecipherDisease, DecipherDiseaseId, DecipherDiseaseIterator, DecipherDiseases, Disease,
    OmimDisease, OmimDiseaseId, OmimDiseaseIterator, OmimDiseases, OrphaDisease, OrphaDiseaseId,
    OrphaDiseaseIterator, OrphaDiseases,
};
pub use gene::{Gene, GeneId, GeneIterator, Genes};

/// Common constraints of all annotation ids
///
/// Ids are unique only within their annotation kind: a gene and an OMIM
/// disease may share the same number.
pub trait AnnotationId:
    Clone + Copy + Debug + Hash + PartialEq + PartialOrd + Eq + Ord + Display + From<u32>
{
    /// The integer representation of the id
    fn as_u32(&self) -> u32;
}
