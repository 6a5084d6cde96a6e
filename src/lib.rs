#![doc = include_str!("../README.md")]
use std::num::ParseIntError;

use thiserror::Error;

pub mod annotations;
pub mod matrix;
mod ontology;
pub mod parser;
mod set;
pub mod similarity;
pub mod stats;
pub mod term;

pub use ontology::{Ontology, OntologyIterator, Query, Search};
pub use set::{Combinations, CombinationsOneWay, HpoSet, SetInformationContent, Variance};
pub use term::{HpoTerm, HpoTermId, InformationContentKind, TermPath};

#[cfg(test)]
pub(crate) mod fixtures;

/// Name of the ontology master file within a data folder
pub const OBO_FILENAME: &str = "hp.obo";

/// Name of the gene association file within a data folder
pub const GENE_FILENAME: &str = "phenotype_to_genes.txt";

/// Name of the disease association file within a data folder
pub const DISEASE_FILENAME: &str = "phenotype.hpoa";

/// The root of the ontology: `HP:0000001 | All`
pub const ROOT_ID: HpoTermId = HpoTermId::from_u32(1);

/// The root term of all modifier terms: `HP:0012823 | Clinical modifier`
pub const MODIFIER_ROOT_ID: HpoTermId = HpoTermId::from_u32(12_823);

/// Error variants returned by all fallible operations of the crate
#[derive(Error, Debug)]
pub enum HpoError {
    /// A term, gene, disease or similarity method does not exist
    #[error("{0} does not exist")]
    NotFound(String),
    /// A source file is not present or not readable
    #[error("cannot open file: {0}")]
    CannotOpenFile(String),
    /// A source file contains data that cannot be parsed
    #[error("unable to parse input: {0}")]
    ParseError(String),
    /// The ontology data violates a structural guarantee,
    /// e.g. a cycle in the `is_a` hierarchy
    #[error("ontology invariant violated: {0}")]
    InvariantViolation(String),
    /// An operation was called with arguments outside its domain,
    /// e.g. a path query to a term that is not an ancestor
    #[error("invalid operation: {0}")]
    DomainError(String),
    /// Out of range access into a [`matrix::Matrix`] or set
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// the requested index
        index: usize,
        /// the actual number of elements
        len: usize,
    },
    /// An id could not be parsed into an integer
    #[error("unable to parse integer")]
    ParseIntError,
}

impl From<ParseIntError> for HpoError {
    fn from(_: ParseIntError) -> Self {
        HpoError::ParseIntError
    }
}

/// Result type of all fallible operations of the crate
pub type HpoResult<T> = Result<T, HpoError>;
