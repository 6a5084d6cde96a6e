//! Parsing of the HPO master data provided by JAX
//!
//! The parsers fill an [`Ontology`] from the three standard files:
//!
//! - `hp.obo`: the terms and their hierarchy ([`hp_obo`])
//! - `phenotype_to_genes.txt`: gene associations ([`phenotype_to_genes`])
//! - `phenotype.hpoa`: disease associations ([`phenotype_hpoa`])
//!
//! Most clients should use
//! [`Ontology::from_standard`](`crate::Ontology::from_standard`) instead
//! of the individual parsers.

use std::path::Path;

use crate::{HpoResult, Ontology};

pub mod hp_obo;

/// Parses HPO - gene associations from a `phenotype_to_genes.txt` file
pub mod phenotype_to_genes {
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::path::Path;

    use crate::{HpoError, HpoResult, HpoTermId, Ontology};

    /// Adds genes and gene-term links to the ontology
    ///
    /// The first non-comment line is the header and is skipped. Columns
    /// after `gene_symbol` are tolerated and ignored.
    ///
    /// # Errors
    ///
    /// - [`HpoError::CannotOpenFile`] if the file is not readable
    /// - [`HpoError::ParseError`] for rows with missing columns
    /// - [`HpoError::NotFound`] for rows referencing unknown terms
    pub fn parse<P: AsRef<Path>>(file: P, ontology: &mut Ontology) -> HpoResult<()> {
        let filename = file.as_ref().display().to_string();
        let file = File::open(file).map_err(|_| HpoError::CannotOpenFile(filename.clone()))?;
        let reader = BufReader::new(file);
        let mut header_seen = false;
        for line in reader.lines() {
            let line = line.map_err(|_| HpoError::CannotOpenFile(filename.clone()))?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if !header_seen {
                header_seen = true;
                continue;
            }
            let mut cols = line.trim_end().split('\t');
            let (Some(hpo_id), Some(_hpo_name), Some(gene_id), Some(gene_symbol)) =
                (cols.next(), cols.next(), cols.next(), cols.next())
            else {
                return Err(HpoError::ParseError(format!(
                    "too few columns in gene association: {line}"
                )));
            };
            let term_id = HpoTermId::try_from(hpo_id)?;
            let gene_id = ontology.add_gene(gene_symbol, gene_id)?;
            ontology.link_gene_term(term_id, gene_id)?;
            ontology
                .gene_mut(&gene_id)
                .expect("the gene was just added")
                .add_term(term_id);
        }
        Ok(())
    }
}

/// Parses HPO - disease associations from a `phenotype.hpoa` file
///
/// # Example rows
///
/// ```text
/// OMIM:154700   Marfan syndrome       HP:0002943  PMID:...
/// OMIM:609153   Pseudohyperkalemia  NOT HP:0001878  PMID:...
/// ORPHA:1900    Kyphoscoliotic EDS      HP:0002751  ...
/// ```
pub mod phenotype_hpoa {
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::path::Path;

    use crate::annotations::Disease;
    use crate::{HpoError, HpoResult, HpoTermId, Ontology};

    enum DiseaseSource {
        Omim,
        Orpha,
        Decipher,
    }

    struct HpoaRow<'a> {
        source: DiseaseSource,
        disease_id: &'a str,
        disease_name: &'a str,
        negated: bool,
        term_id: HpoTermId,
    }

    fn parse_row(line: &str) -> HpoResult<Option<HpoaRow<'_>>> {
        if line.starts_with('#') || line.starts_with("database_id") || line.trim().is_empty() {
            return Ok(None);
        }
        let mut cols = line.trim_end().splitn(5, '\t');
        let (Some(database_id), Some(disease_name), Some(qualifier), Some(hpo_id)) =
            (cols.next(), cols.next(), cols.next(), cols.next())
        else {
            return Err(HpoError::ParseError(format!(
                "too few columns in disease association: {line}"
            )));
        };
        let Some((prefix, disease_id)) = database_id.split_once(':') else {
            return Err(HpoError::ParseError(format!(
                "malformed database_id: {database_id}"
            )));
        };
        let source = match prefix {
            "OMIM" => DiseaseSource::Omim,
            "ORPHA" => DiseaseSource::Orpha,
            "DECIPHER" => DiseaseSource::Decipher,
            _ => return Ok(None),
        };
        let negated = match qualifier {
            "" => false,
            "NOT" => true,
            _ => {
                return Err(HpoError::ParseError(format!(
                    "unknown qualifier {qualifier}"
                )))
            }
        };
        Ok(Some(HpoaRow {
            source,
            disease_id,
            disease_name,
            negated,
            term_id: HpoTermId::try_from(hpo_id)?,
        }))
    }

    /// Adds diseases and disease-term links to the ontology
    ///
    /// Rows are routed to the OMIM, Orphanet or DECIPHER registry by the
    /// prefix of their `database_id`; unknown prefixes are skipped. Rows
    /// with the `NOT` qualifier are recorded as negative associations.
    /// Duplicate rows are idempotent.
    ///
    /// # Errors
    ///
    /// - [`HpoError::CannotOpenFile`] if the file is not readable
    /// - [`HpoError::ParseError`] for malformed rows
    /// - [`HpoError::NotFound`] for rows referencing unknown terms
    pub fn parse<P: AsRef<Path>>(file: P, ontology: &mut Ontology) -> HpoResult<()> {
        let filename = file.as_ref().display().to_string();
        let file = File::open(file).map_err(|_| HpoError::CannotOpenFile(filename.clone()))?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line.map_err(|_| HpoError::CannotOpenFile(filename.clone()))?;
            let Some(row) = parse_row(&line)? else {
                continue;
            };
            match row.source {
                DiseaseSource::Omim => {
                    let disease_id = ontology.add_omim_disease(row.disease_name, row.disease_id)?;
                    if row.negated {
                        ontology.link_negative_omim_disease_term(row.term_id, disease_id)?;
                        ontology
                            .omim_disease_mut(&disease_id)
                            .expect("the disease was just added")
                            .add_negative_term(row.term_id);
                    } else {
                        ontology.link_omim_disease_term(row.term_id, disease_id)?;
                        ontology
                            .omim_disease_mut(&disease_id)
                            .expect("the disease was just added")
                            .add_term(row.term_id);
                    }
                }
                DiseaseSource::Orpha => {
                    let disease_id =
                        ontology.add_orpha_disease(row.disease_name, row.disease_id)?;
                    if row.negated {
                        ontology.link_negative_orpha_disease_term(row.term_id, disease_id)?;
                        ontology
                            .orpha_disease_mut(&disease_id)
                            .expect("the disease was just added")
                            .add_negative_term(row.term_id);
                    } else {
                        ontology.link_orpha_disease_term(row.term_id, disease_id)?;
                        ontology
                            .orpha_disease_mut(&disease_id)
                            .expect("the disease was just added")
                            .add_term(row.term_id);
                    }
                }
                DiseaseSource::Decipher => {
                    let disease_id =
                        ontology.add_decipher_disease(row.disease_name, row.disease_id)?;
                    if row.negated {
                        ontology.link_negative_decipher_disease_term(row.term_id, disease_id)?;
                        ontology
                            .decipher_disease_mut(&disease_id)
                            .expect("the disease was just added")
                            .add_negative_term(row.term_id);
                    } else {
                        ontology.link_decipher_disease_term(row.term_id, disease_id)?;
                        ontology
                            .decipher_disease_mut(&disease_id)
                            .expect("the disease was just added")
                            .add_term(row.term_id);
                    }
                }
            }
        }
        Ok(())
    }

}

/// Fills the ontology from the three standard files
///
/// The order matters: terms and hierarchy first, then the annotations.
pub(crate) fn load_from_standard_files<P: AsRef<Path>>(
    obo_file: P,
    gene_file: P,
    disease_file: P,
    ontology: &mut Ontology,
) -> HpoResult<()> {
    hp_obo::read_obo_file(obo_file, ontology)?;
    phenotype_to_genes::parse(gene_file, ontology)?;
    phenotype_hpoa::parse(disease_file, ontology)?;
    Ok(())
}
