use crate::{HpoError, HpoResult};

/// The specificity of an HPO term with respect to one annotation kind
///
/// The information content is `-ln(n / N)` where `N` is the total number
/// of annotation records of the kind and `n` the number of records linked
/// to the term or any of its descendants.
///
/// A value of `0.0` is a sentinel for "no annotation of this kind": it
/// must not be read as "maximally general term".
///
/// See Resnik P: *Using information content to evaluate semantic
/// similarity in a taxonomy*, IJCAI (1995).
#[derive(Default, Debug, Clone, Copy)]
pub struct InformationContent {
    gene: f64,
    omim: f64,
    orpha: f64,
    decipher: f64,
}

impl InformationContent {
    /// The gene-specific information content
    #[must_use]
    pub fn gene(&self) -> f64 {
        self.gene
    }

    /// The OMIM-disease-specific information content
    #[must_use]
    pub fn omim_disease(&self) -> f64 {
        self.omim
    }

    /// The Orphanet-disease-specific information content
    #[must_use]
    pub fn orpha_disease(&self) -> f64 {
        self.orpha
    }

    /// The DECIPHER-disease-specific information content
    #[must_use]
    pub fn decipher_disease(&self) -> f64 {
        self.decipher
    }

    /// Returns the information content of the given kind
    #[must_use]
    pub fn get_kind(&self, kind: InformationContentKind) -> f64 {
        match kind {
            InformationContentKind::Gene => self.gene,
            InformationContentKind::Omim => self.omim,
            InformationContentKind::Orpha => self.orpha,
            InformationContentKind::Decipher => self.decipher,
        }
    }

    pub(crate) fn set_kind(&mut self, kind: InformationContentKind, value: f64) {
        match kind {
            InformationContentKind::Gene => self.gene = value,
            InformationContentKind::Omim => self.omim = value,
            InformationContentKind::Orpha => self.orpha = value,
            InformationContentKind::Decipher => self.decipher = value,
        }
    }
}

/// The annotation kind an information content is based on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InformationContentKind {
    /// Based on the associated genes
    Gene,
    /// Based on the associated OMIM diseases
    Omim,
    /// Based on the associated Orphanet diseases
    Orpha,
    /// Based on the associated DECIPHER diseases
    Decipher,
}

impl TryFrom<&str> for InformationContentKind {
    type Error = HpoError;

    /// Parses a kind from its lowercase name, e.g. for user input
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] for anything but `gene`, `omim`, `orpha`
    /// and `decipher`
    fn try_from(value: &str) -> HpoResult<Self> {
        match value.to_lowercase().as_str() {
            "gene" => Ok(Self::Gene),
            "omim" => Ok(Self::Omim),
            "orpha" => Ok(Self::Orpha),
            "decipher" => Ok(Self::Decipher),
            _ => Err(HpoError::NotFound(format!(
                "information content kind {value}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        let mut ic = InformationContent::default();
        ic.set_kind(InformationContentKind::Gene, 1.5);
        ic.set_kind(InformationContentKind::Omim, 2.5);

        assert!((ic.gene() - 1.5).abs() < f64::EPSILON);
        assert!((ic.omim_disease() - 2.5).abs() < f64::EPSILON);
        assert!(ic.orpha_disease().abs() < f64::EPSILON);
        assert!(ic.decipher_disease().abs() < f64::EPSILON);

        assert!((ic.get_kind(InformationContentKind::Gene) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn kind_from_str() {
        assert_eq!(
            InformationContentKind::try_from("omim").unwrap(),
            InformationContentKind::Omim
        );
        assert_eq!(
            InformationContentKind::try_from("Gene").unwrap(),
            InformationContentKind::Gene
        );
        assert!(InformationContentKind::try_from("foobar").is_err());
    }
}
