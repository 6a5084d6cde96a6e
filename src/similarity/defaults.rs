//! The built-in similarity algorithms
//!
//! All of them are also accessible by name via
//! [`Builtins`](`crate::similarity::Builtins`).

use crate::similarity::Similarity;
use crate::term::InformationContentKind;
use crate::HpoTerm;

/// The information content of the most informative common ancestor
///
/// Both terms count as their own ancestors, so `mica(a, a)` equals the
/// information content of `a` and the MICA of a term and its ancestor is
/// the ancestor's information content at least.
fn mica(a: &HpoTerm, b: &HpoTerm, kind: InformationContentKind) -> f64 {
    a.all_common_ancestors(b)
        .map(|term| term.information_content().get_kind(kind))
        .fold(0.0, f64::max)
}

/// Similarity score according to Resnik
///
/// The score is the information content of the most informative common
/// ancestor and therefore not normalized to `[0..1]`.
///
/// See [Resnik P, Proceedings of the 14th IJCAI, (1995)](https://www.ijcai.org/Proceedings/95-1/Papers/059.pdf)
pub struct Resnik {
    kind: InformationContentKind,
}

impl Resnik {
    /// Resnik similarity based on the given annotation kind
    #[must_use]
    pub fn new(kind: InformationContentKind) -> Self {
        Self { kind }
    }
}

impl Similarity for Resnik {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        mica(a, b, self.kind)
    }
}

/// Similarity score according to Lin
///
/// Normalizes the MICA by the information content of both terms,
/// yielding scores in `[0..1]`.
///
/// See [Lin D, Proceedings of the 15th ICML, (1998)](https://dl.acm.org/doi/10.5555/645527.657297)
pub struct Lin {
    kind: InformationContentKind,
}

impl Lin {
    /// Lin similarity based on the given annotation kind
    #[must_use]
    pub fn new(kind: InformationContentKind) -> Self {
        Self { kind }
    }
}

impl Similarity for Lin {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        let ic_combined = a.information_content().get_kind(self.kind)
            + b.information_content().get_kind(self.kind);
        if ic_combined == 0.0 {
            return 0.0;
        }
        2.0 * mica(a, b, self.kind) / ic_combined
    }
}

/// Similarity score according to Jiang & Conrath
///
/// The semantic distance `IC(a) + IC(b) - 2 * MICA` is capped at `1.0`
/// and inverted, yielding scores in `[0..1]`.
///
/// See [Jiang J, Conrath D, ROCLING X, (1997)](https://aclanthology.org/O97-1002.pdf)
pub struct Jc {
    kind: InformationContentKind,
}

impl Jc {
    /// Jiang & Conrath similarity based on the given annotation kind
    #[must_use]
    pub fn new(kind: InformationContentKind) -> Self {
        Self { kind }
    }
}

impl Similarity for Jc {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        if a.id() == b.id() {
            return 1.0;
        }
        let distance = a.information_content().get_kind(self.kind)
            + b.information_content().get_kind(self.kind)
            - 2.0 * mica(a, b, self.kind);
        1.0 - distance.min(1.0)
    }
}

/// Reciprocal variant of the Jiang & Conrath similarity
///
/// Instead of capping the semantic distance, the score is calculated as
/// `1 / (1 + distance)`.
pub struct Jc2 {
    kind: InformationContentKind,
}

impl Jc2 {
    /// Reciprocal Jiang & Conrath similarity based on the given
    /// annotation kind
    #[must_use]
    pub fn new(kind: InformationContentKind) -> Self {
        Self { kind }
    }
}

impl Similarity for Jc2 {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        let distance = a.information_content().get_kind(self.kind)
            + b.information_content().get_kind(self.kind)
            - 2.0 * mica(a, b, self.kind);
        1.0 / (1.0 + distance)
    }
}

/// Relevance similarity score according to Schlicker
///
/// The Lin score, weighted by the specificity of the most informative
/// common ancestor.
///
/// See [Schlicker A, et.al., BMC Bioinformatics, (2006)](https://bmcbioinformatics.biomedcentral.com/articles/10.1186/1471-2105-7-302)
pub struct Relevance {
    kind: InformationContentKind,
}

impl Relevance {
    /// Relevance similarity based on the given annotation kind
    #[must_use]
    pub fn new(kind: InformationContentKind) -> Self {
        Self { kind }
    }
}

impl Similarity for Relevance {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        let resnik = Resnik::new(self.kind).calculate(a, b);
        let lin = Lin::new(self.kind).calculate(a, b);
        lin * (1.0 - (-resnik).exp())
    }
}

/// The raw information content of the most informative common ancestor
///
/// Selected by the name `ic`.
pub struct Mica {
    kind: InformationContentKind,
}

impl Mica {
    /// MICA information content based on the given annotation kind
    #[must_use]
    pub fn new(kind: InformationContentKind) -> Self {
        Self { kind }
    }
}

impl Similarity for Mica {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        mica(a, b, self.kind)
    }
}

/// Graph based similarity: the Jaccard index of the inclusive ancestor
/// sets
///
/// `|anc(a) ∩ anc(b)| / |anc(a) ∪ anc(b)|` where both terms count as
/// their own ancestors. Purely structural, no information content
/// involved; identical terms always score `1.0`.
#[derive(Default)]
pub struct GraphIc {}

impl GraphIc {
    /// Graph based ancestry similarity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Similarity for GraphIc {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        let common = a.all_common_ancestor_ids(b).len();
        let union = a.all_union_ancestor_ids(b).len();
        if union == 0 {
            return 0.0;
        }
        // inclusive sets of a DAG node are never larger than 2^52
        common as f64 / union as f64
    }
}

/// Similarity score based on the distance between the terms
///
/// `1 / (1 + steps)` for connected terms, `0.0` for terms without a
/// common ancestor.
#[derive(Default)]
pub struct Distance {}

impl Distance {
    /// Distance based similarity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Similarity for Distance {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        match a.distance_to_term(b) {
            Some(distance) => {
                let exact: u32 = distance.try_into().expect("path length fits into u32");
                1.0 / (1.0 + f64::from(exact))
            }
            None => 0.0,
        }
    }
}

/// Identity check: `1.0` for the same term, `0.0` otherwise
#[derive(Default)]
pub struct Equal {}

impl Equal {
    /// Identity similarity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Similarity for Equal {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        if a.id() == b.id() {
            1.0
        } else {
            0.0
        }
    }
}


/// Tests running against the data fixture in `tests/data`, exercising
/// the full parser pipeline
#[cfg(test)]
mod test_from_standard {
    use super::*;
    use crate::term::InformationContentKind::Omim;
    use crate::Ontology;

    #[test]
    fn similarity_identities() {
        let ontology = Ontology::from_standard("tests/data").expect("the test fixture must load");
        for term in &ontology {
            assert!((GraphIc::new().calculate(&term, &term) - 1.0).abs() < f64::EPSILON);
            assert!((Equal::new().calculate(&term, &term) - 1.0).abs() < f64::EPSILON);

            let resnik = Resnik::new(Omim).calculate(&term, &term);
            let ic = term.information_content().omim_disease();
            assert!((resnik - ic).abs() < 1e-9);
        }
    }
}
