//! Hypergeometric enrichment of genes and diseases in an `HpoSet`
//!
//! The query set is compared against the full ontology as background
//! population. For every annotation observed in the query set, the
//! returned p-value is the probability to draw at least as many
//! occurrences by chance.
//!
//! Results are sorted by ascending p-value; ties are broken by ascending
//! id, so repeated runs on the same data produce the same order.
//!
//! # Examples
//!
//! ```
//! use hpolib::{HpoSet, Ontology};
//! use hpolib::stats::hypergeom::gene_enrichment;
//!
//! let ontology = Ontology::from_standard("tests/data").unwrap();
//! let patient = HpoSet::from_queries(&ontology, ["HP:0002650", "HP:0002943"]).unwrap();
//!
//! for enrichment in gene_enrichment(&ontology, &patient) {
//!     println!("{}: {}", enrichment.id(), enrichment.pvalue());
//! }
//! ```

use statrs::distribution::{DiscreteCDF, Hypergeometric};
use tracing::debug;

use crate::annotations::{
    AnnotationId, DecipherDiseaseId, GeneId, OmimDiseaseId, OrphaDiseaseId,
};
use crate::set::HpoSet;
use crate::stats::{f64_from_u64, Enrichment, SampleSet};
use crate::Ontology;

/// The hypergeometric survival function
///
/// Returns the probability to draw **more than** `x` successes when
/// `draws` marbles are drawn from an urn of `population` marbles of
/// which `successes` are successes. This is the single entry point to
/// the statistics backend; everything else in the crate works on plain
/// counts.
///
/// # Panics
///
/// Panics if `successes` or `draws` exceed `population`
#[must_use]
pub fn hypergeom_sf(x: u64, population: u64, successes: u64, draws: u64) -> f64 {
    let distribution = Hypergeometric::new(population, successes, draws)
        .expect("successes and draws cannot exceed the population");
    distribution.sf(x)
}

fn enrichment<T: AnnotationId>(
    background: &SampleSet<T>,
    sample: &SampleSet<T>,
) -> Vec<Enrichment<T>> {
    let mut results = Vec::new();
    for (id, observed) in sample {
        let successes = background
            .get(&id)
            .expect("annotations of the sample set are part of the background");
        // sf(x) is P(X > x), the p-value must include the observed count
        let pvalue = hypergeom_sf(observed - 1, background.len(), *successes, sample.len());
        let fold = (f64_from_u64(observed) / f64_from_u64(sample.len()))
            / (f64_from_u64(*successes) / f64_from_u64(background.len()));
        debug!(
            "{id}: population {}, successes {}, draws {}, observed {observed}",
            background.len(),
            successes,
            sample.len()
        );
        results.push(Enrichment::new(id, pvalue, observed, fold));
    }
    results.sort_by(|a, b| {
        a.pvalue()
            .partial_cmp(&b.pvalue())
            .expect("p-values are never NaN")
            .then_with(|| a.id().cmp(b.id()))
    });
    results
}

/// The gene enrichment of the query set compared to the full ontology
///
/// Returns one [`Enrichment`] for every gene that is linked to at least
/// one term of the query set, sorted by ascending p-value with ties
/// broken by ascending gene id.
#[must_use]
pub fn gene_enrichment(ontology: &Ontology, set: &HpoSet) -> Vec<Enrichment<GeneId>> {
    enrichment(
        &SampleSet::gene(ontology.hpos()),
        &SampleSet::gene(set.iter()),
    )
}

/// The OMIM disease enrichment of the query set compared to the full
/// ontology
///
/// See [`gene_enrichment`] for the result contract.
#[must_use]
pub fn omim_disease_enrichment(
    ontology: &Ontology,
    set: &HpoSet,
) -> Vec<Enrichment<OmimDiseaseId>> {
    enrichment(
        &SampleSet::omim_disease(ontology.hpos()),
        &SampleSet::omim_disease(set.iter()),
    )
}

/// The Orphanet disease enrichment of the query set compared to the
/// full ontology
///
/// See [`gene_enrichment`] for the result contract.
#[must_use]
pub fn orpha_disease_enrichment(
    ontology: &Ontology,
    set: &HpoSet,
) -> Vec<Enrichment<OrphaDiseaseId>> {
    enrichment(
        &SampleSet::orpha_disease(ontology.hpos()),
        &SampleSet::orpha_disease(set.iter()),
    )
}

/// The DECIPHER disease enrichment of the query set compared to the
/// full ontology
///
/// See [`gene_enrichment`] for the result contract.
#[must_use]
pub fn decipher_disease_enrichment(
    ontology: &Ontology,
    set: &HpoSet,
) -> Vec<Enrichment<DecipherDiseaseId>> {
    enrichment(
        &SampleSet::decipher_disease(ontology.hpos()),
        &SampleSet::decipher_disease(set.iter()),
    )
}


/// Tests running against the data fixture in `tests/data`, exercising
/// the full parser pipeline
#[cfg(test)]
mod test_from_standard {
    use super::*;

    #[test]
    fn enrichment_ranking_is_stable() {
        let ontology = Ontology::from_standard("tests/data").expect("the test fixture must load");
        let query = HpoSet::from_queries(
            &ontology,
            ["HP:0002650", "HP:0002943", "HP:0000925"],
        )
        .unwrap();

        let baseline: Vec<(u32, u64)> = gene_enrichment(&ontology, &query)
            .iter()
            .map(|enrichment| (enrichment.id().as_u32(), enrichment.count()))
            .collect();
        assert!(!baseline.is_empty());

        for _ in 0..5 {
            let rerun: Vec<(u32, u64)> = gene_enrichment(&ontology, &query)
                .iter()
                .map(|enrichment| (enrichment.id().as_u32(), enrichment.count()))
                .collect();
            assert_eq!(baseline, rerun, "enrichment order must be bit-stable");
        }

        // p-values ascend, ties resolved by ascending id
        let results = omim_disease_enrichment(&ontology, &query);
        for pair in results.windows(2) {
            assert!(
                pair[0].pvalue() < pair[1].pvalue()
                    || ((pair[0].pvalue() - pair[1].pvalue()).abs() < f64::EPSILON
                        && pair[0].id().as_u32() < pair[1].id().as_u32())
            );
        }
    }
}
