//! Similarity scores between two terms or two sets of terms
//!
//! Pairwise similarity is expressed through the [`Similarity`] trait.
//! The well-established algorithms ship with the crate and are selected
//! via [`Builtins`]; custom algorithms only need to implement the trait
//! and can be registered under a name in a [`SimilarityTable`].
//!
//! Set-vs-set similarity builds a matrix of pairwise scores and reduces
//! it with a [`SimilarityCombiner`], see [`StandardCombiner`].
//!
//! # Examples
//!
//! ```
//! use hpolib::Ontology;
//! use hpolib::similarity::{Builtins, Similarity};
//! use hpolib::term::InformationContentKind;
//!
//! let ontology = Ontology::from_standard("tests/data").unwrap();
//! let term1 = ontology.hpo(2650u32).unwrap();
//! let term2 = ontology.hpo(2943u32).unwrap();
//!
//! let sim = Builtins::new("graphic", InformationContentKind::Omim).unwrap();
//! let score = sim.calculate(&term1, &term2);
//! assert!(score > 0.0 && score < 1.0);
//! ```
//!
//! A custom similarity algorithm:
//!
//! ```
//! use hpolib::{HpoTerm, Ontology};
//! use hpolib::similarity::Similarity;
//!
//! struct SameLetter {}
//! impl Similarity for SameLetter {
//!     /// 1.0 when both names start with the same letter
//!     fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
//!         match (a.name().chars().next(), b.name().chars().next()) {
//!             (Some(x), Some(y)) if x == y => 1.0,
//!             _ => 0.0,
//!         }
//!     }
//! }
//!
//! let ontology = Ontology::from_standard("tests/data").unwrap();
//! let term1 = ontology.hpo(2650u32).unwrap();
//! let term2 = ontology.hpo(8458u32).unwrap();
//! assert_eq!(SameLetter {}.calculate(&term1, &term1), 1.0);
//! assert_eq!(SameLetter {}.calculate(&term1, &term2), 0.0);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::matrix::Matrix;
use crate::set::HpoSet;
use crate::term::InformationContentKind;
use crate::{HpoError, HpoResult, HpoTerm, HpoTermId};

pub mod defaults;
pub use defaults::{Distance, Equal, GraphIc, Jc, Jc2, Lin, Mica, Relevance, Resnik};

/// Pairwise similarity score calculation between two [`HpoTerm`]s
pub trait Similarity {
    /// Calculates the similarity between term `a` and term `b`
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64;
}

impl<S: Similarity + ?Sized> Similarity for &S {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        (**self).calculate(a, b)
    }
}

/// The built-in similarity algorithms, selectable by name
///
/// See [`defaults`] for a description of each algorithm.
pub enum Builtins {
    /// [`Resnik`] similarity, the IC of the most informative common ancestor
    Resnik(InformationContentKind),
    /// [`Lin`] similarity
    Lin(InformationContentKind),
    /// [`Jc`], Jiang & Conrath similarity
    Jc(InformationContentKind),
    /// [`Jc2`], reciprocal variant of Jiang & Conrath
    Jc2(InformationContentKind),
    /// [`Relevance`] similarity by Schlicker
    Relevance(InformationContentKind),
    /// [`Mica`], the raw IC of the most informative common ancestor
    Mica(InformationContentKind),
    /// [`GraphIc`], Jaccard index of the inclusive ancestor sets
    GraphIc,
    /// [`Distance`] based similarity
    Distance,
    /// [`Equal`], identity check
    Equal,
}

impl Builtins {
    /// Selects a built-in algorithm by name
    ///
    /// Valid names are `resnik`, `lin`, `jc`, `jc2`, `rel`, `ic`,
    /// `graphic`, `dist` and `equal` (case-insensitive). The `kind`
    /// selects the information content table for the IC based methods.
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] for an unknown name
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::similarity::Builtins;
    /// use hpolib::term::InformationContentKind;
    ///
    /// assert!(Builtins::new("graphic", InformationContentKind::Omim).is_ok());
    /// assert!(Builtins::new("does-not-exist", InformationContentKind::Omim).is_err());
    /// ```
    pub fn new(method: &str, kind: InformationContentKind) -> HpoResult<Self> {
        match method.to_lowercase().as_str() {
            "resnik" => Ok(Self::Resnik(kind)),
            "lin" => Ok(Self::Lin(kind)),
            "jc" => Ok(Self::Jc(kind)),
            "jc2" => Ok(Self::Jc2(kind)),
            "rel" | "relevance" => Ok(Self::Relevance(kind)),
            "ic" => Ok(Self::Mica(kind)),
            "graphic" => Ok(Self::GraphIc),
            "dist" | "distance" => Ok(Self::Distance),
            "equal" => Ok(Self::Equal),
            _ => Err(HpoError::NotFound(format!("similarity method {method}"))),
        }
    }
}

impl Similarity for Builtins {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        match self {
            Self::Resnik(kind) => Resnik::new(*kind).calculate(a, b),
            Self::Lin(kind) => Lin::new(*kind).calculate(a, b),
            Self::Jc(kind) => Jc::new(*kind).calculate(a, b),
            Self::Jc2(kind) => Jc2::new(*kind).calculate(a, b),
            Self::Relevance(kind) => Relevance::new(*kind).calculate(a, b),
            Self::Mica(kind) => Mica::new(*kind).calculate(a, b),
            Self::GraphIc => GraphIc::new().calculate(a, b),
            Self::Distance => Distance::new().calculate(a, b),
            Self::Equal => Equal::new().calculate(a, b),
        }
    }
}

/// A named registry of similarity kernels
///
/// The table starts out with all [`Builtins`] and accepts custom kernels
/// via [`SimilarityTable::register`]. Dispatch happens once per lookup,
/// the returned kernel is a plain trait object.
///
/// # Examples
///
/// ```
/// use hpolib::{HpoTerm, Ontology};
/// use hpolib::similarity::{Similarity, SimilarityTable};
/// use hpolib::term::InformationContentKind;
///
/// struct AlwaysOne {}
/// impl Similarity for AlwaysOne {
///     fn calculate(&self, _: &HpoTerm, _: &HpoTerm) -> f64 {
///         1.0
///     }
/// }
///
/// let ontology = Ontology::from_standard("tests/data").unwrap();
/// let term = ontology.hpo(2650u32).unwrap();
///
/// let mut table = SimilarityTable::new(InformationContentKind::Omim);
/// table.register("one", Box::new(AlwaysOne {}));
///
/// assert_eq!(table.get("one").unwrap().calculate(&term, &term), 1.0);
/// assert!(table.get("resnik").is_ok());
/// assert!(table.get("no-such-method").is_err());
/// ```
pub struct SimilarityTable {
    kernels: HashMap<String, Box<dyn Similarity>>,
}

impl SimilarityTable {
    /// Creates a table containing all built-in kernels for the given
    /// information content kind
    #[must_use]
    pub fn new(kind: InformationContentKind) -> Self {
        let mut kernels: HashMap<String, Box<dyn Similarity>> = HashMap::new();
        for name in ["resnik", "lin", "jc", "jc2", "rel", "ic", "graphic", "dist", "equal"] {
            kernels.insert(
                name.to_string(),
                Box::new(Builtins::new(name, kind).expect("all built-in names are registered")),
            );
        }
        Self { kernels }
    }

    /// Registers a kernel under a name, replacing any previous entry
    pub fn register(&mut self, name: &str, kernel: Box<dyn Similarity>) {
        self.kernels.insert(name.to_lowercase(), kernel);
    }

    /// Returns the kernel registered under the name
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] for an unknown name
    pub fn get(&self, name: &str) -> HpoResult<&dyn Similarity> {
        self.kernels
            .get(&name.to_lowercase())
            .map(Box::as_ref)
            .ok_or_else(|| HpoError::NotFound(format!("similarity method {name}")))
    }
}

/// Memoizes the similarity score of every term pair
///
/// Wrap a [`Similarity`] in this struct for batch comparisons where the
/// same pairs are scored repeatedly, e.g. comparing one patient to every
/// disease.
///
/// Not usable across threads.
pub struct CachedSimilarity<T> {
    similarity: T,
    cache: RefCell<HashMap<(HpoTermId, HpoTermId), f64>>,
}

impl<T: Similarity> CachedSimilarity<T> {
    /// Wraps the similarity algorithm in a memoizing cache
    pub fn new(similarity: T) -> Self {
        Self {
            similarity,
            cache: RefCell::new(HashMap::default()),
        }
    }
}

impl<T: Similarity> Similarity for CachedSimilarity<T> {
    fn calculate(&self, a: &HpoTerm, b: &HpoTerm) -> f64 {
        *self
            .cache
            .borrow_mut()
            .entry((a.id(), b.id()))
            .or_insert_with(|| self.similarity.calculate(a, b))
    }
}

/// Reduces a matrix of pairwise similarity scores to a single set-vs-set
/// score
pub trait SimilarityCombiner {
    /// The reduction logic; `m` is guaranteed to be non-empty
    ///
    /// The row index of `m` corresponds to the iteration order of set
    /// `a`, the column index to set `b`.
    fn combine(&self, m: &Matrix<f64>, a: &HpoSet, b: &HpoSet) -> f64;

    /// Reduces the matrix, returning `0.0` for empty matrices
    ///
    /// This is the entry point used by [`GroupSimilarity`].
    fn calculate(&self, m: &Matrix<f64>, a: &HpoSet, b: &HpoSet) -> f64 {
        if m.is_empty() {
            return 0.0;
        }
        self.combine(m, a, b)
    }

    /// The maximum value of each row
    fn row_maxes(&self, m: &Matrix<f64>) -> Vec<f64> {
        m.rows()
            .map(|row| {
                row.iter()
                    .copied()
                    .reduce(f64::max)
                    .expect("a non-empty matrix has no empty rows")
            })
            .collect()
    }

    /// The maximum value of each column
    fn col_maxes(&self, m: &Matrix<f64>) -> Vec<f64> {
        m.cols()
            .map(|col| {
                col.copied()
                    .reduce(f64::max)
                    .expect("a non-empty matrix has no empty columns")
            })
            .collect()
    }

    /// The dimensions of the matrix as floats
    fn dim_f64(&self, m: &Matrix<f64>) -> (f64, f64) {
        let (rows, cols) = m.dim();
        (usize_to_f64(rows), usize_to_f64(cols))
    }
}

impl<C: SimilarityCombiner + ?Sized> SimilarityCombiner for &C {
    fn combine(&self, m: &Matrix<f64>, a: &HpoSet, b: &HpoSet) -> f64 {
        (**self).combine(m, a, b)
    }
}

/// The default matrix reduction strategies
///
/// `FunSimAvg`, `FunSimMax` and `BMA` are based on
/// [Schlicker A, et. al., BMC Bioinf (2006)](https://pubmed.ncbi.nlm.nih.gov/16776819/)
/// and [Wang JZ, et. al., Bioinformatics (2007)](https://pubmed.ncbi.nlm.nih.gov/17344234/).
/// `BMWA` weighs each best match by the information content of the
/// matched term before averaging.
pub enum StandardCombiner {
    /// Mean of the averaged row and column maxima
    FunSimAvg,
    /// The larger of the averaged row and column maxima
    FunSimMax,
    /// Best-match average: mean over all row and column maxima
    Bma,
    /// Best-match weighted average: row and column maxima weighted by
    /// the information content of the corresponding term
    Bmwa(InformationContentKind),
}

impl Default for StandardCombiner {
    fn default() -> Self {
        Self::FunSimAvg
    }
}

impl StandardCombiner {
    /// Selects a combiner by name
    ///
    /// Valid names are `funSimAvg`, `funSimMax`, `BMA` and `BMWA`
    /// (case-insensitive). The `kind` is only used by `BMWA`.
    ///
    /// # Errors
    ///
    /// [`HpoError::NotFound`] for an unknown name
    pub fn new(method: &str, kind: InformationContentKind) -> HpoResult<Self> {
        match method.to_lowercase().as_str() {
            "funsimavg" => Ok(Self::FunSimAvg),
            "funsimmax" => Ok(Self::FunSimMax),
            "bma" => Ok(Self::Bma),
            "bmwa" => Ok(Self::Bmwa(kind)),
            _ => Err(HpoError::NotFound(format!("combiner {method}"))),
        }
    }

    fn fun_sim_avg(&self, m: &Matrix<f64>) -> f64 {
        let (rows, cols) = self.dim_f64(m);
        let row_score: f64 = self.row_maxes(m).iter().sum::<f64>() / rows;
        let col_score: f64 = self.col_maxes(m).iter().sum::<f64>() / cols;
        (row_score + col_score) / 2.0
    }

    fn fun_sim_max(&self, m: &Matrix<f64>) -> f64 {
        let (rows, cols) = self.dim_f64(m);
        let row_score: f64 = self.row_maxes(m).iter().sum::<f64>() / rows;
        let col_score: f64 = self.col_maxes(m).iter().sum::<f64>() / cols;
        row_score.max(col_score)
    }

    fn bma(&self, m: &Matrix<f64>) -> f64 {
        let (rows, cols) = self.dim_f64(m);
        let total: f64 = self.row_maxes(m).iter().sum::<f64>() + self.col_maxes(m).iter().sum::<f64>();
        total / (rows + cols)
    }

    fn bmwa(&self, m: &Matrix<f64>, a: &HpoSet, b: &HpoSet, kind: InformationContentKind) -> f64 {
        let row_weights: Vec<f64> = a
            .iter()
            .map(|term| term.information_content().get_kind(kind))
            .collect();
        let col_weights: Vec<f64> = b
            .iter()
            .map(|term| term.information_content().get_kind(kind))
            .collect();

        let mut score = 0.0;
        let mut total_weight = 0.0;
        for (value, weight) in self
            .row_maxes(m)
            .iter()
            .zip(row_weights.iter())
            .chain(self.col_maxes(m).iter().zip(col_weights.iter()))
        {
            score += value * weight;
            total_weight += weight;
        }
        if total_weight == 0.0 {
            return 0.0;
        }
        score / total_weight
    }
}

impl SimilarityCombiner for StandardCombiner {
    fn combine(&self, m: &Matrix<f64>, a: &HpoSet, b: &HpoSet) -> f64 {
        match self {
            Self::FunSimAvg => self.fun_sim_avg(m),
            Self::FunSimMax => self.fun_sim_max(m),
            Self::Bma => self.bma(m),
            Self::Bmwa(kind) => self.bmwa(m, a, b, *kind),
        }
    }
}

/// Calculates the similarity score between two [`HpoSet`]s
///
/// It is usually more convenient to use
/// [`HpoSet::similarity`](`crate::HpoSet::similarity`) directly.
///
/// # Examples
///
/// ```
/// use hpolib::{HpoSet, Ontology};
/// use hpolib::similarity::{Builtins, GroupSimilarity, StandardCombiner};
/// use hpolib::term::InformationContentKind;
///
/// let ontology = Ontology::from_standard("tests/data").unwrap();
/// let set_1 = HpoSet::from_queries(&ontology, ["HP:0002943", "HP:0008458"]).unwrap();
/// let set_2 = HpoSet::from_queries(&ontology, ["HP:0002650", "HP:0009121"]).unwrap();
///
/// let sim = GroupSimilarity::new(
///     StandardCombiner::default(),
///     Builtins::new("graphic", InformationContentKind::Omim).unwrap(),
/// );
///
/// let score = sim.calculate(&set_1, &set_2);
/// assert!(score > 0.0 && score < 1.0);
/// ```
pub struct GroupSimilarity<T, C> {
    combiner: C,
    similarity: T,
}

impl<T: Similarity, C: SimilarityCombiner> GroupSimilarity<T, C> {
    /// Combines a pairwise similarity algorithm and a combiner
    pub fn new(combiner: C, similarity: T) -> Self {
        Self {
            combiner,
            similarity,
        }
    }

    /// Calculates the similarity between two sets of terms
    ///
    /// Empty sets on either side yield `0.0`.
    pub fn calculate(&self, a: &HpoSet, b: &HpoSet) -> f64 {
        let mut scores = Vec::with_capacity(a.len() * b.len());
        for term_a in a {
            for term_b in b {
                scores.push(self.similarity.calculate(&term_a, &term_b));
            }
        }
        let m = Matrix::new(a.len(), b.len(), &scores)
            .expect("the score buffer matches the set dimensions");
        self.combiner.calculate(&m, a, b)
    }
}

impl Default for GroupSimilarity<GraphIc, StandardCombiner> {
    fn default() -> Self {
        Self {
            combiner: StandardCombiner::default(),
            similarity: GraphIc::new(),
        }
    }
}

/// Converts dimensions to `f64`, panicking on matrices too large to
/// represent exactly
fn usize_to_f64(n: usize) -> f64 {
    let exact: u32 = n.try_into().expect("matrix too large");
    exact.into()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures;

    #[test]
    fn cached_similarity() {
        let ontology = fixtures::ontology();
        let a = ontology.hpo(2650u32).unwrap();
        let b = ontology.hpo(2943u32).unwrap();

        let graphic = GraphIc::new();
        let cached = CachedSimilarity::new(GraphIc::new());

        let direct = graphic.calculate(&a, &b);
        assert!((cached.calculate(&a, &b) - direct).abs() < f64::EPSILON);
        // second calculation is served from the cache
        assert!((cached.calculate(&a, &b) - direct).abs() < f64::EPSILON);
    }

    #[test]
    fn combiner_selection() {
        assert!(StandardCombiner::new("funSimAvg", InformationContentKind::Omim).is_ok());
        assert!(StandardCombiner::new("BMWA", InformationContentKind::Gene).is_ok());
        assert!(StandardCombiner::new("foobar", InformationContentKind::Omim).is_err());
    }

    #[test]
    fn builtin_selection() {
        for name in ["resnik", "lin", "jc", "jc2", "rel", "ic", "graphic", "dist", "equal"] {
            assert!(Builtins::new(name, InformationContentKind::Omim).is_ok());
        }
        assert!(Builtins::new("cosine", InformationContentKind::Omim).is_err());
    }

    #[test]
    fn combiners_on_known_matrix() {
        let ontology = fixtures::ontology();
        let a = crate::HpoSet::from_queries(&ontology, [2943u32, 2751u32]).unwrap();
        let b = crate::HpoSet::from_queries(&ontology, [2943u32]).unwrap();

        let data = vec![1.0, 0.5];
        let m = Matrix::new(2, 1, &data).unwrap();

        // row maxes: [1.0, 0.5], col maxes: [1.0]
        let avg = StandardCombiner::FunSimAvg.calculate(&m, &a, &b);
        assert!((avg - ((0.75 + 1.0) / 2.0)).abs() < 1e-9);

        let max = StandardCombiner::FunSimMax.calculate(&m, &a, &b);
        assert!((max - 1.0).abs() < 1e-9);

        let bma = StandardCombiner::Bma.calculate(&m, &a, &b);
        assert!((bma - ((1.0 + 0.5 + 1.0) / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_matrix_yields_zero() {
        let ontology = fixtures::ontology();
        let empty = crate::HpoSet::new(&ontology, crate::term::HpoGroup::new());
        let scores: Vec<f64> = Vec::new();
        let m = Matrix::new(0, 0, &scores).unwrap();
        assert!(StandardCombiner::default().calculate(&m, &empty, &empty).abs() < f64::EPSILON);
    }
}
