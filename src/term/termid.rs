use core::fmt::Debug;
use std::fmt::Display;

use crate::{HpoError, HpoResult};

/// The id of an HPO term, e.g. `HP:0000123`
///
/// Internally the id is the integer part of the canonical `HP:%07d`
/// notation. It is the stable index under which the term is stored in the
/// [`Ontology`](`crate::Ontology`) and is used for all cross-references
/// between terms, genes and diseases.
#[derive(Copy, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HpoTermId {
    inner: u32,
}

impl HpoTermId {
    /// Creates a new `HpoTermId` from a `u32`
    ///
    /// # Examples
    ///
    /// ```
    /// use hpolib::HpoTermId;
    ///
    /// let id = HpoTermId::from_u32(118);
    /// assert_eq!(id.to_string(), "HP:0000118");
    /// ```
    #[must_use]
    pub const fn from_u32(inner: u32) -> Self {
        HpoTermId { inner }
    }

    /// Returns the integer part of the id
    #[must_use]
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for HpoTermId {
    type Error = HpoError;

    /// Parses the canonical `HP:0001234` notation
    ///
    /// # Errors
    ///
    /// [`HpoError::ParseIntError`] if the string is not prefixed by `HP:`
    /// followed by an integer
    fn try_from(s: &str) -> HpoResult<Self> {
        match s.split_once(':') {
            Some(("HP", number)) => Ok(HpoTermId {
                inner: number.parse::<u32>()?,
            }),
            _ => Err(HpoError::ParseIntError),
        }
    }
}

impl From<u32> for HpoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl From<HpoTermId> for u32 {
    fn from(id: HpoTermId) -> u32 {
        id.inner
    }
}

impl Debug for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTermId({self})")
    }
}

impl Display for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP:{:07}", self.inner)
    }
}

impl PartialEq<str> for HpoTermId {
    fn eq(&self, other: &str) -> bool {
        HpoTermId::try_from(other).map_or(false, |other_id| self == &other_id)
    }
}

impl PartialEq<&str> for HpoTermId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_canonical_notation() {
        let id = HpoTermId::try_from("HP:0000118").unwrap();
        assert_eq!(id.as_u32(), 118);
        assert_eq!(id.to_string(), "HP:0000118");
    }

    #[test]
    fn invalid_notation() {
        assert!(HpoTermId::try_from("0000118").is_err());
        assert!(HpoTermId::try_from("HP_0000118").is_err());
        assert!(HpoTermId::try_from("HP:00001a8").is_err());
        assert!(HpoTermId::try_from("").is_err());
    }

    #[test]
    fn compare_to_str() {
        let id = HpoTermId::from_u32(118);
        assert_eq!(id, "HP:0000118");
        assert_ne!(id, "HP:0000119");
    }
}
