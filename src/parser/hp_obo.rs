//! Parsing of the `hp.obo` master file
//!
//! The file starts with a header that is skipped up to the first
//! `[Term]` stanza. Stanzas are separated by blank lines; `[Typedef]`
//! and other non-`[Term]` stanzas are ignored, as are `#`-comment lines.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::term::internal::HpoTermInternal;
use crate::{HpoError, HpoResult, HpoTermId, Ontology};

/// Child - parent pairs, collected while parsing and resolved once all
/// terms are present
type Connections = Vec<(HpoTermId, HpoTermId)>;

/// Parses an `hp.obo` file into the ontology
///
/// Adds all terms, connects them to their parents and builds the
/// ancestor/descendant caches. Once this function returns, no further
/// terms or parents can be added.
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`] if the file is not readable
/// - [`HpoError::ParseError`] for malformed stanzas or unknown `is_a`
///   targets
/// - [`HpoError::InvariantViolation`] for duplicate terms, obsolete
///   `is_a` targets or cycles
pub fn read_obo_file<P: AsRef<Path>>(filename: P, ontology: &mut Ontology) -> HpoResult<()> {
    let content = fs::read_to_string(&filename)
        .map_err(|_| HpoError::CannotOpenFile(filename.as_ref().display().to_string()))?;
    parse_obo(&content, ontology)
}

/// Parses OBO formatted text into the ontology, see [`read_obo_file`]
pub fn parse_obo(content: &str, ontology: &mut Ontology) -> HpoResult<()> {
    let mut connections: Connections = Vec::new();

    for stanza in content.split("\n\n") {
        let stanza = stanza.trim();
        if let Some(body) = stanza.strip_prefix("[Term]") {
            let term = term_from_stanza(body)?;
            let id = ontology.add_term(term.record)?;
            for parent in term.parents {
                connections.push((id, parent));
            }
        } else {
            trace!("skipping non-term section: {:.20}", stanza);
        }
    }

    for (child, parent) in connections {
        ontology.add_parent(parent, child)?;
    }
    ontology.create_cache()
}

/// A `[Term]` stanza: the term record plus its unresolved parent ids
struct ParsedTerm {
    record: HpoTermInternal,
    parents: Vec<HpoTermId>,
}

/// The value of a `def` or `synonym` line without quotes and trailing
/// provenance, e.g.
///
/// `"Multicystic dysplastic kidney" EXACT []` -> `Multicystic dysplastic kidney`
fn quoted(value: &str) -> &str {
    match value.split('"').nth(1) {
        Some(inner) => inner,
        None => value,
    }
}

/// The id part of an `is_a` value, e.g.
///
/// `HP:0001367 ! Abnormal joint morphology` -> `HP:0001367`
fn is_a_target(value: &str) -> HpoResult<HpoTermId> {
    let id = match value.split_once(' ') {
        Some((id, _)) => id,
        None => value,
    };
    HpoTermId::try_from(id)
}

fn term_from_stanza(stanza: &str) -> HpoResult<ParsedTerm> {
    let mut id = None;
    let mut name = String::new();
    let mut definition = String::new();
    let mut comment = String::new();
    let mut synonyms = Vec::new();
    let mut alt_ids = Vec::new();
    let mut parents = Vec::new();
    let mut obsolete = false;
    let mut replaced_by = None;

    for line in stanza.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(": ") else {
            return Err(HpoError::ParseError(format!("malformed obo line: {line}")));
        };
        match key {
            "id" => id = Some(HpoTermId::try_from(value)?),
            "name" => name = value.to_string(),
            "def" => definition = quoted(value).to_string(),
            "comment" => comment = value.to_string(),
            "synonym" => synonyms.push(quoted(value).to_string()),
            "alt_id" => alt_ids.push(HpoTermId::try_from(value)?),
            "is_a" => parents.push(is_a_target(value)?),
            "is_obsolete" => obsolete = value == "true",
            "replaced_by" => {
                // several replacements can be listed, the first one wins
                if replaced_by.is_none() {
                    replaced_by = Some(HpoTermId::try_from(value)?);
                }
            }
            _ => {}
        }
    }

    let Some(id) = id else {
        return Err(HpoError::ParseError(
            "missing id in [Term] stanza".to_string(),
        ));
    };

    let mut record = HpoTermInternal::new(name, id);
    *record.definition_mut() = definition;
    *record.comment_mut() = comment;
    for synonym in synonyms {
        record.add_synonym(synonym);
    }
    for alt_id in alt_ids {
        record.add_alt_id(alt_id);
    }
    *record.obsolete_mut() = obsolete;
    *record.replacement_mut() = replaced_by;

    Ok(ParsedTerm { record, parents })
}
