use crate::annotations::{
    DecipherDiseaseId, DecipherDiseases, GeneId, Genes, OmimDiseaseId, OmimDiseases,
    OrphaDiseaseId, OrphaDiseases,
};
use crate::term::{HpoChildren, HpoParents, HpoTermId, InformationContent};

/// The actual term record owned by the ontology
///
/// All public access goes through [`HpoTerm`](`crate::HpoTerm`), which
/// borrows this struct together with the ontology.
#[derive(Debug, Default, Clone)]
pub(crate) struct HpoTermInternal {
    id: HpoTermId,
    name: String,
    definition: String,
    comment: String,
    synonyms: Vec<String>,
    alt_ids: Vec<HpoTermId>,
    obsolete: bool,
    replacement: Option<HpoTermId>,
    parents: HpoParents,
    all_parents: HpoParents,
    children: HpoChildren,
    all_children: HpoChildren,
    genes: Genes,
    omim_diseases: OmimDiseases,
    orpha_diseases: OrphaDiseases,
    decipher_diseases: DecipherDiseases,
    omim_excluded: OmimDiseases,
    orpha_excluded: OrphaDiseases,
    decipher_excluded: DecipherDiseases,
    ic: InformationContent,
}

impl HpoTermInternal {
    pub fn new(name: String, id: HpoTermId) -> HpoTermInternal {
        HpoTermInternal {
            id,
            name,
            ..Default::default()
        }
    }

    pub fn id(&self) -> &HpoTermId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn definition_mut(&mut self) -> &mut String {
        &mut self.definition
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn comment_mut(&mut self) -> &mut String {
        &mut self.comment
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn add_synonym(&mut self, synonym: String) {
        self.synonyms.push(synonym);
    }

    pub fn alt_ids(&self) -> &[HpoTermId] {
        &self.alt_ids
    }

    pub fn add_alt_id(&mut self, id: HpoTermId) {
        self.alt_ids.push(id);
    }

    pub fn obsolete(&self) -> bool {
        self.obsolete
    }

    pub fn obsolete_mut(&mut self) -> &mut bool {
        &mut self.obsolete
    }

    pub fn replacement(&self) -> Option<HpoTermId> {
        self.replacement
    }

    pub fn replacement_mut(&mut self) -> &mut Option<HpoTermId> {
        &mut self.replacement
    }

    pub fn parents(&self) -> &HpoParents {
        &self.parents
    }

    pub fn all_parents(&self) -> &HpoParents {
        &self.all_parents
    }

    pub fn all_parents_mut(&mut self) -> &mut HpoParents {
        &mut self.all_parents
    }

    pub fn children(&self) -> &HpoChildren {
        &self.children
    }

    pub fn all_children(&self) -> &HpoChildren {
        &self.all_children
    }

    pub fn all_children_mut(&mut self) -> &mut HpoChildren {
        &mut self.all_children
    }

    /// `true` once the ancestor closure of the term is present
    ///
    /// A term without direct parents has an empty closure by definition
    /// and counts as cached.
    pub fn ancestors_cached(&self) -> bool {
        self.parents.is_empty() || !self.all_parents.is_empty()
    }

    pub fn add_parent(&mut self, parent_id: HpoTermId) {
        self.parents.insert(parent_id);
    }

    pub fn add_child(&mut self, child_id: HpoTermId) {
        self.children.insert(child_id);
    }

    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    pub fn add_gene(&mut self, gene_id: GeneId) -> bool {
        self.genes.insert(gene_id)
    }

    pub fn omim_diseases(&self) -> &OmimDiseases {
        &self.omim_diseases
    }

    pub fn add_omim_disease(&mut self, id: OmimDiseaseId) -> bool {
        self.omim_diseases.insert(id)
    }

    pub fn orpha_diseases(&self) -> &OrphaDiseases {
        &self.orpha_diseases
    }

    pub fn add_orpha_disease(&mut self, id: OrphaDiseaseId) -> bool {
        self.orpha_diseases.insert(id)
    }

    pub fn decipher_diseases(&self) -> &DecipherDiseases {
        &self.decipher_diseases
    }

    pub fn add_decipher_disease(&mut self, id: DecipherDiseaseId) -> bool {
        self.decipher_diseases.insert(id)
    }

    pub fn omim_excluded_diseases(&self) -> &OmimDiseases {
        &self.omim_excluded
    }

    pub fn add_omim_excluded_disease(&mut self, id: OmimDiseaseId) -> bool {
        self.omim_excluded.insert(id)
    }

    pub fn orpha_excluded_diseases(&self) -> &OrphaDiseases {
        &self.orpha_excluded
    }

    pub fn add_orpha_excluded_disease(&mut self, id: OrphaDiseaseId) -> bool {
        self.orpha_excluded.insert(id)
    }

    pub fn decipher_excluded_diseases(&self) -> &DecipherDiseases {
        &self.decipher_excluded
    }

    pub fn add_decipher_excluded_disease(&mut self, id: DecipherDiseaseId) -> bool {
        self.decipher_excluded.insert(id)
    }

    pub fn information_content(&self) -> &InformationContent {
        &self.ic
    }

    pub fn information_content_mut(&mut self) -> &mut InformationContent {
        &mut self.ic
    }
}

impl PartialEq for HpoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HpoTermInternal {}
