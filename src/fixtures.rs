//! A small, self-consistent Scoliosis-centered ontology for unit tests
//!
//! The hierarchy mirrors the real HPO around `HP:0002650 | Scoliosis`:
//!
//! ```text
//! HP:0000001  All
//! ├── HP:0000118  Phenotypic abnormality
//! │   └── HP:0011842  Abnormality of skeletal morphology
//! │       ├── HP:0009121  Abnormal axial skeleton morphology
//! │       │   └── HP:0000925  Abnormality of the vertebral column
//! │       │       └── HP:0010674  Abnormality of the curvature of the vertebral column
//! │       │           └── HP:0002650  Scoliosis
//! │       │               ├── HP:0002943  Thoracic scoliosis
//! │       │               ├── HP:0002751  Kyphoscoliosis
//! │       │               ├── HP:0002944  Thoracolumbar scoliosis
//! │       │               ├── HP:0008458  Progressive congenital scoliosis
//! │       │               └── HP:0100884  Compensatory scoliosis
//! │       └── HP:0011844  Abnormal appendicular skeleton morphology
//! │           └── HP:0002813  Abnormality of limb bone morphology
//! └── HP:0012823  Clinical modifier
//!     └── HP:0012824  Severity
//!
//! HP:0000040  obsolete Scoliotic deformity (replaced by HP:0002650)
//! ```
//!
//! Annotations:
//!
//! | Record | positive terms | negative terms |
//! |---|---|---|
//! | Gene FBN1 (2200) | 2943, 2650 | |
//! | Gene PLOD1 (5351) | 2751 | |
//! | Gene COL1A1 (1277) | 925 | |
//! | OMIM:193003 | 2650 | |
//! | OMIM:154700 | 2943, 2813 | 100884 |
//! | OMIM:166200 | 2813 | |
//! | ORPHA:1900 | 2751 | |
//! | ORPHA:2911 | 8458 | |
//! | DECIPHER:18 | 2944 | |
//! | DECIPHER:61 | 2813 | |

use crate::annotations::Disease;
use crate::term::internal::HpoTermInternal;
use crate::Ontology;

const TERMS: [(u32, &str); 16] = [
    (1, "All"),
    (118, "Phenotypic abnormality"),
    (12_823, "Clinical modifier"),
    (12_824, "Severity"),
    (11_842, "Abnormality of skeletal morphology"),
    (9121, "Abnormal axial skeleton morphology"),
    (925, "Abnormality of the vertebral column"),
    (10_674, "Abnormality of the curvature of the vertebral column"),
    (2650, "Scoliosis"),
    (2943, "Thoracic scoliosis"),
    (2751, "Kyphoscoliosis"),
    (100_884, "Compensatory scoliosis"),
    (2944, "Thoracolumbar scoliosis"),
    (8458, "Progressive congenital scoliosis"),
    (11_844, "Abnormal appendicular skeleton morphology"),
    (2813, "Abnormality of limb bone morphology"),
];

const EDGES: [(u32, u32); 15] = [
    // (child, parent)
    (118, 1),
    (12_823, 1),
    (12_824, 12_823),
    (11_842, 118),
    (9121, 11_842),
    (925, 9121),
    (10_674, 925),
    (2650, 10_674),
    (2943, 2650),
    (2751, 2650),
    (100_884, 2650),
    (2944, 2650),
    (8458, 2650),
    (11_844, 11_842),
    (2813, 11_844),
];

const GENES: [(&str, &str, &[u32]); 3] = [
    ("FBN1", "2200", &[2943, 2650]),
    ("PLOD1", "5351", &[2751]),
    ("COL1A1", "1277", &[925]),
];

pub(crate) fn ontology() -> Ontology {
    let mut ont = Ontology::default();

    for (id, name) in TERMS {
        let mut term = HpoTermInternal::new(name.to_string(), id.into());
        if id == 2650 {
            // synonym for the synonym-search tests
            term.add_synonym("Curved spine".to_string());
        }
        ont.add_term(term).expect("fixture term ids are unique");
    }

    let mut obsolete =
        HpoTermInternal::new("obsolete Scoliotic deformity".to_string(), 40u32.into());
    *obsolete.obsolete_mut() = true;
    *obsolete.replacement_mut() = Some(2650u32.into());
    ont.add_term(obsolete).expect("fixture term ids are unique");

    for (child, parent) in EDGES {
        ont.add_parent(parent.into(), child.into())
            .expect("fixture edges reference existing terms");
    }
    ont.create_cache().expect("the fixture hierarchy is acyclic");

    for (symbol, id, terms) in GENES {
        let gene_id = ont.add_gene(symbol, id).expect("fixture gene ids are valid");
        for term in terms.iter().copied() {
            ont.link_gene_term(term.into(), gene_id)
                .expect("fixture genes link existing terms");
            ont.gene_mut(&gene_id)
                .expect("the gene was just added")
                .add_term(term);
        }
    }

    for (name, id, terms) in [
        ("Scoliosis, isolated, susceptibility to, 3", "193003", vec![2650u32]),
        ("Marfan syndrome", "154700", vec![2943, 2813]),
        ("Osteogenesis imperfecta, type I", "166200", vec![2813]),
    ] {
        let disease_id = ont
            .add_omim_disease(name, id)
            .expect("fixture disease ids are valid");
        for term in terms {
            ont.link_omim_disease_term(term.into(), disease_id)
                .expect("fixture diseases link existing terms");
            ont.omim_disease_mut(&disease_id)
                .expect("the disease was just added")
                .add_term(term);
        }
    }

    // Marfan syndrome explicitly excludes Compensatory scoliosis
    let marfan = 154_700u32.into();
    ont.link_negative_omim_disease_term(100_884u32.into(), marfan)
        .expect("the fixture term exists");
    ont.omim_disease_mut(&marfan)
        .expect("the disease was added above")
        .add_negative_term(100_884u32);

    for (name, id, term) in [
        ("Kyphoscoliotic Ehlers-Danlos syndrome", "1900", 2751u32),
        ("Congenital scoliosis", "2911", 8458),
    ] {
        let disease_id = ont
            .add_orpha_disease(name, id)
            .expect("fixture disease ids are valid");
        ont.link_orpha_disease_term(term.into(), disease_id)
            .expect("fixture diseases link existing terms");
        ont.orpha_disease_mut(&disease_id)
            .expect("the disease was just added")
            .add_term(term);
    }

    for (name, id, term) in [
        ("1p36 microdeletion syndrome", "18", 2944u32),
        ("Osteogenesis imperfecta", "61", 2813),
    ] {
        let disease_id = ont
            .add_decipher_disease(name, id)
            .expect("fixture disease ids are valid");
        ont.link_decipher_disease_term(term.into(), disease_id)
            .expect("fixture diseases link existing terms");
        ont.decipher_disease_mut(&disease_id)
            .expect("the disease was just added")
            .add_term(term);
    }

    ont.calculate_information_content();
    ont.validate_root().expect("the fixture has a single root");
    ont
}
