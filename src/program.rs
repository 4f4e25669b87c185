//! Program records and their categorical facts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A company's drug-development program and its categorical facts.
///
/// Identity is the (company, program_name) pair after normalization.
/// Fact sets are order-insignificant in storage; display ordering is
/// applied at render time. All fields tolerate absence in the source
/// catalog: a record missing its identity fields simply ends up with an
/// incomplete lookup key and is skipped during indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramRecord {
    /// Company that owns the program.
    pub company: String,

    /// Disclosed program name.
    pub program_name: String,

    /// Protein targets degraded or engaged by the program.
    pub targets: BTreeSet<String>,

    /// Therapeutic modalities (degrader, molecular glue, ...).
    pub modalities: BTreeSet<String>,

    /// E3 ligases recruited by the program.
    pub e3_ligases: BTreeSet<String>,

    /// Disclosed indications.
    pub indications: BTreeSet<String>,

    /// Therapeutic areas covered by the indications.
    pub therapeutic_areas: BTreeSet<String>,

    /// Disclosed clinical phases.
    pub clinical_phases: BTreeSet<String>,
}

impl ProgramRecord {
    /// Iterates the categorical fact sets as `(label, values)` pairs in
    /// the fixed display order.
    pub fn facts(&self) -> impl Iterator<Item = (&'static str, &BTreeSet<String>)> {
        [
            ("Targets", &self.targets),
            ("Modalities", &self.modalities),
            ("E3 Ligases", &self.e3_ligases),
            ("Indications", &self.indications),
            ("Therapeutic Areas", &self.therapeutic_areas),
            ("Clinical Phases", &self.clinical_phases),
        ]
        .into_iter()
    }
}
