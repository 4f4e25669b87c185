//! Index construction and summary resolution.
//!
//! The resolver is built once from the loaded catalogs and then serves
//! lookups as a pure function over immutable state. Lookups are total:
//! a selection with no matching records resolves to an empty view, since
//! partial upstream coverage is expected rather than exceptional.

use std::collections::HashMap;

use log::{debug, warn};

use crate::catalog::CatalogSet;
use crate::key::{normalize_company, LookupKey};
use crate::program::ProgramRecord;
use crate::summary::{SummaryRecord, SummaryTier};
use crate::view::ProgramView;

/// Builds a lookup index over one catalog.
///
/// Records whose key has an empty component after normalization are not
/// indexable and are skipped. Duplicate normalized keys keep the later
/// record in input order; each collision is logged so data-quality
/// drift upstream stays visible.
fn build_index<R>(
    records: Vec<R>,
    catalog: &str,
    key_of: impl Fn(&R) -> LookupKey,
) -> HashMap<LookupKey, R> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let key = key_of(&record);
        if !key.is_complete() {
            debug!("skipping {catalog} record with incomplete key '{key}'");
            continue;
        }
        if index.contains_key(&key) {
            warn!("duplicate {catalog} key '{key}': keeping the later record");
        }
        index.insert(key, record);
    }
    index
}

fn summary_key(record: &SummaryRecord) -> LookupKey {
    LookupKey::new(&record.company, &record.program_name)
}

/// Resolves (company, program) selections against the loaded catalogs.
///
/// Indexes are built once at startup and shared read-only for the
/// session's lifetime; concurrent sessions can safely share one
/// resolver behind an `Arc`.
#[derive(Debug)]
pub struct Resolver {
    programs: HashMap<LookupKey, ProgramRecord>,
    timeaware: HashMap<LookupKey, SummaryRecord>,
    statics: HashMap<LookupKey, SummaryRecord>,
}

impl Resolver {
    /// Builds the lookup indexes from a loaded catalog set.
    #[must_use]
    pub fn build(catalogs: CatalogSet) -> Self {
        let programs = build_index(catalogs.programs, "program", |r| {
            LookupKey::new(&r.company, &r.program_name)
        });
        let timeaware = build_index(catalogs.timeaware, "time-aware summary", summary_key);
        let statics = build_index(catalogs.statics, "static summary", summary_key);
        Self {
            programs,
            timeaware,
            statics,
        }
    }

    /// Number of indexed programs.
    #[must_use]
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Resolves a raw (company, program) selection into a view.
    ///
    /// Summary resolution follows strict tier order: a time-aware record
    /// with non-blank text wins, else a static record with non-blank
    /// text, else the summary is absent and the evidence list empty.
    /// Program facts attach independently of summary presence.
    #[must_use]
    pub fn resolve(&self, company_raw: &str, program_raw: &str) -> ProgramView {
        let key = LookupKey::new(company_raw, program_raw);
        let program_facts = self.programs.get(&key).cloned();

        let summary = self
            .timeaware
            .get(&key)
            .filter(|record| record.has_summary())
            .map(|record| (SummaryTier::TimeAware, record))
            .or_else(|| {
                self.statics
                    .get(&key)
                    .filter(|record| record.has_summary())
                    .map(|record| (SummaryTier::Static, record))
            });

        match summary {
            Some((tier, record)) => ProgramView {
                program_facts,
                summary_text: record.summary.clone(),
                summary_tier: Some(tier),
                as_of: record.as_of,
                evidence: record.evidence.clone(),
            },
            None => ProgramView {
                program_facts,
                ..ProgramView::empty()
            },
        }
    }

    /// Distinct companies in the program catalog, sorted
    /// case-insensitively for selection controls.
    #[must_use]
    pub fn companies(&self) -> Vec<String> {
        let mut companies: Vec<String> = self
            .programs
            .values()
            .map(|record| record.company.clone())
            .collect();
        sort_display(&mut companies);
        companies.dedup();
        companies
    }

    /// Program names disclosed by a company, sorted case-insensitively.
    ///
    /// The company is matched through the same normalization as lookup
    /// keys, so any cosmetic spelling of the company selects the same
    /// programs.
    #[must_use]
    pub fn programs_for(&self, company_raw: &str) -> Vec<String> {
        let company_key = normalize_company(company_raw);
        let mut names: Vec<String> = self
            .programs
            .values()
            .filter(|record| normalize_company(&record.company) == company_key)
            .map(|record| record.program_name.clone())
            .collect();
        sort_display(&mut names);
        names.dedup();
        names
    }
}

/// Case-insensitive sort with raw comparison as tiebreak, so equal
/// strings end up adjacent for dedup and output stays deterministic.
fn sort_display(values: &mut [String]) {
    values.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}
