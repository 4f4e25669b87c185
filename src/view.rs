//! The resolved view returned for a (company, program) selection.
//!
//! Resolution returns a `ProgramView` rather than raw rows: one
//! structure carrying the program facts, the best-available summary with
//! its tier and evidence, and explicit absence markers for everything
//! that did not match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::program::ProgramRecord;
use crate::summary::{EvidenceItem, SummaryTier};

/// Everything the presentation layer needs for one selection.
///
/// Absence is always explicit: a selection with no matching records
/// yields a view with no facts, no summary, and empty evidence, never an
/// error. Missing coverage is a routine outcome, not a fault.
///
/// Across a service boundary the view serializes as a flat JSON object
/// with camelCase field names and a nullable `summaryText`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramView {
    /// Categorical facts for the program, when the catalog has a match.
    pub program_facts: Option<ProgramRecord>,

    /// Resolved summary text, if any tier matched.
    pub summary_text: Option<String>,

    /// Tier that produced `summary_text`.
    pub summary_tier: Option<SummaryTier>,

    /// Recency timestamp carried by the resolved summary, when the
    /// time-aware tier recorded one.
    pub as_of: Option<DateTime<Utc>>,

    /// Citations in source order; empty when no summary matched.
    pub evidence: Vec<EvidenceItem>,
}

impl ProgramView {
    /// A view with no facts, no summary, and no evidence.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            program_facts: None,
            summary_text: None,
            summary_tier: None,
            as_of: None,
            evidence: Vec::new(),
        }
    }

    /// True when program facts matched the selection.
    #[must_use]
    pub fn has_facts(&self) -> bool {
        self.program_facts.is_some()
    }

    /// True when a summary tier produced text.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.summary_text.is_some()
    }

    /// True when the resolved summary carries citations.
    #[must_use]
    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }
}

impl Default for ProgramView {
    fn default() -> Self {
        Self::empty()
    }
}
