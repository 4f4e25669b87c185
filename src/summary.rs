//! Summary records, tiers, and source evidence.
//!
//! Two catalogs carry summaries: a time-aware tier reflecting the most
//! current disclosed state, and a static tier used as a fallback when no
//! time-aware text exists. A resolved summary remembers which tier
//! produced it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder document name for evidence items that carry none.
pub const UNKNOWN_DOCUMENT: &str = "Unknown document";

/// A citation supporting a summary's claims.
///
/// Evidence order is source order and is preserved through resolution
/// and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Source document name.
    pub document: String,

    /// Slide number within the document, when one is cited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<u32>,
}

impl EvidenceItem {
    /// Creates an evidence item citing a specific slide.
    #[must_use]
    pub fn cited(document: impl Into<String>, slide: u32) -> Self {
        Self {
            document: document.into(),
            slide: Some(slide),
        }
    }

    /// Creates an evidence item citing a whole document.
    #[must_use]
    pub fn document_only(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            slide: None,
        }
    }
}

/// Which catalog tier a resolved summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryTier {
    /// Preferred tier: reflects the most current disclosed state.
    TimeAware,

    /// Fallback tier: pre-computed without recency tracking.
    Static,
}

impl fmt::Display for SummaryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeAware => f.write_str("time-aware"),
            Self::Static => f.write_str("static"),
        }
    }
}

/// A pre-computed program summary with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Company that owns the program.
    pub company: String,

    /// Disclosed program name.
    pub program_name: String,

    /// Summary text. `None` when the record carries no usable text, in
    /// which case resolution falls through to the next tier.
    pub summary: Option<String>,

    /// Citations in source order.
    pub evidence: Vec<EvidenceItem>,

    /// When the summary was generated. Time-aware records may carry
    /// this; static records never do.
    pub as_of: Option<DateTime<Utc>>,
}

impl SummaryRecord {
    /// True when the record carries usable (non-blank) summary text.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.summary
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }
}
