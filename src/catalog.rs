//! Catalog loading and schema canonicalization.
//!
//! The three input catalogs are JSON arrays produced upstream: program
//! records, time-aware summaries, and static summaries. Loading
//! canonicalizes every tolerated schema variant into the in-memory
//! shapes the resolver works with, so lookup code never branches on
//! input quirks:
//!
//! - the static-summary catalog may use capitalized `Company`/`Program`
//!   key names;
//! - an `evidence` field that is absent or not a sequence becomes an
//!   empty list;
//! - evidence items missing a document name fall back to
//!   [`UNKNOWN_DOCUMENT`], and non-positive slide numbers become `None`;
//! - blank summary text becomes `None`.
//!
//! An unreadable catalog is fatal: loading returns an error instead of
//! producing a partial catalog set.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::program::ProgramRecord;
use crate::summary::{EvidenceItem, SummaryRecord, UNKNOWN_DOCUMENT};

/// Standard file name of the program catalog.
pub const PROGRAMS_FILE: &str = "programs.json";

/// Standard file name of the time-aware summary catalog.
pub const TIMEAWARE_FILE: &str = "program_summaries_timeaware.json";

/// Standard file name of the static summary catalog.
pub const STATIC_FILE: &str = "program_summaries_static.json";

/// Summary record as it appears on disk.
///
/// The static catalog historically capitalized its key names; both
/// spellings map onto the same canonical fields.
#[derive(Debug, Deserialize)]
struct RawSummaryRecord {
    #[serde(default, alias = "Company")]
    company: String,

    #[serde(default, alias = "Program")]
    program_name: String,

    #[serde(default)]
    summary: Option<String>,

    #[serde(default)]
    evidence: Value,

    #[serde(default)]
    as_of: Option<DateTime<Utc>>,
}

impl RawSummaryRecord {
    fn canonicalize(self) -> SummaryRecord {
        SummaryRecord {
            company: self.company,
            program_name: self.program_name,
            summary: canonical_summary(self.summary),
            evidence: canonical_evidence(&self.evidence),
            as_of: self.as_of,
        }
    }
}

fn canonical_summary(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Canonicalizes an `evidence` field of unknown shape.
///
/// Anything other than an array yields an empty list. Array items are
/// taken as citation objects (`document` + optional `slide`) or as bare
/// document-name strings; everything else is dropped.
fn canonical_evidence(raw: &Value) -> Vec<EvidenceItem> {
    let Value::Array(items) = raw else {
        return Vec::new();
    };

    let mut evidence = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(fields) => {
                let document = fields
                    .get("document")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(UNKNOWN_DOCUMENT)
                    .to_string();
                let slide = fields
                    .get("slide")
                    .and_then(Value::as_u64)
                    .filter(|&n| n > 0)
                    .and_then(|n| u32::try_from(n).ok());
                evidence.push(EvidenceItem { document, slide });
            }
            Value::String(name) if !name.trim().is_empty() => {
                evidence.push(EvidenceItem::document_only(name.trim()));
            }
            _ => {}
        }
    }
    evidence
}

fn parse_array(json: &str, origin: &Path) -> CatalogResult<Vec<Value>> {
    let value: Value = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(CatalogError::NotAnArray {
            path: origin.to_path_buf(),
        }),
    }
}

/// Parses a program catalog from JSON text.
///
/// `origin` labels the catalog in error messages, normally its path.
///
/// # Errors
///
/// Returns [`CatalogError`] when the text is not a JSON array of
/// program records.
pub fn parse_programs(json: &str, origin: impl Into<PathBuf>) -> CatalogResult<Vec<ProgramRecord>> {
    let origin = origin.into();
    parse_array(json, &origin)?
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).map_err(|source| CatalogError::Parse {
                path: origin.clone(),
                source,
            })
        })
        .collect()
}

/// Parses a summary catalog from JSON text, canonicalizing every
/// tolerated schema variant.
///
/// `origin` labels the catalog in error messages, normally its path.
///
/// # Errors
///
/// Returns [`CatalogError`] when the text is not a JSON array of
/// summary records.
pub fn parse_summaries(json: &str, origin: impl Into<PathBuf>) -> CatalogResult<Vec<SummaryRecord>> {
    let origin = origin.into();
    parse_array(json, &origin)?
        .into_iter()
        .map(|value| {
            serde_json::from_value::<RawSummaryRecord>(value)
                .map(RawSummaryRecord::canonicalize)
                .map_err(|source| CatalogError::Parse {
                    path: origin.clone(),
                    source,
                })
        })
        .collect()
}

fn read_catalog(path: &Path) -> CatalogResult<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and canonicalizes the program catalog from disk.
///
/// # Errors
///
/// Returns [`CatalogError`] when the file is unreadable or malformed.
pub fn load_programs(path: impl AsRef<Path>) -> CatalogResult<Vec<ProgramRecord>> {
    let path = path.as_ref();
    let text = read_catalog(path)?;
    parse_programs(&text, path)
}

/// Loads and canonicalizes a summary catalog from disk.
///
/// # Errors
///
/// Returns [`CatalogError`] when the file is unreadable or malformed.
pub fn load_summaries(path: impl AsRef<Path>) -> CatalogResult<Vec<SummaryRecord>> {
    let path = path.as_ref();
    let text = read_catalog(path)?;
    parse_summaries(&text, path)
}

/// The three catalogs of one session, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    /// Program records.
    pub programs: Vec<ProgramRecord>,

    /// Time-aware summary records (preferred tier).
    pub timeaware: Vec<SummaryRecord>,

    /// Static summary records (fallback tier).
    pub statics: Vec<SummaryRecord>,
}

impl CatalogSet {
    /// Loads the three standard catalog files from a data directory.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] encountered. Any unreadable
    /// catalog aborts the whole load.
    pub fn load_dir(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        let dir = dir.as_ref();
        let programs = load_programs(dir.join(PROGRAMS_FILE))?;
        let timeaware = load_summaries(dir.join(TIMEAWARE_FILE))?;
        let statics = load_summaries(dir.join(STATIC_FILE))?;
        info!(
            "loaded catalogs from {}: {} programs, {} time-aware summaries, {} static summaries",
            dir.display(),
            programs.len(),
            timeaware.len(),
            statics.len()
        );
        Ok(Self {
            programs,
            timeaware,
            statics,
        })
    }
}
