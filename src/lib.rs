//! # TPD Intel - evidence-backed program intelligence resolution
//!
//! `tpdintel` is the core of a read-only intelligence dashboard for
//! targeted-protein-degradation (TPD) drug programs. It loads three
//! static JSON catalogs (program records, time-aware summaries, static
//! summaries), normalizes (company, program) lookup keys, and resolves
//! each selection to the best-available summary with its supporting
//! evidence.
//!
//! ## Core concepts
//!
//! - **Program**: a company's named drug-development effort, identified
//!   by company + program name.
//! - **Time-aware summary**: the preferred summary tier, reflecting the
//!   most current disclosed state.
//! - **Evidence**: a citation (source document + optional slide number)
//!   supporting a summary's claims.
//! - **Lookup key**: the canonical, case- and punctuation-insensitive
//!   form of a (company, program) pair, used only for lookup.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tpdintel::{CatalogSet, Resolver};
//!
//! let catalogs = CatalogSet::load_dir("data/final")?;
//! let resolver = Resolver::build(catalogs);
//!
//! let view = resolver.resolve("Acme Therapeutics", "MegaDegrader®");
//! if let Some(summary) = &view.summary_text {
//!     println!("{summary}");
//! }
//! ```
//!
//! Catalogs are immutable after load; the resolver is a pure function
//! over them and can be shared read-only across concurrent sessions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod key;
pub mod program;
pub mod render;
pub mod resolver;
pub mod summary;
pub mod view;

// Re-export primary types at crate root for convenience
pub use catalog::{
    load_programs, load_summaries, parse_programs, parse_summaries, CatalogSet, PROGRAMS_FILE,
    STATIC_FILE, TIMEAWARE_FILE,
};
pub use error::{CatalogError, CatalogResult};
pub use key::{normalize_company, normalize_program, LookupKey};
pub use program::ProgramRecord;
pub use render::{
    evidence_line, fact_lines, render_view, sorted_values, NO_EVIDENCE_TEXT, NO_SUMMARY_TEXT,
};
pub use resolver::Resolver;
pub use summary::{EvidenceItem, SummaryRecord, SummaryTier, UNKNOWN_DOCUMENT};
pub use view::ProgramView;
