//! Plain-text rendering contract for resolved views.
//!
//! Ordering and fallback rules here are part of the resolver's contract
//! with the presentation layer, not styling: fact values are sorted
//! case-insensitively for reproducible output regardless of source file
//! ordering, evidence stays in source order, and missing data renders as
//! an explicit empty state rather than a blank.

use std::collections::BTreeSet;

use crate::program::ProgramRecord;
use crate::summary::EvidenceItem;
use crate::view::ProgramView;

/// Empty state shown when no summary tier matched the selection.
pub const NO_SUMMARY_TEXT: &str = "No summary available for this program.";

/// Empty state shown when the resolved summary carries no citations.
pub const NO_EVIDENCE_TEXT: &str = "No source evidence available.";

/// Fact values in display order: case-insensitive lexicographic, with
/// raw comparison as tiebreak for determinism.
#[must_use]
pub fn sorted_values(values: &BTreeSet<String>) -> Vec<&String> {
    let mut sorted: Vec<&String> = values.iter().collect();
    sorted.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    sorted
}

/// Formats one evidence citation.
///
/// The slide suffix appears only when a slide is cited:
/// `"Investor Deck, slide 12"` versus `"Investor Deck"`.
#[must_use]
pub fn evidence_line(item: &EvidenceItem) -> String {
    match item.slide {
        Some(slide) => format!("{}, slide {slide}", item.document),
        None => item.document.clone(),
    }
}

/// Renders the non-empty fact sets as label and value lines.
///
/// Each non-empty set contributes a `label:` line followed by one
/// `- value` line per value in display order. Empty sets are omitted
/// entirely, with no placeholder.
#[must_use]
pub fn fact_lines(record: &ProgramRecord) -> Vec<String> {
    let mut lines = Vec::new();
    for (label, values) in record.facts() {
        if values.is_empty() {
            continue;
        }
        lines.push(format!("{label}:"));
        for value in sorted_values(values) {
            lines.push(format!("- {value}"));
        }
    }
    lines
}

/// Renders the full dashboard body for one selection.
///
/// Mirrors the page layout the presentation layer shows: program
/// heading, summary (or its empty state), program facts, and source
/// evidence (or its empty state).
#[must_use]
pub fn render_view(program_name: &str, view: &ProgramView) -> String {
    let mut lines = vec![program_name.to_string(), String::new()];

    match &view.summary_text {
        Some(text) => lines.push(text.clone()),
        None => lines.push(NO_SUMMARY_TEXT.to_string()),
    }

    lines.push(String::new());
    lines.push("Program Facts".to_string());
    if let Some(record) = &view.program_facts {
        lines.extend(fact_lines(record));
    }

    lines.push(String::new());
    lines.push("Source Evidence".to_string());
    if view.evidence.is_empty() {
        lines.push(NO_EVIDENCE_TEXT.to_string());
    } else {
        for item in &view.evidence {
            lines.push(format!("- {}", evidence_line(item)));
        }
    }

    lines.join("\n") + "\n"
}
