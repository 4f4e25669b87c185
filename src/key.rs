//! Lookup-key normalization.
//!
//! Catalog records are addressed by a (company, program) pair, but raw
//! strings arrive with cosmetic variation: trademark glyphs, hyphens,
//! inconsistent spacing and casing. Normalization collapses those
//! variants into one canonical key so that superficially different
//! spellings of the same program resolve to the same record.

use std::fmt;

/// Cosmetic glyphs stripped from program names during normalization.
const PROGRAM_GLYPHS: [char; 2] = ['®', '™'];

/// Normalizes a raw company name into its lookup form.
///
/// Trims, lower-cases, and collapses every internal whitespace run to a
/// single space, so `"Acme Corp"` and `"acme   corp"` produce the same
/// key component.
///
/// # Examples
///
/// ```
/// use tpdintel::normalize_company;
///
/// assert_eq!(normalize_company("  Acme   Corp "), "acme corp");
/// assert_eq!(normalize_company("Acme Corp"), normalize_company("acme corp"));
/// ```
#[must_use]
pub fn normalize_company(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a raw program name into its lookup form.
///
/// Trims, lower-cases, and strips the fixed cosmetic set that varies
/// between disclosures: trademark glyphs, hyphens, and internal
/// whitespace. `"MegaDegrader®"`, `"megadegrader"`, and
/// `"Mega-Degrader"` all normalize identically.
///
/// # Examples
///
/// ```
/// use tpdintel::normalize_program;
///
/// assert_eq!(normalize_program("Mega-Degrader®"), "megadegrader");
/// ```
#[must_use]
pub fn normalize_program(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && !PROGRAM_GLYPHS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonical lookup key for a (company, program) pair.
///
/// Constructed only through the normalizers, compared structurally, and
/// used purely for index lookup. Keys are never stored in catalogs or
/// shown to users; the display-cased strings on the records themselves
/// serve that purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    company: String,
    program: String,
}

impl LookupKey {
    /// Builds a key from raw company and program strings.
    ///
    /// Total over any input: unusable strings simply normalize to an
    /// incomplete key, which no indexed record can match.
    #[must_use]
    pub fn new(company_raw: &str, program_raw: &str) -> Self {
        Self {
            company: normalize_company(company_raw),
            program: normalize_program(program_raw),
        }
    }

    /// Returns the normalized company component.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the normalized program component.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// True when both components are non-empty after normalization.
    ///
    /// Records that normalize to an incomplete key are not indexable.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.company.is_empty() && !self.program.is_empty()
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.company, self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_collapses_whitespace_and_case() {
        assert_eq!(normalize_company("Acme Corp"), "acme corp");
        assert_eq!(normalize_company("acme   corp"), "acme corp");
        assert_eq!(normalize_company("  ACME\tCorp  "), "acme corp");
        assert_eq!(
            normalize_company("Acme Corp"),
            normalize_company("acme   corp")
        );
    }

    #[test]
    fn test_program_strips_cosmetic_characters() {
        assert_eq!(normalize_program("MegaDegrader®"), "megadegrader");
        assert_eq!(normalize_program("Mega-Degrader"), "megadegrader");
        assert_eq!(normalize_program("Mega Degrader™"), "megadegrader");
        assert_eq!(
            normalize_program("MegaDegrader®"),
            normalize_program("megadegrader")
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  Acme   Corp ", "MegaDegrader®", "", "  -  "] {
            let once = normalize_company(raw);
            assert_eq!(normalize_company(&once), once);

            let once = normalize_program(raw);
            assert_eq!(normalize_program(&once), once);
        }
    }

    #[test]
    fn test_unusable_input_normalizes_to_empty() {
        assert_eq!(normalize_company("   "), "");
        assert_eq!(normalize_program(" - ® "), "");
    }

    #[test]
    fn test_incomplete_keys_are_detected() {
        assert!(LookupKey::new("Acme Corp", "MegaDegrader").is_complete());
        assert!(!LookupKey::new("", "MegaDegrader").is_complete());
        assert!(!LookupKey::new("Acme Corp", " - ").is_complete());
    }

    #[test]
    fn test_equal_keys_from_cosmetic_variants() {
        let a = LookupKey::new("Acme Corp", "MegaDegrader®");
        let b = LookupKey::new("acme   corp", "Mega-Degrader");
        assert_eq!(a, b);
        assert_eq!(a.company(), "acme corp");
        assert_eq!(a.program(), "megadegrader");
    }
}
