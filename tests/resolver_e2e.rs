use tpdintel::{
    parse_programs, parse_summaries, render_view, CatalogSet, EvidenceItem, Resolver, SummaryTier,
    NO_EVIDENCE_TEXT, NO_SUMMARY_TEXT,
};

fn seeded_resolver() -> Resolver {
    // Program catalog as produced upstream, facts deliberately unsorted.
    let programs = parse_programs(
        r#"[
            {
                "company": "Acme Therapeutics",
                "program_name": "MegaDegrader®",
                "targets": ["TNF", "BRD4", "kras"],
                "modalities": ["Bifunctional degrader"],
                "e3_ligases": ["CRBN"],
                "indications": ["NSCLC"],
                "therapeutic_areas": ["Oncology"],
                "clinical_phases": ["Phase 1"]
            },
            {
                "company": "Beta Biosciences",
                "program_name": "BB-101"
            }
        ]"#,
        "programs.json",
    )
    .unwrap();

    // Time-aware tier covers MegaDegrader; BB-101 only has a blank entry.
    let timeaware = parse_summaries(
        r#"[
            {
                "company": "Acme Therapeutics",
                "program_name": "MegaDegrader",
                "summary": "Dosing ongoing in Phase 1.",
                "as_of": "2026-06-15T00:00:00Z",
                "evidence": [
                    {"document": "Q2 Investor Deck", "slide": 12},
                    {"document": "Pipeline Page"}
                ]
            },
            {
                "company": "Beta Biosciences",
                "program_name": "BB-101",
                "summary": ""
            }
        ]"#,
        "timeaware.json",
    )
    .unwrap();

    // Static tier uses the capitalized legacy schema.
    let statics = parse_summaries(
        r#"[
            {
                "Company": "Acme Therapeutics",
                "Program": "MegaDegrader",
                "summary": "Preclinical degrader program.",
                "evidence": [{"document": "Archive Deck", "slide": 3}]
            },
            {
                "Company": "Beta Biosciences",
                "Program": "BB-101",
                "summary": "Early discovery stage program.",
                "evidence": "malformed"
            }
        ]"#,
        "static.json",
    )
    .unwrap();

    Resolver::build(CatalogSet {
        programs,
        timeaware,
        statics,
    })
}

#[test]
fn resolves_timeaware_over_static() {
    let resolver = seeded_resolver();

    // Cosmetic spelling differences must not matter.
    let view = resolver.resolve("acme   therapeutics", "Mega-Degrader");

    assert_eq!(view.summary_text.as_deref(), Some("Dosing ongoing in Phase 1."));
    assert_eq!(view.summary_tier, Some(SummaryTier::TimeAware));
    assert_eq!(
        view.evidence,
        vec![
            EvidenceItem::cited("Q2 Investor Deck", 12),
            EvidenceItem::document_only("Pipeline Page"),
        ]
    );
    assert!(view.as_of.is_some());

    let facts = view.program_facts.expect("program facts should match");
    assert_eq!(facts.company, "Acme Therapeutics");
}

#[test]
fn falls_back_to_static_when_timeaware_is_blank() {
    let resolver = seeded_resolver();

    let view = resolver.resolve("Beta Biosciences", "BB-101");

    assert_eq!(
        view.summary_text.as_deref(),
        Some("Early discovery stage program.")
    );
    assert_eq!(view.summary_tier, Some(SummaryTier::Static));
    // The static record's evidence field was malformed, so it reads as empty.
    assert!(view.evidence.is_empty());
    assert!(view.as_of.is_none());
}

#[test]
fn unknown_selection_resolves_to_explicit_absence() {
    let resolver = seeded_resolver();

    let view = resolver.resolve("Ghost Pharma", "Nothing-1");

    assert!(view.program_facts.is_none());
    assert!(view.summary_text.is_none());
    assert!(view.summary_tier.is_none());
    assert!(view.evidence.is_empty());
}

#[test]
fn selection_lists_feed_the_ui_sorted() {
    let resolver = seeded_resolver();

    assert_eq!(
        resolver.companies(),
        ["Acme Therapeutics", "Beta Biosciences"]
    );
    assert_eq!(
        resolver.programs_for("ACME THERAPEUTICS"),
        ["MegaDegrader®"]
    );
    assert!(resolver.programs_for("Ghost Pharma").is_empty());
}

#[test]
fn rendered_view_follows_the_display_contract() {
    let resolver = seeded_resolver();

    let view = resolver.resolve("Acme Therapeutics", "MegaDegrader®");
    let rendered = render_view("MegaDegrader®", &view);

    // Facts sort case-insensitively regardless of source order.
    let targets_at = rendered.find("Targets:").unwrap();
    let brd4_at = rendered.find("- BRD4").unwrap();
    let kras_at = rendered.find("- kras").unwrap();
    let tnf_at = rendered.find("- TNF").unwrap();
    assert!(targets_at < brd4_at && brd4_at < kras_at && kras_at < tnf_at);

    // Evidence keeps source order and the slide-suffix rule.
    let first = rendered.find("- Q2 Investor Deck, slide 12").unwrap();
    let second = rendered.find("- Pipeline Page").unwrap();
    assert!(first < second);
    assert!(!rendered.contains("Pipeline Page, slide"));
}

#[test]
fn rendered_view_shows_empty_states_not_blanks() {
    let resolver = seeded_resolver();

    let view = resolver.resolve("Ghost Pharma", "Nothing-1");
    let rendered = render_view("Nothing-1", &view);

    assert!(rendered.contains(NO_SUMMARY_TEXT));
    assert!(rendered.contains(NO_EVIDENCE_TEXT));
}

#[test]
fn service_boundary_json_shape() {
    let resolver = seeded_resolver();

    let view = resolver.resolve("Beta Biosciences", "BB-101");
    let json = serde_json::to_value(&view).unwrap();

    assert!(json["programFacts"].is_object());
    assert_eq!(json["summaryText"], "Early discovery stage program.");
    assert!(json["evidence"].as_array().unwrap().is_empty());
}
