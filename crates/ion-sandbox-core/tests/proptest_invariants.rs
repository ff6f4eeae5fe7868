//! Property-based invariant tests for ion-sandbox-core.
//!
//! These tests verify structural invariants that must hold for **any** input:
//!
//! 1. The share-link codec round-trips arbitrary editor text exactly.
//! 2. The sample catalog places the shared sample first (and only when an
//!    override exists).
//! 3. `trim_indent` output never contains blank lines and never keeps a
//!    common indent.
//! 4. The violations table always has one row per record.

use ion_sandbox_core::{
    EditorState, SHARED_SAMPLE_ID, Sample, SampleCatalog, UrlOverride, Violation, ViolationsTable,
    decode_query, share_url, trim_indent,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Arbitrary editor text: Unicode, query-reserved characters, newlines.
fn editor_text() -> impl Strategy<Value = String> {
    prop_oneof![
        ".*",
        "[ -~]*",
        r"[a-z&=+?#%\n ]*",
        Just("type::{\n  name: t,\n}".to_owned()),
    ]
}

fn query_of(url: &str) -> &str {
    url.split_once('?').map_or("", |(_, q)| q)
}

// ── Share codec ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn share_round_trip_is_lossless(
        schema in editor_text(),
        value in editor_text(),
        type_name in editor_text(),
    ) {
        let state = EditorState {
            schema: schema.clone(),
            value: value.clone(),
            type_name: type_name.clone(),
            document_mode: false,
        };
        let url = share_url("https://example.com/sandbox", &state);
        match decode_query(query_of(&url)) {
            Some(decoded) => {
                prop_assert_eq!(decoded.schema, schema);
                prop_assert_eq!(decoded.value, value);
                prop_assert_eq!(decoded.type_name, type_name);
            }
            // None is only legal when every field was empty.
            None => {
                prop_assert!(schema.is_empty() && value.is_empty() && type_name.is_empty());
            }
        }
    }

    #[test]
    fn share_url_has_exactly_one_query_marker(
        schema in editor_text(),
        value in editor_text(),
    ) {
        let state = EditorState { schema, value, ..EditorState::default() };
        let url = share_url("https://example.com/sandbox?schema=stale&value=stale", &state);
        prop_assert_eq!(url.matches('?').count(), 1);
        prop_assert!(url.starts_with("https://example.com/sandbox?schema="));
    }
}

// ── Sample catalog ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn catalog_places_shared_sample_first(
        schema in ".*",
        value in ".*",
        type_name in ".*",
    ) {
        let catalog = SampleCatalog::build(Some(UrlOverride {
            schema: schema.clone(),
            value: value.clone(),
            type_name: type_name.clone(),
        }));
        let shared: &Sample = catalog.selected_sample();
        prop_assert_eq!(catalog.selected(), 0);
        prop_assert_eq!(shared.id.as_str(), SHARED_SAMPLE_ID);
        prop_assert_eq!(shared.schema.as_str(), schema.as_str());
        prop_assert_eq!(shared.value.as_str(), value.as_str());
        prop_assert_eq!(shared.type_name.as_str(), type_name.as_str());
        // Exactly one shared entry, ever.
        let shared_count = catalog
            .samples()
            .iter()
            .filter(|s| s.id == SHARED_SAMPLE_ID)
            .count();
        prop_assert_eq!(shared_count, 1);
    }
}

#[test]
fn catalog_without_override_never_contains_shared_sample() {
    let catalog = SampleCatalog::build(None);
    assert!(catalog.samples().iter().all(|s| s.id != SHARED_SAMPLE_ID));
}

// ── Indent trimming ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn trim_indent_output_has_no_blank_lines(text in ".*") {
        let trimmed = trim_indent(&text);
        if !trimmed.is_empty() {
            // Whitespace-only input lines may collapse to "", but zero-length
            // input lines are dropped before trimming.
            let originals: Vec<&str> =
                text.split('\n').filter(|l| !l.is_empty()).collect();
            prop_assert_eq!(trimmed.split('\n').count(), originals.len());
        }
    }

    #[test]
    fn trim_indent_removes_the_whole_common_indent(
        indent in 0usize..8,
        body in "[a-z][a-z ]{0,10}",
    ) {
        let text = format!(
            "{pad}{body}\n{pad}  nested\n",
            pad = " ".repeat(indent),
            body = body,
        );
        let trimmed = trim_indent(&text);
        let first = trimmed.split('\n').next().unwrap();
        prop_assert!(!first.starts_with(' '));
        prop_assert!(trimmed.contains("\n  nested"));
    }
}

// ── Violations table ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn table_has_one_row_per_record(
        keys in proptest::collection::vec("[a-z]{1,8}", 1..5),
        records in 1usize..6,
    ) {
        let violations: Vec<Violation> = (0..records)
            .map(|i| {
                Violation::new(
                    keys.iter()
                        .map(|k| (k.clone(), format!("cell{i}"))),
                )
            })
            .collect();
        let table = ViolationsTable::from_records(&violations).unwrap();
        prop_assert_eq!(table.header().len(), keys.len());
        prop_assert_eq!(table.rows().len(), records);
        for row in table.rows() {
            prop_assert_eq!(row.len(), keys.len());
        }
    }
}
