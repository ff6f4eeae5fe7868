#![forbid(unsafe_code)]

//! Share-link codec.
//!
//! Encodes editor state into the `schema`/`value`/`type` query parameters of
//! a shareable URL and decodes them back. The round-trip is lossless for any
//! text, including empty strings, newlines, and reserved URL characters.
//!
//! Decoding follows `URLSearchParams` semantics: `+` decodes as a space,
//! `%xx` sequences are percent-decoded, and the first occurrence of a
//! repeated parameter wins. A parameter that is present but empty counts as
//! absent.

use crate::editor::EditorState;
use crate::sample::UrlOverride;

/// Query parameter carrying the schema text.
pub const PARAM_SCHEMA: &str = "schema";
/// Query parameter carrying the candidate value text.
pub const PARAM_VALUE: &str = "value";
/// Query parameter carrying the type name.
pub const PARAM_TYPE: &str = "type";

/// Build a shareable URL from the page href and the current editor state.
///
/// Any pre-existing query string on `page_href` is discarded; the three
/// fields are percent-escaped into fresh parameters.
#[must_use]
pub fn share_url(page_href: &str, state: &EditorState) -> String {
    let base = page_href
        .split_once('?')
        .map_or(page_href, |(base, _)| base);
    format!(
        "{base}?{PARAM_SCHEMA}={}&{PARAM_VALUE}={}&{PARAM_TYPE}={}",
        urlencoding::encode(&state.schema),
        urlencoding::encode(&state.value),
        urlencoding::encode(&state.type_name),
    )
}

/// Decode a page query string into a [`UrlOverride`].
///
/// Returns `None` when none of the three parameters decodes to a non-empty
/// value; otherwise the missing fields default to the empty string.
#[must_use]
pub fn decode_query(query: &str) -> Option<UrlOverride> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut schema: Option<String> = None;
    let mut value: Option<String> = None;
    let mut type_name: Option<String> = None;

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (name, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let slot = match name {
            PARAM_SCHEMA => &mut schema,
            PARAM_VALUE => &mut value,
            PARAM_TYPE => &mut type_name,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(decode_component(raw));
        }
    }

    let schema = schema.unwrap_or_default();
    let value = value.unwrap_or_default();
    let type_name = type_name.unwrap_or_default();
    if schema.is_empty() && value.is_empty() && type_name.is_empty() {
        None
    } else {
        Some(UrlOverride {
            schema,
            value,
            type_name,
        })
    }
}

/// Decode one query parameter value.
///
/// Invalid percent sequences fall back to the raw text: decoding always
/// succeeds structurally, and garbage input surfaces later as an engine
/// error.
fn decode_component(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    match urlencoding::decode(&plus_as_space) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_as_space,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(schema: &str, value: &str, type_name: &str) -> EditorState {
        EditorState {
            schema: schema.to_owned(),
            value: value.to_owned(),
            type_name: type_name.to_owned(),
            document_mode: false,
        }
    }

    fn query_of(url: &str) -> &str {
        url.split_once('?').map_or("", |(_, q)| q)
    }

    #[test]
    fn share_url_discards_existing_query() {
        let url = share_url(
            "https://example.com/sandbox?schema=old",
            &state("a", "b", "c"),
        );
        assert_eq!(url, "https://example.com/sandbox?schema=a&value=b&type=c");
    }

    #[test]
    fn round_trip_reserved_characters() {
        let s = state("a&b=c", "x?y#z", "t+u v");
        let url = share_url("https://example.com/", &s);
        let decoded = decode_query(query_of(&url)).unwrap();
        assert_eq!(decoded.schema, "a&b=c");
        assert_eq!(decoded.value, "x?y#z");
        assert_eq!(decoded.type_name, "t+u v");
    }

    #[test]
    fn round_trip_newlines_and_multibyte() {
        let s = state("line1\nline2\n", "héllo wörld \u{1F980}", "ty");
        let url = share_url("https://example.com/", &s);
        let decoded = decode_query(query_of(&url)).unwrap();
        assert_eq!(decoded.schema, s.schema);
        assert_eq!(decoded.value, s.value);
        assert_eq!(decoded.type_name, s.type_name);
    }

    #[test]
    fn decode_absent_parameters_is_none() {
        assert_eq!(decode_query(""), None);
        assert_eq!(decode_query("?"), None);
        assert_eq!(decode_query("other=1&unrelated=2"), None);
    }

    #[test]
    fn decode_empty_valued_parameters_is_none() {
        // `?schema=` carries no state; matches the original's truthiness test.
        assert_eq!(decode_query("schema=&value=&type="), None);
    }

    #[test]
    fn decode_partial_parameters_defaults_the_rest() {
        let decoded = decode_query("value=1").unwrap();
        assert_eq!(decoded.schema, "");
        assert_eq!(decoded.value, "1");
        assert_eq!(decoded.type_name, "");
    }

    #[test]
    fn decode_plus_as_space() {
        let decoded = decode_query("schema=a+b").unwrap();
        assert_eq!(decoded.schema, "a b");
    }

    #[test]
    fn decode_first_occurrence_wins() {
        let decoded = decode_query("schema=first&schema=second").unwrap();
        assert_eq!(decoded.schema, "first");
    }

    #[test]
    fn decode_invalid_percent_sequence_falls_back_to_raw() {
        let decoded = decode_query("schema=%zz").unwrap();
        assert_eq!(decoded.schema, "%zz");
    }
}
