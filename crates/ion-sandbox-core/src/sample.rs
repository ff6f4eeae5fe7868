#![forbid(unsafe_code)]

//! Sample catalog: the built-in examples and the entry synthesized from a
//! shared URL.
//!
//! The catalog is built once at startup. Built-in samples are a declarative
//! const table; the only dynamic entry is the shared-in-URL sample, which is
//! prepended (and pre-selected) when the page query string carries editor
//! state.

use serde::{Deserialize, Serialize};

/// Fixed id of the sample synthesized from the page URL.
pub const SHARED_SAMPLE_ID: &str = "shared_in_url";

/// Display name of the sample synthesized from the page URL.
pub const SHARED_SAMPLE_NAME: &str = "(Shared in URL)";

/// One named example: a schema, a candidate value, and the type to validate
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Unique id, used as the dropdown option value.
    pub id: String,
    /// Human-readable name shown in the dropdown.
    pub display_name: String,
    /// Schema text (indent-trimmed when written into a surface).
    pub schema: String,
    /// Candidate value text (indent-trimmed when written into a surface).
    pub value: String,
    /// Name of the schema type the value is validated against.
    pub type_name: String,
}

/// Editor state decoded from the page query string.
///
/// If any of the three parameters is present with a non-empty value, all
/// three are considered supplied; the missing ones default to the empty
/// string, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOverride {
    pub schema: String,
    pub value: String,
    pub type_name: String,
}

/// Built-in sample table. Kept as structured fields rather than assembled
/// strings so the texts stay readable and diffable.
struct BuiltinSample {
    id: &'static str,
    display_name: &'static str,
    schema: &'static str,
    value: &'static str,
    type_name: &'static str,
}

const BUILTIN_SAMPLES: &[BuiltinSample] = &[
    BuiltinSample {
        id: "simpleTypeDefinition",
        display_name: "Simple Type Definition",
        schema: r#"
            $ion_schema_2_0
            type::{
              name: short_string,
              type: string,
              codepoint_length: range::[1, 10],
            }
        "#,
        value: r#""Hello World!""#,
        type_name: "short_string",
    },
    BuiltinSample {
        id: "typeDefinitionWithFields",
        display_name: "Type Definition with fields",
        schema: r#"
            $ion_schema_2_0
            type::{
              name: customer,
              type: struct,
              fields: closed::{
                firstName: { type: string, occurs: required },
                middleName: string,
                lastName: { type: string, occurs: required },
                age: { type: int, valid_values: range::[1, max], }
              }
            }"#,
        value: r#"{ firstName: "John", lastName: "Doe", age: -5 }"#,
        type_name: "customer",
    },
    BuiltinSample {
        id: "typeDefinitionWithLogicConstraints",
        display_name: "Type Definition with logic constraints",
        schema: r#"
            $ion_schema_2_0
            type::{
              name: string_or_bool,
              any_of: [string, bool],
            }"#,
        value: "hi",
        type_name: "string_or_bool",
    },
    BuiltinSample {
        id: "versionedType",
        display_name: "Versioned Type",
        schema: r#"
            $ion_schema_2_0
            type::{
              // The 'widget' type includes all versions of widgets
              name: widget,
              any_of: [widget_v1, widget_v2],
            }
            type::{
              // The 'widget_latest' type is an alias that always points to the latest version of widget
              name: widget_latest,
              type: widget_v2,
            }
            type::{
              name: widget_v1,
              fields: closed::{
                name: string,
                part_id: int,
                component_ids: { type: list, element: int }
              }
            }
            type::{
              name: widget_v2,
              fields: closed::{
                name: string,
                // widget_v2 has a string for the part_id
                part_id: string,
                component_ids: {
                  type: list,
                  // widget_v2s can still be constructed using v1 components,
                  // so this can be either a string or an int
                  element: { one_of: [string, int] }
                }
              }
            }
            "#,
        value: r#"
            // Try validating this as widget, widget_latest, widget_v1, and widget_v2
            {
              name: "WidgetFoo",
              part_id: "177bfe43-e702-44a6-9625-f5eec025ec94",
              component_ids: [
                1843,
                623,
                "a890c9ca-1ed4-4f82-b1c7-272a50e256d1"
              ],
            }
        "#,
        type_name: "widget",
    },
    BuiltinSample {
        id: "nestedStructs",
        display_name: "Nested structs",
        schema: r#"
            $ion_schema_2_0
            type::{
              name: non_negative_int,
              valid_values: range::[0, max],
            }
            
            type::{
              name: package_metadata,
              fields: closed::{
                component_namespace: {
                  occurs: required,
                  type: string,
                },
                component_name: {
                  occurs: required,
                  type: string,
                },
                version: {
                  fields: closed::{
                    major: non_negative_int,
                    minor: non_negative_int,
                    patch: non_negative_int,
                  }
                },
                licenses: {
                  // Expected to be a list of SPDX license identifiers
                  occurs: required,
                  type: list,
                  container_length: range::[1, max],
                  element: string,
                }
              }
            }"#,
        value: r#"
            {
              component_namespace: "com.amazon.ion",
              component_name: "ion-schema-kotlin",
              version: { major: 1, minor: 6, patch: 1 },
              licenses: ["Apache-2.0"],
            }
        "#,
        type_name: "package_metadata",
    },
];

/// Ordered sample list with a pre-selected entry.
///
/// With a [`UrlOverride`], the shared sample sits ahead of all built-ins and
/// is the selected entry; otherwise the built-ins appear in declaration
/// order with the first selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCatalog {
    samples: Vec<Sample>,
    selected: usize,
}

impl SampleCatalog {
    /// Build the catalog, injecting the shared-in-URL sample when present.
    #[must_use]
    pub fn build(url_override: Option<UrlOverride>) -> Self {
        let mut samples = Vec::with_capacity(BUILTIN_SAMPLES.len() + 1);
        if let Some(shared) = url_override {
            samples.push(Sample {
                id: SHARED_SAMPLE_ID.to_owned(),
                display_name: SHARED_SAMPLE_NAME.to_owned(),
                schema: shared.schema,
                value: shared.value,
                type_name: shared.type_name,
            });
        }
        samples.extend(BUILTIN_SAMPLES.iter().map(|b| Sample {
            id: b.id.to_owned(),
            display_name: b.display_name.to_owned(),
            schema: b.schema.to_owned(),
            value: b.value.to_owned(),
            type_name: b.type_name.to_owned(),
        }));
        Self {
            samples,
            selected: 0,
        }
    }

    /// All samples in display order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Index of the initially selected entry.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The initially selected sample.
    #[must_use]
    pub fn selected_sample(&self) -> &Sample {
        &self.samples[self.selected]
    }

    /// Look a sample up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.id == id)
    }
}

/// Remove the common minimal indent from every line of `text`.
///
/// Blank (zero-length) lines are dropped entirely and do not affect the
/// detected indent level; whitespace-only lines are kept and stripped.
#[must_use]
pub fn trim_indent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').filter(|l| !l.is_empty()).collect();
    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|l| l.get(indent..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}
