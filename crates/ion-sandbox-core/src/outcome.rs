#![forbid(unsafe_code)]

//! Engine reply adaptation and the outcome taxonomy.
//!
//! The engine has shipped two reply shapes: the current contract exposes a
//! structured `violations()` sequence, the legacy contract a single
//! `violation()` message. The host crate probes which one a reply supports
//! and hands either to [`Outcome::from_reply`] as a [`ViolationsPayload`];
//! from there on the widget only ever sees the tagged [`Outcome`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column name used when adapting a legacy single-message reply into a
/// one-field violation record.
pub const LEGACY_VIOLATION_COLUMN: &str = "violation";

/// One structured explanation of a nonconformance.
///
/// An ordered mapping from column name to cell value. Records in one reply
/// are not guaranteed to share a key set or key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    fields: Vec<(String, String)>,
}

impl Violation {
    /// Build a record from `(column, cell)` pairs, preserving their order.
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The `(column, cell)` pairs in record order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Column names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Cell values in record order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }
}

/// The violations portion of an engine reply, in whichever shape the engine
/// supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationsPayload {
    /// Current contract: a sequence of multi-column records.
    Structured(Vec<Violation>),
    /// Legacy contract: one free-text explanation.
    Legacy(String),
}

/// An engine reply, read once and converted to owned data.
///
/// `payload` is `None` when the reply exposes neither violations interface;
/// that only matters on the non-conforming path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub has_error: bool,
    pub error: String,
    pub conforms: bool,
    pub rendered: String,
    pub payload: Option<ViolationsPayload>,
}

/// The widget and the engine disagree about the reply shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Neither `violations()` nor `violation()` is available.
    MissingViolationsInterface,
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingViolationsInterface => write!(
                f,
                "validation engine reply exposes neither violations() nor violation(); \
                 the widget and engine versions are incompatible"
            ),
        }
    }
}

impl std::error::Error for ContractError {}

/// The three-way result of one validation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The value conforms to the schema type.
    Valid { rendered: String },
    /// The value does not conform; `violations` may be empty.
    Invalid {
        rendered: String,
        violations: Vec<Violation>,
    },
    /// The engine could not evaluate the input at all.
    EngineError { message: String },
}

impl Outcome {
    /// Convert an engine reply into an outcome.
    ///
    /// Errors only on the non-conforming path when the reply carries no
    /// violations interface at all; that mismatch is fatal to the validate
    /// action, never silently papered over.
    pub fn from_reply(reply: RawReply) -> Result<Self, ContractError> {
        if reply.has_error {
            return Ok(Self::EngineError {
                message: reply.error,
            });
        }
        if reply.conforms {
            return Ok(Self::Valid {
                rendered: reply.rendered,
            });
        }
        match reply.payload {
            Some(ViolationsPayload::Structured(violations)) => Ok(Self::Invalid {
                rendered: reply.rendered,
                violations,
            }),
            Some(ViolationsPayload::Legacy(message)) => Ok(Self::Invalid {
                rendered: reply.rendered,
                violations: vec![Violation::new([(LEGACY_VIOLATION_COLUMN, message)])],
            }),
            None => Err(ContractError::MissingViolationsInterface),
        }
    }

    /// The severity projection used for display.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Valid { .. } => Severity::Success,
            Self::Invalid { .. } => Severity::Warning,
            Self::EngineError { .. } => Severity::Danger,
        }
    }

    /// The message shown in the result area.
    ///
    /// Engine error text is reproduced verbatim.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Valid { rendered } => format!("{rendered} is valid!"),
            Self::Invalid { rendered, .. } => format!("{rendered} is invalid!"),
            Self::EngineError { message } => message.clone(),
        }
    }
}

/// Visual category attached to the displayed outcome.
///
/// `Primary` is the neutral state before any validation has run and after a
/// sample change. Exactly one severity is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Prefix shared by all severity CSS classes on the result container.
    pub const CLASS_PREFIX: &'static str = "bs-callout-";

    /// The CSS class carried by the result container for this severity.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "bs-callout-primary",
            Self::Success => "bs-callout-success",
            Self::Warning => "bs-callout-warning",
            Self::Danger => "bs-callout-danger",
        }
    }
}
