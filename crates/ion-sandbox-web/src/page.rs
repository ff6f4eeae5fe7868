#![forbid(unsafe_code)]

//! Page contract: stable element ids, severity class handling, snackbar
//! constants, and the wiring error type.
//!
//! Host-agnostic on purpose: everything here is pure data + logic so it can
//! be tested natively; the DOM calls live in the wasm-only modules.

use std::fmt;

use ion_sandbox_core::Severity;

/// Stable identifiers of the page elements the widget consumes.
pub mod ids {
    /// Schema editor pane.
    pub const SCHEMA: &str = "schema";
    /// Value editor pane.
    pub const VALUE: &str = "value";
    /// Type-name input.
    pub const SCHEMA_TYPE: &str = "schema_type";
    /// Document-mode checkbox.
    pub const DOCUMENT: &str = "document";
    /// Sample-selection dropdown.
    pub const EXAMPLES: &str = "examples";
    /// Validate trigger.
    pub const VALIDATE: &str = "validate";
    /// Share trigger.
    pub const SHARE: &str = "share";
    /// Result message area.
    pub const RESULT: &str = "result";
    /// Result container carrying the severity class.
    pub const RESULT_PANEL: &str = "resultdiv";
    /// Violations table container.
    pub const VIOLATIONS: &str = "violation";
    /// Share confirmation snackbar.
    pub const SNACKBAR: &str = "snackbar";
}

/// Text shown in the snackbar after a share link is copied.
pub const SNACKBAR_TEXT: &str = "Copied to clipboard";

/// Class that makes the snackbar visible.
pub const SNACKBAR_SHOW_CLASS: &str = "show";

/// How long the snackbar stays visible, in milliseconds.
///
/// The page CSS starts its fade-out at 2.5 s and animates for 0.5 s; hiding
/// just before the 3 s mark keeps the box from flashing back after the
/// animation ends.
pub const SNACKBAR_VISIBLE_MS: i32 = 2995;

/// Severity classes present in `class_value` that must be removed before the
/// new one is added, keeping exactly one severity active.
#[must_use]
pub fn severity_classes_to_remove(class_value: &str, next: Severity) -> Vec<String> {
    class_value
        .split_whitespace()
        .filter(|token| token.starts_with(Severity::CLASS_PREFIX) && *token != next.class_name())
        .map(str::to_owned)
        .collect()
}

/// The page is missing a collaborator the widget needs.
///
/// Reported once, from the constructor; never raised during normal
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// `window` or `document` is unavailable.
    NoDocument,
    /// No element with the given id.
    MissingElement(&'static str),
    /// The element exists but is not the expected kind of control.
    WrongElementKind(&'static str),
    /// The Ace editor global is unavailable or the pane could not be opened.
    EditorUnavailable(&'static str),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "no window/document available"),
            Self::MissingElement(id) => write!(f, "page element #{id} not found"),
            Self::WrongElementKind(id) => {
                write!(f, "page element #{id} is not the expected control")
            }
            Self::EditorUnavailable(id) => {
                write!(f, "editor component unavailable for #{id}")
            }
        }
    }
}

impl std::error::Error for SetupError {}
