#![forbid(unsafe_code)]

//! Editor surface seams and the panes controller.
//!
//! The page's text panes, type input, and document-mode toggle are opaque
//! external collaborators. The controller never caches their content: every
//! [`EditorPanes::snapshot`] reads the live values, so edits made outside the
//! widget are always reflected.

use serde::{Deserialize, Serialize};

use crate::sample::{Sample, trim_indent};

/// A gettable/settable text surface (an editor pane or a plain input).
pub trait TextSurface {
    /// Current text content.
    fn read(&self) -> String;
    /// Replace the text content.
    fn write(&self, text: &str);
}

/// A readable on/off control (the document-mode checkbox).
pub trait ToggleSurface {
    /// Whether the toggle is currently on.
    fn is_on(&self) -> bool;
}

/// Live editor state, captured at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    pub schema: String,
    pub value: String,
    pub type_name: String,
    pub document_mode: bool,
}

/// The widget's four injected surfaces.
#[derive(Debug)]
pub struct EditorPanes<S, T, D> {
    schema: S,
    value: S,
    type_name: T,
    document_mode: D,
}

impl<S, T, D> EditorPanes<S, T, D>
where
    S: TextSurface,
    T: TextSurface,
    D: ToggleSurface,
{
    /// Take ownership of the page surfaces.
    pub fn new(schema: S, value: S, type_name: T, document_mode: D) -> Self {
        Self {
            schema,
            value,
            type_name,
            document_mode,
        }
    }

    /// Write a sample into the surfaces.
    ///
    /// Schema and value texts are indent-trimmed on the way in; the
    /// document-mode toggle is left untouched. Callers pair this with
    /// [`crate::session::reset`] so any previously displayed outcome is
    /// cleared.
    pub fn apply_sample(&self, sample: &Sample) {
        self.schema.write(&trim_indent(&sample.schema));
        self.value.write(&trim_indent(&sample.value));
        self.type_name.write(&sample.type_name);
    }

    /// Read the live values from all four surfaces.
    #[must_use]
    pub fn snapshot(&self) -> EditorState {
        EditorState {
            schema: self.schema.read(),
            value: self.value.read(),
            type_name: self.type_name.read(),
            document_mode: self.document_mode.is_on(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSurface {
        text: RefCell<String>,
    }

    impl TextSurface for &FakeSurface {
        fn read(&self) -> String {
            self.text.borrow().clone()
        }

        fn write(&self, text: &str) {
            *self.text.borrow_mut() = text.to_owned();
        }
    }

    #[derive(Default)]
    struct FakeToggle {
        on: Cell<bool>,
    }

    impl ToggleSurface for &FakeToggle {
        fn is_on(&self) -> bool {
            self.on.get()
        }
    }

    fn sample() -> Sample {
        Sample {
            id: "s".to_owned(),
            display_name: "S".to_owned(),
            schema: "\n    type::{\n      name: t,\n    }".to_owned(),
            value: "    1".to_owned(),
            type_name: "t".to_owned(),
        }
    }

    #[test]
    fn apply_sample_writes_trimmed_texts() {
        let (schema, value, type_name) = (
            FakeSurface::default(),
            FakeSurface::default(),
            FakeSurface::default(),
        );
        let toggle = FakeToggle::default();
        let panes = EditorPanes::new(&schema, &value, &type_name, &toggle);

        panes.apply_sample(&sample());
        assert_eq!(*schema.text.borrow(), "type::{\n  name: t,\n}");
        assert_eq!(*value.text.borrow(), "1");
        assert_eq!(*type_name.text.borrow(), "t");
    }

    #[test]
    fn snapshot_reads_live_values_not_cached_ones() {
        let (schema, value, type_name) = (
            FakeSurface::default(),
            FakeSurface::default(),
            FakeSurface::default(),
        );
        let toggle = FakeToggle::default();
        let panes = EditorPanes::new(&schema, &value, &type_name, &toggle);

        panes.apply_sample(&sample());
        // An edit made behind the controller's back is still observed.
        *value.text.borrow_mut() = "edited".to_owned();
        toggle.on.set(true);

        let state = panes.snapshot();
        assert_eq!(state.value, "edited");
        assert_eq!(state.type_name, "t");
        assert!(state.document_mode);
    }
}
