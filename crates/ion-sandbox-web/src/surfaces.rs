//! DOM implementations of the core surface and view traits.
//!
//! Each type wraps exactly one page collaborator and does nothing beyond
//! get/set content: the Ace panes via the global `ace.edit` handle, the type
//! input and document checkbox via `HtmlInputElement`, and the result area
//! via three elements (message, severity container, violations container).

use ion_sandbox_core::{ResultView, Severity, TextSurface, ToggleSurface, ViolationsTable};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};

use crate::page::severity_classes_to_remove;

#[wasm_bindgen]
extern "C" {
    /// Handle to one Ace editor instance.
    type AceEditor;

    #[wasm_bindgen(catch, js_namespace = ace, js_name = edit)]
    fn ace_edit(id: &str) -> Result<AceEditor, JsValue>;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &AceEditor) -> String;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &AceEditor, text: &str, cursor: i32);
}

/// An Ace editor pane.
pub(crate) struct AcePane {
    editor: AceEditor,
}

impl AcePane {
    /// Open the Ace pane mounted on the element with the given id.
    pub(crate) fn open(id: &str) -> Result<Self, JsValue> {
        Ok(Self {
            editor: ace_edit(id)?,
        })
    }
}

impl TextSurface for AcePane {
    fn read(&self) -> String {
        self.editor.get_value()
    }

    fn write(&self, text: &str) {
        // -1 places the cursor at the start instead of selecting everything.
        self.editor.set_value(text, -1);
    }
}

/// A plain text input.
pub(crate) struct DomTextInput {
    input: HtmlInputElement,
}

impl DomTextInput {
    pub(crate) fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl TextSurface for DomTextInput {
    fn read(&self) -> String {
        self.input.value()
    }

    fn write(&self, text: &str) {
        self.input.set_value(text);
    }
}

/// A checkbox input.
pub(crate) struct DomCheckbox {
    input: HtmlInputElement,
}

impl DomCheckbox {
    pub(crate) fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl ToggleSurface for DomCheckbox {
    fn is_on(&self) -> bool {
        self.input.checked()
    }
}

/// The result area: message element, severity container, and violations
/// container.
pub(crate) struct DomResultView {
    document: Document,
    message: Element,
    panel: Element,
    violations: Element,
}

impl DomResultView {
    pub(crate) fn new(
        document: Document,
        message: Element,
        panel: Element,
        violations: Element,
    ) -> Self {
        Self {
            document,
            message,
            panel,
            violations,
        }
    }

    /// Append a `<tr>` of `tag` cells to `table`.
    fn append_row(&self, table: &Element, tag: &str, cells: &[String]) -> Result<(), JsValue> {
        let row = self.document.create_element("tr")?;
        for cell in cells {
            let elem = self.document.create_element(tag)?;
            elem.set_text_content(Some(cell));
            row.append_child(&elem)?;
        }
        table.append_child(&row)?;
        Ok(())
    }

    fn build_table(&self, table_model: &ViolationsTable) -> Result<(), JsValue> {
        let table = self.document.create_element("table")?;
        self.append_row(&table, "th", table_model.header())?;
        for row in table_model.rows() {
            self.append_row(&table, "td", row)?;
        }
        self.violations.append_child(&table)?;
        Ok(())
    }
}

impl ResultView for DomResultView {
    fn set_severity(&self, severity: Severity) {
        let class_list = self.panel.class_list();
        for stale in severity_classes_to_remove(&class_list.value(), severity) {
            let _ = class_list.remove_1(&stale);
        }
        if let Err(err) = class_list.add_1(severity.class_name()) {
            tracing::warn!(?err, "could not apply severity class");
        }
    }

    fn show_message(&self, text: &str) {
        self.message.set_text_content(Some(text));
    }

    fn clear_violations(&self) {
        self.violations.set_text_content(None);
    }

    fn show_violations(&self, table: &ViolationsTable) {
        if let Err(err) = self.build_table(table) {
            tracing::warn!(?err, "could not render violations table");
        }
    }
}
