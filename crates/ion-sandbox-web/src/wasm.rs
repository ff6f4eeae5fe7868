#![forbid(unsafe_code)]

//! The JS-facing sandbox widget.
//!
//! The embedding page constructs an [`IonSandbox`] with the engine's
//! `validate` function and calls [`IonSandbox::start`]. Everything else
//! (catalog population, sample application, validation, sharing) happens in
//! response to page events.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use ion_sandbox_core::{
    EditorPanes, Outcome, SampleCatalog, ValidationSession, decode_query, present,
    present_contract_error, reset, share_url,
};
use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, Window};

use crate::engine::Engine;
use crate::page::{
    SNACKBAR_SHOW_CLASS, SNACKBAR_TEXT, SNACKBAR_VISIBLE_MS, SetupError, ids,
};
use crate::surfaces::{AcePane, DomCheckbox, DomResultView, DomTextInput};

static INIT_DIAGNOSTICS: Once = Once::new();

impl From<SetupError> for JsValue {
    fn from(error: SetupError) -> Self {
        JsError::new(&error.to_string()).into()
    }
}

/// Web sandbox widget.
///
/// The page supplies the engine; the widget owns the wiring between the
/// page's collaborators (looked up once, by stable id) and the core model.
#[wasm_bindgen]
pub struct IonSandbox {
    app: Rc<App>,
}

#[wasm_bindgen]
impl IonSandbox {
    /// Build the widget against the current page.
    ///
    /// `validate` is the engine entry point
    /// (`validate(ionText, schemaText, typeName, isDocument)`); it may
    /// return the reply directly or a `Promise` of it.
    #[wasm_bindgen(constructor)]
    pub fn new(validate: Function) -> Result<IonSandbox, JsValue> {
        INIT_DIAGNOSTICS.call_once(|| {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();
        });

        let window = web_sys::window().ok_or(SetupError::NoDocument)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        let schema = AcePane::open(ids::SCHEMA)
            .map_err(|_| SetupError::EditorUnavailable(ids::SCHEMA))?;
        let value = AcePane::open(ids::VALUE)
            .map_err(|_| SetupError::EditorUnavailable(ids::VALUE))?;
        let type_name = DomTextInput::new(input_element(&document, ids::SCHEMA_TYPE)?);
        let document_mode = DomCheckbox::new(input_element(&document, ids::DOCUMENT)?);
        let panes = EditorPanes::new(schema, value, type_name, document_mode);

        let view = DomResultView::new(
            document.clone(),
            element(&document, ids::RESULT)?,
            element(&document, ids::RESULT_PANEL)?,
            element(&document, ids::VIOLATIONS)?,
        );

        let dropdown: HtmlSelectElement = element(&document, ids::EXAMPLES)?
            .dyn_into()
            .map_err(|_| SetupError::WrongElementKind(ids::EXAMPLES))?;
        let snackbar: HtmlElement = element(&document, ids::SNACKBAR)?
            .dyn_into()
            .map_err(|_| SetupError::WrongElementKind(ids::SNACKBAR))?;
        let validate_trigger = element(&document, ids::VALIDATE)?;
        let share_trigger = element(&document, ids::SHARE)?;

        let query = window.location().search().unwrap_or_default();
        let catalog = SampleCatalog::build(decode_query(&query));

        Ok(Self {
            app: Rc::new(App {
                window,
                engine: Engine::new(validate),
                panes,
                view,
                catalog,
                session: RefCell::new(ValidationSession::new()),
                dropdown,
                snackbar,
                validate_trigger,
                share_trigger,
            }),
        })
    }

    /// Populate the dropdown, apply the initial sample, and attach the page
    /// event listeners.
    pub fn start(&self) -> Result<(), JsValue> {
        self.app.populate_dropdown()?;
        self.app.apply_selected_sample();
        App::attach_listeners(&self.app)?;
        Ok(())
    }
}

struct App {
    window: Window,
    engine: Engine,
    panes: EditorPanes<AcePane, DomTextInput, DomCheckbox>,
    view: DomResultView,
    catalog: SampleCatalog,
    session: RefCell<ValidationSession>,
    dropdown: HtmlSelectElement,
    snackbar: HtmlElement,
    validate_trigger: Element,
    share_trigger: Element,
}

impl App {
    fn populate_dropdown(&self) -> Result<(), JsValue> {
        for sample in self.catalog.samples() {
            let option =
                HtmlOptionElement::new_with_text_and_value(&sample.display_name, &sample.id)?;
            self.dropdown.add_with_html_option_element(&option)?;
        }
        self.dropdown
            .set_selected_index(self.catalog.selected() as i32);
        Ok(())
    }

    fn apply_selected_sample(&self) {
        self.panes.apply_sample(self.catalog.selected_sample());
        reset(&self.view);
    }

    fn on_sample_change(&self) {
        if let Some(sample) = self.catalog.get(&self.dropdown.value()) {
            self.panes.apply_sample(sample);
            reset(&self.view);
        }
    }

    /// Kick off one validation. The engine call is awaited off the event
    /// handler; a reply is dropped if another click superseded it.
    fn on_validate(app: &Rc<Self>) {
        let generation = app.session.borrow_mut().begin();
        let state = app.panes.snapshot();
        let app = Rc::clone(app);
        wasm_bindgen_futures::spawn_local(async move {
            let reply = app.engine.validate(&state).await;
            if !app.session.borrow().is_current(generation) {
                tracing::debug!(?generation, "dropping superseded validation reply");
                return;
            }
            let outcome = match reply {
                Ok(raw) => match Outcome::from_reply(raw) {
                    Ok(outcome) => outcome,
                    Err(contract) => {
                        tracing::warn!(%contract, "engine contract mismatch");
                        present_contract_error(&app.view, &contract);
                        return;
                    }
                },
                Err(thrown) => Outcome::EngineError {
                    message: js_error_message(&thrown),
                },
            };
            if let Ok(json) = serde_json::to_string(&outcome) {
                tracing::debug!(outcome = %json, "validation finished");
            }
            present(&app.view, &outcome);
        });
    }

    fn on_share(&self) {
        let state = self.panes.snapshot();
        let href = match self.window.location().href() {
            Ok(href) => href,
            Err(err) => {
                tracing::warn!(?err, "could not read page href");
                return;
            }
        };
        let url = share_url(&href, &state);
        self.show_snackbar();
        let promise = self.window.navigator().clipboard().write_text(&url);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::warn!(?err, "clipboard write failed");
            }
        });
    }

    fn show_snackbar(&self) {
        self.snackbar.set_inner_text(SNACKBAR_TEXT);
        let class_list = self.snackbar.class_list();
        if class_list.add_1(SNACKBAR_SHOW_CLASS).is_err() {
            return;
        }
        let hide = Closure::once_into_js({
            let class_list = class_list.clone();
            move || {
                let _ = class_list.remove_1(SNACKBAR_SHOW_CLASS);
            }
        });
        let scheduled = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.unchecked_ref(),
            SNACKBAR_VISIBLE_MS,
        );
        if let Err(err) = scheduled {
            tracing::warn!(?err, "could not schedule snackbar hide");
        }
    }

    /// Attach the page event listeners. Closures are intentionally leaked:
    /// they live for the lifetime of the page.
    fn attach_listeners(app: &Rc<Self>) -> Result<(), JsValue> {
        let on_validate = {
            let app = Rc::clone(app);
            Closure::<dyn FnMut()>::new(move || App::on_validate(&app))
        };
        app.validate_trigger
            .add_event_listener_with_callback("click", on_validate.as_ref().unchecked_ref())?;
        on_validate.forget();

        let on_share = {
            let app = Rc::clone(app);
            Closure::<dyn FnMut()>::new(move || app.on_share())
        };
        app.share_trigger
            .add_event_listener_with_callback("click", on_share.as_ref().unchecked_ref())?;
        on_share.forget();

        let on_change = {
            let app = Rc::clone(app);
            Closure::<dyn FnMut()>::new(move || app.on_sample_change())
        };
        app.dropdown
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();

        Ok(())
    }
}

fn element(document: &Document, id: &'static str) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or(SetupError::MissingElement(id))
}

fn input_element(document: &Document, id: &'static str) -> Result<HtmlInputElement, SetupError> {
    element(document, id)?
        .dyn_into()
        .map_err(|_| SetupError::WrongElementKind(id))
}

fn js_error_message(thrown: &JsValue) -> String {
    thrown
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| thrown.as_string())
        .unwrap_or_else(|| "validation engine call failed".to_owned())
}
