//! Adapter around the injected JS validation engine.
//!
//! The engine is a single function
//! `validate(ionText, schemaText, typeName, isDocument) -> reply`. The reply
//! is an opaque JS object whose methods are probed via `Reflect`: every
//! reply exposes `has_error()`, `error()`, `result()`, and `value()`, and
//! either `violations()` (current contract, a sequence of records) or
//! `violation()` (legacy contract, one message). Both shapes are read once
//! here and converted into the core's owned [`RawReply`].

use ion_sandbox_core::{EditorState, RawReply, Violation, ViolationsPayload};
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// The injected engine entry point.
pub(crate) struct Engine {
    validate: Function,
}

impl Engine {
    pub(crate) fn new(validate: Function) -> Self {
        Self { validate }
    }

    /// Run one validation and read the reply into owned data.
    ///
    /// If the engine returns a `Promise` (the reference page resolves its
    /// WASM module's `init()` first), the reply is awaited; a synchronous
    /// engine works unchanged. A JS exception from the engine is returned as
    /// the `Err` value and surfaced like any other engine failure.
    pub(crate) async fn validate(&self, state: &EditorState) -> Result<RawReply, JsValue> {
        let args = Array::of4(
            &JsValue::from_str(&state.value),
            &JsValue::from_str(&state.schema),
            &JsValue::from_str(&state.type_name),
            &JsValue::from_bool(state.document_mode),
        );
        let reply = self.validate.apply(&JsValue::NULL, &args)?;
        let reply = match reply.dyn_into::<Promise>() {
            Ok(promise) => JsFuture::from(promise).await?,
            Err(value) => value,
        };
        read_reply(&reply)
    }
}

/// Read a reply object into a [`RawReply`].
pub(crate) fn read_reply(reply: &JsValue) -> Result<RawReply, JsValue> {
    Ok(RawReply {
        has_error: call_bool(reply, "has_error")?,
        error: call_string(reply, "error")?,
        conforms: call_bool(reply, "result")?,
        rendered: call_string(reply, "value")?,
        payload: read_violations(reply)?,
    })
}

/// Probe which violations contract the reply supports and read it.
fn read_violations(reply: &JsValue) -> Result<Option<ViolationsPayload>, JsValue> {
    if let Some(violations) = method(reply, "violations")? {
        let records = violations
            .call0(reply)?
            .dyn_into::<Array>()
            .unwrap_or_else(|_| Array::new());
        let adapted = records.iter().map(|record| read_record(&record)).collect();
        return Ok(Some(ViolationsPayload::Structured(adapted)));
    }
    if let Some(violation) = method(reply, "violation")? {
        let message = violation.call0(reply)?;
        return Ok(Some(ViolationsPayload::Legacy(scalar_to_string(&message))));
    }
    Ok(None)
}

/// One violation record: an object's own enumerable entries, in insertion
/// order. A non-object record collapses to a single descriptive cell.
fn read_record(record: &JsValue) -> Violation {
    if record.is_object() {
        let entries = Object::entries(record.unchecked_ref());
        Violation::new(entries.iter().map(|entry| {
            let entry: &Array = entry.unchecked_ref();
            (scalar_to_string(&entry.get(0)), scalar_to_string(&entry.get(1)))
        }))
    } else {
        Violation::new([("violation", scalar_to_string(record))])
    }
}

/// Look a method up on the reply (prototype chain included).
fn method(reply: &JsValue, name: &str) -> Result<Option<Function>, JsValue> {
    let member = Reflect::get(reply, &JsValue::from_str(name))?;
    Ok(member.dyn_into::<Function>().ok())
}

fn call_bool(reply: &JsValue, name: &str) -> Result<bool, JsValue> {
    let member = method(reply, name)?
        .ok_or_else(|| JsValue::from_str(&format!("engine reply has no {name}() method")))?;
    Ok(member.call0(reply)?.is_truthy())
}

fn call_string(reply: &JsValue, name: &str) -> Result<String, JsValue> {
    let member = method(reply, name)?
        .ok_or_else(|| JsValue::from_str(&format!("engine reply has no {name}() method")))?;
    Ok(scalar_to_string(&member.call0(reply)?))
}

/// Render a scalar cell value the way JS string coercion would.
fn scalar_to_string(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(number) = value.as_f64() {
        return number.to_string();
    }
    if let Some(flag) = value.as_bool() {
        return flag.to_string();
    }
    if value.is_null() {
        return "null".to_owned();
    }
    if value.is_undefined() {
        return String::new();
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default()
}
