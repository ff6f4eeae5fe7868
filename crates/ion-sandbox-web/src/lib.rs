#![forbid(unsafe_code)]

//! Web frontend for the Ion Schema sandbox.
//!
//! This crate is intentionally host-specific (web/WASM). It provides a
//! stable `wasm-bindgen` API surface, [`IonSandbox`], that:
//! - builds the sample catalog (including the shared-in-URL entry) from the
//!   page location,
//! - wires the page's editor panes, dropdown, and triggers,
//! - drives the injected validation engine and renders the adapted
//!   [`ion_sandbox_core::Outcome`] into the result area,
//! - produces the shareable link and copies it to the clipboard.
//!
//! All model logic lives in `ion-sandbox-core`; this crate is glue.

pub mod page;

#[cfg(target_arch = "wasm32")]
mod engine;
#[cfg(target_arch = "wasm32")]
mod surfaces;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::IonSandbox;

/// Native builds compile this crate as a stub so `cargo check --workspace`
/// stays green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct IonSandbox;

#[cfg(not(target_arch = "wasm32"))]
impl IonSandbox {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
