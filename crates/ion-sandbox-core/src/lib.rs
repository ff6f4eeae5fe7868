#![forbid(unsafe_code)]

//! Host-agnostic model for the Ion Schema sandbox.
//!
//! `ion-sandbox-core` is the platform-independent half of the sandbox widget.
//! It owns everything that can be reasoned about without a browser:
//!
//! - **Samples**: the built-in example catalog plus the entry synthesized
//!   from a shared URL.
//! - **Share codec**: lossless encode/decode between editor state and the
//!   query parameters of a shareable link.
//! - **Editor surfaces**: trait seams over the page's text panes and toggle,
//!   so the controller reads live content on demand instead of caching it.
//! - **Outcomes**: adaptation of both engine reply generations (structured
//!   `violations()` and legacy `violation()`) into one tagged [`Outcome`],
//!   with the severity projection used for display.
//! - **Violations table**: the dynamically-shaped report model for the
//!   invalid case.
//! - **Session**: the generation discipline that keeps overlapping engine
//!   calls from overwriting a newer result with a stale one.
//!
//! # Design principles
//!
//! - **No I/O**: all types are pure data + logic; the host crate supplies the
//!   page, the editor component, and the engine.
//! - **Deterministic**: the same inputs always produce the same catalog,
//!   URL, outcome, and table.
//! - **`#![forbid(unsafe_code)]`**: safety enforced at compile time.

pub mod editor;
pub mod outcome;
pub mod sample;
pub mod session;
pub mod share;
pub mod table;

pub use editor::{EditorPanes, EditorState, TextSurface, ToggleSurface};
pub use outcome::{ContractError, Outcome, RawReply, Severity, Violation, ViolationsPayload};
pub use sample::{
    SHARED_SAMPLE_ID, SHARED_SAMPLE_NAME, Sample, SampleCatalog, UrlOverride, trim_indent,
};
pub use session::{Generation, ResultView, ValidationSession, present, present_contract_error, reset};
pub use share::{decode_query, share_url};
pub use table::ViolationsTable;
