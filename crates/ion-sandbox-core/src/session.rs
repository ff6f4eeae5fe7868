#![forbid(unsafe_code)]

//! Result presentation and the overlapping-call discipline.
//!
//! [`ResultView`] is the seam between the outcome state machine and the
//! page: a message area, a severity class on the surrounding container, and
//! a violations container. [`present`] and [`reset`] are the only writers,
//! so the display invariants (previous table always cleared first, exactly
//! one severity active) live in one place.
//!
//! [`ValidationSession`] stamps every validate click with a generation and
//! commits a reply only when it came from the most recently issued call.
//! Superseded calls are not cancelled; their replies are dropped on arrival.

use crate::outcome::{ContractError, Outcome, Severity};
use crate::table::ViolationsTable;

/// Display surface for validation results.
pub trait ResultView {
    /// Swap the active severity class on the result container.
    fn set_severity(&self, severity: Severity);
    /// Replace the result message text.
    fn show_message(&self, text: &str);
    /// Remove any rendered violations table.
    fn clear_violations(&self);
    /// Render a violations table into the violations container.
    fn show_violations(&self, table: &ViolationsTable);
}

/// Render an outcome into the view.
///
/// Previous violations content is cleared before anything else, whether or
/// not the new outcome is `Invalid`.
pub fn present<V: ResultView + ?Sized>(view: &V, outcome: &Outcome) {
    view.clear_violations();
    view.show_message(&outcome.message());
    view.set_severity(outcome.severity());
    if let Outcome::Invalid { violations, .. } = outcome
        && let Some(table) = ViolationsTable::from_records(violations)
    {
        view.show_violations(&table);
    }
}

/// Render a widget/engine contract mismatch into the view.
///
/// Fatal to the validate action: shown with danger styling, no fallback.
pub fn present_contract_error<V: ResultView + ?Sized>(view: &V, error: &ContractError) {
    view.clear_violations();
    view.show_message(&error.to_string());
    view.set_severity(Severity::Danger);
}

/// Return the view to its neutral state (sample change, startup).
pub fn reset<V: ResultView + ?Sized>(view: &V) {
    view.clear_violations();
    view.show_message("");
    view.set_severity(Severity::Primary);
}

/// Identifies one validate click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Latest-call-wins discipline for overlapping engine invocations.
///
/// The original widget let whichever reply resolved last overwrite the
/// display; this replaces that race with an explicit policy: a reply is
/// applied only if no newer call has been issued since.
#[derive(Debug, Default)]
pub struct ValidationSession {
    issued: u64,
}

impl ValidationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new validate click.
    pub fn begin(&mut self) -> Generation {
        self.issued += 1;
        Generation(self.issued)
    }

    /// Whether a reply from `generation` may still be displayed.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.issued
    }
}
