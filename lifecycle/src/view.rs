//! Render rules shared by the terminal and web front ends.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::model::Complaint;
use crate::state::Status;

/// Shown in place of the list when the last fetch returned nothing.
pub const EMPTY_MESSAGE: &str = "No complaints available.";
/// Text equivalent of the loading indicator.
pub const LOADING_MESSAGE: &str = "Loading complaints...";
pub const SUBMIT_LABEL: &str = "Submit Complaint";
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// What the list region should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Items(&'a [Complaint]),
}

/// Pick the list region from the current status and snapshot.
///
/// The loading indicator wins over any stale snapshot.
#[must_use]
pub fn list_view<'a>(status: &Status, items: &'a [Complaint]) -> ListView<'a> {
    if *status == Status::Loading {
        ListView::Loading
    } else if items.is_empty() {
        ListView::Empty
    } else {
        ListView::Items(items)
    }
}

#[must_use]
pub fn submit_label(status: &Status) -> &'static str {
    if *status == Status::Saving { SUBMITTING_LABEL } else { SUBMIT_LABEL }
}

/// Submit is only offered when no request is in flight.
#[must_use]
pub fn submit_enabled(status: &Status) -> bool {
    !status.is_busy()
}
