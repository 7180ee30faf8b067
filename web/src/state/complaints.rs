//! Fetch and submit actions over the shared complaint state signal.
//!
//! Each action applies the `begin_*` transition synchronously, so the UI
//! shows the busy state and refuses duplicates immediately, then spawns the
//! request and applies `finish_*` when it resolves.

#[cfg(test)]
#[path = "complaints_test.rs"]
mod complaints_test;

use leptos::prelude::*;
use lifecycle::{ComplaintsState, SaveRequest};

/// Start a list fetch unless another request is in flight.
pub fn refresh(state: RwSignal<ComplaintsState>) {
    let mut started = false;
    state.update(|s| started = start_fetch(s));
    if started {
        spawn_fetch(state);
    }
}

/// Submit the current draft; on success the list is refreshed.
pub fn submit(state: RwSignal<ComplaintsState>) {
    let mut request = None;
    state.update(|s| request = start_submit(s));
    let Some(request) = request else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::save_complaint(&request).await;
        if let Err(e) = &result {
            leptos::logging::warn!("complaint save failed: {e}");
        }
        let mut outcome = lifecycle::SubmitOutcome::Failed;
        state.update(|s| outcome = s.finish_submit(result));
        match outcome {
            lifecycle::SubmitOutcome::Saved => spawn_fetch(state),
            lifecycle::SubmitOutcome::Rejected => leptos::logging::warn!("complaint save rejected by server"),
            lifecycle::SubmitOutcome::Failed => {}
        }
    });

    #[cfg(not(feature = "csr"))]
    let _ = request;
}

pub fn set_title(state: RwSignal<ComplaintsState>, title: String) {
    state.update(|s| s.draft.title = title);
}

pub fn set_body(state: RwSignal<ComplaintsState>, body: String) {
    state.update(|s| s.draft.body = body);
}

fn start_fetch(state: &mut ComplaintsState) -> bool {
    match state.begin_fetch() {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("complaint list fetch skipped: {e}");
            false
        }
    }
}

fn start_submit(state: &mut ComplaintsState) -> Option<SaveRequest> {
    match state.begin_submit() {
        Ok(request) => Some(request),
        Err(e) => {
            leptos::logging::warn!("complaint submit skipped: {e}");
            None
        }
    }
}

/// Run a list fetch; the state must already be `Loading`.
fn spawn_fetch(state: RwSignal<ComplaintsState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_complaints().await;
        if let Err(e) = &result {
            leptos::logging::warn!("complaint list fetch failed: {e}");
        }
        state.update(|s| s.finish_fetch(result));
    });

    #[cfg(not(feature = "csr"))]
    let _ = state;
}
