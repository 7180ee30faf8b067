//! Session controller: runs the fetch/submit lifecycle against an API.
//!
//! DESIGN
//! ======
//! `Session` owns one `ComplaintsState` and one `ComplaintsApi`. All
//! mutation goes through the `lifecycle` transitions, so the session only
//! sequences requests and logs. The initial list fetch runs exactly once, in
//! [`Session::start`]; there is no cancellation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use lifecycle::{ComplaintsState, Draft, LifecycleError, SubmitOutcome};

use crate::api::ComplaintsApi;

pub struct Session<A> {
    api: A,
    state: ComplaintsState,
}

impl<A: ComplaintsApi> Session<A> {
    /// Create a session and run the one-shot initial list fetch.
    ///
    /// A failed fetch does not fail the session; it leaves the state
    /// `Errored` with an empty list.
    pub async fn start(api: A) -> Self {
        let mut session = Self { api, state: ComplaintsState::default() };
        if session.state.begin_fetch().is_ok() {
            session.run_fetch().await;
        }
        session
    }

    #[must_use]
    pub fn state(&self) -> &ComplaintsState {
        &self.state
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.state.draft
    }

    /// Save the current draft; on success clear it and refresh the list.
    ///
    /// # Errors
    ///
    /// Returns a [`LifecycleError`] if the draft is incomplete or a request is
    /// already in flight. Server and transport failures are not errors here;
    /// they are reported through the state and the returned outcome.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, LifecycleError> {
        let request = self.state.begin_submit()?;
        let result = self.api.save_complaint(&request).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "complaint save failed");
        }

        let outcome = self.state.finish_submit(result);
        match outcome {
            SubmitOutcome::Saved => {
                tracing::info!(title = %request.title, "complaint saved");
                self.run_fetch().await;
            }
            SubmitOutcome::Rejected => tracing::warn!("complaint save rejected by server"),
            SubmitOutcome::Failed => {}
        }
        Ok(outcome)
    }

    /// Fetch the list; the state must already be `Loading`.
    async fn run_fetch(&mut self) {
        let result = self.api.list_complaints().await;
        match &result {
            Ok(items) => tracing::info!(count = items.len(), "complaints fetched"),
            Err(e) => tracing::warn!(error = %e, "complaint list fetch failed"),
        }
        self.state.finish_fetch(result);
    }
}
