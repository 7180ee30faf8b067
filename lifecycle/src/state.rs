//! Fetch/submit lifecycle state machine.
//!
//! DESIGN
//! ======
//! A single tagged [`Status`] replaces independent loading/saving/error flags,
//! so "saving while a stale error is shown" cannot be represented. Each
//! operation is split into a `begin_*` transition, which the caller runs
//! before the request, and a `finish_*` transition fed with the request's
//! outcome. Starting any operation while another is in flight is refused.
//!
//! ```text
//! Idle | Errored ──begin_fetch──▶  Loading ──finish_fetch──▶  Idle | Errored
//! Idle | Errored ──begin_submit─▶  Saving  ──finish_submit─▶ Loading | Errored
//! Idle | Errored ──begin_submit─▶  Errored   (draft missing a field)
//! ```
//!
//! `Errored` behaves like `Idle` for the purpose of starting a new
//! operation, and the error is cleared when that operation begins.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt::Display;

use crate::model::{Complaint, Draft, DraftError, SaveRequest, SaveResponse};

/// Message shown when the list cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load complaints.";

/// Message shown when the server answers a save with a falsy `Success`.
pub const SAVE_REJECTED_MESSAGE: &str = "Failed to save complaint.";

/// What the client is doing right now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    /// A list fetch is in flight.
    Loading,
    /// A save is in flight.
    Saving,
    /// The last operation failed with this message.
    Errored(String),
}

impl Status {
    /// Whether a request is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Saving)
    }
}

/// Reasons a lifecycle transition is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("another request is already in flight")]
    Busy,
    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Result of [`ComplaintsState::finish_submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved. The draft was cleared and the state already moved to
    /// `Loading`; the caller must now fetch the list and call
    /// [`ComplaintsState::finish_fetch`].
    Saved,
    /// The server answered with a falsy `Success`.
    Rejected,
    /// The request or response parsing failed.
    Failed,
}

/// Complaint list, draft and lifecycle status for one client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplaintsState {
    /// Last successfully fetched snapshot, in server order.
    pub items: Vec<Complaint>,
    pub draft: Draft,
    pub status: Status,
}

impl ComplaintsState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.status == Status::Saving
    }

    /// Pending error feedback, if the last operation failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Loading` ahead of a list fetch.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Busy`] if a request is already in flight.
    pub fn begin_fetch(&mut self) -> Result<(), LifecycleError> {
        if self.status.is_busy() {
            return Err(LifecycleError::Busy);
        }
        self.status = Status::Loading;
        Ok(())
    }

    /// Apply the outcome of a list fetch.
    ///
    /// On success the list is replaced wholesale. On failure the previous list
    /// is kept and the fixed load-failure message is shown; the underlying
    /// error is left for the caller to log.
    pub fn finish_fetch<E>(&mut self, result: Result<Vec<Complaint>, E>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.status = Status::Idle;
            }
            Err(_) => {
                self.status = Status::Errored(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Validate the draft and enter `Saving`.
    ///
    /// Returns the request body to post. The draft itself is left untouched
    /// until the server confirms the save.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Busy`] if a request is in flight, leaving the
    /// state alone. Returns [`LifecycleError::Draft`] if a required field is
    /// empty, after moving to `Errored` with the field's message so the user
    /// sees why nothing was sent.
    pub fn begin_submit(&mut self) -> Result<SaveRequest, LifecycleError> {
        if self.status.is_busy() {
            return Err(LifecycleError::Busy);
        }
        let request = self.draft.validate().inspect_err(|e| {
            self.status = Status::Errored(e.to_string());
        })?;
        self.status = Status::Saving;
        Ok(request)
    }

    /// Apply the outcome of a save.
    pub fn finish_submit<E: Display>(&mut self, result: Result<SaveResponse, E>) -> SubmitOutcome {
        match result {
            Ok(response) if response.is_success() => {
                self.draft.clear();
                self.status = Status::Loading;
                SubmitOutcome::Saved
            }
            Ok(_) => {
                self.status = Status::Errored(SAVE_REJECTED_MESSAGE.to_owned());
                SubmitOutcome::Rejected
            }
            Err(error) => {
                let mut message = error.to_string();
                if message.is_empty() {
                    SAVE_REJECTED_MESSAGE.clone_into(&mut message);
                }
                self.status = Status::Errored(message);
                SubmitOutcome::Failed
            }
        }
    }
}
