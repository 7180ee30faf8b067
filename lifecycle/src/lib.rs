//! Shared complaint model and fetch/submit lifecycle.
//!
//! This crate owns the wire representation and the state machine used by
//! both the native `complaints` client and the `web` UI. It performs no I/O:
//! callers run the HTTP requests themselves and feed the results back through
//! [`ComplaintsState`] transitions.

pub mod endpoints;
pub mod model;
pub mod state;
pub mod view;

pub use model::{Complaint, Draft, DraftError, SaveRequest, SaveResponse};
pub use state::{ComplaintsState, LOAD_FAILED_MESSAGE, LifecycleError, SAVE_REJECTED_MESSAGE, Status, SubmitOutcome};
pub use view::ListView;
