//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use lifecycle::ComplaintsState;

use crate::pages::complaints::ComplaintsPage;
use crate::state::complaints;

/// Root application component.
///
/// Provides the shared complaint state and runs the one-shot initial list
/// fetch. There is no cleanup: an in-flight fetch is never cancelled.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(ComplaintsState::default());
    provide_context(state);

    complaints::refresh(state);

    view! {
        <Title text="Complaints"/>
        <ComplaintsPage/>
    }
}
