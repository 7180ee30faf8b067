//! Complaint submission form.

use leptos::prelude::*;
use lifecycle::view::{submit_enabled, submit_label};
use lifecycle::{ComplaintsState, Status};

use crate::state::complaints;

/// Title/body form bound to the shared draft.
///
/// Both inputs are `required`, so the browser blocks empty submissions before
/// `submit` runs. Whitespace-only fields get past the browser and are refused
/// by the lifecycle with an error message. The submit button is disabled while
/// any request is in flight.
#[component]
pub fn ComplaintForm() -> impl IntoView {
    let state = expect_context::<RwSignal<ComplaintsState>>();

    let status = Memo::new(move |_| state.with(|s| s.status.clone()));
    let title = move || state.with(|s| s.draft.title.clone());
    let body = move || state.with(|s| s.draft.body.clone());
    let label = move || status.with(submit_label);
    let disabled = move || !status.with(submit_enabled);
    let saving = move || status.with(|s| *s == Status::Saving);
    let error = move || {
        status.with(|s| match s {
            Status::Errored(message) => Some(message.clone()),
            _ => None,
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        complaints::submit(state);
    };

    view! {
        <form class="complain-form" on:submit=on_submit>
            <input
                class="inner-box"
                type="text"
                required=true
                placeholder="Title"
                prop:value=title
                on:input=move |ev| complaints::set_title(state, event_target_value(&ev))
            />
            <textarea
                class="inner-box"
                required=true
                placeholder="Enter your complaint"
                prop:value=body
                on:input=move |ev| complaints::set_body(state, event_target_value(&ev))
            ></textarea>
            <button class="btn" type="submit" disabled=disabled>
                {label}
            </button>
            <Show when=saving>
                <p class="complain-form__saving">"saving.."</p>
            </Show>
            {move || error().map(|message| view! { <p class="complain-form__error">{message}</p> })}
        </form>
    }
}
