//! Complaint list with loading and empty states.

use leptos::prelude::*;
use lifecycle::view::{EMPTY_MESSAGE, LOADING_MESSAGE, list_view};
use lifecycle::{ComplaintsState, ListView};

use crate::components::complaint_card::ComplaintCard;

/// Renders the last fetched snapshot in server order.
///
/// While a fetch is in flight the loading indicator replaces the list.
#[component]
pub fn ComplaintList() -> impl IntoView {
    let state = expect_context::<RwSignal<ComplaintsState>>();

    // Memos keep draft keystrokes from re-rendering the list.
    let status = Memo::new(move |_| state.with(|s| s.status.clone()));
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));

    view! {
        <div class="complain-list">
            {move || {
                let status = status.get();
                items
                    .with(|items| match list_view(&status, items) {
                        ListView::Loading => {
                            view! { <div class="loader" role="status">{LOADING_MESSAGE}</div> }.into_any()
                        }
                        ListView::Empty => {
                            view! { <p class="complain-list__empty">{EMPTY_MESSAGE}</p> }.into_any()
                        }
                        ListView::Items(items) => {
                            items
                                .iter()
                                .cloned()
                                .map(|c| view! { <ComplaintCard title=c.title body=c.body/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}
