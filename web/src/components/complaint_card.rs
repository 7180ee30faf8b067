//! Card showing one complaint in the list.

use leptos::prelude::*;

#[component]
pub fn ComplaintCard(title: String, body: String) -> impl IntoView {
    view! {
        <div class="complain-item">
            <h3 class="complain-item__title">{title}</h3>
            <p class="complain-item__body">{body}</p>
        </div>
    }
}
