//! Complaints page: submission form above the complaint list.

use leptos::prelude::*;

use crate::components::complaint_form::ComplaintForm;
use crate::components::complaint_list::ComplaintList;

#[component]
pub fn ComplaintsPage() -> impl IntoView {
    view! {
        <div class="wrapper">
            <h2 class="heading-1">"Submit a Complaint"</h2>
            <ComplaintForm/>
            <h2 class="heading-1">"Complaints List"</h2>
            <ComplaintList/>
        </div>
    }
}
