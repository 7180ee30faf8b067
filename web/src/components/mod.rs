//! Reusable UI components for the complaints page.

pub mod complaint_card;
pub mod complaint_form;
pub mod complaint_list;
