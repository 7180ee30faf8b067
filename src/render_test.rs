use super::*;
use lifecycle::{Complaint, Status};

#[test]
fn render_loading_shows_indicator_only() {
    let state = ComplaintsState {
        items: vec![Complaint { id: "1".into(), title: "A".into(), body: "B".into() }],
        status: Status::Loading,
        ..ComplaintsState::default()
    };
    let out = render(&state);
    assert!(out.contains(LOADING_MESSAGE));
    assert!(!out.contains("\nA\n"));
}

#[test]
fn render_empty_list_shows_empty_state() {
    let out = render(&ComplaintsState::default());
    assert!(out.contains("No complaints available."));
    assert!(!out.contains(LOADING_MESSAGE));
}

#[test]
fn render_items_in_order_with_indented_body() {
    let state = ComplaintsState {
        items: vec![
            Complaint { id: "1".into(), title: "A".into(), body: "B".into() },
            Complaint { id: "2".into(), title: "C".into(), body: "line one\nline two".into() },
        ],
        ..ComplaintsState::default()
    };
    let out = render(&state);
    assert_eq!(out, "Complaints List\n===============\nA\n    B\n\nC\n    line one\n    line two\n");
}

#[test]
fn render_error_precedes_list() {
    let state = ComplaintsState { status: Status::Errored("Failed to load complaints.".into()), ..ComplaintsState::default() };
    let out = render(&state);
    assert!(out.starts_with("error: Failed to load complaints.\n"));
    assert!(out.contains("No complaints available."));
}
