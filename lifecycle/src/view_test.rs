use super::*;
use crate::state::ComplaintsState;

fn sample() -> Vec<Complaint> {
    vec![Complaint { id: "1".into(), title: "A".into(), body: "B".into() }]
}

#[test]
fn list_view_loading_hides_items() {
    let items = sample();
    assert_eq!(list_view(&Status::Loading, &items), ListView::Loading);
}

#[test]
fn list_view_empty_shows_empty_state() {
    assert_eq!(list_view(&Status::Idle, &[]), ListView::Empty);
}

#[test]
fn list_view_items_after_fetch() {
    let mut state = ComplaintsState::default();
    state.begin_fetch().unwrap();
    state.finish_fetch::<String>(Ok(sample()));

    let ListView::Items(items) = list_view(&state.status, &state.items) else {
        panic!("expected items");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "A");
    assert_eq!(items[0].body, "B");
}

#[test]
fn list_view_keeps_stale_items_next_to_error() {
    let items = sample();
    assert!(matches!(list_view(&Status::Errored("x".into()), &items), ListView::Items(_)));
}

#[test]
fn submit_label_switches_while_saving() {
    assert_eq!(submit_label(&Status::Saving), SUBMITTING_LABEL);
    assert_eq!(submit_label(&Status::Idle), SUBMIT_LABEL);
    assert_eq!(submit_label(&Status::Loading), SUBMIT_LABEL);
}

#[test]
fn submit_disabled_while_in_flight() {
    assert!(submit_enabled(&Status::Idle));
    assert!(submit_enabled(&Status::Errored("x".into())));
    assert!(!submit_enabled(&Status::Saving));
    assert!(!submit_enabled(&Status::Loading));
}
