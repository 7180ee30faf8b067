//! Plain-text rendering of the lifecycle state for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use lifecycle::view::{EMPTY_MESSAGE, LOADING_MESSAGE, list_view};
use lifecycle::{ComplaintsState, ListView};

const BODY_INDENT: &str = "    ";

/// Render the error line (if any) followed by the complaint list.
#[must_use]
pub fn render(state: &ComplaintsState) -> String {
    let mut out = String::new();
    if let Some(message) = state.error_message() {
        let _ = writeln!(out, "error: {message}");
        out.push('\n');
    }
    out.push_str("Complaints List\n");
    out.push_str("===============\n");
    match list_view(&state.status, &state.items) {
        ListView::Loading => {
            let _ = writeln!(out, "{LOADING_MESSAGE}");
        }
        ListView::Empty => {
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
        }
        ListView::Items(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}", item.title);
                for line in item.body.lines() {
                    let _ = writeln!(out, "{BODY_INDENT}{line}");
                }
            }
        }
    }
    out
}
