//! Remote API location and endpoint paths.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Base URL of the complaints API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://sugarytestapi.azurewebsites.net/";

/// `GET` path returning every complaint.
pub const LIST_PATH: &str = "TestApi/GetComplains";

/// `POST` path creating one complaint.
pub const SAVE_PATH: &str = "TestApi/SaveComplain";

/// Trim whitespace and force exactly one trailing slash.
///
/// An empty input falls back to [`DEFAULT_BASE_URL`].
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_BASE_URL.to_owned();
    }
    format!("{trimmed}/")
}

/// Full URL of the list endpoint under `base_url`.
#[must_use]
pub fn list_url(base_url: &str) -> String {
    format!("{}{LIST_PATH}", normalize_base_url(base_url))
}

/// Full URL of the save endpoint under `base_url`.
#[must_use]
pub fn save_url(base_url: &str) -> String {
    format!("{}{SAVE_PATH}", normalize_base_url(base_url))
}
