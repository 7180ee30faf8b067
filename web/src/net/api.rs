//! REST API helpers for the complaints endpoints.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere (native tests): stubs returning an error, since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics. The string is shown to
//! the user verbatim when a save fails, so it carries the transport or parse
//! error text as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use lifecycle::{Complaint, SaveRequest, SaveResponse};

/// API root, overridable at build time with `COMPLAINTS_BASE_URL`.
#[cfg(any(test, feature = "csr"))]
fn base_url() -> &'static str {
    option_env!("COMPLAINTS_BASE_URL").unwrap_or(lifecycle::endpoints::DEFAULT_BASE_URL)
}

#[cfg(any(test, feature = "csr"))]
fn list_endpoint() -> String {
    lifecycle::endpoints::list_url(base_url())
}

#[cfg(any(test, feature = "csr"))]
fn save_endpoint() -> String {
    lifecycle::endpoints::save_url(base_url())
}

#[cfg(any(test, feature = "csr"))]
fn list_failed_message(status: u16) -> String {
    format!("list request failed: {status}")
}

/// Fetch every complaint via `GET TestApi/GetComplains`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a complaint array.
pub async fn fetch_complaints() -> Result<Vec<Complaint>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&list_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<Complaint>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Save a complaint via `POST TestApi/SaveComplain`.
///
/// The response status is not checked; the JSON body's `Success` flag decides.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not JSON.
pub async fn save_complaint(request: &SaveRequest) -> Result<SaveResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&save_endpoint())
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body = resp.text().await.map_err(|e| e.to_string())?;
        SaveResponse::from_body(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}
