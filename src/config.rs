//! Client configuration for the native API client.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use lifecycle::endpoints::normalize_base_url;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, always ending in exactly one `/`.
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build a config, normalizing `base_url`.
    ///
    /// A zero timeout is replaced with its default since `reqwest` would
    /// otherwise fail every request immediately.
    #[must_use]
    pub fn new(base_url: &str, timeouts: Timeouts) -> Self {
        let defaults = Timeouts::default();
        let timeouts = Timeouts {
            request_secs: non_zero_or(timeouts.request_secs, defaults.request_secs),
            connect_secs: non_zero_or(timeouts.connect_secs, defaults.connect_secs),
        };
        Self { base_url: normalize_base_url(base_url), timeouts }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(lifecycle::endpoints::DEFAULT_BASE_URL, Timeouts::default())
    }
}

fn non_zero_or(value: u64, default: u64) -> u64 {
    if value == 0 { default } else { value }
}
