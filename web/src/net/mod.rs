//! Networking modules for the complaints REST API.

pub mod api;
