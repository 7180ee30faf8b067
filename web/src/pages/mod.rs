//! Top-level pages.

pub mod complaints;
