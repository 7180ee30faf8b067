//! Complaint records, the local draft, and save request/response DTOs.
//!
//! DESIGN
//! ======
//! Field names on the wire are PascalCase (`Id`, `Title`, `Body`, `Success`)
//! and are mapped with serde renames so Rust code keeps snake_case.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A server-owned complaint. Never mutated by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Complaint {
    /// Opaque server-generated identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Body of `POST TestApi/SaveComplain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SaveRequest {
    pub title: String,
    pub body: String,
}

/// Response of `POST TestApi/SaveComplain`.
///
/// `Success` is kept as raw JSON because the server contract only promises a
/// truthy/falsy value; a missing field counts as falsy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(rename = "Success", default)]
    pub success: Value,
}

impl SaveResponse {
    /// Build a response carrying a plain boolean flag, for `ComplaintsApi`
    /// implementations that do not go through JSON.
    #[must_use]
    pub fn with_success(success: bool) -> Self {
        Self { success: Value::Bool(success) }
    }

    /// Read a save response from a raw body.
    ///
    /// Any valid JSON is accepted. A body that is not an object, such as
    /// `true` or `"ok"`, has no `Success` field and so counts as a rejection.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the body is not JSON at all.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        let success = value.get("Success").cloned().unwrap_or_default();
        Ok(Self { success })
    }

    /// Whether the server accepted the complaint.
    #[must_use]
    pub fn is_success(&self) -> bool {
        is_truthy(&self.success)
    }
}

/// Reasons a draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("body is required")]
    MissingBody,
}

/// The user's in-progress, unsaved complaint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }

    /// Check both required fields and build the wire request.
    ///
    /// Whitespace-only fields count as empty. The field values are sent as
    /// typed, without trimming.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<SaveRequest, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.body.trim().is_empty() {
            return Err(DraftError::MissingBody);
        }
        Ok(SaveRequest { title: self.title.clone(), body: self.body.clone() })
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

/// JavaScript-style truthiness of a JSON value.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
