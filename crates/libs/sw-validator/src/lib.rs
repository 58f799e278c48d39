//! Request validation for the sqlwarden API.
//!
//! A [`Validator`] accumulates general and per-field errors while a handler
//! inspects its input, then serializes into the JSON envelope returned with
//! 422 responses. The [`helpers`] module holds the individual checks.

pub mod helpers;

use std::collections::BTreeMap;

use serde::Serialize;

/// Accumulator for validation failures.
///
/// # JSON Format
///
/// ```json
/// {
///   "Errors": ["..."],
///   "FieldErrors": {"Email": "Email is required"}
/// }
/// ```
///
/// Empty collections are omitted from the serialized form.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Validator {
    /// General errors not tied to a single field.
    #[serde(rename = "Errors", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Per-field errors; the first error recorded for a field wins.
    #[serde(rename = "FieldErrors", skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

impl Validator {
    /// Creates an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.field_errors.is_empty()
    }

    /// Records a general error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records an error for a field unless one is already present.
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Records a general error when `ok` is false.
    pub fn check(&mut self, ok: bool, message: &str) {
        if !ok {
            self.add_error(message);
        }
    }

    /// Records a field error when `ok` is false.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sw_validator::Validator;
    ///
    /// let mut v = Validator::new();
    /// v.check_field(false, "Email", "Email is required");
    /// assert!(v.has_errors());
    /// ```
    pub fn check_field(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_field_error(field, message);
        }
    }
}
