//! Field-level form validation errors.
//!
//! Collects every message for every failing field so the client can render them next to
//! the inputs, in the `{"<field>": ["message", ...]}` shape.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::api::{FieldErrorsDto, REQUIRED_CODE};

#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Form validation failed: {fields:?}")]
pub struct FormError {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message to `field`, keeping any messages already recorded for it.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// `Ok(())` when no field failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FormError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Converts `validator` output into field messages.
///
/// A field that failed the `required` check reports only that message, further
/// checks on an empty value add nothing useful.
impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_error = FormError::new();

        for (field, field_errors) in errors.field_errors() {
            let missing = field_errors.iter().any(|e| e.code == REQUIRED_CODE);

            for error in field_errors
                .iter()
                .filter(|e| !missing || e.code == REQUIRED_CODE)
            {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", error.code));

                form_error.add(&field, message);
            }
        }

        form_error
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::BAD_REQUEST, Json(FieldErrorsDto(self.fields))).into_response()
    }
}
