use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

/// The response when a request is rejected or fails with a single message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable message
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The response when a submitted form fails validation
///
/// Keys are form field names, values are every message produced for that field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrorsDto(pub BTreeMap<String, Vec<String>>);

pub const REQUIRED_CODE: &str = "required";

/// Form field validator rejecting empty or whitespace-only values
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED_CODE)
            .with_message(Cow::Borrowed("This field is required.")));
    }

    Ok(())
}
