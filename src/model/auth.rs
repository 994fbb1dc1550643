use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::api::required;

/// Form-encoded login submission
#[derive(Default, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    /// Username or email address
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub credential: String,
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub password: String,
    /// Copied from the `csrf_token` cookie, never read from the body
    #[serde(skip)]
    pub csrf_token: Option<String>,
}

/// The response after issuing a fresh CSRF token
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CsrfTokenDto {
    pub csrf_token: String,
}
