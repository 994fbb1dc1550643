use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::api::required;

/// Public representation of a user account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

/// The response after a successful sign up
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SignUpDto {
    pub user: UserDto,
}

/// Form-encoded sign up submission
#[derive(Default, Deserialize, Validate, ToSchema)]
pub struct SignUpForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 40, message = "Username must be 40 characters or fewer.")
    )]
    pub username: String,
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        email(message = "Invalid email address."),
        length(max = 255, message = "Email must be 255 characters or fewer.")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(min = 6, message = "Password must be at least 6 characters.")
    )]
    pub password: String,
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 40, message = "First name must be 40 characters or fewer.")
    )]
    pub first_name: String,
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 40, message = "Last name must be 40 characters or fewer.")
    )]
    pub last_name: String,
    /// Copied from the `csrf_token` cookie, never read from the body
    #[serde(skip)]
    pub csrf_token: Option<String>,
}
