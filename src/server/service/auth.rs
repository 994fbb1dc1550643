//! Authentication service layer.
//!
//! Credential checks for username/email and password login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username or email and password pair.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials are valid
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown credential or wrong password
    /// - `Err(Error)` - Database or password hash failure
    pub async fn login(&self, credential: &str, password: &str) -> Result<UserModel, Error> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_credential(credential)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.hashed_password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
