//! User service layer.
//!
//! Account creation with availability checks, plus the lookups behind the user routes.


use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{SignUpForm, UserDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{form::FormError, user::UserError, Error},
        model::db::UserModel,
        util::password::hash_password,
    },
};

pub const USERNAME_TAKEN: &str = "Username is already in use.";
pub const EMAIL_TAKEN: &str = "Email address is already in use.";

/// Builds the public representation of a user, leaving out the password hash.
pub fn user_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
    }
}

/// Service for user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an error for each of the form's username and email that already belongs to a user.
    ///
    /// Empty values are skipped since they already fail the required check.
    ///
    /// # Returns
    /// - `Ok(())` - Checks ran, any conflicts were added to `errors`
    /// - `Err(Error::DbErr)` - Lookup failed
    pub async fn check_availability(
        &self,
        form: &SignUpForm,
        errors: &mut FormError,
    ) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        if !form.username.trim().is_empty()
            && user_repo.find_by_username(&form.username).await?.is_some()
        {
            errors.add("username", USERNAME_TAKEN);
        }

        if !form.email.trim().is_empty() && user_repo.find_by_email(&form.email).await?.is_some() {
            errors.add("email", EMAIL_TAKEN);
        }

        Ok(())
    }

    /// Hashes the password and inserts a new user from a validated sign up form.
    ///
    /// A username or email taken by a concurrent sign up after the availability check is
    /// caught by the unique index and reported as the same field error.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(Error::FormError)` - Username or email already in use
    /// - `Err(Error)` - Password hashing or database failure
    pub async fn create_user(&self, form: &SignUpForm) -> Result<UserModel, Error> {
        let hashed_password = hash_password(&form.password)?;

        let result = UserRepository::new(self.db)
            .create(NewUser {
                username: &form.username,
                email: &form.email,
                hashed_password: &hashed_password,
                first_name: &form.first_name,
                last_name: &form.last_name,
            })
            .await;

        match result {
            Ok(user) => Ok(user),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(constraint)) => {
                    tracing::debug!("Sign up lost a uniqueness race: {}", constraint);

                    let mut errors = FormError::new();
                    if constraint.contains("email") {
                        errors.add("email", EMAIL_TAKEN);
                    } else {
                        errors.add("username", USERNAME_TAKEN);
                    }

                    Err(errors.into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - User found
    /// - `Err(Error::UserError(UserError::UserNotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::UserNotFound(user_id).into())
    }

    /// Retrieves every user ordered by ID.
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(user_dto).collect())
    }
}
