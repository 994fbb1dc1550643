use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::UserModel;

/// Values for a new user row, the password already hashed.
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub hashed_password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Fails with a unique constraint violation if the username or email is taken.
    pub async fn create(&self, new_user: NewUser<'_>) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(new_user.username.to_string()),
            email: ActiveValue::Set(new_user.email.to_string()),
            hashed_password: ActiveValue::Set(new_user.hashed_password.to_string()),
            first_name: ActiveValue::Set(new_user.first_name.to_string()),
            last_name: ActiveValue::Set(new_user.last_name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets every user ordered by ID ascending
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user whose username or email matches `credential`
    pub async fn find_by_credential(&self, credential: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(credential))
                    .add(entity::user::Column::Email.eq(credential)),
            )
            .one(self.db)
            .await
    }
}
