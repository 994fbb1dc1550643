use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::{BusinessModel, ReviewModel};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every review written by `user_id` along with the reviewed business
    ///
    /// Reviews are ordered by ID ascending. The business is only `None` if the
    /// foreign key was not enforced.
    pub async fn get_by_user_id_with_business(
        &self,
        user_id: i32,
    ) -> Result<Vec<(ReviewModel, Option<BusinessModel>)>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .order_by_asc(entity::review::Column::Id)
            .find_also_related(entity::business::Entity)
            .all(self.db)
            .await
    }
}
