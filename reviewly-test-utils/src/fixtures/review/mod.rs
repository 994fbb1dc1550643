//! Business and review fixture utilities.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{BusinessModel, ReviewModel},
    TestContext,
};

impl TestContext {
    /// Access business and review fixture helpers.
    pub fn review(&self) -> ReviewFixtures<'_> {
        ReviewFixtures { context: self }
    }
}

pub struct ReviewFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ReviewFixtures<'a> {
    /// Insert a business owned by `owner_id`.
    ///
    /// The owner must already exist in the database.
    pub async fn insert_mock_business(
        &self,
        owner_id: i32,
        name: &str,
    ) -> Result<BusinessModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Business::insert(entity::business::ActiveModel {
                owner_id: ActiveValue::Set(owner_id),
                name: ActiveValue::Set(name.to_string()),
                category: ActiveValue::Set("Restaurant".to_string()),
                description: ActiveValue::Set(None),
                address: ActiveValue::Set("1 Main Street".to_string()),
                city: ActiveValue::Set("Springfield".to_string()),
                state: ActiveValue::Set("IL".to_string()),
                zip_code: ActiveValue::Set("62701".to_string()),
                price_range: ActiveValue::Set("$$".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a review written by `user_id` about `business_id`.
    pub async fn insert_mock_review(
        &self,
        user_id: i32,
        business_id: i32,
        stars: i32,
    ) -> Result<ReviewModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Review::insert(entity::review::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                business_id: ActiveValue::Set(business_id),
                review: ActiveValue::Set(format!("{} star experience", stars)),
                stars: ActiveValue::Set(stars),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
