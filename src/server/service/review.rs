//! Review service layer.

use sea_orm::DatabaseConnection;

use crate::{
    model::review::{ReviewBusinessDto, ReviewDto, ReviewUserDto},
    server::{
        data::review::ReviewRepository,
        error::{user::UserError, Error},
        model::db::{BusinessModel, ReviewModel, UserModel},
        service::user::UserService,
    },
};

/// Builds the public representation of a review with its author and business summaries.
pub fn review_dto(review: ReviewModel, user: &UserModel, business: BusinessModel) -> ReviewDto {
    ReviewDto {
        id: review.id,
        user_id: review.user_id,
        business_id: review.business_id,
        review: review.review,
        stars: review.stars,
        created_at: review.created_at,
        updated_at: review.updated_at,
        user: ReviewUserDto {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        },
        business: ReviewBusinessDto {
            id: business.id,
            owner_id: business.owner_id,
            name: business.name,
            category: business.category,
            address: business.address,
            city: business.city,
            state: business.state,
            zip_code: business.zip_code,
            price_range: business.price_range,
        },
    }
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of ReviewService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the reviews written by `user_id` on behalf of `requester_id`.
    ///
    /// The user must exist before ownership is checked, so an unknown ID is a 404 for
    /// every requester.
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewDto>)` - The user's reviews ordered by ID
    /// - `Err(Error::UserError(UserError::UserNotFound))` - No user with that ID
    /// - `Err(Error::UserError(UserError::Forbidden))` - Requester is not the user
    /// - `Err(Error::InternalError)` - A review's business is missing (foreign key not enforced)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_reviews(
        &self,
        user_id: i32,
        requester_id: i32,
    ) -> Result<Vec<ReviewDto>, Error> {
        let user = UserService::new(self.db).get_user(user_id).await?;

        if user.id != requester_id {
            return Err(UserError::Forbidden {
                user_id,
                requester_id,
            }
            .into());
        }

        let reviews = ReviewRepository::new(self.db)
            .get_by_user_id_with_business(user.id)
            .await?;

        reviews
            .into_iter()
            .map(|(review, maybe_business)| -> Result<ReviewDto, Error> {
                let business = maybe_business.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find business ID {} for review ID {}",
                        review.business_id, review.id
                    ))
                })?;

                Ok(review_dto(review, &user, business))
            })
            .collect()
    }
}
