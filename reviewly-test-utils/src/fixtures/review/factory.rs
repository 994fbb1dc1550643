//! Factory functions for generating mock business and review database models.

use chrono::Utc;

use crate::model::{BusinessModel, ReviewModel};

/// Create a mock business database model for testing.
pub fn mock_business_model(id: i32, owner_id: i32) -> BusinessModel {
    let now = Utc::now().naive_utc();
    BusinessModel {
        id,
        owner_id,
        name: "Test Business".to_string(),
        category: "Restaurant".to_string(),
        description: Some("A place to eat".to_string()),
        address: "1 Main Street".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        price_range: "$$".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock review database model for testing.
pub fn mock_review_model(id: i32, user_id: i32, business_id: i32, stars: i32) -> ReviewModel {
    let now = Utc::now().naive_utc();
    ReviewModel {
        id,
        user_id,
        business_id,
        review: "Great food, slow service".to_string(),
        stars,
        created_at: now,
        updated_at: now,
    }
}
