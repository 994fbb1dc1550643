pub use super::business::Entity as Business;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
