pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_CSRF_TOKEN, TEST_PASSWORD_HASH},
        fixtures::{review::factory as review_factory, user::factory as user_factory},
        TestBuilder, TestContext, TestError,
    };
}
