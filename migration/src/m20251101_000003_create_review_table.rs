use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_user_table::User, m20251101_000002_create_business_table::Business,
};

static IDX_REVIEW_USER_ID: &str = "idx_review_user_id";
static FK_REVIEW_USER_ID: &str = "fk_review_user_id";
static FK_REVIEW_BUSINESS_ID: &str = "fk_review_business_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::UserId))
                    .col(integer(Review::BusinessId))
                    .col(text(Review::Review))
                    .col(integer(Review::Stars).check(Expr::col(Review::Stars).between(1, 5)))
                    .col(timestamp(Review::CreatedAt))
                    .col(timestamp(Review::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEW_USER_ID)
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEW_BUSINESS_ID)
                            .from(Review::Table, Review::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reviews are listed per user
        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_USER_ID)
                    .table(Review::Table)
                    .col(Review::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_USER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Review {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    UserId,
    BusinessId,
    Review,
    Stars,
    CreatedAt,
    UpdatedAt,
}
