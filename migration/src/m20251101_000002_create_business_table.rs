use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_user_table::User;

static IDX_BUSINESS_OWNER_ID: &str = "idx_business_owner_id";
static FK_BUSINESS_OWNER_ID: &str = "fk_business_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Business::Table)
                    .if_not_exists()
                    .col(pk_auto(Business::Id))
                    .col(integer(Business::OwnerId))
                    .col(string_len(Business::Name, 50))
                    .col(string(Business::Category))
                    .col(text_null(Business::Description))
                    .col(string(Business::Address))
                    .col(string(Business::City))
                    .col(string(Business::State))
                    .col(string(Business::ZipCode))
                    .col(string(Business::PriceRange))
                    .col(timestamp(Business::CreatedAt))
                    .col(timestamp(Business::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BUSINESS_OWNER_ID)
                            .from(Business::Table, Business::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUSINESS_OWNER_ID)
                    .table(Business::Table)
                    .col(Business::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUSINESS_OWNER_ID)
                    .table(Business::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Business {
    #[sea_orm(iden = "businesses")]
    Table,
    Id,
    OwnerId,
    Name,
    Category,
    Description,
    Address,
    City,
    State,
    ZipCode,
    PriceRange,
    CreatedAt,
    UpdatedAt,
}
