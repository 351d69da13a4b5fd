use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_LISTING_MEMBER_ID: &str = "fk_listing_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::Id))
                    .col(integer(Listing::MemberId))
                    .col(string(Listing::Title))
                    .col(text(Listing::Description))
                    .col(decimal_len(Listing::Price, 16, 2))
                    .col(string_len(Listing::Status, 16))
                    .col(timestamp_null(Listing::ModeratedAt))
                    .col(string_null(Listing::RejectionReason))
                    .col(timestamp(Listing::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_MEMBER_ID)
                    .from_tbl(Listing::Table)
                    .from_col(Listing::MemberId)
                    .to_tbl(Member::Table)
                    .to_col(Member::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LISTING_MEMBER_ID)
                    .table(Listing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    Id,
    MemberId,
    Title,
    Description,
    Price,
    Status,
    ModeratedAt,
    RejectionReason,
    CreatedAt,
}
