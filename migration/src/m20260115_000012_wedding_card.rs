use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_WEDDING_CARD_MEMBER_ID: &str = "fk_wedding_card_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeddingCard::Table)
                    .if_not_exists()
                    .col(pk_auto(WeddingCard::Id))
                    .col(integer(WeddingCard::MemberId))
                    .col(string(WeddingCard::Title))
                    .col(string_uniq(WeddingCard::Slug))
                    .col(date(WeddingCard::EventDate))
                    .col(string(WeddingCard::Template))
                    .col(string_len(WeddingCard::Status, 16))
                    .col(timestamp(WeddingCard::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WEDDING_CARD_MEMBER_ID)
                    .from_tbl(WeddingCard::Table)
                    .from_col(WeddingCard::MemberId)
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
                    .name(FK_WEDDING_CARD_MEMBER_ID)
                    .table(WeddingCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WeddingCard::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WeddingCard {
    Table,
    Id,
    MemberId,
    Title,
    Slug,
    EventDate,
    Template,
    Status,
    CreatedAt,
}
