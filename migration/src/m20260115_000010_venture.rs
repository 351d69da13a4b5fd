use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_VENTURE_OWNER_ID: &str = "fk_venture_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venture::Table)
                    .if_not_exists()
                    .col(pk_auto(Venture::Id))
                    .col(string(Venture::Name))
                    .col(integer(Venture::OwnerId))
                    .col(decimal_len(Venture::FundingGoal, 16, 2))
                    .col(decimal_len(Venture::Raised, 16, 2))
                    .col(string_len(Venture::Status, 16))
                    .col(timestamp(Venture::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VENTURE_OWNER_ID)
                    .from_tbl(Venture::Table)
                    .from_col(Venture::OwnerId)
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
                    .name(FK_VENTURE_OWNER_ID)
                    .table(Venture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Venture::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Venture {
    Table,
    Id,
    Name,
    OwnerId,
    FundingGoal,
    Raised,
    Status,
    CreatedAt,
}
