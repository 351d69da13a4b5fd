use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_INVESTMENT_MEMBER_ID: &str = "fk_investment_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Investment::Table)
                    .if_not_exists()
                    .col(pk_auto(Investment::Id))
                    .col(integer(Investment::MemberId))
                    .col(integer(Investment::Tier))
                    .col(decimal_len(Investment::Amount, 16, 2))
                    .col(string_len(Investment::Status, 16))
                    .col(timestamp_null(Investment::NextPaymentDate))
                    .col(timestamp_null(Investment::ApprovedAt))
                    .col(string_null(Investment::RejectionReason))
                    .col(timestamp(Investment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVESTMENT_MEMBER_ID)
                    .from_tbl(Investment::Table)
                    .from_col(Investment::MemberId)
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
                    .name(FK_INVESTMENT_MEMBER_ID)
                    .table(Investment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Investment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Investment {
    Table,
    Id,
    MemberId,
    Tier,
    Amount,
    Status,
    NextPaymentDate,
    ApprovedAt,
    RejectionReason,
    CreatedAt,
}
