use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_LGR_AWARD_MEMBER_ID: &str = "fk_lgr_award_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LgrAward::Table)
                    .if_not_exists()
                    .col(pk_auto(LgrAward::Id))
                    .col(integer(LgrAward::MemberId))
                    .col(integer(LgrAward::Tier))
                    .col(decimal_len(LgrAward::Principal, 16, 2))
                    .col(decimal_len(LgrAward::Rate, 5, 2))
                    .col(timestamp(LgrAward::StartsAt))
                    .col(timestamp(LgrAward::EndsAt))
                    .col(decimal_len(LgrAward::Accrued, 16, 2))
                    .col(timestamp_null(LgrAward::LastCreditedAt))
                    .col(string_len(LgrAward::Status, 16))
                    .col(timestamp(LgrAward::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LGR_AWARD_MEMBER_ID)
                    .from_tbl(LgrAward::Table)
                    .from_col(LgrAward::MemberId)
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
                    .name(FK_LGR_AWARD_MEMBER_ID)
                    .table(LgrAward::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LgrAward::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LgrAward {
    Table,
    Id,
    MemberId,
    Tier,
    Principal,
    Rate,
    StartsAt,
    EndsAt,
    Accrued,
    LastCreditedAt,
    Status,
    CreatedAt,
}
