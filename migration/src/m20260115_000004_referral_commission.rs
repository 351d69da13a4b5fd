use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000001_member::Member, m20260115_000002_investment::Investment};

static FK_COMMISSION_EARNER_ID: &str = "fk_referral_commission_earner_id";
static FK_COMMISSION_SOURCE_ID: &str = "fk_referral_commission_source_id";
static FK_COMMISSION_INVESTMENT_ID: &str = "fk_referral_commission_investment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReferralCommission::Table)
                    .if_not_exists()
                    .col(pk_auto(ReferralCommission::Id))
                    .col(integer(ReferralCommission::EarnerId))
                    .col(integer(ReferralCommission::SourceId))
                    .col(integer(ReferralCommission::InvestmentId))
                    .col(integer(ReferralCommission::Level))
                    .col(decimal_len(ReferralCommission::Rate, 5, 2))
                    .col(decimal_len(ReferralCommission::Amount, 16, 2))
                    .col(string_len(ReferralCommission::Status, 16))
                    .col(timestamp(ReferralCommission::CreatedAt))
                    .to_owned(),
            )
            .await?;

        for (name, col, tbl, to_col) in [
            (
                FK_COMMISSION_EARNER_ID,
                ReferralCommission::EarnerId,
                Member::Table.into_iden(),
                Member::Id.into_iden(),
            ),
            (
                FK_COMMISSION_SOURCE_ID,
                ReferralCommission::SourceId,
                Member::Table.into_iden(),
                Member::Id.into_iden(),
            ),
            (
                FK_COMMISSION_INVESTMENT_ID,
                ReferralCommission::InvestmentId,
                Investment::Table.into_iden(),
                Investment::Id.into_iden(),
            ),
        ] {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(ReferralCommission::Table)
                        .from_col(col)
                        .to_tbl(tbl)
                        .to_col(to_col)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_COMMISSION_INVESTMENT_ID,
            FK_COMMISSION_SOURCE_ID,
            FK_COMMISSION_EARNER_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(ReferralCommission::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(ReferralCommission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReferralCommission {
    Table,
    Id,
    EarnerId,
    SourceId,
    InvestmentId,
    Level,
    Rate,
    Amount,
    Status,
    CreatedAt,
}
