use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_member::Member, m20260115_000005_profit_distribution::ProfitDistribution,
};

static FK_PROFIT_SHARE_DISTRIBUTION_ID: &str = "fk_profit_share_distribution_id";
static FK_PROFIT_SHARE_MEMBER_ID: &str = "fk_profit_share_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfitShare::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfitShare::Id))
                    .col(integer(ProfitShare::DistributionId))
                    .col(integer(ProfitShare::MemberId))
                    .col(decimal_len(ProfitShare::Basis, 16, 2))
                    .col(decimal_len(ProfitShare::Amount, 16, 2))
                    .col(timestamp(ProfitShare::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFIT_SHARE_DISTRIBUTION_ID)
                    .from_tbl(ProfitShare::Table)
                    .from_col(ProfitShare::DistributionId)
                    .to_tbl(ProfitDistribution::Table)
                    .to_col(ProfitDistribution::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFIT_SHARE_MEMBER_ID)
                    .from_tbl(ProfitShare::Table)
                    .from_col(ProfitShare::MemberId)
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
                    .name(FK_PROFIT_SHARE_MEMBER_ID)
                    .table(ProfitShare::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROFIT_SHARE_DISTRIBUTION_ID)
                    .table(ProfitShare::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProfitShare::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProfitShare {
    Table,
    Id,
    DistributionId,
    MemberId,
    Basis,
    Amount,
    CreatedAt,
}
