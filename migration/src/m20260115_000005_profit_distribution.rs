use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfitDistribution::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfitDistribution::Id))
                    .col(string_uniq(ProfitDistribution::Period))
                    .col(decimal_len(ProfitDistribution::TotalProfit, 16, 2))
                    .col(decimal_len(ProfitDistribution::PoolRate, 5, 2))
                    .col(decimal_len(ProfitDistribution::DistributedAmount, 16, 2))
                    .col(string_len(ProfitDistribution::Status, 16))
                    .col(timestamp_null(ProfitDistribution::CompletedAt))
                    .col(timestamp(ProfitDistribution::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfitDistribution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProfitDistribution {
    Table,
    Id,
    Period,
    TotalProfit,
    PoolRate,
    DistributedAmount,
    Status,
    CompletedAt,
    CreatedAt,
}
