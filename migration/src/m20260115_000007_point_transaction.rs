use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_POINT_TRANSACTION_MEMBER_ID: &str = "fk_point_transaction_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PointTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(PointTransaction::Id))
                    .col(integer(PointTransaction::MemberId))
                    .col(string_len(PointTransaction::Ledger, 16))
                    .col(big_integer(PointTransaction::Delta))
                    .col(string(PointTransaction::Reason))
                    .col(timestamp(PointTransaction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POINT_TRANSACTION_MEMBER_ID)
                    .from_tbl(PointTransaction::Table)
                    .from_col(PointTransaction::MemberId)
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
                    .name(FK_POINT_TRANSACTION_MEMBER_ID)
                    .table(PointTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PointTransaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PointTransaction {
    Table,
    Id,
    MemberId,
    Ledger,
    Delta,
    Reason,
    CreatedAt,
}
