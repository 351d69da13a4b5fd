use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_MATRIX_POSITION_MEMBER_ID: &str = "fk_matrix_position_member_id";
static FK_MATRIX_POSITION_PARENT_ID: &str = "fk_matrix_position_parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatrixPosition::Table)
                    .if_not_exists()
                    .col(pk_auto(MatrixPosition::Id))
                    .col(integer_uniq(MatrixPosition::MemberId))
                    .col(integer_null(MatrixPosition::ParentId))
                    .col(integer(MatrixPosition::Depth))
                    .col(integer(MatrixPosition::Slot))
                    .col(timestamp(MatrixPosition::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATRIX_POSITION_MEMBER_ID)
                    .from_tbl(MatrixPosition::Table)
                    .from_col(MatrixPosition::MemberId)
                    .to_tbl(Member::Table)
                    .to_col(Member::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATRIX_POSITION_PARENT_ID)
                    .from_tbl(MatrixPosition::Table)
                    .from_col(MatrixPosition::ParentId)
                    .to_tbl(MatrixPosition::Table)
                    .to_col(MatrixPosition::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATRIX_POSITION_PARENT_ID)
                    .table(MatrixPosition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATRIX_POSITION_MEMBER_ID)
                    .table(MatrixPosition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatrixPosition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MatrixPosition {
    Table,
    Id,
    MemberId,
    ParentId,
    Depth,
    Slot,
    CreatedAt,
}
