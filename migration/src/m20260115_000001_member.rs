use sea_orm_migration::{prelude::*, schema::*};

static FK_MEMBER_SPONSOR_ID: &str = "fk_member_sponsor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::DisplayName))
                    .col(string_uniq(Member::Email))
                    .col(integer_null(Member::SponsorId))
                    .col(integer(Member::Tier))
                    .col(string_len(Member::Status, 16))
                    .col(timestamp(Member::JoinedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBER_SPONSOR_ID)
                    .from_tbl(Member::Table)
                    .from_col(Member::SponsorId)
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
                    .name(FK_MEMBER_SPONSOR_ID)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    DisplayName,
    Email,
    SponsorId,
    Tier,
    Status,
    JoinedAt,
}
