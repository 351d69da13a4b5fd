use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_member::Member;

static FK_SUPPORT_TICKET_MEMBER_ID: &str = "fk_support_ticket_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTicket::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportTicket::Id))
                    .col(integer(SupportTicket::MemberId))
                    .col(string(SupportTicket::Subject))
                    .col(text(SupportTicket::Body))
                    .col(string_len(SupportTicket::Status, 16))
                    .col(string_len(SupportTicket::Priority, 16))
                    .col(timestamp(SupportTicket::CreatedAt))
                    .col(timestamp(SupportTicket::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUPPORT_TICKET_MEMBER_ID)
                    .from_tbl(SupportTicket::Table)
                    .from_col(SupportTicket::MemberId)
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
                    .name(FK_SUPPORT_TICKET_MEMBER_ID)
                    .table(SupportTicket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SupportTicket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SupportTicket {
    Table,
    Id,
    MemberId,
    Subject,
    Body,
    Status,
    Priority,
    CreatedAt,
    UpdatedAt,
}
