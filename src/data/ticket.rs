use chrono::Utc;
use entity::support_ticket::{TicketPriority, TicketStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct TicketRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        ticket_id: i32,
    ) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find_by_id(ticket_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        status: Option<TicketStatus>,
        page_index: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::support_ticket::Model>, u64, u64), DbErr> {
        let mut query = entity::prelude::SupportTicket::find();

        if let Some(status) = status {
            query = query.filter(entity::support_ticket::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::support_ticket::Column::CreatedAt)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let tickets = paginator.fetch_page(page_index).await?;

        Ok((tickets, counts.number_of_items, counts.number_of_pages))
    }

    pub async fn update(
        &self,
        ticket: entity::support_ticket::Model,
        status: Option<TicketStatus>,
        priority: Option<TicketPriority>,
    ) -> Result<entity::support_ticket::Model, DbErr> {
        let mut ticket = ticket.into_active_model();

        if let Some(status) = status {
            ticket.status = ActiveValue::Set(status);
        }
        if let Some(priority) = priority {
            ticket.priority = ActiveValue::Set(priority);
        }
        ticket.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        ticket.update(self.db).await
    }

    pub async fn count_by_status(&self, status: TicketStatus) -> Result<u64, DbErr> {
        entity::prelude::SupportTicket::find()
            .filter(entity::support_ticket::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
