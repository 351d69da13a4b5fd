use sea_orm::DatabaseConnection;

use crate::{
    data::ticket::TicketRepository,
    error::Error,
    model::ticket::{TicketDto, TicketFilter, TicketListDto, UpdateTicketDto},
    service::parse_enum,
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    /// Creates a new instance of [`TicketService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_tickets(
        &self,
        filter: TicketFilter,
        page_index: u64,
        per_page: u64,
    ) -> Result<TicketListDto, Error> {
        let status = filter.status.as_deref().map(parse_enum).transpose()?;

        let (tickets, total, pages) = TicketRepository::new(self.db)
            .list(status, page_index, per_page)
            .await?;

        Ok(TicketListDto {
            tickets: tickets.into_iter().map(Into::into).collect(),
            total,
            page: page_index + 1,
            pages,
        })
    }

    pub async fn get_ticket(&self, ticket_id: i32) -> Result<TicketDto, Error> {
        let ticket = TicketRepository::new(self.db)
            .get_by_id(ticket_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Ticket {ticket_id}")))?;

        Ok(ticket.into())
    }

    pub async fn update_ticket(
        &self,
        ticket_id: i32,
        update: UpdateTicketDto,
    ) -> Result<TicketDto, Error> {
        if update.status.is_none() && update.priority.is_none() {
            return Err(Error::Validation("Nothing to update".into()));
        }

        let status = update.status.as_deref().map(parse_enum).transpose()?;
        let priority = update.priority.as_deref().map(parse_enum).transpose()?;

        let repository = TicketRepository::new(self.db);
        let ticket = repository
            .get_by_id(ticket_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Ticket {ticket_id}")))?;

        let ticket = repository.update(ticket, status, priority).await?;

        Ok(ticket.into())
    }
}
