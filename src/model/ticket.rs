use chrono::NaiveDateTime;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub member_id: i32,
    pub subject: String,
    pub body: String,
    pub status: String,
    pub priority: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::support_ticket::Model> for TicketDto {
    fn from(ticket: entity::support_ticket::Model) -> Self {
        Self {
            id: ticket.id,
            member_id: ticket.member_id,
            subject: ticket.subject,
            body: ticket.body,
            status: ticket.status.to_value(),
            priority: ticket.priority.to_value(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TicketListDto {
    pub tickets: Vec<TicketDto>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

/// Both fields optional; omitted fields are left unchanged.
#[derive(Deserialize, ToSchema)]
pub struct UpdateTicketDto {
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct TicketFilter {
    /// Filter by ticket status
    pub status: Option<String>,
}
