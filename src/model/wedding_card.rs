use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct WeddingCardDto {
    pub id: i32,
    pub member_id: i32,
    pub title: String,
    pub slug: String,
    pub event_date: NaiveDate,
    pub template: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::wedding_card::Model> for WeddingCardDto {
    fn from(card: entity::wedding_card::Model) -> Self {
        Self {
            id: card.id,
            member_id: card.member_id,
            title: card.title,
            slug: card.slug,
            event_date: card.event_date,
            template: card.template,
            status: card.status.to_value(),
            created_at: card.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateWeddingCardDto {
    pub member_id: i32,
    pub title: String,
    pub slug: String,
    pub event_date: NaiveDate,
    pub template: String,
}

/// Both fields optional; omitted fields are left unchanged.
#[derive(Deserialize, ToSchema)]
pub struct UpdateWeddingCardDto {
    pub status: Option<String>,
    pub template: Option<String>,
}
