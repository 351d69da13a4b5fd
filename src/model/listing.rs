use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub id: i32,
    pub member_id: i32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub status: String,
    pub moderated_at: Option<NaiveDateTime>,
    pub rejection_reason: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::listing::Model> for ListingDto {
    fn from(listing: entity::listing::Model) -> Self {
        Self {
            id: listing.id,
            member_id: listing.member_id,
            title: listing.title,
            description: listing.description,
            price: listing.price,
            status: listing.status.to_value(),
            moderated_at: listing.moderated_at,
            rejection_reason: listing.rejection_reason,
            created_at: listing.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ListingListDto {
    pub listings: Vec<ListingDto>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Deserialize, IntoParams)]
pub struct ListingFilter {
    /// Filter by moderation status; the queue view uses "pending"
    pub status: Option<String>,
}
