use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct VentureDto {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub funding_goal: Decimal,
    pub raised: Decimal,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::venture::Model> for VentureDto {
    fn from(venture: entity::venture::Model) -> Self {
        Self {
            id: venture.id,
            name: venture.name,
            owner_id: venture.owner_id,
            funding_goal: venture.funding_goal,
            raised: venture.raised,
            status: venture.status.to_value(),
            created_at: venture.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateVentureDto {
    pub name: String,
    pub owner_id: i32,
    pub funding_goal: Decimal,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateVentureStatusDto {
    pub status: String,
}
