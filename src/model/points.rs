use chrono::NaiveDateTime;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PointEntryDto {
    pub id: i32,
    pub ledger: String,
    pub delta: i64,
    pub reason: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::point_transaction::Model> for PointEntryDto {
    fn from(entry: entity::point_transaction::Model) -> Self {
        Self {
            id: entry.id,
            ledger: entry.ledger.to_value(),
            delta: entry.delta,
            reason: entry.reason,
            created_at: entry.created_at,
        }
    }
}

/// LP / MAP balances plus the most recent ledger entries.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PointBalancesDto {
    pub member_id: i32,
    pub lifetime_points: i64,
    pub monthly_points: i64,
    pub recent: Vec<PointEntryDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct AdjustPointsDto {
    pub member_id: i32,
    /// "lifetime" (LP) or "monthly" (MAP)
    pub ledger: String,
    pub delta: i64,
    pub reason: String,
}
