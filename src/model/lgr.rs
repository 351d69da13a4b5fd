use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LgrAwardDto {
    pub id: i32,
    pub member_id: i32,
    pub tier: i32,
    pub principal: Decimal,
    pub rate: Decimal,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub accrued: Decimal,
    pub last_credited_at: Option<NaiveDateTime>,
    pub status: String,
}

impl From<entity::lgr_award::Model> for LgrAwardDto {
    fn from(award: entity::lgr_award::Model) -> Self {
        Self {
            id: award.id,
            member_id: award.member_id,
            tier: award.tier,
            principal: award.principal,
            rate: award.rate,
            starts_at: award.starts_at,
            ends_at: award.ends_at,
            accrued: award.accrued,
            last_credited_at: award.last_credited_at,
            status: award.status.to_value(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LgrListDto {
    pub awards: Vec<LgrAwardDto>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Deserialize, ToSchema)]
pub struct GrantLgrDto {
    pub member_id: i32,
    pub tier: i32,
    pub principal: Decimal,
    /// Monthly accrual rate in percent
    pub rate: Decimal,
    /// Program length in months (30-day blocks)
    pub months: i32,
}

#[derive(Deserialize, IntoParams)]
pub struct LgrFilter {
    /// Filter by award status
    pub status: Option<String>,
}
