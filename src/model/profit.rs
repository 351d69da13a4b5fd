use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DistributionDto {
    pub id: i32,
    pub period: String,
    pub total_profit: Decimal,
    pub pool_rate: Decimal,
    pub distributed_amount: Decimal,
    pub status: String,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<entity::profit_distribution::Model> for DistributionDto {
    fn from(distribution: entity::profit_distribution::Model) -> Self {
        Self {
            id: distribution.id,
            period: distribution.period,
            total_profit: distribution.total_profit,
            pool_rate: distribution.pool_rate,
            distributed_amount: distribution.distributed_amount,
            status: distribution.status.to_value(),
            completed_at: distribution.completed_at,
            created_at: distribution.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProfitShareDto {
    pub member_id: i32,
    pub basis: Decimal,
    pub amount: Decimal,
}

impl From<entity::profit_share::Model> for ProfitShareDto {
    fn from(share: entity::profit_share::Model) -> Self {
        Self {
            member_id: share.member_id,
            basis: share.basis,
            amount: share.amount,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DistributionDetailDto {
    pub distribution: DistributionDto,
    pub shares: Vec<ProfitShareDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateDistributionDto {
    /// Calendar period the profit belongs to, e.g. "2026-08"
    pub period: String,
    pub total_profit: Decimal,
    /// Percentage of the profit paid into the member pool
    pub pool_rate: Decimal,
}
