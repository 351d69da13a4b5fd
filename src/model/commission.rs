use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CommissionDto {
    pub id: i32,
    pub earner_id: i32,
    pub source_id: i32,
    pub investment_id: i32,
    pub level: i32,
    pub rate: Decimal,
    pub amount: Decimal,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::referral_commission::Model> for CommissionDto {
    fn from(commission: entity::referral_commission::Model) -> Self {
        Self {
            id: commission.id,
            earner_id: commission.earner_id,
            source_id: commission.source_id,
            investment_id: commission.investment_id,
            level: commission.level,
            rate: commission.rate,
            amount: commission.amount,
            status: commission.status.to_value(),
            created_at: commission.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CommissionListDto {
    pub commissions: Vec<CommissionDto>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Deserialize, IntoParams)]
pub struct CommissionFilter {
    /// Filter by earning member
    pub earner_id: Option<i32>,
    /// Filter by commission status
    pub status: Option<String>,
}
