use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct InvestmentDto {
    pub id: i32,
    pub member_id: i32,
    pub tier: i32,
    pub amount: Decimal,
    pub status: String,
    pub next_payment_date: Option<NaiveDateTime>,
    pub approved_at: Option<NaiveDateTime>,
    pub rejection_reason: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::investment::Model> for InvestmentDto {
    fn from(investment: entity::investment::Model) -> Self {
        Self {
            id: investment.id,
            member_id: investment.member_id,
            tier: investment.tier,
            amount: investment.amount,
            status: investment.status.to_value(),
            next_payment_date: investment.next_payment_date,
            approved_at: investment.approved_at,
            rejection_reason: investment.rejection_reason,
            created_at: investment.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InvestmentListDto {
    pub investments: Vec<InvestmentDto>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Deserialize, ToSchema)]
pub struct RejectDto {
    pub reason: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkRejectDto {
    pub ids: Vec<i32>,
    pub reason: String,
}

/// Reports how many of the requested rows were still pending and got rejected.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BulkRejectResultDto {
    pub success: bool,
    pub message: String,
    pub affected: u64,
}

#[derive(Deserialize, IntoParams)]
pub struct InvestmentFilter {
    /// Filter by investment status
    pub status: Option<String>,
}
