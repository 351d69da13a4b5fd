use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Member and money metrics for the admin landing screen.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub total_members: u64,
    pub active_members: u64,
    pub suspended_members: u64,
    pub new_members_this_month: u64,
    pub new_members_last_month: u64,
    /// Month-over-month growth in percent, one decimal place
    pub member_growth_rate: f64,
    pub active_capital: Decimal,
    pub pending_investments: u64,
    pub pending_listings: u64,
    pub open_tickets: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TopEarnerDto {
    pub member_id: i32,
    pub display_name: String,
    pub total: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CommissionTotalsDto {
    pub pending: Decimal,
    pub settled: Decimal,
    pub void: Decimal,
}

/// Reward program analytics, all derived from stored rows.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RewardReportDto {
    /// Filled matrix positions over theoretical capacity, in percent
    pub placement_efficiency: f64,
    /// Positions placed under someone other than their sponsor, in percent
    pub spillover_rate: f64,
    pub commission_totals: CommissionTotalsDto,
    pub lifetime_points_total: i64,
    pub monthly_points_total: i64,
    pub active_lgr_awards: u64,
    pub lgr_accrued_total: Decimal,
    pub top_earners: Vec<TopEarnerDto>,
}
