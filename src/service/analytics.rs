use std::collections::HashMap;

use entity::{
    lgr_award::LgrStatus, point_transaction::PointLedger, referral_commission::CommissionStatus,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        commission::CommissionRepository, lgr::LgrRepository, matrix::MatrixRepository,
        member::MemberRepository, points::PointsRepository,
    },
    error::Error,
    model::report::{CommissionTotalsDto, RewardReportDto, TopEarnerDto},
};

use super::matrix::{MATRIX_DEPTH, MATRIX_WIDTH};

const TOP_EARNER_LIMIT: u64 = 5;

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    /// Creates a new instance of [`AnalyticsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn reward_report(&self) -> Result<RewardReportDto, Error> {
        let matrix = MatrixRepository::new(self.db);
        let commissions = CommissionRepository::new(self.db);
        let points = PointsRepository::new(self.db);
        let lgr = LgrRepository::new(self.db);

        let positions = matrix.all().await?;

        let mut totals = CommissionTotalsDto {
            pending: Decimal::ZERO,
            settled: Decimal::ZERO,
            void: Decimal::ZERO,
        };
        for (status, total) in commissions.totals_by_status().await? {
            match status {
                CommissionStatus::Pending => totals.pending = total,
                CommissionStatus::Settled => totals.settled = total,
                CommissionStatus::Void => totals.void = total,
            }
        }

        let earner_totals = commissions.top_earners(TOP_EARNER_LIMIT).await?;
        let earner_ids = earner_totals.iter().map(|(member_id, _)| *member_id).collect();
        let names: HashMap<i32, String> = MemberRepository::new(self.db)
            .get_many_by_ids(earner_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m.display_name))
            .collect();

        let top_earners = earner_totals
            .into_iter()
            .map(|(member_id, total)| TopEarnerDto {
                member_id,
                display_name: names.get(&member_id).cloned().unwrap_or_default(),
                total,
            })
            .collect();

        let sponsor_of: HashMap<i32, Option<i32>> = MemberRepository::new(self.db)
            .all()
            .await?
            .into_iter()
            .map(|m| (m.id, m.sponsor_id))
            .collect();

        Ok(RewardReportDto {
            placement_efficiency: placement_efficiency(&positions),
            spillover_rate: spillover_rate(&positions, &sponsor_of),
            commission_totals: totals,
            lifetime_points_total: points.ledger_total(PointLedger::Lifetime).await?,
            monthly_points_total: points.ledger_total(PointLedger::Monthly).await?,
            active_lgr_awards: lgr.count_by_status(LgrStatus::Active).await?,
            lgr_accrued_total: lgr.accrued_total().await?,
            top_earners,
        })
    }
}

/// Filled positions over the theoretical capacity of the occupied levels,
/// in percent. Capacity is the full-width pyramid down to the deepest
/// occupied level.
fn placement_efficiency(positions: &[entity::matrix_position::Model]) -> f64 {
    let Some(max_depth) = positions.iter().map(|p| p.depth).max() else {
        return 0.0;
    };

    let capacity: u64 = (0..=max_depth.min(MATRIX_DEPTH - 1))
        .map(|depth| (MATRIX_WIDTH as u64).pow(depth as u32))
        .sum();

    let rate = positions.len() as f64 / capacity as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Share of non-root positions whose matrix parent is not their sponsor,
/// in percent.
fn spillover_rate(
    positions: &[entity::matrix_position::Model],
    sponsor_of: &HashMap<i32, Option<i32>>,
) -> f64 {
    let member_at: HashMap<i32, i32> = positions.iter().map(|p| (p.id, p.member_id)).collect();

    let mut placed = 0u64;
    let mut spilled = 0u64;

    for position in positions {
        let Some(parent_id) = position.parent_id else {
            continue;
        };
        placed += 1;

        let parent_member = member_at.get(&parent_id).copied();
        let sponsor = sponsor_of.get(&position.member_id).copied().flatten();

        if parent_member != sponsor {
            spilled += 1;
        }
    }

    if placed == 0 {
        return 0.0;
    }

    let rate = spilled as f64 / placed as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}
