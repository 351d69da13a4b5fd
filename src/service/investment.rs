use chrono::{Duration, Utc};
use entity::{
    investment::InvestmentStatus, member::MemberStatus, point_transaction::PointLedger,
};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{
        commission::CommissionRepository, investment::InvestmentRepository,
        matrix::MatrixRepository, member::MemberRepository, points::PointsRepository,
    },
    error::Error,
    model::investment::{
        BulkRejectDto, BulkRejectResultDto, InvestmentDto, InvestmentFilter, InvestmentListDto,
        RejectDto,
    },
    service::parse_enum,
};

/// Referral commission rates in percent for upline levels 1 through 7.
const LEVEL_RATES: [i64; 7] = [10, 5, 3, 2, 1, 1, 1];

/// Days until the first profit payment after approval.
const PAYMENT_CYCLE_DAYS: i64 = 30;

pub struct InvestmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvestmentService<'a> {
    /// Creates a new instance of [`InvestmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_investments(
        &self,
        filter: InvestmentFilter,
        page_index: u64,
        per_page: u64,
    ) -> Result<InvestmentListDto, Error> {
        let status = filter.status.as_deref().map(parse_enum).transpose()?;

        let (investments, total, pages) = InvestmentRepository::new(self.db)
            .list(status, page_index, per_page)
            .await?;

        Ok(InvestmentListDto {
            investments: investments.into_iter().map(Into::into).collect(),
            total,
            page: page_index + 1,
            pages,
        })
    }

    /// Approves a pending investment.
    ///
    /// Activates the row, schedules the first payment a cycle out, pays
    /// referral commissions to active upline members along the matrix, and
    /// awards MAP points to the investor. Runs in a single transaction so a
    /// failure anywhere leaves the investment pending.
    pub async fn approve(&self, investment_id: i32) -> Result<InvestmentDto, Error> {
        let txn = self.db.begin().await?;

        let investments = InvestmentRepository::new(&txn);
        let investment = investments
            .get_by_id(investment_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Investment {investment_id}")))?;

        if investment.status != InvestmentStatus::Pending {
            return Err(Error::Conflict(format!(
                "Investment {investment_id} is not pending"
            )));
        }

        let now = Utc::now().naive_utc();
        let next_payment_date = now + Duration::days(PAYMENT_CYCLE_DAYS);
        let investment = investments
            .mark_approved(investment, now, next_payment_date)
            .await?;

        self.pay_upline_commissions(&txn, &investment).await?;

        // One MAP point per 100 invested, fractions dropped.
        let map_points = (investment.amount / Decimal::ONE_HUNDRED)
            .trunc()
            .to_i64()
            .unwrap_or(0);
        if map_points > 0 {
            PointsRepository::new(&txn)
                .append(
                    investment.member_id,
                    PointLedger::Monthly,
                    map_points,
                    "investment_approved".into(),
                )
                .await?;
        }

        txn.commit().await?;

        info!(
            "Approved investment {} for member {}",
            investment.id, investment.member_id
        );

        Ok(investment.into())
    }

    async fn pay_upline_commissions(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        investment: &entity::investment::Model,
    ) -> Result<(), Error> {
        let matrix = MatrixRepository::new(txn);
        let members = MemberRepository::new(txn);
        let commissions = CommissionRepository::new(txn);

        let Some(position) = matrix.get_by_member_id(investment.member_id).await? else {
            // Unplaced members earn no one commissions.
            return Ok(());
        };

        let mut parent_id = position.parent_id;
        let mut level: i32 = 1;

        while let Some(position_id) = parent_id {
            if level > LEVEL_RATES.len() as i32 {
                break;
            }

            let parent = matrix.get_by_id(position_id).await?.ok_or_else(|| {
                Error::InternalError(format!("Matrix position {position_id} has vanished"))
            })?;
            let earner = members.get_by_id(parent.member_id).await?.ok_or_else(|| {
                Error::InternalError(format!("Member {} has vanished", parent.member_id))
            })?;

            if earner.status == MemberStatus::Active {
                let rate = Decimal::from(LEVEL_RATES[(level - 1) as usize]);
                let amount = (investment.amount * rate / Decimal::ONE_HUNDRED).round_dp(2);

                commissions
                    .create(
                        earner.id,
                        investment.member_id,
                        investment.id,
                        level,
                        rate,
                        amount,
                    )
                    .await?;
            }

            parent_id = parent.parent_id;
            level += 1;
        }

        Ok(())
    }

    pub async fn reject(
        &self,
        investment_id: i32,
        rejection: RejectDto,
    ) -> Result<InvestmentDto, Error> {
        let reason = rejection.reason.trim();
        if reason.is_empty() {
            return Err(Error::Validation("A rejection reason is required".into()));
        }

        let investments = InvestmentRepository::new(self.db);
        let investment = investments
            .get_by_id(investment_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Investment {investment_id}")))?;

        if investment.status != InvestmentStatus::Pending {
            return Err(Error::Conflict(format!(
                "Investment {investment_id} is not pending"
            )));
        }

        let investment = investments
            .mark_rejected(investment, reason.to_string())
            .await?;

        Ok(investment.into())
    }

    pub async fn bulk_reject(&self, request: BulkRejectDto) -> Result<BulkRejectResultDto, Error> {
        if request.ids.is_empty() {
            return Err(Error::Validation("No investment ids provided".into()));
        }

        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(Error::Validation("A rejection reason is required".into()));
        }

        let affected = InvestmentRepository::new(self.db)
            .bulk_reject(&request.ids, reason)
            .await?;

        Ok(BulkRejectResultDto {
            success: true,
            message: format!("Rejected {affected} pending investments"),
            affected,
        })
    }
}

#[cfg(test)]
mod tests {
    mod approve_tests {
        use chrono::Duration;
        use entity::{
            investment::InvestmentStatus, member::MemberStatus, point_transaction::PointLedger,
        };
        use rust_decimal::Decimal;
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
        use trellis_test_utils::prelude::*;

        use crate::{error::Error, service::investment::InvestmentService};

        /// Expect approval to activate the row, pay active upline members at
        /// their level rates, skip suspended ones, and award MAP points
        #[tokio::test]
        async fn test_approve_full_flow() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = InvestmentService::new(&test.db);

            let root = factory::create_member(&test.db, "Root", "root@example.com", None).await?;
            let mid = factory::create_member_with_status(
                &test.db,
                "Mid",
                "mid@example.com",
                Some(root.id),
                MemberStatus::Suspended,
            )
            .await?;
            let leaf =
                factory::create_member(&test.db, "Leaf", "leaf@example.com", Some(mid.id)).await?;

            let root_pos = factory::create_position(&test.db, root.id, None, 0, 0).await?;
            let mid_pos =
                factory::create_position(&test.db, mid.id, Some(root_pos.id), 1, 0).await?;
            factory::create_position(&test.db, leaf.id, Some(mid_pos.id), 2, 0).await?;

            let investment =
                factory::create_investment(&test.db, leaf.id, 1000, InvestmentStatus::Pending)
                    .await?;

            let approved = service.approve(investment.id).await.unwrap();

            assert_eq!(approved.status, "active");
            let approved_at = approved.approved_at.unwrap();
            let next_payment = approved.next_payment_date.unwrap();
            assert_eq!(next_payment - approved_at, Duration::days(30));

            let commissions = entity::prelude::ReferralCommission::find()
                .all(&test.db)
                .await?;

            // Suspended level-1 upline earns nothing; root earns level 2 at 5%.
            assert_eq!(commissions.len(), 1);
            assert_eq!(commissions[0].earner_id, root.id);
            assert_eq!(commissions[0].level, 2);
            assert_eq!(commissions[0].amount, Decimal::from(50));

            let map_rows = entity::prelude::PointTransaction::find()
                .filter(entity::point_transaction::Column::MemberId.eq(leaf.id))
                .all(&test.db)
                .await?;

            assert_eq!(map_rows.len(), 1);
            assert_eq!(map_rows[0].ledger, PointLedger::Monthly);
            assert_eq!(map_rows[0].delta, 10);
            assert_eq!(map_rows[0].reason, "investment_approved");

            Ok(())
        }

        /// Expect approving a non-pending investment to conflict without
        /// touching the row
        #[tokio::test]
        async fn test_approve_non_pending_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = InvestmentService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let investment =
                factory::create_investment(&test.db, member.id, 1000, InvestmentStatus::Rejected)
                    .await?;

            let result = service.approve(investment.id).await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            let after = entity::prelude::Investment::find_by_id(investment.id)
                .one(&test.db)
                .await?
                .unwrap();
            assert_eq!(after.status, InvestmentStatus::Rejected);
            assert!(after.approved_at.is_none());

            Ok(())
        }

        /// Expect an unplaced investor to be approved with no commissions
        #[tokio::test]
        async fn test_approve_unplaced_member() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = InvestmentService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let investment =
                factory::create_investment(&test.db, member.id, 500, InvestmentStatus::Pending)
                    .await?;

            let approved = service.approve(investment.id).await.unwrap();

            assert_eq!(approved.status, "active");

            let commissions = entity::prelude::ReferralCommission::find()
                .all(&test.db)
                .await?;
            assert!(commissions.is_empty());

            Ok(())
        }
    }

    mod reject_tests {
        use entity::investment::InvestmentStatus;
        use trellis_test_utils::prelude::*;

        use crate::{
            error::Error,
            model::investment::{BulkRejectDto, RejectDto},
            service::investment::InvestmentService,
        };

        /// Expect a blank rejection reason to fail validation
        #[tokio::test]
        async fn test_reject_requires_reason() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = InvestmentService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let investment =
                factory::create_investment(&test.db, member.id, 500, InvestmentStatus::Pending)
                    .await?;

            let result = service
                .reject(investment.id, RejectDto { reason: "  ".into() })
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }

        /// Expect a bulk reject with no ids to fail validation
        #[tokio::test]
        async fn test_bulk_reject_empty_ids() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = InvestmentService::new(&test.db);

            let result = service
                .bulk_reject(BulkRejectDto {
                    ids: vec![],
                    reason: "cleanup".into(),
                })
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }
}
