use chrono::{Duration, Utc};
use entity::{lgr_award::LgrStatus, point_transaction::PointLedger};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{lgr::LgrRepository, member::MemberRepository, points::PointsRepository},
    error::Error,
    model::lgr::{GrantLgrDto, LgrAwardDto, LgrFilter, LgrListDto},
    service::parse_enum,
};

/// Days per accrual month.
const MONTH_DAYS: i64 = 30;

pub struct LgrService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LgrService<'a> {
    /// Creates a new instance of [`LgrService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn grant(&self, grant: GrantLgrDto) -> Result<LgrAwardDto, Error> {
        if MemberRepository::new(self.db)
            .get_by_id(grant.member_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Member {}", grant.member_id)));
        }

        if grant.principal <= Decimal::ZERO {
            return Err(Error::Validation("Principal must be positive".into()));
        }

        if grant.rate <= Decimal::ZERO || grant.rate > Decimal::ONE_HUNDRED {
            return Err(Error::Validation(
                "Rate must be between 0 and 100 percent".into(),
            ));
        }

        if grant.months < 1 {
            return Err(Error::Validation("Months must be at least 1".into()));
        }

        let starts_at = Utc::now().naive_utc();
        let ends_at = starts_at + Duration::days(MONTH_DAYS * grant.months as i64);

        let award = LgrRepository::new(self.db)
            .create(
                grant.member_id,
                grant.tier,
                grant.principal,
                grant.rate,
                starts_at,
                ends_at,
            )
            .await?;

        Ok(award.into())
    }

    /// Applies one monthly credit to an active award.
    ///
    /// Accrues `principal * rate / 100` onto the award and books the whole
    /// credit points onto the member's lifetime ledger. An award past its
    /// end date is marked completed instead, with no accrual.
    pub async fn credit(&self, award_id: i32) -> Result<LgrAwardDto, Error> {
        let txn = self.db.begin().await?;

        let awards = LgrRepository::new(&txn);
        let award = awards
            .get_by_id(award_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("LGR award {award_id}")))?;

        if award.status != LgrStatus::Active {
            return Err(Error::Conflict(format!("LGR award {award_id} is not active")));
        }

        let now = Utc::now().naive_utc();

        if now >= award.ends_at {
            let award = awards.set_status(award, LgrStatus::Completed).await?;
            txn.commit().await?;

            info!("LGR award {} ran out and was completed", award.id);

            return Ok(award.into());
        }

        let credit = (award.principal * award.rate / Decimal::ONE_HUNDRED).round_dp(2);
        let accrued = award.accrued + credit;
        let member_id = award.member_id;

        let award = awards.record_credit(award, accrued, now).await?;

        let lifetime_points = credit.trunc().to_i64().unwrap_or(0);
        if lifetime_points > 0 {
            PointsRepository::new(&txn)
                .append(
                    member_id,
                    PointLedger::Lifetime,
                    lifetime_points,
                    "lgr_credit".into(),
                )
                .await?;
        }

        txn.commit().await?;

        Ok(award.into())
    }

    pub async fn list_awards(
        &self,
        filter: LgrFilter,
        page_index: u64,
        per_page: u64,
    ) -> Result<LgrListDto, Error> {
        let status = filter.status.as_deref().map(parse_enum).transpose()?;

        let (awards, total, pages) = LgrRepository::new(self.db)
            .list(status, page_index, per_page)
            .await?;

        Ok(LgrListDto {
            awards: awards.into_iter().map(Into::into).collect(),
            total,
            page: page_index + 1,
            pages,
        })
    }

    pub async fn cancel(&self, award_id: i32) -> Result<LgrAwardDto, Error> {
        let awards = LgrRepository::new(self.db);
        let award = awards
            .get_by_id(award_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("LGR award {award_id}")))?;

        if award.status != LgrStatus::Active {
            return Err(Error::Conflict(format!("LGR award {award_id} is not active")));
        }

        let award = awards.set_status(award, LgrStatus::Cancelled).await?;

        Ok(award.into())
    }
}

#[cfg(test)]
mod tests {
    mod credit_tests {
        use chrono::{Duration, Utc};
        use entity::{lgr_award::LgrStatus, point_transaction::PointLedger};
        use rust_decimal::Decimal;
        use sea_orm::EntityTrait;
        use trellis_test_utils::prelude::*;

        use crate::{error::Error, service::lgr::LgrService};

        /// Expect a credit on an active award to accrue and book lifetime
        /// points
        #[tokio::test]
        async fn test_credit_accrues() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(entity::prelude::LgrAward)?;
            let service = LgrService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let now = Utc::now().naive_utc();
            let award = factory::create_lgr_award(
                &test.db,
                member.id,
                1000,
                5,
                now,
                now + Duration::days(90),
                LgrStatus::Active,
            )
            .await?;

            let credited = service.credit(award.id).await.unwrap();

            assert_eq!(credited.accrued, Decimal::from(50));
            assert!(credited.last_credited_at.is_some());
            assert_eq!(credited.status, "active");

            let entries = entity::prelude::PointTransaction::find()
                .all(&test.db)
                .await?;
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].ledger, PointLedger::Lifetime);
            assert_eq!(entries[0].delta, 50);
            assert_eq!(entries[0].reason, "lgr_credit");

            Ok(())
        }

        /// Expect a credit past the end date to complete the award without
        /// accrual
        #[tokio::test]
        async fn test_credit_past_end_completes() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(entity::prelude::LgrAward)?;
            let service = LgrService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let now = Utc::now().naive_utc();
            let award = factory::create_lgr_award(
                &test.db,
                member.id,
                1000,
                5,
                now - Duration::days(120),
                now - Duration::days(30),
                LgrStatus::Active,
            )
            .await?;

            let credited = service.credit(award.id).await.unwrap();

            assert_eq!(credited.status, "completed");
            assert_eq!(credited.accrued, Decimal::ZERO);

            let entries = entity::prelude::PointTransaction::find()
                .all(&test.db)
                .await?;
            assert!(entries.is_empty());

            Ok(())
        }

        /// Expect crediting a cancelled award to conflict
        #[tokio::test]
        async fn test_credit_cancelled_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(entity::prelude::LgrAward)?;
            let service = LgrService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let now = Utc::now().naive_utc();
            let award = factory::create_lgr_award(
                &test.db,
                member.id,
                1000,
                5,
                now,
                now + Duration::days(90),
                LgrStatus::Cancelled,
            )
            .await?;

            let result = service.credit(award.id).await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }
    }
}
