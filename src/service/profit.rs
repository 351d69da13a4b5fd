use chrono::Utc;
use entity::member::MemberStatus;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::{
    data::{investment::InvestmentRepository, member::MemberRepository, profit::ProfitRepository},
    error::Error,
    model::profit::{CreateDistributionDto, DistributionDetailDto, DistributionDto},
};

pub struct ProfitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfitService<'a> {
    /// Creates a new instance of [`ProfitService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a profit distribution for a period.
    ///
    /// The pool is `total_profit * pool_rate / 100`, split across active
    /// members holding at least one active investment, proportional to each
    /// member's active capital. One row per period; the whole run is a
    /// single transaction.
    pub async fn create_distribution(
        &self,
        request: CreateDistributionDto,
    ) -> Result<DistributionDetailDto, Error> {
        let period = request.period.trim().to_string();
        if period.is_empty() {
            return Err(Error::Validation("A period is required".into()));
        }

        if request.total_profit <= Decimal::ZERO {
            return Err(Error::Validation("Total profit must be positive".into()));
        }

        if request.pool_rate <= Decimal::ZERO || request.pool_rate > Decimal::ONE_HUNDRED {
            return Err(Error::Validation(
                "Pool rate must be between 0 and 100 percent".into(),
            ));
        }

        let txn = self.db.begin().await?;

        let profits = ProfitRepository::new(&txn);
        if profits.get_by_period(&period).await?.is_some() {
            return Err(Error::Conflict(format!(
                "Period {period:?} has already been distributed"
            )));
        }

        let mut capitals = InvestmentRepository::new(&txn)
            .active_capital_by_member()
            .await?;
        capitals.sort_by_key(|(member_id, _)| *member_id);

        let member_ids = capitals.iter().map(|(member_id, _)| *member_id).collect();
        let members = MemberRepository::new(&txn).get_many_by_ids(member_ids).await?;

        let eligible: Vec<(i32, Decimal)> = capitals
            .into_iter()
            .filter(|(member_id, capital)| {
                *capital > Decimal::ZERO
                    && members
                        .iter()
                        .any(|m| m.id == *member_id && m.status == MemberStatus::Active)
            })
            .collect();

        if eligible.is_empty() {
            return Err(Error::Validation(
                "No active members hold active investments".into(),
            ));
        }

        let total_basis: Decimal = eligible.iter().map(|(_, capital)| *capital).sum();
        let pool = request.total_profit * request.pool_rate / Decimal::ONE_HUNDRED;

        let now = Utc::now().naive_utc();
        let mut shares = Vec::with_capacity(eligible.len());
        let mut distributed = Decimal::ZERO;

        for (member_id, basis) in eligible {
            let amount = (pool * basis / total_basis).round_dp(2);
            distributed += amount;
            shares.push((member_id, basis, amount));
        }

        let distribution = profits
            .create_distribution(period, request.total_profit, request.pool_rate, distributed, now)
            .await?;

        let mut share_dtos = Vec::with_capacity(shares.len());
        for (member_id, basis, amount) in shares {
            let share = profits
                .create_share(distribution.id, member_id, basis, amount)
                .await?;
            share_dtos.push(share.into());
        }

        txn.commit().await?;

        info!(
            "Distributed {} for period {} across {} members",
            distribution.distributed_amount,
            distribution.period,
            share_dtos.len()
        );

        Ok(DistributionDetailDto {
            distribution: distribution.into(),
            shares: share_dtos,
        })
    }

    pub async fn list_distributions(&self) -> Result<Vec<DistributionDto>, Error> {
        let distributions = ProfitRepository::new(self.db).list().await?;

        Ok(distributions.into_iter().map(Into::into).collect())
    }

    pub async fn get_distribution(
        &self,
        distribution_id: i32,
    ) -> Result<DistributionDetailDto, Error> {
        let profits = ProfitRepository::new(self.db);

        let distribution = profits
            .get_by_id(distribution_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Distribution {distribution_id}")))?;

        let shares = profits.shares_of(distribution.id).await?;

        Ok(DistributionDetailDto {
            distribution: distribution.into(),
            shares: shares.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    mod create_distribution_tests {
        use entity::{investment::InvestmentStatus, member::MemberStatus};
        use rust_decimal::Decimal;
        use trellis_test_utils::prelude::*;

        use crate::{
            error::Error, model::profit::CreateDistributionDto, service::profit::ProfitService,
        };

        /// Expect the pool to be split proportional to active capital,
        /// ignoring suspended members and non-active investments
        #[tokio::test]
        async fn test_proportional_split() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(
                entity::prelude::ProfitDistribution,
                entity::prelude::ProfitShare
            )?;
            let service = ProfitService::new(&test.db);

            let alice = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let bob = factory::create_member(&test.db, "Bob", "bob@example.com", None).await?;
            let carol = factory::create_member_with_status(
                &test.db,
                "Carol",
                "carol@example.com",
                None,
                MemberStatus::Suspended,
            )
            .await?;

            factory::create_investment(&test.db, alice.id, 1000, InvestmentStatus::Active).await?;
            factory::create_investment(&test.db, bob.id, 500, InvestmentStatus::Active).await?;
            factory::create_investment(&test.db, bob.id, 900, InvestmentStatus::Pending).await?;
            factory::create_investment(&test.db, carol.id, 800, InvestmentStatus::Active).await?;

            let detail = service
                .create_distribution(CreateDistributionDto {
                    period: "2026-08".into(),
                    total_profit: Decimal::from(300),
                    pool_rate: Decimal::from(50),
                })
                .await
                .unwrap();

            assert_eq!(detail.distribution.distributed_amount, Decimal::from(150));
            assert_eq!(detail.shares.len(), 2);

            assert_eq!(detail.shares[0].member_id, alice.id);
            assert_eq!(detail.shares[0].amount, Decimal::from(100));
            assert_eq!(detail.shares[1].member_id, bob.id);
            assert_eq!(detail.shares[1].amount, Decimal::from(50));

            Ok(())
        }

        /// Expect a repeated period to conflict
        #[tokio::test]
        async fn test_duplicate_period_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(
                entity::prelude::ProfitDistribution,
                entity::prelude::ProfitShare
            )?;
            let service = ProfitService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            factory::create_investment(&test.db, member.id, 1000, InvestmentStatus::Active)
                .await?;

            let request = || CreateDistributionDto {
                period: "2026-08".into(),
                total_profit: Decimal::from(100),
                pool_rate: Decimal::from(10),
            };

            service.create_distribution(request()).await.unwrap();
            let result = service.create_distribution(request()).await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }

        /// Expect a run with no eligible members to fail validation
        #[tokio::test]
        async fn test_no_eligible_members() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(
                entity::prelude::ProfitDistribution,
                entity::prelude::ProfitShare
            )?;
            let service = ProfitService::new(&test.db);

            let result = service
                .create_distribution(CreateDistributionDto {
                    period: "2026-08".into(),
                    total_profit: Decimal::from(100),
                    pool_rate: Decimal::from(10),
                })
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }
}
