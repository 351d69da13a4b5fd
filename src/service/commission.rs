use entity::referral_commission::CommissionStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::commission::CommissionRepository,
    error::Error,
    model::commission::{CommissionDto, CommissionFilter, CommissionListDto},
    service::parse_enum,
};

pub struct CommissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommissionService<'a> {
    /// Creates a new instance of [`CommissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_commissions(
        &self,
        filter: CommissionFilter,
        page_index: u64,
        per_page: u64,
    ) -> Result<CommissionListDto, Error> {
        let status = filter.status.as_deref().map(parse_enum).transpose()?;

        let (commissions, total, pages) = CommissionRepository::new(self.db)
            .list(filter.earner_id, status, page_index, per_page)
            .await?;

        Ok(CommissionListDto {
            commissions: commissions.into_iter().map(Into::into).collect(),
            total,
            page: page_index + 1,
            pages,
        })
    }

    pub async fn settle(&self, commission_id: i32) -> Result<CommissionDto, Error> {
        let repository = CommissionRepository::new(self.db);
        let commission = repository
            .get_by_id(commission_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Commission {commission_id}")))?;

        if commission.status != CommissionStatus::Pending {
            return Err(Error::Conflict(format!(
                "Commission {commission_id} is not pending"
            )));
        }

        let commission = repository
            .set_status(commission, CommissionStatus::Settled)
            .await?;

        Ok(commission.into())
    }

    pub async fn void(&self, commission_id: i32) -> Result<CommissionDto, Error> {
        let repository = CommissionRepository::new(self.db);
        let commission = repository
            .get_by_id(commission_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Commission {commission_id}")))?;

        if commission.status != CommissionStatus::Pending {
            return Err(Error::Conflict(format!(
                "Commission {commission_id} is not pending"
            )));
        }

        let commission = repository
            .set_status(commission, CommissionStatus::Void)
            .await?;

        Ok(commission.into())
    }
}

#[cfg(test)]
mod tests {
    mod settle_tests {
        use entity::{investment::InvestmentStatus, referral_commission::CommissionStatus};
        use trellis_test_utils::prelude::*;

        use crate::{error::Error, service::commission::CommissionService};

        /// Expect settling an already settled commission to conflict
        #[tokio::test]
        async fn test_settle_twice_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = CommissionService::new(&test.db);

            let alice = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let bob = factory::create_member(&test.db, "Bob", "bob@example.com", Some(alice.id))
                .await?;
            let investment =
                factory::create_investment(&test.db, bob.id, 1000, InvestmentStatus::Active)
                    .await?;
            let commission = factory::create_commission(
                &test.db,
                alice.id,
                bob.id,
                investment.id,
                1,
                100,
                CommissionStatus::Pending,
            )
            .await?;

            let settled = service.settle(commission.id).await.unwrap();
            assert_eq!(settled.status, "settled");

            let result = service.settle(commission.id).await;
            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }
    }
}
