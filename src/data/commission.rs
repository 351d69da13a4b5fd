use chrono::Utc;
use entity::referral_commission::CommissionStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct CommissionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommissionRepository<'a, C> {
    /// Creates a new instance of [`CommissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        earner_id: i32,
        source_id: i32,
        investment_id: i32,
        level: i32,
        rate: Decimal,
        amount: Decimal,
    ) -> Result<entity::referral_commission::Model, DbErr> {
        let commission = entity::referral_commission::ActiveModel {
            earner_id: ActiveValue::Set(earner_id),
            source_id: ActiveValue::Set(source_id),
            investment_id: ActiveValue::Set(investment_id),
            level: ActiveValue::Set(level),
            rate: ActiveValue::Set(rate),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(CommissionStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        commission.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        commission_id: i32,
    ) -> Result<Option<entity::referral_commission::Model>, DbErr> {
        entity::prelude::ReferralCommission::find_by_id(commission_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        earner_id: Option<i32>,
        status: Option<CommissionStatus>,
        page_index: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::referral_commission::Model>, u64, u64), DbErr> {
        let mut query = entity::prelude::ReferralCommission::find();

        if let Some(earner_id) = earner_id {
            query = query.filter(entity::referral_commission::Column::EarnerId.eq(earner_id));
        }

        if let Some(status) = status {
            query = query.filter(entity::referral_commission::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::referral_commission::Column::CreatedAt)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let commissions = paginator.fetch_page(page_index).await?;

        Ok((commissions, counts.number_of_items, counts.number_of_pages))
    }

    pub async fn set_status(
        &self,
        commission: entity::referral_commission::Model,
        status: CommissionStatus,
    ) -> Result<entity::referral_commission::Model, DbErr> {
        let mut commission = commission.into_active_model();
        commission.status = ActiveValue::Set(status);

        commission.update(self.db).await
    }

    /// Amount sums grouped by status.
    pub async fn totals_by_status(&self) -> Result<Vec<(CommissionStatus, Decimal)>, DbErr> {
        let rows: Vec<(CommissionStatus, Option<Decimal>)> =
            entity::prelude::ReferralCommission::find()
                .select_only()
                .column(entity::referral_commission::Column::Status)
                .column_as(entity::referral_commission::Column::Amount.sum(), "total")
                .group_by(entity::referral_commission::Column::Status)
                .into_tuple()
                .all(self.db)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(status, total)| (status, total.unwrap_or(Decimal::ZERO)))
            .collect())
    }

    /// Highest-earning members by non-void commission sum.
    pub async fn top_earners(&self, limit: u64) -> Result<Vec<(i32, Decimal)>, DbErr> {
        let rows: Vec<(i32, Option<Decimal>)> = entity::prelude::ReferralCommission::find()
            .select_only()
            .column(entity::referral_commission::Column::EarnerId)
            .column_as(entity::referral_commission::Column::Amount.sum(), "total")
            .filter(entity::referral_commission::Column::Status.ne(CommissionStatus::Void))
            .group_by(entity::referral_commission::Column::EarnerId)
            .order_by_desc(entity::referral_commission::Column::Amount.sum())
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(earner_id, total)| (earner_id, total.unwrap_or(Decimal::ZERO)))
            .collect())
    }

    pub async fn all(&self) -> Result<Vec<entity::referral_commission::Model>, DbErr> {
        entity::prelude::ReferralCommission::find()
            .order_by_asc(entity::referral_commission::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod top_earner_tests {
        use entity::investment::InvestmentStatus;
        use entity::referral_commission::CommissionStatus;
        use rust_decimal::Decimal;
        use trellis_test_utils::prelude::*;

        use crate::data::commission::CommissionRepository;

        /// Expect earners ranked by summed amount with void rows excluded
        #[tokio::test]
        async fn test_top_earners_excludes_void() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let repo = CommissionRepository::new(&test.db);

            let alice = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let bob = factory::create_member(&test.db, "Bob", "bob@example.com", None).await?;
            let investment =
                factory::create_investment(&test.db, bob.id, 1000, InvestmentStatus::Active)
                    .await?;

            factory::create_commission(
                &test.db,
                alice.id,
                bob.id,
                investment.id,
                1,
                100,
                CommissionStatus::Settled,
            )
            .await?;
            factory::create_commission(
                &test.db,
                bob.id,
                alice.id,
                investment.id,
                1,
                900,
                CommissionStatus::Void,
            )
            .await?;

            let earners = repo.top_earners(5).await?;

            assert_eq!(earners, vec![(alice.id, Decimal::from(100))]);

            Ok(())
        }
    }
}
