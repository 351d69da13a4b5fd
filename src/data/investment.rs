use chrono::NaiveDateTime;
use entity::investment::InvestmentStatus;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct InvestmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvestmentRepository<'a, C> {
    /// Creates a new instance of [`InvestmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        investment_id: i32,
    ) -> Result<Option<entity::investment::Model>, DbErr> {
        entity::prelude::Investment::find_by_id(investment_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        status: Option<InvestmentStatus>,
        page_index: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::investment::Model>, u64, u64), DbErr> {
        let mut query = entity::prelude::Investment::find();

        if let Some(status) = status {
            query = query.filter(entity::investment::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::investment::Column::CreatedAt)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let investments = paginator.fetch_page(page_index).await?;

        Ok((investments, counts.number_of_items, counts.number_of_pages))
    }

    pub async fn mark_approved(
        &self,
        investment: entity::investment::Model,
        approved_at: NaiveDateTime,
        next_payment_date: NaiveDateTime,
    ) -> Result<entity::investment::Model, DbErr> {
        let mut investment = investment.into_active_model();
        investment.status = ActiveValue::Set(InvestmentStatus::Active);
        investment.approved_at = ActiveValue::Set(Some(approved_at));
        investment.next_payment_date = ActiveValue::Set(Some(next_payment_date));

        investment.update(self.db).await
    }

    pub async fn mark_rejected(
        &self,
        investment: entity::investment::Model,
        reason: String,
    ) -> Result<entity::investment::Model, DbErr> {
        let mut investment = investment.into_active_model();
        investment.status = ActiveValue::Set(InvestmentStatus::Rejected);
        investment.rejection_reason = ActiveValue::Set(Some(reason));

        investment.update(self.db).await
    }

    /// Rejects every investment in `ids` that is still pending; rows in any
    /// other state are left untouched. Returns the number of rows changed.
    pub async fn bulk_reject(&self, ids: &[i32], reason: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Investment::update_many()
            .col_expr(
                entity::investment::Column::Status,
                Expr::value(InvestmentStatus::Rejected),
            )
            .col_expr(
                entity::investment::Column::RejectionReason,
                Expr::value(reason.to_string()),
            )
            .filter(entity::investment::Column::Id.is_in(ids.to_vec()))
            .filter(entity::investment::Column::Status.eq(InvestmentStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_by_status(&self, status: InvestmentStatus) -> Result<u64, DbErr> {
        entity::prelude::Investment::find()
            .filter(entity::investment::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    pub async fn sum_amount_by_status(&self, status: InvestmentStatus) -> Result<Decimal, DbErr> {
        let total: Option<Option<Decimal>> = entity::prelude::Investment::find()
            .select_only()
            .column_as(entity::investment::Column::Amount.sum(), "total")
            .filter(entity::investment::Column::Status.eq(status))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }

    /// Per-member sum of active investment amounts, the basis for profit splits.
    pub async fn active_capital_by_member(&self) -> Result<Vec<(i32, Decimal)>, DbErr> {
        let rows: Vec<(i32, Option<Decimal>)> = entity::prelude::Investment::find()
            .select_only()
            .column(entity::investment::Column::MemberId)
            .column_as(entity::investment::Column::Amount.sum(), "total")
            .filter(entity::investment::Column::Status.eq(InvestmentStatus::Active))
            .group_by(entity::investment::Column::MemberId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(member_id, total)| (member_id, total.unwrap_or(Decimal::ZERO)))
            .collect())
    }

    pub async fn active_capital_of_member(&self, member_id: i32) -> Result<Decimal, DbErr> {
        let total: Option<Option<Decimal>> = entity::prelude::Investment::find()
            .select_only()
            .column_as(entity::investment::Column::Amount.sum(), "total")
            .filter(entity::investment::Column::MemberId.eq(member_id))
            .filter(entity::investment::Column::Status.eq(InvestmentStatus::Active))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }

    pub async fn all(&self) -> Result<Vec<entity::investment::Model>, DbErr> {
        entity::prelude::Investment::find()
            .order_by_asc(entity::investment::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod bulk_reject_tests {
        use entity::investment::InvestmentStatus;
        use sea_orm::EntityTrait;
        use trellis_test_utils::prelude::*;

        use crate::data::investment::InvestmentRepository;

        /// Expect only pending rows in the id list to be rejected
        #[tokio::test]
        async fn test_bulk_reject_only_pending() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let repo = InvestmentRepository::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let pending =
                factory::create_investment(&test.db, member.id, 500, InvestmentStatus::Pending)
                    .await?;
            let active =
                factory::create_investment(&test.db, member.id, 900, InvestmentStatus::Active)
                    .await?;

            let affected = repo
                .bulk_reject(&[pending.id, active.id], "incomplete KYC")
                .await?;

            assert_eq!(affected, 1);

            let active_after = entity::prelude::Investment::find_by_id(active.id)
                .one(&test.db)
                .await?
                .unwrap();

            assert_eq!(active_after.status, InvestmentStatus::Active);
            assert!(active_after.rejection_reason.is_none());

            let pending_after = entity::prelude::Investment::find_by_id(pending.id)
                .one(&test.db)
                .await?
                .unwrap();

            assert_eq!(pending_after.status, InvestmentStatus::Rejected);
            assert_eq!(
                pending_after.rejection_reason.as_deref(),
                Some("incomplete KYC")
            );

            Ok(())
        }
    }

    mod aggregate_tests {
        use entity::investment::InvestmentStatus;
        use rust_decimal::Decimal;
        use trellis_test_utils::prelude::*;

        use crate::data::investment::InvestmentRepository;

        /// Expect zero when no rows match the summed status
        #[tokio::test]
        async fn test_sum_amount_empty() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let repo = InvestmentRepository::new(&test.db);

            let total = repo.sum_amount_by_status(InvestmentStatus::Active).await?;

            assert_eq!(total, Decimal::ZERO);

            Ok(())
        }

        /// Expect per-member capital to group active rows only
        #[tokio::test]
        async fn test_active_capital_by_member() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let repo = InvestmentRepository::new(&test.db);

            let alice = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let bob = factory::create_member(&test.db, "Bob", "bob@example.com", None).await?;

            factory::create_investment(&test.db, alice.id, 1000, InvestmentStatus::Active).await?;
            factory::create_investment(&test.db, alice.id, 500, InvestmentStatus::Active).await?;
            factory::create_investment(&test.db, bob.id, 700, InvestmentStatus::Pending).await?;

            let mut rows = repo.active_capital_by_member().await?;
            rows.sort_by_key(|(member_id, _)| *member_id);

            assert_eq!(rows, vec![(alice.id, Decimal::from(1500))]);

            Ok(())
        }
    }
}
