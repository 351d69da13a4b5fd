use chrono::Utc;
use entity::point_transaction::PointLedger;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct PointsRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PointsRepository<'a, C> {
    /// Creates a new instance of [`PointsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a ledger entry; balances are always derived by summing.
    pub async fn append(
        &self,
        member_id: i32,
        ledger: PointLedger,
        delta: i64,
        reason: String,
    ) -> Result<entity::point_transaction::Model, DbErr> {
        let entry = entity::point_transaction::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            ledger: ActiveValue::Set(ledger),
            delta: ActiveValue::Set(delta),
            reason: ActiveValue::Set(reason),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    pub async fn balance(&self, member_id: i32, ledger: PointLedger) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::PointTransaction::find()
            .select_only()
            .column_as(entity::point_transaction::Column::Delta.sum(), "total")
            .filter(entity::point_transaction::Column::MemberId.eq(member_id))
            .filter(entity::point_transaction::Column::Ledger.eq(ledger))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    pub async fn ledger_total(&self, ledger: PointLedger) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::PointTransaction::find()
            .select_only()
            .column_as(entity::point_transaction::Column::Delta.sum(), "total")
            .filter(entity::point_transaction::Column::Ledger.eq(ledger))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    pub async fn recent(
        &self,
        member_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::point_transaction::Model>, DbErr> {
        entity::prelude::PointTransaction::find()
            .filter(entity::point_transaction::Column::MemberId.eq(member_id))
            .order_by_desc(entity::point_transaction::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
