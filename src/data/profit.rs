use chrono::{NaiveDateTime, Utc};
use entity::profit_distribution::DistributionStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ProfitRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfitRepository<'a, C> {
    /// Creates a new instance of [`ProfitRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_distribution(
        &self,
        period: String,
        total_profit: Decimal,
        pool_rate: Decimal,
        distributed_amount: Decimal,
        completed_at: NaiveDateTime,
    ) -> Result<entity::profit_distribution::Model, DbErr> {
        let distribution = entity::profit_distribution::ActiveModel {
            period: ActiveValue::Set(period),
            total_profit: ActiveValue::Set(total_profit),
            pool_rate: ActiveValue::Set(pool_rate),
            distributed_amount: ActiveValue::Set(distributed_amount),
            status: ActiveValue::Set(DistributionStatus::Completed),
            completed_at: ActiveValue::Set(Some(completed_at)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        distribution.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        distribution_id: i32,
    ) -> Result<Option<entity::profit_distribution::Model>, DbErr> {
        entity::prelude::ProfitDistribution::find_by_id(distribution_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_period(
        &self,
        period: &str,
    ) -> Result<Option<entity::profit_distribution::Model>, DbErr> {
        entity::prelude::ProfitDistribution::find()
            .filter(entity::profit_distribution::Column::Period.eq(period))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::profit_distribution::Model>, DbErr> {
        entity::prelude::ProfitDistribution::find()
            .order_by_desc(entity::profit_distribution::Column::Period)
            .all(self.db)
            .await
    }

    pub async fn create_share(
        &self,
        distribution_id: i32,
        member_id: i32,
        basis: Decimal,
        amount: Decimal,
    ) -> Result<entity::profit_share::Model, DbErr> {
        let share = entity::profit_share::ActiveModel {
            distribution_id: ActiveValue::Set(distribution_id),
            member_id: ActiveValue::Set(member_id),
            basis: ActiveValue::Set(basis),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        share.insert(self.db).await
    }

    pub async fn shares_of(
        &self,
        distribution_id: i32,
    ) -> Result<Vec<entity::profit_share::Model>, DbErr> {
        entity::prelude::ProfitShare::find()
            .filter(entity::profit_share::Column::DistributionId.eq(distribution_id))
            .order_by_asc(entity::profit_share::Column::MemberId)
            .all(self.db)
            .await
    }
}
