use chrono::{NaiveDateTime, Utc};
use entity::lgr_award::LgrStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct LgrRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LgrRepository<'a, C> {
    /// Creates a new instance of [`LgrRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        member_id: i32,
        tier: i32,
        principal: Decimal,
        rate: Decimal,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    ) -> Result<entity::lgr_award::Model, DbErr> {
        let award = entity::lgr_award::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            tier: ActiveValue::Set(tier),
            principal: ActiveValue::Set(principal),
            rate: ActiveValue::Set(rate),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(ends_at),
            accrued: ActiveValue::Set(Decimal::ZERO),
            last_credited_at: ActiveValue::Set(None),
            status: ActiveValue::Set(LgrStatus::Active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        award.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        award_id: i32,
    ) -> Result<Option<entity::lgr_award::Model>, DbErr> {
        entity::prelude::LgrAward::find_by_id(award_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        status: Option<LgrStatus>,
        page_index: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::lgr_award::Model>, u64, u64), DbErr> {
        let mut query = entity::prelude::LgrAward::find();

        if let Some(status) = status {
            query = query.filter(entity::lgr_award::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::lgr_award::Column::CreatedAt)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let awards = paginator.fetch_page(page_index).await?;

        Ok((awards, counts.number_of_items, counts.number_of_pages))
    }

    pub async fn record_credit(
        &self,
        award: entity::lgr_award::Model,
        accrued: Decimal,
        credited_at: NaiveDateTime,
    ) -> Result<entity::lgr_award::Model, DbErr> {
        let mut award = award.into_active_model();
        award.accrued = ActiveValue::Set(accrued);
        award.last_credited_at = ActiveValue::Set(Some(credited_at));

        award.update(self.db).await
    }

    pub async fn set_status(
        &self,
        award: entity::lgr_award::Model,
        status: LgrStatus,
    ) -> Result<entity::lgr_award::Model, DbErr> {
        let mut award = award.into_active_model();
        award.status = ActiveValue::Set(status);

        award.update(self.db).await
    }

    pub async fn count_by_status(&self, status: LgrStatus) -> Result<u64, DbErr> {
        entity::prelude::LgrAward::find()
            .filter(entity::lgr_award::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    pub async fn accrued_total(&self) -> Result<Decimal, DbErr> {
        let total: Option<Option<Decimal>> = entity::prelude::LgrAward::find()
            .select_only()
            .column_as(entity::lgr_award::Column::Accrued.sum(), "total")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}
