use chrono::Utc;
use entity::venture::VentureStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

pub struct VentureRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VentureRepository<'a, C> {
    /// Creates a new instance of [`VentureRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        owner_id: i32,
        funding_goal: Decimal,
    ) -> Result<entity::venture::Model, DbErr> {
        let venture = entity::venture::ActiveModel {
            name: ActiveValue::Set(name),
            owner_id: ActiveValue::Set(owner_id),
            funding_goal: ActiveValue::Set(funding_goal),
            raised: ActiveValue::Set(Decimal::ZERO),
            status: ActiveValue::Set(VentureStatus::Draft),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        venture.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        venture_id: i32,
    ) -> Result<Option<entity::venture::Model>, DbErr> {
        entity::prelude::Venture::find_by_id(venture_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::venture::Model>, DbErr> {
        entity::prelude::Venture::find()
            .order_by_desc(entity::venture::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        venture: entity::venture::Model,
        status: VentureStatus,
    ) -> Result<entity::venture::Model, DbErr> {
        let mut venture = venture.into_active_model();
        venture.status = ActiveValue::Set(status);

        venture.update(self.db).await
    }
}
