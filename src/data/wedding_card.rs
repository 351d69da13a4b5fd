use chrono::{NaiveDate, Utc};
use entity::wedding_card::CardStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct WeddingCardRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WeddingCardRepository<'a, C> {
    /// Creates a new instance of [`WeddingCardRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        member_id: i32,
        title: String,
        slug: String,
        event_date: NaiveDate,
        template: String,
    ) -> Result<entity::wedding_card::Model, DbErr> {
        let card = entity::wedding_card::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            title: ActiveValue::Set(title),
            slug: ActiveValue::Set(slug),
            event_date: ActiveValue::Set(event_date),
            template: ActiveValue::Set(template),
            status: ActiveValue::Set(CardStatus::Draft),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        card.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        card_id: i32,
    ) -> Result<Option<entity::wedding_card::Model>, DbErr> {
        entity::prelude::WeddingCard::find_by_id(card_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::wedding_card::Model>, DbErr> {
        entity::prelude::WeddingCard::find()
            .filter(entity::wedding_card::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::wedding_card::Model>, DbErr> {
        entity::prelude::WeddingCard::find()
            .order_by_desc(entity::wedding_card::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        card: entity::wedding_card::Model,
        status: Option<CardStatus>,
        template: Option<String>,
    ) -> Result<entity::wedding_card::Model, DbErr> {
        let mut card = card.into_active_model();

        if let Some(status) = status {
            card.status = ActiveValue::Set(status);
        }
        if let Some(template) = template {
            card.template = ActiveValue::Set(template);
        }

        card.update(self.db).await
    }
}
