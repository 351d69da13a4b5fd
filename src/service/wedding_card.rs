use sea_orm::DatabaseConnection;

use crate::{
    data::{member::MemberRepository, wedding_card::WeddingCardRepository},
    error::Error,
    model::wedding_card::{CreateWeddingCardDto, UpdateWeddingCardDto, WeddingCardDto},
    service::parse_enum,
};

pub struct WeddingCardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeddingCardService<'a> {
    /// Creates a new instance of [`WeddingCardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_card(&self, new_card: CreateWeddingCardDto) -> Result<WeddingCardDto, Error> {
        let title = new_card.title.trim();
        if title.is_empty() {
            return Err(Error::Validation("A card title is required".into()));
        }

        let slug = new_card.slug.trim().to_lowercase();
        if slug.is_empty()
            || !slug
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::Validation(format!(
                "Slug {slug:?} may only contain letters, digits, and dashes"
            )));
        }

        let template = new_card.template.trim();
        if template.is_empty() {
            return Err(Error::Validation("A template name is required".into()));
        }

        if MemberRepository::new(self.db)
            .get_by_id(new_card.member_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Member {}", new_card.member_id)));
        }

        let repository = WeddingCardRepository::new(self.db);
        if repository.get_by_slug(&slug).await?.is_some() {
            return Err(Error::Conflict(format!("Slug {slug:?} is already taken")));
        }

        let card = repository
            .create(
                new_card.member_id,
                title.to_string(),
                slug,
                new_card.event_date,
                template.to_string(),
            )
            .await?;

        Ok(card.into())
    }

    pub async fn list_cards(&self) -> Result<Vec<WeddingCardDto>, Error> {
        let cards = WeddingCardRepository::new(self.db).list().await?;

        Ok(cards.into_iter().map(Into::into).collect())
    }

    pub async fn get_card(&self, card_id: i32) -> Result<WeddingCardDto, Error> {
        let card = WeddingCardRepository::new(self.db)
            .get_by_id(card_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Wedding card {card_id}")))?;

        Ok(card.into())
    }

    pub async fn update_card(
        &self,
        card_id: i32,
        update: UpdateWeddingCardDto,
    ) -> Result<WeddingCardDto, Error> {
        if update.status.is_none() && update.template.is_none() {
            return Err(Error::Validation("Nothing to update".into()));
        }

        let status = update.status.as_deref().map(parse_enum).transpose()?;

        let repository = WeddingCardRepository::new(self.db);
        let card = repository
            .get_by_id(card_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Wedding card {card_id}")))?;

        let card = repository.update(card, status, update.template).await?;

        Ok(card.into())
    }
}

#[cfg(test)]
mod tests {
    mod create_card_tests {
        use chrono::NaiveDate;
        use trellis_test_utils::prelude::*;

        use crate::{
            error::Error,
            model::wedding_card::CreateWeddingCardDto,
            service::wedding_card::WeddingCardService,
        };

        fn card_request(member_id: i32, slug: &str) -> CreateWeddingCardDto {
            CreateWeddingCardDto {
                member_id,
                title: "Alice & Bob".into(),
                slug: slug.into(),
                event_date: NaiveDate::from_ymd_opt(2026, 11, 21).unwrap(),
                template: "classic".into(),
            }
        }

        /// Expect a duplicate slug to conflict
        #[tokio::test]
        async fn test_duplicate_slug_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(entity::prelude::WeddingCard)?;
            let service = WeddingCardService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;

            service
                .create_card(card_request(member.id, "alice-and-bob"))
                .await
                .unwrap();

            let result = service
                .create_card(card_request(member.id, "Alice-And-Bob"))
                .await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }

        /// Expect a slug with spaces to fail validation
        #[tokio::test]
        async fn test_invalid_slug_rejected() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(entity::prelude::WeddingCard)?;
            let service = WeddingCardService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;

            let result = service.create_card(card_request(member.id, "alice and bob")).await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }
}
