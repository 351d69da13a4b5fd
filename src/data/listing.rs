use chrono::NaiveDateTime;
use entity::listing::ListingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ListingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingRepository<'a, C> {
    /// Creates a new instance of [`ListingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        listing_id: i32,
    ) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        status: Option<ListingStatus>,
        page_index: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::listing::Model>, u64, u64), DbErr> {
        let mut query = entity::prelude::Listing::find();

        if let Some(status) = status {
            query = query.filter(entity::listing::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_asc(entity::listing::Column::CreatedAt)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let listings = paginator.fetch_page(page_index).await?;

        Ok((listings, counts.number_of_items, counts.number_of_pages))
    }

    pub async fn moderate(
        &self,
        listing: entity::listing::Model,
        status: ListingStatus,
        moderated_at: NaiveDateTime,
        rejection_reason: Option<String>,
    ) -> Result<entity::listing::Model, DbErr> {
        let mut listing = listing.into_active_model();
        listing.status = ActiveValue::Set(status);
        listing.moderated_at = ActiveValue::Set(Some(moderated_at));
        listing.rejection_reason = ActiveValue::Set(rejection_reason);

        listing.update(self.db).await
    }

    pub async fn count_by_status(&self, status: ListingStatus) -> Result<u64, DbErr> {
        entity::prelude::Listing::find()
            .filter(entity::listing::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod moderate_tests {
        use chrono::Utc;
        use entity::listing::ListingStatus;
        use trellis_test_utils::prelude::*;

        use crate::data::listing::ListingRepository;

        /// Expect moderation to set status, timestamp, and reason together
        #[tokio::test]
        async fn test_moderate_reject() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(entity::prelude::Listing)?;
            let repo = ListingRepository::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            let listing =
                factory::create_listing(&test.db, member.id, "Handmade rug", 120, ListingStatus::Pending)
                    .await?;

            let updated = repo
                .moderate(
                    listing,
                    ListingStatus::Rejected,
                    Utc::now().naive_utc(),
                    Some("prohibited item".to_string()),
                )
                .await?;

            assert_eq!(updated.status, ListingStatus::Rejected);
            assert!(updated.moderated_at.is_some());
            assert_eq!(updated.rejection_reason.as_deref(), Some("prohibited item"));

            Ok(())
        }
    }
}
