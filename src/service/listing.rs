use chrono::Utc;
use entity::listing::ListingStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::listing::ListingRepository,
    error::Error,
    model::{
        investment::RejectDto,
        listing::{ListingDto, ListingFilter, ListingListDto},
    },
    service::parse_enum,
};

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of [`ListingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_listings(
        &self,
        filter: ListingFilter,
        page_index: u64,
        per_page: u64,
    ) -> Result<ListingListDto, Error> {
        let status = filter.status.as_deref().map(parse_enum).transpose()?;

        let (listings, total, pages) = ListingRepository::new(self.db)
            .list(status, page_index, per_page)
            .await?;

        Ok(ListingListDto {
            listings: listings.into_iter().map(Into::into).collect(),
            total,
            page: page_index + 1,
            pages,
        })
    }

    pub async fn approve(&self, listing_id: i32) -> Result<ListingDto, Error> {
        let repository = ListingRepository::new(self.db);
        let listing = repository
            .get_by_id(listing_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Listing {listing_id}")))?;

        if listing.status != ListingStatus::Pending {
            return Err(Error::Conflict(format!(
                "Listing {listing_id} has already been moderated"
            )));
        }

        let listing = repository
            .moderate(listing, ListingStatus::Approved, Utc::now().naive_utc(), None)
            .await?;

        Ok(listing.into())
    }

    pub async fn reject(&self, listing_id: i32, rejection: RejectDto) -> Result<ListingDto, Error> {
        let reason = rejection.reason.trim();
        if reason.is_empty() {
            return Err(Error::Validation("A rejection reason is required".into()));
        }

        let repository = ListingRepository::new(self.db);
        let listing = repository
            .get_by_id(listing_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Listing {listing_id}")))?;

        if listing.status != ListingStatus::Pending {
            return Err(Error::Conflict(format!(
                "Listing {listing_id} has already been moderated"
            )));
        }

        let listing = repository
            .moderate(
                listing,
                ListingStatus::Rejected,
                Utc::now().naive_utc(),
                Some(reason.to_string()),
            )
            .await?;

        Ok(listing.into())
    }
}
