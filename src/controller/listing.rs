use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{MessageDto, PageQuery},
        app::AppState,
        investment::RejectDto,
        listing::{ListingDto, ListingFilter, ListingListDto},
    },
    service::listing::ListingService,
};

pub static LISTING_TAG: &str = "listing";

/// List marketplace listings; filter by "pending" for the moderation queue
#[utoipa::path(
    get,
    path = "/api/admin/listings",
    tag = LISTING_TAG,
    params(ListingFilter, PageQuery),
    responses(
        (status = 200, description = "Success when listing marketplace listings", body = ListingListDto),
        (status = 422, description = "Unknown status filter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_listings(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let listings = ListingService::new(&state.db)
        .list_listings(filter, page.page_index(), page.per_page())
        .await?;

    Ok((StatusCode::OK, Json(listings)))
}

/// Approve a pending listing
#[utoipa::path(
    post,
    path = "/api/admin/listings/{listing_id}/approve",
    tag = LISTING_TAG,
    params(
        ("listing_id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Success when approving a listing", body = ListingDto),
        (status = 404, description = "Listing not found", body = MessageDto),
        (status = 409, description = "Listing already moderated", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn approve_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing = ListingService::new(&state.db).approve(listing_id).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Reject a pending listing with a reason
#[utoipa::path(
    post,
    path = "/api/admin/listings/{listing_id}/reject",
    tag = LISTING_TAG,
    params(
        ("listing_id" = i32, Path, description = "Listing ID")
    ),
    request_body = RejectDto,
    responses(
        (status = 200, description = "Success when rejecting a listing", body = ListingDto),
        (status = 404, description = "Listing not found", body = MessageDto),
        (status = 409, description = "Listing already moderated", body = MessageDto),
        (status = 422, description = "Missing rejection reason", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn reject_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<i32>,
    Json(rejection): Json<RejectDto>,
) -> Result<impl IntoResponse, Error> {
    let listing = ListingService::new(&state.db)
        .reject(listing_id, rejection)
        .await?;

    Ok((StatusCode::OK, Json(listing)))
}
