use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::MessageDto,
        app::AppState,
        wedding_card::{CreateWeddingCardDto, UpdateWeddingCardDto, WeddingCardDto},
    },
    service::wedding_card::WeddingCardService,
};

pub static WEDDING_CARD_TAG: &str = "wedding-card";

/// List wedding cards
#[utoipa::path(
    get,
    path = "/api/admin/wedding-cards",
    tag = WEDDING_CARD_TAG,
    responses(
        (status = 200, description = "Success when listing wedding cards", body = Vec<WeddingCardDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_wedding_cards(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let cards = WeddingCardService::new(&state.db).list_cards().await?;

    Ok((StatusCode::OK, Json(cards)))
}

/// Create a wedding card with a unique public slug
#[utoipa::path(
    post,
    path = "/api/admin/wedding-cards",
    tag = WEDDING_CARD_TAG,
    request_body = CreateWeddingCardDto,
    responses(
        (status = 201, description = "Success when creating a wedding card", body = WeddingCardDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 409, description = "Slug already taken", body = MessageDto),
        (status = 422, description = "Invalid card details", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_wedding_card(
    State(state): State<AppState>,
    Json(new_card): Json<CreateWeddingCardDto>,
) -> Result<impl IntoResponse, Error> {
    let card = WeddingCardService::new(&state.db).create_card(new_card).await?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// Get a wedding card
#[utoipa::path(
    get,
    path = "/api/admin/wedding-cards/{card_id}",
    tag = WEDDING_CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Wedding card ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving a wedding card", body = WeddingCardDto),
        (status = 404, description = "Wedding card not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_wedding_card(
    State(state): State<AppState>,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let card = WeddingCardService::new(&state.db).get_card(card_id).await?;

    Ok((StatusCode::OK, Json(card)))
}

/// Update a wedding card's status or template
#[utoipa::path(
    patch,
    path = "/api/admin/wedding-cards/{card_id}",
    tag = WEDDING_CARD_TAG,
    params(
        ("card_id" = i32, Path, description = "Wedding card ID")
    ),
    request_body = UpdateWeddingCardDto,
    responses(
        (status = 200, description = "Success when updating a wedding card", body = WeddingCardDto),
        (status = 404, description = "Wedding card not found", body = MessageDto),
        (status = 422, description = "Nothing to update or unknown value", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_wedding_card(
    State(state): State<AppState>,
    Path(card_id): Path<i32>,
    Json(update): Json<UpdateWeddingCardDto>,
) -> Result<impl IntoResponse, Error> {
    let card = WeddingCardService::new(&state.db)
        .update_card(card_id, update)
        .await?;

    Ok((StatusCode::OK, Json(card)))
}
