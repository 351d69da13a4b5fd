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
        member::{
            CreateMemberDto, MemberDetailDto, MemberDto, MemberFilter, MemberListDto,
            UpdateMemberStatusDto,
        },
    },
    service::member::MemberService,
};

pub static MEMBER_TAG: &str = "member";

/// List members with optional status and search filters
#[utoipa::path(
    get,
    path = "/api/admin/members",
    tag = MEMBER_TAG,
    params(MemberFilter, PageQuery),
    responses(
        (status = 200, description = "Success when listing members", body = MemberListDto),
        (status = 422, description = "Unknown status filter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(filter): Query<MemberFilter>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let members = MemberService::new(&state.db)
        .list_members(filter, page.page_index(), page.per_page())
        .await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/api/admin/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Success when creating a member", body = MemberDto),
        (status = 409, description = "Email already registered", body = MessageDto),
        (status = 422, description = "Invalid member details", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(new_member): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let member = MemberService::new(&state.db).create_member(new_member).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// Get a member with point balances and active capital
#[utoipa::path(
    get,
    path = "/api/admin/members/{member_id}",
    tag = MEMBER_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving a member", body = MemberDetailDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let member = MemberService::new(&state.db).get_member(member_id).await?;

    Ok((StatusCode::OK, Json(member)))
}

/// Update a member's status
#[utoipa::path(
    patch,
    path = "/api/admin/members/{member_id}/status",
    tag = MEMBER_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberStatusDto,
    responses(
        (status = 200, description = "Success when updating member status", body = MemberDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 422, description = "Unknown status value", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_member_status(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Json(update): Json<UpdateMemberStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let member = MemberService::new(&state.db)
        .update_status(member_id, update)
        .await?;

    Ok((StatusCode::OK, Json(member)))
}
