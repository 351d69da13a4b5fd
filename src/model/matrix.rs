use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One node of the downline tree, children ordered by slot.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct NetworkNodeDto {
    pub member_id: i32,
    pub display_name: String,
    pub depth: i32,
    pub slot: i32,
    pub children: Vec<NetworkNodeDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PositionDto {
    pub id: i32,
    pub member_id: i32,
    pub parent_id: Option<i32>,
    pub depth: i32,
    pub slot: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::matrix_position::Model> for PositionDto {
    fn from(position: entity::matrix_position::Model) -> Self {
        Self {
            id: position.id,
            member_id: position.member_id,
            parent_id: position.parent_id,
            depth: position.depth,
            slot: position.slot,
            created_at: position.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct PlaceMemberDto {
    pub member_id: i32,
    /// Omitted when placing the matrix root
    pub sponsor_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
pub struct TreeQuery {
    /// Levels to descend, defaults to 3, capped at the matrix depth (7)
    pub depth: Option<i32>,
}
