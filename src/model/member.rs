use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub display_name: String,
    pub email: String,
    pub sponsor_id: Option<i32>,
    pub tier: i32,
    pub status: String,
    pub joined_at: NaiveDateTime,
}

impl From<entity::member::Model> for MemberDto {
    fn from(member: entity::member::Model) -> Self {
        Self {
            id: member.id,
            display_name: member.display_name,
            email: member.email,
            sponsor_id: member.sponsor_id,
            tier: member.tier,
            status: member.status.to_value(),
            joined_at: member.joined_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MemberListDto {
    pub members: Vec<MemberDto>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

/// Member detail plus the balances the member screens show alongside it.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MemberDetailDto {
    pub member: MemberDto,
    pub lifetime_points: i64,
    pub monthly_points: i64,
    pub active_capital: Decimal,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateMemberDto {
    pub display_name: String,
    pub email: String,
    pub sponsor_id: Option<i32>,
    pub tier: Option<i32>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateMemberStatusDto {
    pub status: String,
}

#[derive(Deserialize, IntoParams)]
pub struct MemberFilter {
    /// Filter by member status
    pub status: Option<String>,
    /// Substring match on display name or email
    pub search: Option<String>,
}
