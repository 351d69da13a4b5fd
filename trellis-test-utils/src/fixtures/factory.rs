//! Row factories for database-fixture tests.
//!
//! Each function inserts a single row with sensible defaults and returns the
//! stored model. Tests override only the fields they assert on.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::{
    investment::InvestmentStatus,
    lgr_award::LgrStatus,
    listing::ListingStatus,
    member::MemberStatus,
    point_transaction::PointLedger,
    referral_commission::CommissionStatus,
    support_ticket::{TicketPriority, TicketStatus},
};

pub async fn create_member(
    db: &DatabaseConnection,
    display_name: &str,
    email: &str,
    sponsor_id: Option<i32>,
) -> Result<entity::member::Model, DbErr> {
    create_member_with_status(db, display_name, email, sponsor_id, MemberStatus::Active).await
}

pub async fn create_member_with_status(
    db: &DatabaseConnection,
    display_name: &str,
    email: &str,
    sponsor_id: Option<i32>,
    status: MemberStatus,
) -> Result<entity::member::Model, DbErr> {
    entity::member::ActiveModel {
        display_name: ActiveValue::Set(display_name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        sponsor_id: ActiveValue::Set(sponsor_id),
        tier: ActiveValue::Set(1),
        status: ActiveValue::Set(status),
        joined_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_member_joined_at(
    db: &DatabaseConnection,
    display_name: &str,
    email: &str,
    joined_at: NaiveDateTime,
) -> Result<entity::member::Model, DbErr> {
    entity::member::ActiveModel {
        display_name: ActiveValue::Set(display_name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        sponsor_id: ActiveValue::Set(None),
        tier: ActiveValue::Set(1),
        status: ActiveValue::Set(MemberStatus::Active),
        joined_at: ActiveValue::Set(joined_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_investment(
    db: &DatabaseConnection,
    member_id: i32,
    amount: i64,
    status: InvestmentStatus,
) -> Result<entity::investment::Model, DbErr> {
    entity::investment::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        tier: ActiveValue::Set(1),
        amount: ActiveValue::Set(Decimal::from(amount)),
        status: ActiveValue::Set(status),
        next_payment_date: ActiveValue::Set(None),
        approved_at: ActiveValue::Set(None),
        rejection_reason: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_position(
    db: &DatabaseConnection,
    member_id: i32,
    parent_id: Option<i32>,
    depth: i32,
    slot: i32,
) -> Result<entity::matrix_position::Model, DbErr> {
    entity::matrix_position::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        parent_id: ActiveValue::Set(parent_id),
        depth: ActiveValue::Set(depth),
        slot: ActiveValue::Set(slot),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_commission(
    db: &DatabaseConnection,
    earner_id: i32,
    source_id: i32,
    investment_id: i32,
    level: i32,
    amount: i64,
    status: CommissionStatus,
) -> Result<entity::referral_commission::Model, DbErr> {
    entity::referral_commission::ActiveModel {
        earner_id: ActiveValue::Set(earner_id),
        source_id: ActiveValue::Set(source_id),
        investment_id: ActiveValue::Set(investment_id),
        level: ActiveValue::Set(level),
        rate: ActiveValue::Set(Decimal::from(10)),
        amount: ActiveValue::Set(Decimal::from(amount)),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_point_transaction(
    db: &DatabaseConnection,
    member_id: i32,
    ledger: PointLedger,
    delta: i64,
    reason: &str,
) -> Result<entity::point_transaction::Model, DbErr> {
    entity::point_transaction::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        ledger: ActiveValue::Set(ledger),
        delta: ActiveValue::Set(delta),
        reason: ActiveValue::Set(reason.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_lgr_award(
    db: &DatabaseConnection,
    member_id: i32,
    principal: i64,
    rate: i64,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
    status: LgrStatus,
) -> Result<entity::lgr_award::Model, DbErr> {
    entity::lgr_award::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        tier: ActiveValue::Set(1),
        principal: ActiveValue::Set(Decimal::from(principal)),
        rate: ActiveValue::Set(Decimal::from(rate)),
        starts_at: ActiveValue::Set(starts_at),
        ends_at: ActiveValue::Set(ends_at),
        accrued: ActiveValue::Set(Decimal::ZERO),
        last_credited_at: ActiveValue::Set(None),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_ticket(
    db: &DatabaseConnection,
    member_id: i32,
    subject: &str,
    status: TicketStatus,
    priority: TicketPriority,
) -> Result<entity::support_ticket::Model, DbErr> {
    entity::support_ticket::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        subject: ActiveValue::Set(subject.to_string()),
        body: ActiveValue::Set("ticket body".to_string()),
        status: ActiveValue::Set(status),
        priority: ActiveValue::Set(priority),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_listing(
    db: &DatabaseConnection,
    member_id: i32,
    title: &str,
    price: i64,
    status: ListingStatus,
) -> Result<entity::listing::Model, DbErr> {
    entity::listing::ActiveModel {
        member_id: ActiveValue::Set(member_id),
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set("listing description".to_string()),
        price: ActiveValue::Set(Decimal::from(price)),
        status: ActiveValue::Set(status),
        moderated_at: ActiveValue::Set(None),
        rejection_reason: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
