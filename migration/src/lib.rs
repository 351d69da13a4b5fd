pub use sea_orm_migration::prelude::*;

mod m20260115_000001_member;
mod m20260115_000002_investment;
mod m20260115_000003_matrix_position;
mod m20260115_000004_referral_commission;
mod m20260115_000005_profit_distribution;
mod m20260115_000006_profit_share;
mod m20260115_000007_point_transaction;
mod m20260115_000008_lgr_award;
mod m20260115_000009_support_ticket;
mod m20260115_000010_venture;
mod m20260115_000011_listing;
mod m20260115_000012_wedding_card;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_member::Migration),
            Box::new(m20260115_000002_investment::Migration),
            Box::new(m20260115_000003_matrix_position::Migration),
            Box::new(m20260115_000004_referral_commission::Migration),
            Box::new(m20260115_000005_profit_distribution::Migration),
            Box::new(m20260115_000006_profit_share::Migration),
            Box::new(m20260115_000007_point_transaction::Migration),
            Box::new(m20260115_000008_lgr_award::Migration),
            Box::new(m20260115_000009_support_ticket::Migration),
            Box::new(m20260115_000010_venture::Migration),
            Box::new(m20260115_000011_listing::Migration),
            Box::new(m20260115_000012_wedding_card::Migration),
        ]
    }
}
