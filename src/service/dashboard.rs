use chrono::Utc;
use entity::{
    investment::InvestmentStatus, listing::ListingStatus, member::MemberStatus,
    support_ticket::TicketStatus,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        investment::InvestmentRepository, listing::ListingRepository, member::MemberRepository,
        ticket::TicketRepository,
    },
    error::Error,
    model::report::DashboardDto,
    util::time::{month_start, previous_month_start},
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn metrics(&self) -> Result<DashboardDto, Error> {
        let members = MemberRepository::new(self.db);
        let investments = InvestmentRepository::new(self.db);

        let today = Utc::now().date_naive();
        let this_month = month_start(today)?;
        let last_month = previous_month_start(today)?;
        let now = Utc::now().naive_utc();

        let new_members_this_month = members.count_joined_between(this_month, now).await?;
        let new_members_last_month = members
            .count_joined_between(last_month, this_month)
            .await?;

        Ok(DashboardDto {
            total_members: members.count_all().await?,
            active_members: members.count_by_status(MemberStatus::Active).await?,
            suspended_members: members.count_by_status(MemberStatus::Suspended).await?,
            new_members_this_month,
            new_members_last_month,
            member_growth_rate: growth_rate(new_members_this_month, new_members_last_month),
            active_capital: investments
                .sum_amount_by_status(InvestmentStatus::Active)
                .await?,
            pending_investments: investments
                .count_by_status(InvestmentStatus::Pending)
                .await?,
            pending_listings: ListingRepository::new(self.db)
                .count_by_status(ListingStatus::Pending)
                .await?,
            open_tickets: TicketRepository::new(self.db)
                .count_by_status(TicketStatus::Open)
                .await?,
        })
    }
}

/// Month-over-month growth in percent, rounded to one decimal place.
///
/// A previous month of zero reads as 100% growth when anything arrived this
/// month and 0% otherwise, rather than dividing by zero.
fn growth_rate(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        if current > 0 {
            return 100.0;
        }
        return 0.0;
    }

    let rate = (current as f64 - previous as f64) / previous as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    mod growth_rate_tests {
        use crate::service::dashboard::growth_rate;

        /// Expect a straightforward percentage when both months have rows
        #[test]
        fn test_growth_rate_basic() {
            assert_eq!(growth_rate(30, 20), 50.0);
            assert_eq!(growth_rate(10, 20), -50.0);
        }

        /// Expect rounding to one decimal place
        #[test]
        fn test_growth_rate_rounds() {
            assert_eq!(growth_rate(1, 3), -66.7);
        }

        /// Expect the zero-previous special cases
        #[test]
        fn test_growth_rate_zero_previous() {
            assert_eq!(growth_rate(5, 0), 100.0);
            assert_eq!(growth_rate(0, 0), 0.0);
        }
    }

    mod metrics_tests {
        use entity::{
            investment::InvestmentStatus,
            listing::ListingStatus,
            member::MemberStatus,
            support_ticket::{TicketPriority, TicketStatus},
        };
        use rust_decimal::Decimal;
        use trellis_test_utils::prelude::*;

        use crate::service::dashboard::DashboardService;

        /// Expect the dashboard counters to reflect stored rows
        #[tokio::test]
        async fn test_metrics_counts() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!(
                entity::prelude::SupportTicket,
                entity::prelude::Listing
            )?;
            let service = DashboardService::new(&test.db);

            let alice = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            factory::create_member_with_status(
                &test.db,
                "Bob",
                "bob@example.com",
                None,
                MemberStatus::Suspended,
            )
            .await?;

            factory::create_investment(&test.db, alice.id, 1500, InvestmentStatus::Active)
                .await?;
            factory::create_investment(&test.db, alice.id, 700, InvestmentStatus::Pending)
                .await?;
            factory::create_ticket(
                &test.db,
                alice.id,
                "Login trouble",
                TicketStatus::Open,
                TicketPriority::Normal,
            )
            .await?;
            factory::create_listing(&test.db, alice.id, "Handmade soap", 25, ListingStatus::Pending)
                .await?;

            let dashboard = service.metrics().await.unwrap();

            assert_eq!(dashboard.total_members, 2);
            assert_eq!(dashboard.active_members, 1);
            assert_eq!(dashboard.suspended_members, 1);
            assert_eq!(dashboard.new_members_this_month, 2);
            assert_eq!(dashboard.active_capital, Decimal::from(1500));
            assert_eq!(dashboard.pending_investments, 1);
            assert_eq!(dashboard.pending_listings, 1);
            assert_eq!(dashboard.open_tickets, 1);

            Ok(())
        }
    }
}
