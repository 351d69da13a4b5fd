use sea_orm::DatabaseConnection;

use crate::{
    data::{investment::InvestmentRepository, member::MemberRepository, points::PointsRepository},
    error::Error,
    model::member::{
        CreateMemberDto, MemberDetailDto, MemberDto, MemberFilter, MemberListDto,
        UpdateMemberStatusDto,
    },
    service::parse_enum,
};

use entity::point_transaction::PointLedger;

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new instance of [`MemberService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_member(&self, new_member: CreateMemberDto) -> Result<MemberDto, Error> {
        let repository = MemberRepository::new(self.db);

        let display_name = new_member.display_name.trim();
        if display_name.is_empty() {
            return Err(Error::Validation("Display name must not be empty".into()));
        }

        let email = new_member.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(Error::Validation(format!("Invalid email address: {email:?}")));
        }

        if repository.get_by_email(&email).await?.is_some() {
            return Err(Error::Conflict(format!(
                "A member with email {email:?} already exists"
            )));
        }

        if let Some(sponsor_id) = new_member.sponsor_id {
            if repository.get_by_id(sponsor_id).await?.is_none() {
                return Err(Error::Validation(format!(
                    "Sponsor {sponsor_id} does not exist"
                )));
            }
        }

        // Tier 0 means no tier assigned yet.
        let tier = new_member.tier.unwrap_or(0);
        if tier < 0 {
            return Err(Error::Validation("Tier cannot be negative".into()));
        }

        let member = repository
            .create(display_name.to_string(), email, new_member.sponsor_id, tier)
            .await?;

        Ok(member.into())
    }

    pub async fn get_member(&self, member_id: i32) -> Result<MemberDetailDto, Error> {
        let member = MemberRepository::new(self.db)
            .get_by_id(member_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Member {member_id}")))?;

        let points = PointsRepository::new(self.db);
        let lifetime_points = points.balance(member_id, PointLedger::Lifetime).await?;
        let monthly_points = points.balance(member_id, PointLedger::Monthly).await?;

        let active_capital = InvestmentRepository::new(self.db)
            .active_capital_of_member(member_id)
            .await?;

        Ok(MemberDetailDto {
            member: member.into(),
            lifetime_points,
            monthly_points,
            active_capital,
        })
    }

    pub async fn list_members(
        &self,
        filter: MemberFilter,
        page_index: u64,
        per_page: u64,
    ) -> Result<MemberListDto, Error> {
        let status = filter.status.as_deref().map(parse_enum).transpose()?;

        let (members, total, pages) = MemberRepository::new(self.db)
            .list(status, filter.search.as_deref(), page_index, per_page)
            .await?;

        Ok(MemberListDto {
            members: members.into_iter().map(Into::into).collect(),
            total,
            page: page_index + 1,
            pages,
        })
    }

    pub async fn update_status(
        &self,
        member_id: i32,
        update: UpdateMemberStatusDto,
    ) -> Result<MemberDto, Error> {
        let status = parse_enum(&update.status)?;

        let repository = MemberRepository::new(self.db);
        let member = repository
            .get_by_id(member_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Member {member_id}")))?;

        let member = repository.set_status(member, status).await?;

        Ok(member.into())
    }
}

#[cfg(test)]
mod tests {
    mod create_member_tests {
        use trellis_test_utils::prelude::*;

        use crate::{
            error::Error,
            model::member::CreateMemberDto,
            service::member::MemberService,
        };

        /// Expect a second member with the same email to be rejected
        #[tokio::test]
        async fn test_duplicate_email_conflicts() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = MemberService::new(&test.db);

            factory::create_member(&test.db, "Alice", "alice@example.com", None).await?;

            let result = service
                .create_member(CreateMemberDto {
                    display_name: "Alice Again".into(),
                    email: "Alice@Example.com".into(),
                    sponsor_id: None,
                    tier: None,
                })
                .await;

            assert!(matches!(result, Err(Error::Conflict(_))));

            Ok(())
        }

        /// Expect an unknown sponsor id to fail validation
        #[tokio::test]
        async fn test_unknown_sponsor_rejected() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = MemberService::new(&test.db);

            let result = service
                .create_member(CreateMemberDto {
                    display_name: "Bob".into(),
                    email: "bob@example.com".into(),
                    sponsor_id: Some(404),
                    tier: None,
                })
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }

        /// Expect a missing tier to default to 0 (no tier assigned)
        #[tokio::test]
        async fn test_tierless_member_defaults_to_zero() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = MemberService::new(&test.db);

            let member = service
                .create_member(CreateMemberDto {
                    display_name: "Carol".into(),
                    email: "carol@example.com".into(),
                    sponsor_id: None,
                    tier: None,
                })
                .await
                .expect("member should be created");

            assert_eq!(member.tier, 0);

            Ok(())
        }

        /// Expect a negative tier to fail validation
        #[tokio::test]
        async fn test_negative_tier_rejected() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = MemberService::new(&test.db);

            let result = service
                .create_member(CreateMemberDto {
                    display_name: "Dave".into(),
                    email: "dave@example.com".into(),
                    sponsor_id: None,
                    tier: Some(-1),
                })
                .await;

            assert!(matches!(result, Err(Error::Validation(_))));

            Ok(())
        }
    }

    mod get_member_tests {
        use entity::{investment::InvestmentStatus, point_transaction::PointLedger};
        use rust_decimal::Decimal;
        use trellis_test_utils::prelude::*;

        use crate::service::member::MemberService;

        /// Expect the detail view to carry balances and active capital
        #[tokio::test]
        async fn test_detail_balances() -> Result<(), TestError> {
            let test = test_setup_with_member_tables!()?;
            let service = MemberService::new(&test.db);

            let member = factory::create_member(&test.db, "Alice", "alice@example.com", None)
                .await?;
            factory::create_investment(&test.db, member.id, 1200, InvestmentStatus::Active)
                .await?;
            factory::create_point_transaction(
                &test.db,
                member.id,
                PointLedger::Lifetime,
                30,
                "signup",
            )
            .await?;

            let detail = service.get_member(member.id).await.unwrap();

            assert_eq!(detail.lifetime_points, 30);
            assert_eq!(detail.monthly_points, 0);
            assert_eq!(detail.active_capital, Decimal::from(1200));

            Ok(())
        }
    }
}
