use entity::point_transaction::PointLedger;
use sea_orm::DatabaseConnection;

use crate::{
    data::{member::MemberRepository, points::PointsRepository},
    error::Error,
    model::points::{AdjustPointsDto, PointBalancesDto, PointEntryDto},
    service::parse_enum,
};

const RECENT_ENTRY_LIMIT: u64 = 20;

pub struct PointsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PointsService<'a> {
    /// Creates a new instance of [`PointsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn balances(&self, member_id: i32) -> Result<PointBalancesDto, Error> {
        if MemberRepository::new(self.db)
            .get_by_id(member_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Member {member_id}")));
        }

        let points = PointsRepository::new(self.db);

        Ok(PointBalancesDto {
            member_id,
            lifetime_points: points.balance(member_id, PointLedger::Lifetime).await?,
            monthly_points: points.balance(member_id, PointLedger::Monthly).await?,
            recent: points
                .recent(member_id, RECENT_ENTRY_LIMIT)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }

    /// Manual ledger correction. Lifetime points only ever grow, so negative
    /// deltas are allowed on the monthly ledger alone.
    pub async fn adjust(&self, adjustment: AdjustPointsDto) -> Result<PointEntryDto, Error> {
        if MemberRepository::new(self.db)
            .get_by_id(adjustment.member_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Member {}", adjustment.member_id)));
        }

        let ledger: PointLedger = parse_enum(&adjustment.ledger)?;

        if adjustment.delta == 0 {
            return Err(Error::Validation("Delta must not be zero".into()));
        }

        if ledger == PointLedger::Lifetime && adjustment.delta < 0 {
            return Err(Error::Validation(
                "Lifetime points cannot be deducted".into(),
            ));
        }

        let reason = adjustment.reason.trim();
        if reason.is_empty() {
            return Err(Error::Validation("A reason is required".into()));
        }

        let entry = PointsRepository::new(self.db)
            .append(adjustment.member_id, ledger, adjustment.delta, reason.to_string())
            .await?;

        Ok(entry.into())
    }
}
