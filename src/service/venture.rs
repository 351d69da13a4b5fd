use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    data::{member::MemberRepository, venture::VentureRepository},
    error::Error,
    model::venture::{CreateVentureDto, UpdateVentureStatusDto, VentureDto},
    service::parse_enum,
};

pub struct VentureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VentureService<'a> {
    /// Creates a new instance of [`VentureService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_venture(&self, new_venture: CreateVentureDto) -> Result<VentureDto, Error> {
        let name = new_venture.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("A venture name is required".into()));
        }

        if new_venture.funding_goal <= Decimal::ZERO {
            return Err(Error::Validation("Funding goal must be positive".into()));
        }

        if MemberRepository::new(self.db)
            .get_by_id(new_venture.owner_id)
            .await?
            .is_none()
        {
            return Err(Error::Validation(format!(
                "Owner {} does not exist",
                new_venture.owner_id
            )));
        }

        let venture = VentureRepository::new(self.db)
            .create(name.to_string(), new_venture.owner_id, new_venture.funding_goal)
            .await?;

        Ok(venture.into())
    }

    pub async fn list_ventures(&self) -> Result<Vec<VentureDto>, Error> {
        let ventures = VentureRepository::new(self.db).list().await?;

        Ok(ventures.into_iter().map(Into::into).collect())
    }

    pub async fn update_status(
        &self,
        venture_id: i32,
        update: UpdateVentureStatusDto,
    ) -> Result<VentureDto, Error> {
        let status = parse_enum(&update.status)?;

        let repository = VentureRepository::new(self.db);
        let venture = repository
            .get_by_id(venture_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Venture {venture_id}")))?;

        let venture = repository.set_status(venture, status).await?;

        Ok(venture.into())
    }
}
