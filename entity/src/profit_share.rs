use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profit_share")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub distribution_id: i32,
    pub member_id: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub basis: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profit_distribution::Entity",
        from = "Column::DistributionId",
        to = "super::profit_distribution::Column::Id"
    )]
    ProfitDistribution,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::profit_distribution::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfitDistribution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
