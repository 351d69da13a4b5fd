use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DistributionStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profit_distribution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub period: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub total_profit: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub pool_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub distributed_amount: Decimal,
    pub status: DistributionStatus,
    pub completed_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::profit_share::Entity")]
    ProfitShare,
}

impl Related<super::profit_share::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfitShare.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
