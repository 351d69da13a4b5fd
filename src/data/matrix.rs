use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct MatrixRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatrixRepository<'a, C> {
    /// Creates a new instance of [`MatrixRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        member_id: i32,
        parent_id: Option<i32>,
        depth: i32,
        slot: i32,
    ) -> Result<entity::matrix_position::Model, DbErr> {
        let position = entity::matrix_position::ActiveModel {
            member_id: ActiveValue::Set(member_id),
            parent_id: ActiveValue::Set(parent_id),
            depth: ActiveValue::Set(depth),
            slot: ActiveValue::Set(slot),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        position.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        position_id: i32,
    ) -> Result<Option<entity::matrix_position::Model>, DbErr> {
        entity::prelude::MatrixPosition::find_by_id(position_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_member_id(
        &self,
        member_id: i32,
    ) -> Result<Option<entity::matrix_position::Model>, DbErr> {
        entity::prelude::MatrixPosition::find()
            .filter(entity::matrix_position::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    /// Children of a position, ordered by slot.
    pub async fn get_children(
        &self,
        position_id: i32,
    ) -> Result<Vec<entity::matrix_position::Model>, DbErr> {
        entity::prelude::MatrixPosition::find()
            .filter(entity::matrix_position::Column::ParentId.eq(position_id))
            .order_by_asc(entity::matrix_position::Column::Slot)
            .all(self.db)
            .await
    }

    pub async fn get_root(&self) -> Result<Option<entity::matrix_position::Model>, DbErr> {
        entity::prelude::MatrixPosition::find()
            .filter(entity::matrix_position::Column::ParentId.is_null())
            .one(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::MatrixPosition::find().count(self.db).await
    }

    pub async fn max_depth(&self) -> Result<Option<i32>, DbErr> {
        let max: Option<Option<i32>> = entity::prelude::MatrixPosition::find()
            .select_only()
            .column_as(entity::matrix_position::Column::Depth.max(), "max_depth")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(max.flatten())
    }

    pub async fn all(&self) -> Result<Vec<entity::matrix_position::Model>, DbErr> {
        entity::prelude::MatrixPosition::find().all(self.db).await
    }
}
