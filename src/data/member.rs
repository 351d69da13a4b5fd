use chrono::{NaiveDateTime, Utc};
use entity::member::MemberStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct MemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new instance of [`MemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        display_name: String,
        email: String,
        sponsor_id: Option<i32>,
        tier: i32,
    ) -> Result<entity::member::Model, DbErr> {
        let member = entity::member::ActiveModel {
            display_name: ActiveValue::Set(display_name),
            email: ActiveValue::Set(email),
            sponsor_id: ActiveValue::Set(sponsor_id),
            tier: ActiveValue::Set(tier),
            status: ActiveValue::Set(MemberStatus::Active),
            joined_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    pub async fn get_by_id(&self, member_id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(member_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Paginated listing with optional status and name/email substring filters.
    ///
    /// Returns the page of rows plus the total matching row count and page count.
    pub async fn list(
        &self,
        status: Option<MemberStatus>,
        search: Option<&str>,
        page_index: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::member::Model>, u64, u64), DbErr> {
        let mut query = entity::prelude::Member::find();

        if let Some(status) = status {
            query = query.filter(entity::member::Column::Status.eq(status));
        }

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::member::Column::DisplayName.contains(search))
                    .add(entity::member::Column::Email.contains(search)),
            );
        }

        let paginator = query
            .order_by_asc(entity::member::Column::Id)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let members = paginator.fetch_page(page_index).await?;

        Ok((members, counts.number_of_items, counts.number_of_pages))
    }

    pub async fn set_status(
        &self,
        member: entity::member::Model,
        status: MemberStatus,
    ) -> Result<entity::member::Model, DbErr> {
        let mut member = member.into_active_model();
        member.status = ActiveValue::Set(status);

        member.update(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Member::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: MemberStatus) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Members who joined in `[from, to)`.
    pub async fn count_joined_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::JoinedAt.gte(from))
            .filter(entity::member::Column::JoinedAt.lt(to))
            .count(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        member_ids: Vec<i32>,
    ) -> Result<Vec<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(member_ids))
            .all(self.db)
            .await
    }

    pub async fn all(&self) -> Result<Vec<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod list_tests {
        use entity::member::MemberStatus;
        use trellis_test_utils::prelude::*;

        use crate::data::member::MemberRepository;

        /// Expect only matching statuses when filtering a member listing
        #[tokio::test]
        async fn test_list_members_status_filter() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Member)?;
            let repo = MemberRepository::new(&test.db);

            factory::create_member(&test.db, "Alice", "alice@example.com", None).await?;
            factory::create_member_with_status(
                &test.db,
                "Bob",
                "bob@example.com",
                None,
                MemberStatus::Suspended,
            )
            .await?;

            let (members, total, pages) = repo
                .list(Some(MemberStatus::Suspended), None, 0, 25)
                .await?;

            assert_eq!(total, 1);
            assert_eq!(pages, 1);
            assert_eq!(members.len(), 1);
            assert_eq!(members[0].display_name, "Bob");

            Ok(())
        }

        /// Expect substring search to match name or email
        #[tokio::test]
        async fn test_list_members_search() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Member)?;
            let repo = MemberRepository::new(&test.db);

            factory::create_member(&test.db, "Alice", "alice@example.com", None).await?;
            factory::create_member(&test.db, "Bob", "bob@allmail.com", None).await?;
            factory::create_member(&test.db, "Carol", "carol@example.com", None).await?;

            let (members, total, _) = repo.list(None, Some("all"), 0, 25).await?;

            assert_eq!(total, 1);
            assert_eq!(members[0].display_name, "Bob");

            Ok(())
        }
    }

    mod count_tests {
        use chrono::NaiveDate;
        use trellis_test_utils::prelude::*;

        use crate::data::member::MemberRepository;

        /// Expect the joined-between window to be half open
        #[tokio::test]
        async fn test_count_joined_between() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Member)?;
            let repo = MemberRepository::new(&test.db);

            let inside = NaiveDate::from_ymd_opt(2026, 8, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            let boundary = NaiveDate::from_ymd_opt(2026, 9, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();

            factory::create_member_joined_at(&test.db, "Alice", "alice@example.com", inside)
                .await?;
            factory::create_member_joined_at(&test.db, "Bob", "bob@example.com", boundary).await?;

            let from = NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();

            let count = repo.count_joined_between(from, boundary).await?;

            assert_eq!(count, 1);

            Ok(())
        }
    }
}
