//! Finance entry repository backing the core `EntryStore` trait.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use fintrack_core::finance::{
    EntryChanges, EntryQuery, EntryStore, FinanceEntry, FinanceError, NewEntry,
};
use fintrack_shared::types::{EntryId, UserId};

use crate::entities::finance_entries;
use crate::entities::sea_orm_active_enums::FinanceEntryType;

/// Finance entry repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct FinanceEntryRepository {
    db: Arc<DatabaseConnection>,
}

impl FinanceEntryRepository {
    /// Creates a new finance entry repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        owner: UserId,
        id: EntryId,
    ) -> Result<Option<finance_entries::Model>, DbErr> {
        finance_entries::Entity::find_by_id(id.into_inner())
            .filter(finance_entries::Column::UserId.eq(owner.into_inner()))
            .one(self.db.as_ref())
            .await
    }
}

impl EntryStore for FinanceEntryRepository {
    async fn create(&self, owner: UserId, entry: NewEntry) -> Result<FinanceEntry, FinanceError> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let model = finance_entries::ActiveModel {
            id: Set(EntryId::new().into_inner()),
            user_id: Set(owner.into_inner()),
            title: Set(entry.title),
            amount: Set(entry.amount),
            entry_type: Set(entry.entry_type.into()),
            category: Set(entry.category.into()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(self.db.as_ref()).await.map_err(store_error)?;
        Ok(inserted.into())
    }

    async fn find(&self, query: &EntryQuery) -> Result<Vec<FinanceEntry>, FinanceError> {
        debug!(
            owner = %query.owner,
            entry_type = ?query.entry_type,
            created = ?query.created,
            "Querying finance entries"
        );

        let mut select = finance_entries::Entity::find()
            .filter(finance_entries::Column::UserId.eq(query.owner.into_inner()));

        if let Some(entry_type) = query.entry_type {
            select = select
                .filter(finance_entries::Column::EntryType.eq(FinanceEntryType::from(entry_type)));
        }

        if let Some(range) = query.created {
            select = select
                .filter(finance_entries::Column::CreatedAt.gte(range.start))
                .filter(finance_entries::Column::CreatedAt.lt(range.end));
        }

        let models = select
            .order_by_asc(finance_entries::Column::CreatedAt)
            .order_by_asc(finance_entries::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(FinanceEntry::from).collect())
    }

    async fn find_owned(
        &self,
        owner: UserId,
        id: EntryId,
    ) -> Result<Option<FinanceEntry>, FinanceError> {
        let model = self.find_model(owner, id).await.map_err(store_error)?;
        Ok(model.map(FinanceEntry::from))
    }

    async fn update_owned(
        &self,
        owner: UserId,
        id: EntryId,
        changes: EntryChanges,
    ) -> Result<Option<FinanceEntry>, FinanceError> {
        let Some(model) = self.find_model(owner, id).await.map_err(store_error)? else {
            return Ok(None);
        };

        if changes.is_empty() {
            debug!(entry_id = %id, "Empty update, touching updated_at only");
        }

        let mut active: finance_entries::ActiveModel = model.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        if let Some(entry_type) = changes.entry_type {
            active.entry_type = Set(entry_type.into());
        }
        if let Some(category) = changes.category {
            active.category = Set(category.into());
        }
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(self.db.as_ref()).await.map_err(store_error)?;
        Ok(Some(updated.into()))
    }

    async fn delete_owned(&self, owner: UserId, id: EntryId) -> Result<bool, FinanceError> {
        let result = finance_entries::Entity::delete_many()
            .filter(finance_entries::Column::Id.eq(id.into_inner()))
            .filter(finance_entries::Column::UserId.eq(owner.into_inner()))
            .exec(self.db.as_ref())
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected > 0)
    }
}

impl From<finance_entries::Model> for FinanceEntry {
    fn from(model: finance_entries::Model) -> Self {
        Self {
            id: EntryId::from_uuid(model.id),
            owner: UserId::from_uuid(model.user_id),
            title: model.title,
            amount: model.amount,
            entry_type: model.entry_type.into(),
            category: model.category.into(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn store_error(err: DbErr) -> FinanceError {
    FinanceError::Store(err.to_string())
}
