use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
};

use crate::errors::ServiceError;

/// Create/read/update/delete capability shared by every entity service.
///
/// Implementors provide the connection handle and a [`Crud::merge`] that
/// copies every mutable field of the incoming record onto the fetched one,
/// keeping the id. There is no partial-patch semantics: absent incoming
/// values overwrite existing ones. Updates are fetch-merge-save, two store
/// round trips, last writer wins.
#[async_trait]
pub trait Crud: Sync
where
    <Self::Entity as EntityTrait>::Model: IntoActiveModel<Self::ActiveModel>,
    <Self::Entity as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    /// Name used in not-found messages.
    const RESOURCE: &'static str;

    fn db(&self) -> &DatabaseConnection;

    /// Overwrites every mutable field of `existing` with the values from
    /// `incoming`, unconditionally. The primary key stays untouched.
    fn merge(
        existing: <Self::Entity as EntityTrait>::Model,
        incoming: <Self::Entity as EntityTrait>::Model,
    ) -> Self::ActiveModel;

    /// Returns every record. No ordering guarantee.
    async fn get_all(&self) -> Result<Vec<<Self::Entity as EntityTrait>::Model>, ServiceError> {
        Self::Entity::find()
            .all(self.db())
            .await
            .map_err(ServiceError::from_db)
    }

    /// Returns the record or `None` if absent. Absence is not an error here;
    /// handlers decide whether it becomes a 404.
    async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<<Self::Entity as EntityTrait>::Model>, ServiceError> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(ServiceError::from_db)
    }

    /// Inserts the record, ignoring any caller-supplied id, and returns it
    /// with the generated id populated.
    async fn create(
        &self,
        record: <Self::Entity as EntityTrait>::Model,
    ) -> Result<<Self::Entity as EntityTrait>::Model, ServiceError> {
        let mut active = record.into_active_model();
        for key in <Self::Entity as EntityTrait>::PrimaryKey::iter() {
            active.not_set(key.into_column());
        }

        active.insert(self.db()).await.map_err(ServiceError::from_db)
    }

    /// Fetch-merge-save: loads the current record, overwrites all fields from
    /// the incoming one and persists the result.
    async fn update(
        &self,
        id: i32,
        record: <Self::Entity as EntityTrait>::Model,
    ) -> Result<<Self::Entity as EntityTrait>::Model, ServiceError> {
        let existing = Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(ServiceError::from_db)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("{} with id {} not found", Self::RESOURCE, id))
            })?;

        Self::merge(existing, record)
            .update(self.db())
            .await
            .map_err(ServiceError::from_db)
    }

    /// Removes the record. Deleting an absent id succeeds as a no-op.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(ServiceError::from_db)?;

        Ok(())
    }
}
