use crate::error::StoreResult;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PrimaryKeyTrait};

/// Generic CRUD helper over a SeaORM entity.
///
/// Domain repositories compose this for the common operations and fall
/// back to entity queries for anything bespoke (ordering, upserts).
/// All errors pass through [`crate::StoreError`] classification.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: std::marker::PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: std::marker::PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn insert<A>(&self, model: A) -> StoreResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + sea_orm::ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.db).await?)
    }

    pub async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> StoreResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    pub async fn update<A>(&self, model: A) -> StoreResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + sea_orm::ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.db).await?)
    }

    /// Delete by primary key; returns the number of rows affected.
    /// Deleting an id with no row is not an error (zero rows affected).
    pub async fn delete_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> StoreResult<u64> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
