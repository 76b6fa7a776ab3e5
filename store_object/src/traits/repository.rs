use crate::errors::StoreError;
use crate::query_builder::pagination::{PageInfo, PagedResult};
use crate::traits::entity::Entity;
use crate::traits::query_object::QueryObject;
use async_trait::async_trait;

/// Data access operations for one entity type
#[async_trait]
pub trait Repository: Send + Sync {
    type Model: Entity<Query = Self::Query>;

    type Query: QueryObject;

    /// Fails with `NotFound` when no row has this id
    async fn get_by_id(&self, id: i64) -> Result<Self::Model, StoreError>;

    /// All rows for the given ids, or a `Consistency` error if any id is missing
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Self::Model>, StoreError>;

    /// Unpaged search; `None` returns every row
    async fn query(&self, query: Option<&Self::Query>) -> Result<Vec<Self::Model>, StoreError>;

    async fn paged_query(
        &self,
        page_info: &PageInfo,
        query: Option<&Self::Query>,
    ) -> Result<PagedResult<Self::Model>, StoreError>;

    /// Insert a new row, assign the generated id to `item` and return it
    async fn insert(&self, item: &mut Self::Model) -> Result<i64, StoreError>;

    async fn update(&self, item: &mut Self::Model) -> Result<(), StoreError>;

    /// Update all items in one transaction; nothing is written if any item fails
    async fn update_many(&self, items: &mut [Self::Model]) -> Result<(), StoreError>;

    async fn exists(&self, id: i64) -> Result<bool, StoreError>;

    /// Returns `false` when no row had this id
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
