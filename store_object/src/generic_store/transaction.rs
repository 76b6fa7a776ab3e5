//! Transaction support for GenericRepository
//!
//! Multi-statement operations (count + page, id-set checks, batch updates)
//! run inside one of these. Dropping it without `commit` rolls back.

use super::GenericRepository;
use crate::errors::StoreError;
use crate::traits::entity::Entity;
use sqlx::{PgConnection, Postgres, Transaction};
use std::marker::PhantomData;

/// A transactional context for GenericRepository operations
///
/// # Example
/// ```ignore
/// let mut tx = repository.begin_transaction("transfer").await?;
/// sqlx::query("UPDATE ...").execute(tx.connection()).await?;
/// tx.commit().await?;
/// ```
pub struct RepositoryTransaction<T: Entity> {
    tx: Transaction<'static, Postgres>,
    operation: &'static str,
    _phantom: PhantomData<T>,
}

impl<T: Entity> GenericRepository<T> {
    /// Begin a new database transaction for `operation`
    pub async fn begin_transaction(
        &self,
        operation: &'static str,
    ) -> Result<RepositoryTransaction<T>, StoreError> {
        let tx = self
            .db_pool
            .begin()
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), operation, e))?;
        Ok(RepositoryTransaction {
            tx,
            operation,
            _phantom: PhantomData,
        })
    }
}

impl<T: Entity> RepositoryTransaction<T> {
    pub async fn commit(self) -> Result<(), StoreError> {
        let operation = self.operation;
        self.tx
            .commit()
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), operation, e))
    }

    pub async fn rollback(self) -> Result<(), StoreError> {
        let operation = self.operation;
        self.tx
            .rollback()
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), operation, e))
    }

    /// Connection to execute statements on
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }
}
