//! Per-table persistence contract and the transaction boundary helper.
//!
//! Every method takes the open transaction, so an aggregate operation can
//! span several repositories and still commit or roll back as one unit.

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::errors::ServiceError;

/// Basic row operations for one table.
#[async_trait]
pub trait Repository: Send + Sync {
    type Row: Send + Sync;
    type Values: Send + Sync;

    fn row_id(&self, row: &Self::Row) -> i32;

    async fn insert(&self, txn: &DatabaseTransaction, values: Self::Values) -> Result<Self::Row, ServiceError>;
    async fn find_by_id(&self, txn: &DatabaseTransaction, id: i32) -> Result<Option<Self::Row>, ServiceError>;
    /// Fails with `NotFound` when no row has this id.
    async fn update(&self, txn: &DatabaseTransaction, id: i32, values: Self::Values) -> Result<Self::Row, ServiceError>;
    /// Returns whether a row was deleted.
    async fn delete(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, ServiceError>;
    async fn find_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Self::Row>, ServiceError>;
}

/// Rows that hang off a parent row through a foreign key.
#[async_trait]
pub trait ChildRepository: Repository {
    /// Children of `parent_id`, ordered by id.
    async fn find_by_parent(&self, txn: &DatabaseTransaction, parent_id: i32) -> Result<Vec<Self::Row>, ServiceError>;
}

/// Commit on success, roll back on failure and hand back the original error.
pub async fn finish<T>(txn: DatabaseTransaction, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "rollback failed");
            }
            Err(e)
        }
    }
}

/// Begin a transaction on any connection.
pub async fn begin<C: TransactionTrait>(db: &C) -> Result<DatabaseTransaction, ServiceError> {
    Ok(db.begin().await?)
}
