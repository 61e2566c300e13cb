use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

use models::item_category::{self, ItemCategoryValues};

use crate::errors::ServiceError;
use crate::repository::ChildRepository;

/// Category persistence; children are looked up by `parent_item_category_id`.
#[async_trait]
pub trait ItemCategoryRepository: ChildRepository<Row = item_category::Model, Values = ItemCategoryValues> {
    async fn find_by_key(&self, txn: &DatabaseTransaction, key: &str) -> Result<Option<item_category::Model>, ServiceError>;
    /// Categories without a parent, ordered by id.
    async fn find_roots(&self, txn: &DatabaseTransaction) -> Result<Vec<item_category::Model>, ServiceError>;
}
