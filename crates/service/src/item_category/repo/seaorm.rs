use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder};

use models::item_category::{self, ItemCategoryValues};

use crate::errors::ServiceError;
use crate::item_category::repository::ItemCategoryRepository;
use crate::repository::{ChildRepository, Repository};

pub struct SeaOrmItemCategoryRepository;

#[async_trait]
impl Repository for SeaOrmItemCategoryRepository {
    type Row = item_category::Model;
    type Values = ItemCategoryValues;

    fn row_id(&self, row: &item_category::Model) -> i32 { row.id }

    async fn insert(&self, txn: &DatabaseTransaction, values: ItemCategoryValues) -> Result<item_category::Model, ServiceError> {
        values.validate()?;
        Ok(values.into_active_model().insert(txn).await?)
    }

    async fn find_by_id(&self, txn: &DatabaseTransaction, id: i32) -> Result<Option<item_category::Model>, ServiceError> {
        Ok(item_category::Entity::find_by_id(id).one(txn).await?)
    }

    async fn update(&self, txn: &DatabaseTransaction, id: i32, values: ItemCategoryValues) -> Result<item_category::Model, ServiceError> {
        values.validate()?;
        let row = item_category::Entity::find_by_id(id)
            .one(txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("item_category", id))?;
        let mut am: item_category::ActiveModel = row.into();
        values.apply(&mut am);
        Ok(am.update(txn).await?)
    }

    async fn delete(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, ServiceError> {
        let res = item_category::Entity::delete_by_id(id).exec(txn).await?;
        Ok(res.rows_affected > 0)
    }

    async fn find_all(&self, txn: &DatabaseTransaction) -> Result<Vec<item_category::Model>, ServiceError> {
        Ok(item_category::Entity::find()
            .order_by_asc(item_category::Column::Id)
            .all(txn)
            .await?)
    }
}

#[async_trait]
impl ChildRepository for SeaOrmItemCategoryRepository {
    async fn find_by_parent(&self, txn: &DatabaseTransaction, parent_id: i32) -> Result<Vec<item_category::Model>, ServiceError> {
        Ok(item_category::Entity::find()
            .filter(item_category::Column::ParentItemCategoryId.eq(parent_id))
            .order_by_asc(item_category::Column::Id)
            .all(txn)
            .await?)
    }
}

#[async_trait]
impl ItemCategoryRepository for SeaOrmItemCategoryRepository {
    async fn find_by_key(&self, txn: &DatabaseTransaction, key: &str) -> Result<Option<item_category::Model>, ServiceError> {
        Ok(item_category::Entity::find()
            .filter(item_category::Column::Key.eq(key))
            .one(txn)
            .await?)
    }

    async fn find_roots(&self, txn: &DatabaseTransaction) -> Result<Vec<item_category::Model>, ServiceError> {
        Ok(item_category::Entity::find()
            .filter(item_category::Column::ParentItemCategoryId.is_null())
            .order_by_asc(item_category::Column::Id)
            .all(txn)
            .await?)
    }
}
