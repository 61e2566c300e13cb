use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction};
use serde_json::Value;
use tracing::{info, instrument};

use models::item_category;

use super::domain::{ItemCategoryNode, ItemCategoryRequest};
use super::repo::seaorm::SeaOrmItemCategoryRepository;
use super::repository::ItemCategoryRepository;
use super::validation::validate_request;
use crate::errors::ServiceError;
use crate::lookup::Lookup;
use crate::repository::{begin, finish};
use crate::validation::ValidationError;

const ENTITY: &str = "item_category";

#[derive(Clone)]
pub struct ItemCategoryService {
    db: DatabaseConnection,
    repo: Arc<dyn ItemCategoryRepository>,
}

impl ItemCategoryService {
    pub fn new(db: DatabaseConnection, repo: Arc<dyn ItemCategoryRepository>) -> Self {
        Self { db, repo }
    }

    pub fn with_seaorm(db: DatabaseConnection) -> Self {
        Self::new(db, Arc::new(SeaOrmItemCategoryRepository))
    }

    #[instrument(skip(self, body))]
    pub async fn create(&self, body: &Value) -> Result<ItemCategoryNode, ServiceError> {
        let request = validate_request(body)?;
        let txn = begin(&self.db).await?;
        let result = self.insert(&txn, &request).await;
        let id = finish(txn, result).await?;
        info!(item_category_id = id, key = ?request.key, "item_category_created");
        self.find_one(id).await
    }

    #[instrument(skip(self, body))]
    pub async fn update(&self, id: i32, body: &Value) -> Result<ItemCategoryNode, ServiceError> {
        let request = validate_request(body)?;
        let txn = begin(&self.db).await?;
        let result = self.replace(&txn, id, &request).await;
        finish(txn, result).await?;
        info!(item_category_id = id, "item_category_updated");
        self.find_one(id).await
    }

    pub async fn find(&self, lookup: &Lookup) -> Result<ItemCategoryNode, ServiceError> {
        match lookup {
            Lookup::ById(id) => self.find_one(*id).await,
            Lookup::ByKey(key) => self.find_one_by_key(key).await,
        }
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: i32) -> Result<ItemCategoryNode, ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.load(&txn, &Lookup::ById(id)).await;
        finish(txn, result).await
    }

    #[instrument(skip(self))]
    pub async fn find_one_by_key(&self, key: &str) -> Result<ItemCategoryNode, ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.load(&txn, &Lookup::from(key)).await;
        finish(txn, result).await
    }

    /// The oldest category without a parent, with its children.
    #[instrument(skip(self))]
    pub async fn find_root(&self) -> Result<ItemCategoryNode, ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.load_root(&txn).await;
        finish(txn, result).await
    }

    pub async fn find_all(&self) -> Result<Vec<item_category::Model>, ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.repo.find_all(&txn).await;
        finish(txn, result).await
    }

    /// Delete a category; its descendants go with it.
    #[instrument(skip(self))]
    pub async fn destroy(&self, id: i32) -> Result<(), ServiceError> {
        let txn = begin(&self.db).await?;
        let result = self.repo.delete(&txn, id).await;
        if !finish(txn, result).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(item_category_id = id, "item_category_destroyed");
        Ok(())
    }

    async fn insert(&self, txn: &DatabaseTransaction, request: &ItemCategoryRequest) -> Result<i32, ServiceError> {
        self.ensure_key_free(txn, request.key.as_deref(), None).await?;
        let parent_id = self.resolve_parent(txn, request).await?;
        let row = self.repo.insert(txn, request.values(parent_id)).await?;
        Ok(row.id)
    }

    async fn replace(&self, txn: &DatabaseTransaction, id: i32, request: &ItemCategoryRequest) -> Result<(), ServiceError> {
        if self.repo.find_by_id(txn, id).await?.is_none() {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        self.ensure_key_free(txn, request.key.as_deref(), Some(id)).await?;
        let parent_id = self.resolve_parent(txn, request).await?;
        if let Some(parent_id) = parent_id {
            self.ensure_not_descendant(txn, id, parent_id).await?;
        }
        self.repo.update(txn, id, request.values(parent_id)).await?;
        Ok(())
    }

    async fn load(&self, txn: &DatabaseTransaction, lookup: &Lookup) -> Result<ItemCategoryNode, ServiceError> {
        let row = self
            .find_row(txn, lookup)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, lookup.clone()))?;
        self.load_node(txn, row).await
    }

    async fn find_row(&self, txn: &DatabaseTransaction, lookup: &Lookup) -> Result<Option<item_category::Model>, ServiceError> {
        match lookup {
            Lookup::ById(id) => self.repo.find_by_id(txn, *id).await,
            Lookup::ByKey(key) => self.repo.find_by_key(txn, key).await,
        }
    }

    async fn load_root(&self, txn: &DatabaseTransaction) -> Result<ItemCategoryNode, ServiceError> {
        let row = self
            .repo
            .find_roots(txn)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::not_found(ENTITY, "root"))?;
        self.load_node(txn, row).await
    }

    async fn load_node(&self, txn: &DatabaseTransaction, category: item_category::Model) -> Result<ItemCategoryNode, ServiceError> {
        let parent = match category.parent_item_category_id {
            Some(parent_id) => self.repo.find_by_id(txn, parent_id).await?,
            None => None,
        };
        let children = self.repo.find_by_parent(txn, category.id).await?;
        Ok(ItemCategoryNode { category, parent, children })
    }

    async fn ensure_key_free(&self, txn: &DatabaseTransaction, key: Option<&str>, own_id: Option<i32>) -> Result<(), ServiceError> {
        let Some(key) = key else { return Ok(()) };
        match self.repo.find_by_key(txn, key).await? {
            Some(existing) if Some(existing.id) != own_id => {
                Err(ValidationError::field("key", format!("key '{key}' is already in use")).into())
            }
            _ => Ok(()),
        }
    }

    async fn resolve_parent(&self, txn: &DatabaseTransaction, request: &ItemCategoryRequest) -> Result<Option<i32>, ServiceError> {
        let Some(lookup) = request.parent() else { return Ok(None) };
        match self.find_row(txn, &lookup).await? {
            Some(parent) => Ok(Some(parent.id)),
            None => Err(ValidationError::field("parent_item_category_id", format!("parent category with {lookup} not found")).into()),
        }
    }

    /// Walk up from `parent_id`; meeting `id` on the way means a cycle.
    async fn ensure_not_descendant(&self, txn: &DatabaseTransaction, id: i32, parent_id: i32) -> Result<(), ServiceError> {
        let mut current = Some(parent_id);
        while let Some(ancestor) = current {
            if ancestor == id {
                return Err(ValidationError::field(
                    "parent_item_category_id",
                    "a category cannot be its own parent or ancestor",
                )
                .into());
            }
            current = self.repo.find_by_id(txn, ancestor).await?.and_then(|c| c.parent_item_category_id);
        }
        Ok(())
    }
}
