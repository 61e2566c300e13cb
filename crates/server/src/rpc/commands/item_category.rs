use async_trait::async_trait;
use serde_json::{json, Map, Value};
use service::item_category::ItemCategoryService;
use service::lookup::Lookup;

use crate::rpc::{params, RpcCommand, RpcError};

/// Request body naming the parent by id or key, as the params gave it.
fn category_body(name: String, description: Option<String>, parent: Option<Lookup>, key: Option<String>) -> Value {
    let mut body = Map::new();
    body.insert("name".into(), json!(name));
    body.insert("description".into(), json!(description));
    body.insert("key".into(), json!(key));
    match parent {
        Some(Lookup::ById(id)) => {
            body.insert("parent_item_category_id".into(), json!(id));
        }
        Some(Lookup::ByKey(key)) => {
            body.insert("parent_item_category_key".into(), json!(key));
        }
        None => {}
    }
    Value::Object(body)
}

pub struct GetCategoryCommand(pub ItemCategoryService);

#[async_trait]
impl RpcCommand for GetCategoryCommand {
    fn name(&self) -> &'static str { "getcategory" }
    fn usage(&self) -> &'static str { "<categoryId|categoryKey>" }
    fn description(&self) -> &'static str {
        "Get a category by id or key, with its parent and child categories."
    }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let lookup = params::lookup(params, 0, "categoryId|categoryKey")?;
        Ok(serde_json::to_value(self.0.find(&lookup).await?)?)
    }
}

pub struct GetCategoriesCommand(pub ItemCategoryService);

#[async_trait]
impl RpcCommand for GetCategoriesCommand {
    fn name(&self) -> &'static str { "getcategories" }
    fn usage(&self) -> &'static str { "" }
    fn description(&self) -> &'static str { "Get the root category with its children." }

    async fn execute(&self, _params: &[Value]) -> Result<Value, RpcError> {
        Ok(serde_json::to_value(self.0.find_root().await?)?)
    }
}

pub struct AddCategoryCommand(pub ItemCategoryService);

#[async_trait]
impl RpcCommand for AddCategoryCommand {
    fn name(&self) -> &'static str { "addcategory" }
    fn usage(&self) -> &'static str { "<name> [description] [parentCategoryId|parentCategoryKey] [key]" }
    fn description(&self) -> &'static str { "Create a category, optionally under a parent." }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let body = category_body(
            params::string(params, 0, "name")?,
            params::optional_string(params, 1, "description")?,
            params::optional_lookup(params, 2, "parentCategoryId|parentCategoryKey")?,
            params::optional_string(params, 3, "key")?,
        );
        Ok(serde_json::to_value(self.0.create(&body).await?)?)
    }
}

pub struct UpdateCategoryCommand(pub ItemCategoryService);

#[async_trait]
impl RpcCommand for UpdateCategoryCommand {
    fn name(&self) -> &'static str { "updatecategory" }
    fn usage(&self) -> &'static str { "<categoryId> <name> [description] [parentCategoryId|parentCategoryKey]" }
    fn description(&self) -> &'static str { "Rename, describe or move a category. The key is kept." }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let id = params::id(params, 0, "categoryId")?;
        let current = self.0.find_one(id).await?;
        let body = category_body(
            params::string(params, 1, "name")?,
            params::optional_string(params, 2, "description")?,
            params::optional_lookup(params, 3, "parentCategoryId|parentCategoryKey")?,
            current.category.key,
        );
        Ok(serde_json::to_value(self.0.update(id, &body).await?)?)
    }
}

pub struct RemoveCategoryCommand(pub ItemCategoryService);

#[async_trait]
impl RpcCommand for RemoveCategoryCommand {
    fn name(&self) -> &'static str { "removecategory" }
    fn usage(&self) -> &'static str { "<categoryId>" }
    fn description(&self) -> &'static str { "Remove a category and its children." }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        let id = params::id(params, 0, "categoryId")?;
        self.0.destroy(id).await?;
        Ok(Value::Null)
    }
}
