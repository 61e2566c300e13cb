use models::item_category;
use serde_json::Value;

use super::domain::ItemCategoryRequest;
use crate::validation::{as_object, has_value, ValidationError, Validator};

pub fn validate_request(body: &Value) -> Result<ItemCategoryRequest, ValidationError> {
    let obj = as_object(body)?;

    let mut shape = Validator::new();
    if !has_value(obj, "name") {
        shape.push("name", "is required");
    }
    if has_value(obj, "parent_item_category_id") && has_value(obj, "parent_item_category_key") {
        shape.push("parent_item_category_key", "give the parent by id or by key, not both");
    }
    shape.finish()?;

    let request: ItemCategoryRequest = serde_json::from_value(body.clone())
        .map_err(|e| ValidationError::field("body", e.to_string()))?;

    let mut v = Validator::new();
    v.check("name", item_category::validate_name(&request.name));
    if let Some(key) = &request.key {
        v.check("key", item_category::validate_key(key));
    }
    if let Some(key) = &request.parent_item_category_key {
        v.check("parent_item_category_key", item_category::validate_key(key));
    }
    v.finish_with(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Lookup;
    use serde_json::json;

    #[test]
    fn name_is_required() {
        assert!(validate_request(&json!({"key": "cat_x"})).unwrap_err().has_field("name"));
        assert!(validate_request(&json!({"name": "  "})).unwrap_err().has_field("name"));
    }

    #[test]
    fn key_must_not_contain_whitespace() {
        let err = validate_request(&json!({"name": "Audio", "key": "cat audio"})).unwrap_err();
        assert!(err.has_field("key"));
    }

    #[test]
    fn parent_by_id_or_key() {
        let by_id = validate_request(&json!({"name": "Audio", "parent_item_category_id": 2})).unwrap();
        assert_eq!(by_id.parent(), Some(Lookup::ById(2)));
        let by_key = validate_request(&json!({"name": "Audio", "parent_item_category_key": "cat_ROOT"})).unwrap();
        assert_eq!(by_key.parent(), Some(Lookup::ByKey("cat_ROOT".into())));
        let err = validate_request(&json!({
            "name": "Audio", "parent_item_category_id": 2, "parent_item_category_key": "cat_ROOT"
        }))
        .unwrap_err();
        assert!(err.has_field("parent_item_category_key"));
    }
}
