//! Positional parameter decoding.

use serde_json::Value;
use service::lookup::Lookup;

use super::RpcError;

/// A numeric param addresses a row by id, a string param by key.
pub fn lookup(params: &[Value], index: usize, name: &str) -> Result<Lookup, RpcError> {
    match params.get(index) {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Lookup::ById)
            .ok_or_else(|| RpcError::invalid_params(format!("{name} must be an integer id or a string key"))),
        Some(Value::String(key)) => Ok(Lookup::ByKey(key.clone())),
        Some(_) => Err(RpcError::invalid_params(format!("{name} must be an integer id or a string key"))),
        None => Err(RpcError::invalid_params(format!("missing param {name}"))),
    }
}

pub fn optional_lookup(params: &[Value], index: usize, name: &str) -> Result<Option<Lookup>, RpcError> {
    match params.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => lookup(params, index, name).map(Some),
    }
}

pub fn id(params: &[Value], index: usize, name: &str) -> Result<i32, RpcError> {
    match lookup(params, index, name)? {
        Lookup::ById(id) => Ok(id),
        Lookup::ByKey(_) => Err(RpcError::invalid_params(format!("{name} must be an integer id"))),
    }
}

pub fn string(params: &[Value], index: usize, name: &str) -> Result<String, RpcError> {
    match params.get(index) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RpcError::invalid_params(format!("{name} must be a string"))),
        None => Err(RpcError::invalid_params(format!("missing param {name}"))),
    }
}

pub fn optional_string(params: &[Value], index: usize, name: &str) -> Result<Option<String>, RpcError> {
    match params.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => string(params, index, name).map(Some),
    }
}

pub fn object<'a>(params: &'a [Value], index: usize, name: &str) -> Result<&'a Value, RpcError> {
    match params.get(index) {
        Some(v @ Value::Object(_)) => Ok(v),
        Some(_) => Err(RpcError::invalid_params(format!("{name} must be an object"))),
        None => Err(RpcError::invalid_params(format!("missing param {name}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::INVALID_PARAMS;
    use serde_json::json;

    #[test]
    fn number_is_id_and_string_is_key() {
        let params = [json!(12), json!("cat_ROOT"), json!(true), json!(1.5)];
        assert_eq!(lookup(&params, 0, "idOrKey").unwrap(), Lookup::ById(12));
        assert_eq!(lookup(&params, 1, "idOrKey").unwrap(), Lookup::ByKey("cat_ROOT".into()));
        assert_eq!(lookup(&params, 2, "idOrKey").unwrap_err().code, INVALID_PARAMS);
        assert_eq!(lookup(&params, 3, "idOrKey").unwrap_err().code, INVALID_PARAMS);
        assert!(lookup(&params, 9, "idOrKey").is_err());
    }

    #[test]
    fn optional_params_accept_null_and_absence() {
        let params = [json!(null)];
        assert_eq!(optional_lookup(&params, 0, "parent").unwrap(), None);
        assert_eq!(optional_string(&params, 3, "description").unwrap(), None);
        assert!(id(&[json!("x")], 0, "id").is_err());
        assert!(object(&[json!([1])], 0, "data").is_err());
    }
}
