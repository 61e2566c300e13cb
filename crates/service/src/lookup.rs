use std::fmt;

use serde::{Deserialize, Serialize};

/// How a caller addresses a row: by numeric id or by its string key.
///
/// The choice is made where the request is decoded (RPC params, URL path),
/// never by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Lookup {
    ById(i32),
    ByKey(String),
}

impl Lookup {
    pub fn id(&self) -> Option<i32> {
        match self {
            Lookup::ById(id) => Some(*id),
            Lookup::ByKey(_) => None,
        }
    }
}

impl From<i32> for Lookup {
    fn from(id: i32) -> Self { Lookup::ById(id) }
}

impl From<String> for Lookup {
    fn from(key: String) -> Self { Lookup::ByKey(key) }
}

impl From<&str> for Lookup {
    fn from(key: &str) -> Self { Lookup::ByKey(key.to_string()) }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::ById(id) => write!(f, "id {id}"),
            Lookup::ByKey(key) => write!(f, "key '{key}'"),
        }
    }
}
