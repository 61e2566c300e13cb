use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::rpc::{params, RpcCommand, RpcError, METHOD_NOT_FOUND};

/// Help texts of every other command, captured when the registry is built.
pub struct HelpCommand {
    texts: BTreeMap<&'static str, String>,
}

impl HelpCommand {
    pub fn new(texts: BTreeMap<&'static str, String>) -> Self {
        Self { texts }
    }
}

#[async_trait]
impl RpcCommand for HelpCommand {
    fn name(&self) -> &'static str { "help" }
    fn usage(&self) -> &'static str { "[command]" }
    fn description(&self) -> &'static str { "Show usage of one command or of all commands." }

    async fn execute(&self, params: &[Value]) -> Result<Value, RpcError> {
        match params::optional_string(params, 0, "command")? {
            Some(name) if name == self.name() => Ok(json!(self.help())),
            Some(name) => self
                .texts
                .get(name.as_str())
                .map(|text| json!(text))
                .ok_or_else(|| RpcError::new(METHOD_NOT_FOUND, format!("unknown command: {name}"))),
            None => {
                let mut all: Vec<String> = self.texts.values().cloned().collect();
                all.push(self.help());
                Ok(json!(all.join("\n")))
            }
        }
    }
}
