use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::constants::{EXECUTION_MAX_TIME_MS, EXECUTION_MEMORY_MAX, EXECUTION_MEMORY_MIN};

/// Body of `POST /wasm/execute`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExecuteRequest<'a> {
    pub module_id: &'a str,
    pub function_name: &'a str,
    pub args: &'a [&'a str],
    pub config: Map<String, Value>,
}

/// Execution limits sent with every request, with `overrides` applied on top.
pub(crate) fn execution_config(overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut config = Map::new();
    config.insert(
        "memory".to_string(),
        json!({ "min": EXECUTION_MEMORY_MIN, "max": EXECUTION_MEMORY_MAX }),
    );
    config.insert("maxExecutionTime".to_string(), json!(EXECUTION_MAX_TIME_MS));
    config.insert("enableWasi".to_string(), Value::Bool(true));
    config.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    config
}

/// Envelope of `GET /modules/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ModuleInfoResponse {
    pub data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModuleInfoData {
    pub id: String,
    pub name: String,
    pub version: String,
    pub wasm_file: String,
}
