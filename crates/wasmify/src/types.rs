use serde::{Deserialize, Serialize};

/// A WebAssembly module known to the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmModule {
    pub id: String,
    pub name: String,
    pub version: String,
    pub file_path: String,
    /// Free-form data attached by the service (size, hash, timestamps...).
    pub metadata: serde_json::Value,
}

/// Outcome of running a module function.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub success: bool,
    pub result: Option<String>,
    /// Wall-clock time in milliseconds.
    pub execution_time: f64,
    /// Bytes of memory used by the instance.
    pub memory_used: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
