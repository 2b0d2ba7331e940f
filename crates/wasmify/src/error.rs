use thiserror::Error;

pub type WasmifyResult<T> = Result<T, WasmifyError>;

/// Error kinds surfaced by the SDK.
///
/// A failed HTTP exchange is reported as [`WasmifyError::Network`] whether
/// the connection was refused or the server answered with a non-200 status.
#[derive(Debug, Error)]
pub enum WasmifyError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("Network request failed")]
    Network,

    #[error("Failed to parse data: {0}")]
    Parse(String),

    #[error("WebAssembly execution failed: {0}")]
    Execution(String),

    #[error("Out of memory")]
    Memory,
}

impl WasmifyError {
    /// Numeric code compatible with the C SDK's `wasmify_error_t`.
    pub fn code(&self) -> i32 {
        match self {
            WasmifyError::InvalidParameter(_) => -1,
            WasmifyError::Network => -2,
            WasmifyError::Parse(_) => -3,
            WasmifyError::Execution(_) => -4,
            WasmifyError::Memory => -5,
        }
    }
}

impl From<serde_json::Error> for WasmifyError {
    fn from(e: serde_json::Error) -> Self {
        WasmifyError::Parse(e.to_string())
    }
}
