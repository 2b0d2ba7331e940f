//! Client SDK for the Wasmify WebAssembly hosting service.
//!
//! ```no_run
//! use wasmify::{Client, ClientConfig};
//!
//! # fn main() -> wasmify::WasmifyResult<()> {
//! wasmify::init()?;
//! let client = Client::create(&ClientConfig {
//!     api_key: Some("secret".to_string()),
//!     ..Default::default()
//! })?;
//! let result = client.execute_module("mod-1", "add", &["1", "2"])?;
//! println!("{:?}", result.result);
//! drop(client);
//! wasmify::cleanup();
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;
mod lifecycle;
mod local;
mod operations;
mod payload;
mod response;
mod types;

pub use client::Client;
pub use constants::{
    DEFAULT_MODULE_VERSION, SIMULATED_DEPLOYMENT_ID, SIMULATED_EXECUTION_RESULT,
    SIMULATED_EXECUTION_TIME_MS, SIMULATED_MEMORY_USED, SIMULATED_MODULE_ID,
};
pub use error::{WasmifyError, WasmifyResult};
pub use lifecycle::{cleanup, init, is_initialized};
pub use local::{deploy_to_cloud, execute_local, run};
pub use response::ResponseBuffer;
pub use types::{ExecutionResult, WasmModule};
pub use wasmify_config::{ClientConfig, ResolvedConfig};
