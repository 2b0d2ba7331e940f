/// Identifier returned by the simulated module upload.
pub const SIMULATED_MODULE_ID: &str = "simulated-module-id";

/// Identifier returned by the simulated edge deployment.
pub const SIMULATED_DEPLOYMENT_ID: &str = "simulated-deployment-id";

/// Result text returned by the simulated remote execution.
pub const SIMULATED_EXECUTION_RESULT: &str = "simulated execution result";

pub const SIMULATED_EXECUTION_TIME_MS: f64 = 42.5;

/// Memory usage reported by every simulated execution. (1MB)
pub const SIMULATED_MEMORY_USED: usize = 1024 * 1024;

/// Iterations spun by the local executor to emulate work.
pub(crate) const LOCAL_EXECUTION_ITERATIONS: u32 = 1_000_000;

/// Version used by `deploy_to_cloud` when uploading.
pub const DEFAULT_MODULE_VERSION: &str = "1.0.0";

/// Region reported for deployments that name no region.
pub(crate) const GLOBAL_REGION: &str = "global";

// Execution limits sent with every remote execution request.
pub(crate) const EXECUTION_MEMORY_MIN: u32 = 64;
pub(crate) const EXECUTION_MEMORY_MAX: u32 = 512;
pub(crate) const EXECUTION_MAX_TIME_MS: u64 = 30_000;

pub(crate) const MAX_REDIRECTS: usize = 10;

pub(crate) const USER_AGENT: &str = concat!("wasmify/", env!("CARGO_PKG_VERSION"));
