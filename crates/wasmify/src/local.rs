//! In-process execution path and one-call helpers.
//!
//! No WebAssembly engine is embedded: local execution spins for a fixed
//! amount of work and reports how long that took.

use std::time::Instant;

use crate::{
    client::Client,
    constants::{LOCAL_EXECUTION_ITERATIONS, SIMULATED_MEMORY_USED},
    error::{WasmifyError, WasmifyResult},
    operations::require,
    types::ExecutionResult,
};

/// Run `function_name` from the module at `file_path` on this machine.
///
/// The file is not opened.
pub fn execute_local(
    file_path: &str,
    function_name: &str,
    args: &[&str],
) -> WasmifyResult<ExecutionResult> {
    require(file_path, "file_path")?;
    require(function_name, "function_name")?;

    let start = Instant::now();
    let mut work = 0u64;
    for i in 0..LOCAL_EXECUTION_ITERATIONS {
        work = std::hint::black_box(work.wrapping_add(u64::from(i)));
    }
    let execution_time = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        "Executed {}::{} locally in {:.3}ms",
        file_path,
        function_name,
        execution_time
    );

    Ok(ExecutionResult {
        success: true,
        result: Some(format!(
            "Executed {} with {} args",
            function_name,
            args.len()
        )),
        execution_time,
        memory_used: SIMULATED_MEMORY_USED,
        error: None,
    })
}

/// Execute locally and return only the result text.
pub fn run(file_path: &str, function_name: &str, args: &[&str]) -> WasmifyResult<String> {
    let result = execute_local(file_path, function_name, args)?;
    if !result.success {
        return Err(WasmifyError::Execution(
            result.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(result.result.unwrap_or_default())
}

/// Upload `file_path` as `name` and deploy it, using a default client.
///
/// Returns the deployment id.
pub fn deploy_to_cloud(file_path: &str, name: &str, regions: &[&str]) -> WasmifyResult<String> {
    Client::with_defaults()?.deploy_to_cloud(file_path, name, regions)
}
