//! Module-management verbs of the remote API.
//!
//! Only `execute_module*` and `get_module_info` talk to the server; upload,
//! listing and deployment return simulated records.

use reqwest::Url;
use serde_json::{Map, Value};

use crate::{
    client::Client,
    constants::{
        DEFAULT_MODULE_VERSION, GLOBAL_REGION, SIMULATED_DEPLOYMENT_ID, SIMULATED_EXECUTION_RESULT,
        SIMULATED_EXECUTION_TIME_MS, SIMULATED_MEMORY_USED, SIMULATED_MODULE_ID,
    },
    error::{WasmifyError, WasmifyResult},
    payload::{ExecuteRequest, ModuleInfoData, ModuleInfoResponse, execution_config},
    types::{ExecutionResult, WasmModule},
};

/// Reject empty required inputs.
pub(crate) fn require(value: &str, name: &'static str) -> WasmifyResult<()> {
    if value.is_empty() {
        Err(WasmifyError::InvalidParameter(name))
    } else {
        Ok(())
    }
}

impl Client {
    pub fn upload_module(
        &self,
        file_path: &str,
        name: &str,
        version: &str,
    ) -> WasmifyResult<WasmModule> {
        require(file_path, "file_path")?;
        require(name, "name")?;
        require(version, "version")?;

        tracing::info!("Uploading module {}@{} from {}", name, version, file_path);

        Ok(WasmModule {
            id: SIMULATED_MODULE_ID.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            file_path: file_path.to_string(),
            metadata: Value::Object(Map::new()),
        })
    }

    pub fn execute_module(
        &self,
        module_id: &str,
        function_name: &str,
        args: &[&str],
    ) -> WasmifyResult<ExecutionResult> {
        self.execute_module_with_config(module_id, function_name, args, &Map::new())
    }

    /// Like [`Client::execute_module`], with `overrides` merged into the
    /// request's `config` object.
    pub fn execute_module_with_config(
        &self,
        module_id: &str,
        function_name: &str,
        args: &[&str],
        overrides: &Map<String, Value>,
    ) -> WasmifyResult<ExecutionResult> {
        require(module_id, "module_id")?;
        require(function_name, "function_name")?;

        let request = ExecuteRequest {
            module_id,
            function_name,
            args,
            config: execution_config(overrides),
        };
        let body = serde_json::to_string_pretty(&request)?;

        let url = self.endpoint("wasm/execute");
        tracing::info!("Executing {}::{} remotely", module_id, function_name);
        let response = self.execute_request(&url, Some(&body))?;
        // The server's answer is not interpreted yet.
        tracing::debug!("Ignoring {} byte execution response", response.size());

        Ok(ExecutionResult {
            success: true,
            result: Some(SIMULATED_EXECUTION_RESULT.to_string()),
            execution_time: SIMULATED_EXECUTION_TIME_MS,
            memory_used: SIMULATED_MEMORY_USED,
            error: None,
        })
    }

    pub fn list_modules(&self) -> WasmifyResult<Vec<WasmModule>> {
        Ok(Vec::new())
    }

    /// Fetch one module's description from `GET /modules/{id}`.
    pub fn get_module_info(&self, module_id: &str) -> WasmifyResult<WasmModule> {
        require(module_id, "module_id")?;

        let url = self.module_url(module_id)?;
        let response = self.execute_request(&url, None)?;
        let envelope: ModuleInfoResponse = response.json()?;
        let data: ModuleInfoData = serde_json::from_value(envelope.data.clone())?;

        Ok(WasmModule {
            id: data.id,
            name: data.name,
            version: data.version,
            file_path: data.wasm_file,
            metadata: envelope.data,
        })
    }

    pub fn deploy_to_edge(&self, module_id: &str, regions: &[&str]) -> WasmifyResult<String> {
        require(module_id, "module_id")?;

        let region = regions.first().copied().unwrap_or(GLOBAL_REGION);
        tracing::info!("Deploying module {} to region {}", module_id, region);

        Ok(SIMULATED_DEPLOYMENT_ID.to_string())
    }

    /// Upload `file_path` as `name` at the default version, then deploy it.
    ///
    /// Returns the deployment id.
    pub fn deploy_to_cloud(
        &self,
        file_path: &str,
        name: &str,
        regions: &[&str],
    ) -> WasmifyResult<String> {
        let module = self.upload_module(file_path, name, DEFAULT_MODULE_VERSION)?;
        self.deploy_to_edge(&module.id, regions)
    }

    // An unusable base URL fails like any other request to it.
    fn module_url(&self, module_id: &str) -> WasmifyResult<String> {
        let endpoint = self.endpoint("modules");
        let mut url = Url::parse(&endpoint).map_err(|e| {
            tracing::debug!("Invalid request URL {}: {}", endpoint, e);
            WasmifyError::Network
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                tracing::debug!("Request URL {} cannot take path segments", endpoint);
                WasmifyError::Network
            })?
            .push(module_id);
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_returns_simulated_module() {
        let client = Client::with_defaults().unwrap();
        let module = client
            .upload_module("build/add.wasm", "adder", "0.2.0")
            .unwrap();

        assert_eq!(module.id, SIMULATED_MODULE_ID);
        assert_eq!(module.name, "adder");
        assert_eq!(module.version, "0.2.0");
        assert_eq!(module.file_path, "build/add.wasm");
        assert_eq!(module.metadata, Value::Object(Map::new()));
    }

    #[test]
    fn upload_validates_every_field() {
        let client = Client::with_defaults().unwrap();
        assert!(matches!(
            client.upload_module("", "n", "v"),
            Err(WasmifyError::InvalidParameter("file_path"))
        ));
        assert!(matches!(
            client.upload_module("f", "", "v"),
            Err(WasmifyError::InvalidParameter("name"))
        ));
        assert!(matches!(
            client.upload_module("f", "n", ""),
            Err(WasmifyError::InvalidParameter("version"))
        ));
    }

    #[test]
    fn list_is_always_empty() {
        let client = Client::with_defaults().unwrap();
        assert!(client.list_modules().unwrap().is_empty());
    }

    #[test]
    fn deploy_returns_simulated_id() {
        let client = Client::with_defaults().unwrap();
        assert_eq!(
            client.deploy_to_edge("mod-1", &["eu-west", "us-east"]).unwrap(),
            SIMULATED_DEPLOYMENT_ID
        );
        assert_eq!(
            client.deploy_to_edge("mod-1", &[]).unwrap(),
            SIMULATED_DEPLOYMENT_ID
        );
        assert!(matches!(
            client.deploy_to_edge("", &[]),
            Err(WasmifyError::InvalidParameter("module_id"))
        ));
    }

    #[test]
    fn execute_validates_before_sending() {
        let client = Client::with_defaults().unwrap();
        assert!(matches!(
            client.execute_module("", "f", &[]),
            Err(WasmifyError::InvalidParameter("module_id"))
        ));
        assert!(matches!(
            client.execute_module("m", "", &[]),
            Err(WasmifyError::InvalidParameter("function_name"))
        ));
    }

    #[test]
    fn module_url_escapes_the_id() {
        let client = Client::with_defaults().unwrap();
        assert_eq!(
            client.module_url("team/mod 1").unwrap(),
            "http://localhost:3000/api/modules/team%2Fmod%201"
        );
    }

    #[test]
    fn malformed_base_url_is_a_network_error_on_every_path() {
        let client = Client::create(&wasmify_config::ClientConfig {
            api_url: Some("not a url".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert!(matches!(
            client.execute_module("mod-1", "main", &[]),
            Err(WasmifyError::Network)
        ));
        assert!(matches!(
            client.get_module_info("mod-1"),
            Err(WasmifyError::Network)
        ));
    }

    #[test]
    fn deploy_to_cloud_uses_this_client() {
        let client = Client::with_defaults().unwrap();
        assert_eq!(
            client.deploy_to_cloud("x.wasm", "demo", &["eu-west"]).unwrap(),
            SIMULATED_DEPLOYMENT_ID
        );
        assert!(matches!(
            client.deploy_to_cloud("", "demo", &[]),
            Err(WasmifyError::InvalidParameter("file_path"))
        ));
    }
}
