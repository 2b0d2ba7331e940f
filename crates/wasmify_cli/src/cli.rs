use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wasmify_config::ClientConfig;

/// Run and manage WebAssembly modules on Wasmify.
#[derive(Parser, Debug)]
#[command(name = "wasmify", version, about)]
pub struct Cli {
    /// Path to a YAML client config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the Wasmify API.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// API key sent as a bearer token.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub timeout: Option<i64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a function of a local .wasm file and print the result.
    Run {
        file: String,
        function: String,
        args: Vec<String>,
    },
    /// Execute a function of an uploaded module.
    Execute {
        module_id: String,
        function: String,
        args: Vec<String>,
    },
    /// Upload a .wasm file.
    Upload {
        file: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = wasmify::DEFAULT_MODULE_VERSION)]
        version: String,
    },
    /// List uploaded modules.
    List,
    /// Show one uploaded module.
    Info { module_id: String },
    /// Deploy an uploaded module to edge regions.
    Deploy {
        module_id: String,
        /// Target region; repeat for several. Defaults to global.
        #[arg(long = "region")]
        regions: Vec<String>,
    },
    /// Upload a .wasm file and deploy it in one step.
    Publish {
        file: String,
        #[arg(long)]
        name: String,
        #[arg(long = "region")]
        regions: Vec<String>,
    },
}

impl Cli {
    /// Config file, then environment, then command-line flags.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let config = match &self.config {
            Some(path) => ClientConfig::load(path)
                .map_err(|e| anyhow::anyhow!("Failed to load client config: {}", e))?,
            None => ClientConfig::default(),
        };
        let config = config.apply_env().map_err(|e| anyhow::anyhow!(e))?;
        self.apply_flags(config)
    }

    pub fn apply_flags(&self, mut config: ClientConfig) -> anyhow::Result<ClientConfig> {
        if let Some(url) = &self.api_url {
            config.api_url = Some(url.clone());
        }
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_with_trailing_args() {
        let cli = Cli::try_parse_from(["wasmify", "run", "add.wasm", "add", "1", "2"]).unwrap();
        match cli.command {
            Command::Run {
                file,
                function,
                args,
            } => {
                assert_eq!(file, "add.wasm");
                assert_eq!(function, "add");
                assert_eq!(args, vec!["1", "2"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_repeated_regions_and_global_flags() {
        let cli = Cli::try_parse_from([
            "wasmify",
            "deploy",
            "mod-1",
            "--region",
            "eu-west",
            "--region",
            "us-east",
            "--api-key",
            "k",
        ])
        .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        match cli.command {
            Command::Deploy { module_id, regions } => {
                assert_eq!(module_id, "mod-1");
                assert_eq!(regions, vec!["eu-west", "us-east"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn upload_version_defaults() {
        let cli = Cli::try_parse_from(["wasmify", "upload", "a.wasm", "--name", "a"]).unwrap();
        match cli.command {
            Command::Upload { version, .. } => assert_eq!(version, "1.0.0"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "wasmify",
            "--api-url",
            "https://flag.example/api",
            "--timeout",
            "-1",
            "list",
        ])
        .unwrap();
        let base = ClientConfig {
            api_url: Some("https://file.example/api".to_string()),
            api_key: Some("file-key".to_string()),
            timeout: 9,
        };

        let config = cli.apply_flags(base).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://flag.example/api"));
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.timeout, -1);
    }

    #[test]
    fn invalid_flag_url_is_rejected() {
        let cli = Cli::try_parse_from(["wasmify", "--api-url", "localhost", "list"]).unwrap();
        assert!(cli.apply_flags(ClientConfig::default()).is_err());
    }
}
