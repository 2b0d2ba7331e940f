mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};
use wasmify::{Client, WasmifyError};

use crate::cli::{Cli, Command};

fn init_tracing() -> Result<()> {
    let subscriber = tracing_subscriber::Registry::default()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    subscriber.try_init()?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let outcome = wasmify::init()
        .map_err(anyhow::Error::from)
        .and_then(|()| execute(&cli));
    wasmify::cleanup();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            exit_code(&err)
        }
    }
}

/// Map SDK errors to their C SDK code (as a positive status); anything else is 1.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<WasmifyError>() {
        Some(e) => ExitCode::from(u8::try_from(e.code().unsigned_abs()).unwrap_or(1)),
        None => ExitCode::FAILURE,
    }
}

fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Run {
            file,
            function,
            args,
        } => {
            let output = wasmify::run(file, function, &as_strs(args))?;
            println!("{}", output);
        }
        Command::Execute {
            module_id,
            function,
            args,
        } => {
            let client = connect(cli)?;
            let result = client.execute_module(module_id, function, &as_strs(args))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Upload {
            file,
            name,
            version,
        } => {
            let client = connect(cli)?;
            let module = client.upload_module(file, name, version)?;
            println!("{}", serde_json::to_string_pretty(&module)?);
        }
        Command::List => {
            let client = connect(cli)?;
            let modules = client.list_modules()?;
            if modules.is_empty() {
                tracing::info!("No modules found");
            }
            for module in modules {
                println!("{}\t{}\t{}", module.id, module.name, module.version);
            }
        }
        Command::Info { module_id } => {
            let client = connect(cli)?;
            let module = client.get_module_info(module_id)?;
            println!("{}", serde_json::to_string_pretty(&module)?);
        }
        Command::Deploy { module_id, regions } => {
            let client = connect(cli)?;
            let deployment_id = client.deploy_to_edge(module_id, &as_strs(regions))?;
            println!("{}", deployment_id);
        }
        Command::Publish {
            file,
            name,
            regions,
        } => {
            let client = connect(cli)?;
            let deployment_id = client.deploy_to_cloud(file, name, &as_strs(regions))?;
            println!("{}", deployment_id);
        }
    }
    Ok(())
}

fn connect(cli: &Cli) -> Result<Client> {
    let config = cli.client_config()?;
    Ok(Client::create(&config)?)
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
