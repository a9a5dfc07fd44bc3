mod args;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use iothub_telemetry_simulator::{
    controller::Controller,
    publisher::{HttpTransport, Publisher, Transport},
    reading::ReadingGenerator,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    exit_code(run().await)
}

fn exit_code(result: Result<()>) -> ExitCode {
    if let Err(e) = result {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let endpoint = args
        .endpoint()
        .context("failed to resolve device endpoint")?;

    let transport = HttpTransport::new().context("failed to initialize HTTP client")?;
    let publisher = Publisher::new(transport, endpoint.as_str(), args.sas_token.as_str())
        .with_temperature_alert(args.temperature_alert);

    info!(device_id = endpoint.device_id(), "publishing to {}", endpoint.as_str());

    publish(Controller::new(ReadingGenerator::from_entropy(), publisher)).await
}

async fn publish<T: Transport>(mut controller: Controller<T>) -> Result<()> {
    let e = controller.run().await;

    Err(anyhow::Error::from(e).context("failed to send message"))
}
