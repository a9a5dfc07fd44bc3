use anyhow::{Result, bail};
use clap::Parser;
use iothub_telemetry_simulator::endpoint::Endpoint;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Sends simulated temperature and humidity readings to an IoT Hub device endpoint"
)]
pub struct Args {
    /// Fully resolved device events URL
    #[arg(long, env = "IOTHUB_DEVICE_URL", conflicts_with_all = ["host", "device_id"])]
    pub url: Option<String>,

    #[arg(long, env = "IOTHUB_HOST_NAME", requires = "device_id")]
    pub host: Option<String>,

    #[arg(long, env = "IOTHUB_DEVICE_ID", requires = "host")]
    pub device_id: Option<String>,

    /// Sent verbatim as the authorization header
    #[arg(long, env = "IOTHUB_DEVICE_SAS_TOKEN", hide_env_values = true)]
    pub sas_token: String,

    /// Attach a temperatureAlert application property to each message
    #[arg(long)]
    pub temperature_alert: bool,
}

impl Args {
    pub fn endpoint(&self) -> Result<Endpoint> {
        let endpoint = match (&self.url, &self.host, &self.device_id) {
            (Some(url), _, _) => Endpoint::parse(url)?,
            (None, Some(host), Some(device_id)) => Endpoint::new(host, device_id)?,
            _ => bail!("either --url or --host with --device-id is required"),
        };

        Ok(endpoint)
    }
}
