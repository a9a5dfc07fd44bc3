mod error;
mod message;
mod outcome;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use error::*;
pub use message::*;
pub use outcome::*;
pub use transport::*;

use std::fmt;

use tracing::{debug, info, warn};

use crate::reading::Reading;

/// Serializes readings and sends them to one fixed endpoint with one fixed credential.
pub struct Publisher<T> {
    transport: T,

    url: String,

    auth_token: String,

    temperature_alert: bool,
}

impl<T: Transport> Publisher<T> {
    pub fn new(transport: T, url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
            auth_token: auth_token.into(),
            temperature_alert: false,
        }
    }

    /// Attach the `temperatureAlert` application property to every message.
    pub fn with_temperature_alert(mut self, enabled: bool) -> Self {
        self.temperature_alert = enabled;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn message(&self, reading: &Reading) -> OutgoingMessage {
        let message = OutgoingMessage::new(reading, &self.url, &self.auth_token);
        if !self.temperature_alert {
            return message;
        }

        let alert = if reading.temperature_alert() {
            "true"
        } else {
            "false"
        };
        message.with_property(TEMPERATURE_ALERT_PROPERTY, alert)
    }

    pub async fn publish(&self, reading: &Reading) -> Result<u16, PublishError> {
        let message = self.message(reading);

        info!("Sending message: {}", message.body);

        let status = match self.transport.send(&message).await {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "send failed");
                return Err(e);
            }
        };

        match Outcome::classify(status) {
            Outcome::Accepted(_) => info!("IoT Hub responded to message with status: {status}"),
            Outcome::Rejected(_) => warn!("IoT Hub responded to message with status: {status}"),
        }

        Ok(status)
    }
}

impl<T: fmt::Debug> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("transport", &self.transport)
            .field("url", &self.url)
            .field("temperature_alert", &self.temperature_alert)
            .finish_non_exhaustive()
    }
}
