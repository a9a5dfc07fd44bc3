use std::fmt;

use crate::reading::Reading;

pub const APP_PROPERTY_HEADER_PREFIX: &str = "iothub-app-";

pub const TEMPERATURE_ALERT_PROPERTY: &str = "temperatureAlert";

#[derive(Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub url: String,

    pub body: String,

    /// Sent verbatim as the `authorization` header.
    pub authorization: String,

    pub properties: Vec<(String, String)>,
}

impl OutgoingMessage {
    pub fn new(reading: &Reading, url: &str, auth_token: &str) -> Self {
        Self {
            url: url.to_string(),
            body: reading.to_json(),
            authorization: auth_token.to_string(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn property_headers(&self) -> impl Iterator<Item = (String, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (format!("{APP_PROPERTY_HEADER_PREFIX}{name}"), value.as_str()))
    }
}

impl fmt::Debug for OutgoingMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutgoingMessage")
            .field("url", &self.url)
            .field("body", &self.body)
            .field("authorization", &"<redacted>")
            .field("properties", &self.properties)
            .finish()
    }
}
