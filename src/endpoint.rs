use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

pub const API_VERSION: &str = "2018-06-30";

const HTTPS_DEFAULT_PORT: u16 = 443;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("host name must not be empty")]
    EmptyHost,

    #[error("not a bare host name: {0}")]
    InvalidHost(String),

    #[error("device id must not be empty")]
    EmptyDeviceId,

    #[error("device id is not valid UTF-8 after decoding: {0}")]
    InvalidDeviceId(String),

    #[error("not a device events path: {0}")]
    NotDeviceEvents(String),

    #[error("missing api-version query: {0}")]
    MissingApiVersion(String),
}

/// Device-to-cloud events endpoint of a single device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,

    device_id: String,
}

impl Endpoint {
    pub fn new(host: &str, device_id: &str) -> Result<Self, EndpointError> {
        if host.is_empty() {
            return Err(EndpointError::EmptyHost);
        }
        if device_id.is_empty() {
            return Err(EndpointError::EmptyDeviceId);
        }

        let mut url = Url::parse(&format!("https://{host}/"))?;
        if !is_bare_host(&url, host) {
            return Err(EndpointError::InvalidHost(host.to_string()));
        }

        url.path_segments_mut()
            .map_err(|_| EndpointError::InvalidHost(host.to_string()))?
            .clear()
            .extend(["devices", device_id, "messages", "events"]);
        url.set_query(Some(&format!("api-version={API_VERSION}")));

        Ok(Self {
            url,
            device_id: device_id.to_string(),
        })
    }

    /// Accepts an already resolved URL. The scheme is not checked here.
    pub fn parse(s: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(s)?;

        let encoded_id = {
            let segments: Vec<&str> = url
                .path_segments()
                .map(|s| s.collect())
                .unwrap_or_default();
            match segments.as_slice() {
                ["devices", id, "messages", "events"] if !id.is_empty() => id.to_string(),
                _ => return Err(EndpointError::NotDeviceEvents(url.path().to_string())),
            }
        };
        let device_id = percent_decode_str(&encoded_id)
            .decode_utf8()
            .map_err(|_| EndpointError::InvalidDeviceId(encoded_id.clone()))?
            .into_owned();

        if !url.query_pairs().any(|(k, v)| k == "api-version" && !v.is_empty()) {
            return Err(EndpointError::MissingApiVersion(url.to_string()));
        }

        Ok(Self { url, device_id })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }
}

/// The parsed URL must be made of `host` alone: no userinfo, path, query or fragment.
fn is_bare_host(url: &Url, host: &str) -> bool {
    if !url.username().is_empty()
        || url.password().is_some()
        || url.path() != "/"
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return false;
    }

    let Some(host_str) = url.host_str() else {
        return false;
    };
    let authority = match url.port() {
        Some(port) => format!("{host_str}:{port}"),
        None => host_str.to_string(),
    };

    host.eq_ignore_ascii_case(&authority)
        || host.eq_ignore_ascii_case(&format!("{authority}:{HTTPS_DEFAULT_PORT}"))
}
