use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderName, HeaderValue},
};

use crate::publisher::{OutgoingMessage, PublishError};

/// Carries one message to the endpoint and reports the HTTP status it answered with.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<u16, PublishError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, message: &OutgoingMessage) -> Result<u16, PublishError> {
        (**self).send(message).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, PublishError> {
        // No request timeout: a send waits for the transport's own defaults.
        let client = Client::builder().build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, message: &OutgoingMessage) -> Result<u16, PublishError> {
        let mut authorization = HeaderValue::from_str(&message.authorization)
            .map_err(|e| PublishError::Transport(format!("invalid authorization header: {e}")))?;
        authorization.set_sensitive(true);

        let mut request = self
            .client
            .post(&message.url)
            .header(AUTHORIZATION, authorization)
            .body(message.body.clone());

        for (name, value) in message.property_headers() {
            let name = HeaderName::try_from(name.as_str()).map_err(|e| {
                PublishError::Transport(format!("invalid property name {name}: {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                PublishError::Transport(format!("invalid property value {value}: {e}"))
            })?;
            request = request.header(name, value);
        }

        let response = request.send().await?;

        Ok(response.status().as_u16())
    }
}
