use std::error::Error as _;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    /// The round trip could not be completed. Request construction failures land here too.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("publish loop already stopped")]
    Stopped,
}

impl From<reqwest::Error> for PublishError {
    fn from(e: reqwest::Error) -> Self {
        let mut description = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }

        PublishError::Transport(description)
    }
}
