//! Client configuration

use crate::client::ReqwestClient;
use crate::error::{Result, StepError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client settings shared by every scenario of a run.
///
/// The defaults match `reqwest`'s own: no request timeout, no connect
/// timeout, and the standard redirect policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Total time allowed for a request, in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Time allowed to establish the connection, in milliseconds.
    pub connect_timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    pub fn build_client(&self) -> Result<ReqwestClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|source| StepError::ClientSetup { source })?;
        Ok(ReqwestClient::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_json_gives_defaults() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(config.timeout().is_none());
        assert!(config.connect_timeout().is_none());
    }

    #[test]
    fn timeouts_are_milliseconds() {
        let config =
            ClientConfig::from_json(r#"{"timeout_ms": 1500, "connect_timeout_ms": 250}"#).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.connect_timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ClientConfig::from_json(r#"{"retries": 3}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Setup);
        assert!(err.to_string().contains("retries"));
    }

    #[test]
    fn builds_client_with_timeouts() {
        let config = ClientConfig {
            timeout_ms: Some(1000),
            connect_timeout_ms: Some(100),
        };
        assert!(config.build_client().is_ok());
    }
}
