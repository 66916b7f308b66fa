//! HTTP client seam
//!
//! Step handlers only see [`HttpClient`]; production runs use
//! [`ReqwestClient`], tests can substitute their own implementation.

use crate::error::{Result, StepError};
use crate::response::HttpResponse;
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{debug, instrument};

#[async_trait]
pub trait HttpClient: Debug + Send + Sync {
    /// Issue a single GET request and return the response, whatever its status.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|source| StepError::transport(url, source))?;

        let response = HttpResponse::from(&response);
        debug!(status = response.status(), final_url = response.url(), "GET completed");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ErrorKind;
    use std::net::TcpListener;

    fn client() -> ReqwestClient {
        ClientConfig::default().build_client().unwrap()
    }

    fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/status/200")
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let url = refused_url();
        let err = client().get(&url).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        match err {
            StepError::Transport { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("Expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_url_is_a_transport_error() {
        let err = client().get("not a url").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
