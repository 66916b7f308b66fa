//! In-memory [`HttpClient`] that replays a canned outcome.
//!
//! Useful for exercising step handlers without a network.

use crate::client::HttpClient;
use crate::error::{Result, StepError};
use crate::response::HttpResponse;
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Debug)]
pub struct ReplayClient {
    /// `None` makes every request fail as unreachable.
    status: Option<u16>,
    requests: Mutex<Vec<String>>,
}

impl ReplayClient {
    /// Answer every GET with `status`.
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every GET with a transport error.
    pub fn unreachable() -> Self {
        Self {
            status: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpClient for ReplayClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().push(url.to_string());
        match self.status {
            Some(status) => Ok(HttpResponse::new(status, url)),
            None => Err(StepError::transport(url, "connection refused")),
        }
    }
}
