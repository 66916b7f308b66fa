//! Scenario context and the step definitions that drive it
//!
//! Cucumber creates one [`ScenarioContext`] per scenario and hands it to
//! every matching step. The steps chain through it: the endpoint step
//! stores a URL, the request step turns that URL into a response, and
//! the status step checks the response.

use cucumber::{given, then, when, World};
use endpoint_core::{ClientConfig, HttpClient, HttpResponse, StepError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Registered step patterns, in the order a scenario uses them.
pub const STEP_PATTERNS: [(&str, &str); 3] = [
    ("Given", "I have the API endpoint \"<url>\""),
    ("When", "I send a GET request"),
    ("Then", "the response status code should be <status_code>"),
];

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ScenarioContext {
    url: Option<String>,
    response: Option<HttpResponse>,
    /// Built from the default configuration on first use when nothing was installed.
    client: Option<Arc<dyn HttpClient>>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self {
            url: None,
            response: None,
            client: None,
        }
    }

    pub fn with_client(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client: Some(client),
            ..Self::new()
        }
    }

    /// Replace the client used by later requests in this scenario.
    pub fn set_client(&mut self, client: Arc<dyn HttpClient>) {
        self.client = Some(client);
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Store `url` exactly as written, replacing any earlier endpoint.
    pub fn set_endpoint(&mut self, url: impl Into<String>) {
        let url = url.into();
        debug!(%url, "API endpoint set");
        self.url = Some(url);
    }

    /// GET the current endpoint and keep the response for later steps.
    ///
    /// A non-2xx status is a normal outcome; only a request that cannot
    /// complete is an error.
    #[instrument(skip(self), fields(url = self.url.as_deref()))]
    pub async fn send_get_request(&mut self) -> Result<(), StepError> {
        let url = self.url.clone().ok_or(StepError::MissingUrl)?;
        let response = self.client()?.get(&url).await?;

        info!(status = response.status(), "GET request completed");
        self.response = Some(response);
        Ok(())
    }

    pub fn assert_status_code(&self, expected: u16) -> Result<(), StepError> {
        let actual = self
            .response
            .as_ref()
            .ok_or(StepError::MissingResponse)?
            .status();

        if actual != expected {
            return Err(StepError::StatusMismatch { expected, actual });
        }
        Ok(())
    }

    fn client(&mut self) -> Result<Arc<dyn HttpClient>, StepError> {
        if let Some(client) = &self.client {
            return Ok(Arc::clone(client));
        }

        let client: Arc<dyn HttpClient> = Arc::new(ClientConfig::default().build_client()?);
        self.client = Some(Arc::clone(&client));
        Ok(client)
    }
}

impl Default for ScenarioContext {
    fn default() -> Self {
        Self::new()
    }
}

#[given(regex = r#"^I have the API endpoint "(.*)"$"#)]
async fn given_api_endpoint(ctx: &mut ScenarioContext, url: String) {
    ctx.set_endpoint(url);
}

#[when("I send a GET request")]
async fn when_send_get_request(ctx: &mut ScenarioContext) -> Result<(), StepError> {
    ctx.send_get_request().await
}

#[then(expr = "the response status code should be {int}")]
async fn then_status_code_should_be(
    ctx: &mut ScenarioContext,
    status_code: u16,
) -> Result<(), StepError> {
    ctx.assert_status_code(status_code)
}
