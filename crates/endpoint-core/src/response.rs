//! Response types

/// The parts of an HTTP response that scenarios can assert on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    url: String,
}

impl HttpResponse {
    pub fn new(status: u16, url: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Final URL of the response, after any redirects were followed.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<&reqwest::Response> for HttpResponse {
    fn from(response: &reqwest::Response) -> Self {
        Self::new(response.status().as_u16(), response.url().as_str())
    }
}
