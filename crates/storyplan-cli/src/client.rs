use storyplan_core::idea::Idea;
use storyplan_core::options::Options;
use storyplan_core::selection::Selection;
use thiserror::Error;

// ---------------------------------------------------------------------------
// ClientError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connect failure, DNS, bad body).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status; `detail` is the
    /// response body text, or a generic message when the body is empty.
    #[error("request failed ({status}): {detail}")]
    Response { status: u16, detail: String },
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Thin client for the idea generation API. Single attempt per call;
/// retries and fallback policy live in [`crate::session::Session`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/options — the remote option sets.
    pub async fn fetch_options(&self) -> Result<Options, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/options", self.base_url))
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// POST /api/ideas — remote idea generation for the given selection.
    pub async fn generate(&self, selection: &Selection) -> Result<Idea, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/ideas", self.base_url))
            .json(selection)
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }
}

/// Map non-success statuses to `ClientError::Response`, carrying the
/// body text as detail.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let detail = if body.trim().is_empty() {
        "request failed".to_string()
    } else {
        body
    };
    Err(ClientError::Response { status, detail })
}
