use quiz_draft_types::{QuizDocument, QuizSummary};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

/// Base URL of the storage service in the default deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Error type for calls to the storage service.
///
/// Both variants are terminal for the current attempt: nothing is
/// retried, and the caller keeps the draft so the author can try again.
/// Callers typically present both the same way - the distinction matters
/// for diagnostics, not for the author.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service answered with a non-success status.
    #[error("storage service rejected the request ({status})")]
    Rejected {
        /// The status the service answered with.
        status: StatusCode,
    },

    /// The request never completed (connection refused, DNS failure,
    /// unreadable response, ...).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Check if the service itself turned the request down, as opposed to
    /// the request not getting through.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Client for the quiz storage service.
///
/// Wraps a `reqwest::Client`, so it is cheap to clone and share. The
/// client performs no de-duplication: concurrent submissions proceed
/// independently, and guarding against double-submission is the calling
/// layer's decision.
#[derive(Debug, Clone)]
pub struct QuizClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for QuizClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl QuizClient {
    /// Create a client against the given base URL, without a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing `reqwest::Client`, e.g. to
    /// share its connection pool with the rest of an application.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a serialized quiz for storage.
    ///
    /// Sends `POST {base}/create` with the JSON-encoded document. Any
    /// success status counts as stored; the response body is not read.
    pub async fn submit(&self, document: &QuizDocument) -> Result<(), SubmitError> {
        let url = format!("{}/create", self.base_url);
        debug!(%url, title = %document.title, "submitting quiz");
        let response = self.client.post(&url).json(document).send().await?;
        expect_success(response.status())
    }

    /// Fetch the identifiers and titles of all stored quizzes.
    ///
    /// Sends `GET {base}/quizlist` and parses the JSON summary array.
    pub async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, SubmitError> {
        let url = format!("{}/quizlist", self.base_url);
        debug!(%url, "listing quizzes");
        let response = self.client.get(&url).send().await?;
        expect_success(response.status())?;
        let summaries = response.json().await?;
        Ok(summaries)
    }

    /// Delete a stored quiz by its identifier.
    ///
    /// Sends `DELETE {base}/quiz/{id}`.
    pub async fn delete_quiz(&self, id: &str) -> Result<(), SubmitError> {
        let url = format!("{}/quiz/{id}", self.base_url);
        debug!(%url, "deleting quiz");
        let response = self.client.delete(&url).send().await?;
        expect_success(response.status())
    }
}

fn expect_success(status: StatusCode) -> Result<(), SubmitError> {
    if status.is_success() {
        Ok(())
    } else {
        warn!(%status, "storage service rejected the request");
        Err(SubmitError::Rejected { status })
    }
}
