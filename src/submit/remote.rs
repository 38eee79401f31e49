use reqwest::StatusCode;
use serde::Deserialize;

use super::error::SubmitError;
use crate::model::BookingDraft;

/// Body returned by the booking endpoint.
#[derive(Debug, Default, Deserialize)]
struct BookingResponse {
    message: Option<String>,
    error: Option<String>,
}

/// Posts drafts to a fixed booking endpoint.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteClient {
    /// Creates a client for `endpoint`. No request timeout is configured.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `draft` as JSON and returns the server's confirmation message.
    ///
    /// A single attempt is made; nothing is retried.
    pub async fn submit(&self, draft: &BookingDraft) -> Result<String, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

/// Maps an HTTP status and body to the operator-facing result.
///
/// Success shows the `message` field verbatim. Failure shows the `error`
/// field when the body carries one, otherwise a transport-level message
/// naming the status code.
pub(crate) fn interpret_response(status: StatusCode, body: &str) -> Result<String, SubmitError> {
    let parsed: BookingResponse = serde_json::from_str(body).unwrap_or_default();

    if status.is_success() {
        return Ok(parsed
            .message
            .unwrap_or_else(|| format!("Booking submitted ({status})")));
    }

    match parsed.error {
        Some(error) => Err(SubmitError::Server(error)),
        None => Err(SubmitError::Transport(format!(
            "request failed with status code {}",
            status.as_u16()
        ))),
    }
}

/// Returns a booking URL on a localhost port that was just released, so
/// connecting to it is refused.
#[cfg(test)]
pub(crate) fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/bookings")
}
