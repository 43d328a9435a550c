use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::infra::config::BackendConfig;

/// JSON body posted to the chat endpoint.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: &'a str,
}

/// JSON body expected back; only the reply text matters.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

/// Errors at the HTTP boundary. The caller never retries; any of these
/// collapses into the fallback reply.
#[derive(Debug)]
pub enum ReplySourceError {
    /// Connection failure, timeout, or any other transport problem.
    Unreachable(reqwest::Error),
    /// The endpoint answered with a non-success status.
    BadStatus(u16),
    /// The response body was not the expected JSON shape.
    InvalidBody(reqwest::Error),
    /// The HTTP client itself could not be constructed.
    ClientBuild(reqwest::Error),
}

impl std::fmt::Display for ReplySourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(source) => write!(f, "chat endpoint unreachable: {source}"),
            Self::BadStatus(status) => write!(f, "chat endpoint answered with status {status}"),
            Self::InvalidBody(source) => write!(f, "chat response body is invalid: {source}"),
            Self::ClientBuild(source) => write!(f, "http client construction failed: {source}"),
        }
    }
}

impl std::error::Error for ReplySourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreachable(source) | Self::InvalidBody(source) | Self::ClientBuild(source) => {
                Some(source)
            }
            Self::BadStatus(_) => None,
        }
    }
}

/// Fetches one bot reply for one prompt. Implementations make a single
/// best-effort attempt.
pub trait ReplySource {
    fn fetch_reply(&self, message: &str, session_id: &str) -> Result<String, ReplySourceError>;
}

/// Blocking HTTP implementation of `ReplySource`. Lives on the reply
/// worker thread, never on the UI thread.
#[derive(Debug)]
pub struct HttpReplyClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpReplyClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ReplySourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(ReplySourceError::ClientBuild)?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }
}

impl ReplySource for HttpReplyClient {
    fn fetch_reply(&self, message: &str, session_id: &str) -> Result<String, ReplySourceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest {
                message,
                session_id,
            })
            .send()
            .map_err(ReplySourceError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplySourceError::BadStatus(status.as_u16()));
        }

        let body: ChatResponse = response.json().map_err(ReplySourceError::InvalidBody)?;
        Ok(body.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_the_wire_field_names() {
        let request = ChatRequest {
            message: "plan a campaign",
            session_id: "session_123456",
        };

        let value = serde_json::to_value(&request).expect("request must serialize");

        assert_eq!(value["message"], "plan a campaign");
        assert_eq!(value["session_id"], "session_123456");
        assert_eq!(value.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn response_body_needs_only_the_reply_field() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"reply": "done", "extra": 1}"#).expect("must deserialize");

        assert_eq!(body.reply, "done");
    }

    #[test]
    fn bad_status_error_carries_the_code() {
        let error = ReplySourceError::BadStatus(503);

        assert!(error.to_string().contains("503"));
    }
}
