//! Waitlist submission transport
//!
//! One POST with a JSON body, one JSON response. `WaitlistTransport` is the
//! seam between the form controller and the network; the browser build uses
//! `GlooTransport`.

use serde::{Deserialize, Serialize};

use super::payload::WaitlistPayload;

/// Shown when neither the server nor the failure carries a message
pub const FALLBACK_ERROR_MESSAGE: &str = "Please try again later.";

/// Response body of the waitlist endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl WaitlistResponse {
    /// Turn a parsed response into the submission outcome
    pub fn into_result(self) -> Result<(), SubmitError> {
        if self.success {
            Ok(())
        } else {
            Err(SubmitError::Rejected(self.error.unwrap_or_default()))
        }
    }
}

/// Why a submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The server answered but reported failure
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON
    #[error("{0}")]
    Decode(String),

    /// The payload could not be serialized
    #[error("{0}")]
    Encode(String),
}

impl SubmitError {
    /// Text shown in the error display
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Decode(err.to_string())
    }
}

/// Sends an assembled payload to the waitlist endpoint
#[allow(async_fn_in_trait)]
pub trait WaitlistTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &WaitlistPayload,
    ) -> Result<WaitlistResponse, SubmitError>;

    /// Post and fold the response into a single outcome
    async fn submit(&self, endpoint: &str, payload: &WaitlistPayload) -> Result<(), SubmitError> {
        self.post_json(endpoint, payload).await?.into_result()
    }
}

/// Browser `fetch` transport
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl WaitlistTransport for GlooTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &WaitlistPayload,
    ) -> Result<WaitlistResponse, SubmitError> {
        use gloo_net::http::Request;

        let request = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        // Error statuses still carry the `{success, error}` body.
        let text = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success() {
        let response: WaitlistResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.into_result(), Ok(()));
    }

    #[test]
    fn test_response_failure_with_message() {
        let response: WaitlistResponse =
            serde_json::from_str(r#"{"success": false, "error": "dup"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err, SubmitError::Rejected("dup".to_string()));
        assert_eq!(err.user_message(), "dup");
    }

    #[test]
    fn test_response_missing_success_is_failure() {
        let response: WaitlistResponse = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        let err: SubmitError = serde_json::from_str::<WaitlistResponse>("<html>502</html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, SubmitError::Decode(_)));
        assert!(!err.user_message().is_empty());
    }

    #[test]
    fn test_user_message_fallback() {
        assert_eq!(
            SubmitError::Transport(String::new()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            SubmitError::Transport("Failed to fetch".to_string()).user_message(),
            "Failed to fetch"
        );
    }
}
