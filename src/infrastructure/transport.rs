use crate::domain::{ContactMessage, SubmissionTransport};
use serde::Deserialize;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:3000/contact";

const GENERIC_FAILURE: &str = "Failed to send message. Please try again later.";
const DEFAULT_CONFIRMATION: &str = "Message sent successfully! I'll get back to you soon.";

/// Wire shape shared by both contact backends: `{success, message?, error?}`,
/// with a non-2xx status on validation or backend failure.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

/// Blocking HTTP implementation of the submission transport. Runs on a
/// worker thread, never on the UI loop.
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_ENDPOINT)
    }
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmissionTransport for HttpTransport {
    fn deliver(&self, message: &ContactMessage) -> Result<String, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .map_err(|_| GENERIC_FAILURE.to_string())?;

        // The backend answers with the same JSON shape on success and
        // failure, so the body is authoritative over the status code.
        match response.json::<ApiResponse>() {
            Ok(body) if body.success => {
                Ok(body.message.unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string()))
            }
            Ok(body) => Err(body.error.unwrap_or_else(|| GENERIC_FAILURE.to_string())),
            Err(_) => Err(GENERIC_FAILURE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let transport = HttpTransport::default();
        assert_eq!(transport.endpoint(), DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn test_api_response_parses_both_outcomes() {
        let ok: ApiResponse =
            serde_json::from_str(r#"{"success":true,"message":"Message sent successfully"}"#)
                .unwrap();
        assert!(ok.success);
        assert_eq!(ok.message.as_deref(), Some("Message sent successfully"));
        assert!(ok.error.is_none());

        let err: ApiResponse =
            serde_json::from_str(r#"{"success":false,"error":"Spam detected"}"#).unwrap();
        assert!(!err.success);
        assert_eq!(err.error.as_deref(), Some("Spam detected"));
    }

    #[test]
    fn test_unreachable_endpoint_yields_generic_failure() {
        // Port 9 (discard) is a safe dead end for a connection attempt.
        let transport = HttpTransport::new("http://127.0.0.1:9/contact");
        let message = ContactMessage {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "0123456789".to_string(),
            website: String::new(),
        };
        assert_eq!(transport.deliver(&message), Err(GENERIC_FAILURE.to_string()));
    }
}
