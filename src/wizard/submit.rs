use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;

use super::error::SubmissionError;
use super::payload::SubmissionPayload;

/// Whatever the endpoint chose to say about an accepted submission. Every field is optional
/// since the body may be empty or not JSON at all.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmissionReceipt {
    pub ok: Option<bool>,
    pub next: Option<String>,
}

impl SubmissionReceipt {
    /// Parses a successful response body; anything unreadable counts as an empty receipt.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(body).unwrap_or_default()
    }
}

pub async fn submit_lead(endpoint: &str, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(payload.to_form_body())
        .send()
        .await
        .map_err(|e| {
            log!("Network error:", e.to_string());
            SubmissionError::Transport(e.to_string())
        })?;

    log!("Response status:", response.status());
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log!("Could not read response body:", e.to_string());
            String::new()
        }
    };

    if response.ok() {
        let receipt = SubmissionReceipt::from_body(&body);
        log!("Success response:", format!("{:?}", receipt));
        Ok(receipt)
    } else {
        log!("Error response:", &body);
        Err(SubmissionError::status(response.status(), &body))
    }
}
