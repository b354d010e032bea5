use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Body shape of the agent's reply. The backend also sends bookkeeping
/// fields (timestamp, request counts) which are ignored here.
#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub answer: Option<String>,
    pub error: Option<String>,
}

impl AskResponse {
    /// `answer` wins when both fields are present. A backend-reported
    /// error is display text, not a transport failure, so it comes back
    /// through the same channel as a successful answer.
    pub fn into_display_text(self) -> Option<String> {
        self.answer.or(self.error)
    }
}

pub struct AgentClient {
    client: Client,
    endpoint: String,
}

impl AgentClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// One round trip: POST the question, return the text to display.
    /// Transport failures, non-2xx statuses, unparseable bodies and
    /// bodies with neither `answer` nor `error` all surface as errors.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let request = AskRequest { question };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("agent request failed: {}", response.status());
        }

        let body: AskResponse = response.json().await?;
        body.into_display_text()
            .ok_or_else(|| anyhow::anyhow!("agent reply had neither answer nor error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AskResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn answer_field_is_displayed_verbatim() {
        let text = parse(r#"{"answer": "Bail is...\nSee IPC."}"#).into_display_text();
        assert_eq!(text.as_deref(), Some("Bail is...\nSee IPC."));
    }

    #[test]
    fn error_field_is_the_fallback() {
        let text = parse(r#"{"error": "rate limited"}"#).into_display_text();
        assert_eq!(text.as_deref(), Some("rate limited"));
    }

    #[test]
    fn answer_takes_precedence_over_error() {
        let text = parse(r#"{"answer": "A", "error": "E"}"#).into_display_text();
        assert_eq!(text.as_deref(), Some("A"));
    }

    #[test]
    fn bookkeeping_fields_are_ignored() {
        let body = r#"{"user": "127.0.0.1", "question": "q", "answer": "A",
                       "timestamp": "2024-01-01T00:00:00", "requests_last_minute": 1}"#;
        assert_eq!(parse(body).into_display_text().as_deref(), Some("A"));
    }

    #[test]
    fn reply_without_either_field_has_nothing_to_display() {
        assert!(parse(r#"{"status": "ok"}"#).into_display_text().is_none());
    }
}
