use super::extract::extract;
use super::prompts::Prompt;
use crate::config::Config;
use crate::core::insight::Insight;
use crate::error::InsightError;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::time::Duration;

/// Client for an OpenAI-compatible chat completion endpoint (Groq by default).
///
/// Every call to [`GroqClient::fetch`] issues exactly one request.
pub struct GroqClient {
    client: reqwest::Client,
    config: Config,
}

impl GroqClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    pub async fn fetch(&self, prompt: &Prompt) -> Result<Insight, InsightError> {
        let api_key = self.config.credential()?;
        let content = self.complete(api_key, prompt).await?;
        extract(&content)
    }

    async fn complete(&self, api_key: &str, prompt: &Prompt) -> Result<String, InsightError> {
        let payload = json!({
            "messages": [
                { "role": "system", "content": prompt.instruction },
                { "role": "user", "content": prompt.query }
            ],
            "model": self.config.model,
            "temperature": self.config.temperature
        });

        log::debug!("POST {} (model {})", self.config.completions_url(), self.config.model);

        let res = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await.unwrap_or_default();
            log::error!("API Error {status}: {err_text}");
            return Err(InsightError::Backend(backend_message(status, &err_text)));
        }

        let text = res.text().await?;

        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        body["choices"][0]["message"]["content"]
            .as_str()
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .ok_or(InsightError::EmptyResponse)
    }
}

fn backend_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("API Error: {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_prefers_error_body() {
        let body = r#"{"error":{"message":"rate limited","type":"tokens"}}"#;
        assert_eq!(backend_message(StatusCode::TOO_MANY_REQUESTS, body), "rate limited");
    }

    #[test]
    fn backend_message_falls_back_to_status() {
        assert_eq!(backend_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"), "API Error: 502");
        assert_eq!(backend_message(StatusCode::UNAUTHORIZED, r#"{"detail":"nope"}"#), "API Error: 401");
        assert_eq!(backend_message(StatusCode::FORBIDDEN, r#"{"error":{"message":""}}"#), "API Error: 403");
    }
}
