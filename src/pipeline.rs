use crate::ai::client::GroqClient;
use crate::ai::prompts;
use crate::config::Config;
use crate::core::insight::{Insight, Query};
use crate::error::InsightError;

/// Query in, one verse of guidance out. Holds no state between calls.
pub struct InsightPipeline {
    client: GroqClient,
}

impl InsightPipeline {
    pub fn new(config: Config) -> Self {
        Self { client: GroqClient::new(config) }
    }

    pub async fn ask(&self, query: &str) -> Result<Insight, InsightError> {
        let query = Query::new(query)?;
        let prompt = prompts::build(query);

        log::info!("🙏 Seeking guidance ({} chars)", prompt.query.chars().count());
        let insight = self.client.fetch(&prompt).await.inspect_err(|e| {
            log::warn!("Guidance failed: {e}");
        })?;
        log::info!("📜 Found {}", insight.reference);

        Ok(insight)
    }
}
