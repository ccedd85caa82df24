use super::schema_utils;
use crate::core::insight::{Insight, Query};
use std::sync::LazyLock;

pub const GUIDE_PROMPT: &str = r#"
You are a wise, compassionate spiritual guide embodying the wisdom of the Bhagavad Gita (Lord Krishna).
The user will present a life problem or doubt.

INSTRUCTIONS:
1. Select the ONE most relevant Shloka from the Bhagavad Gita that addresses this specific problem.
2. You must respond in STRICT JSON format: a single object with exactly the fields
   "shloka", "reference", "translation", "wisdom" and "actionable_advice", all strings.
3. Do not add any conversational text outside the JSON object.
"#;

static INSTRUCTION: LazyLock<String> = LazyLock::new(|| {
    let schema = schema_utils::schema_text::<Insight>().unwrap_or_else(|e| {
        log::warn!("Could not render Insight schema: {e}");
        String::new()
    });
    format!("{}\nREQUIRED OUTPUT SCHEMA:\n{}", GUIDE_PROMPT, schema)
});

/// The system instruction paired with one user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub instruction: &'static str,
    pub query: String,
}

pub fn build(query: Query) -> Prompt {
    Prompt {
        instruction: INSTRUCTION.as_str(),
        query: query.into_inner(),
    }
}
