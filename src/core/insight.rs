use crate::error::InsightError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user's statement of their problem. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Whitespace-only text counts as empty, but accepted text is kept verbatim.
    pub fn new(text: impl Into<String>) -> Result<Self, InsightError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InsightError::EmptyQuery);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "One verse of the Bhagavad Gita applied to the user's problem.")]
pub struct Insight {
    #[schemars(description = "The Sanskrit text of the specific verse.")]
    pub shloka: String,

    #[schemars(description = "Citation in the form 'Chapter X, Verse Y'.")]
    pub reference: String,

    #[schemars(description = "The English translation of the verse.")]
    pub translation: String,

    #[schemars(description = "A compassionate, deep explanation of how this applies to the user's situation.")]
    pub wisdom: String,

    #[schemars(description = "3 clear, simple, practical steps the user can take today.")]
    pub actionable_advice: String,
}

impl Insight {
    pub const REQUIRED_FIELDS: [&'static str; 5] = [
        "shloka",
        "reference",
        "translation",
        "wisdom",
        "actionable_advice",
    ];
}
