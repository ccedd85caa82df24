use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Please describe what is troubling you.")]
    EmptyQuery,

    #[error("Missing API key. Set GROQ_API_KEY to your Groq API key.")]
    Configuration,

    #[error("Request Error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status; carries the backend's own message when it sent one.
    #[error("{0}")]
    Backend(String),

    #[error("No response from Groq.")]
    EmptyResponse,

    #[error("Could not parse the response from Groq: {0}")]
    MalformedResponse(String),

    #[error("Response from Groq is missing required field(s): {}", .0.join(", "))]
    IncompleteResponse(Vec<&'static str>),
}
