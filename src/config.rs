use crate::error::InsightError;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Value shipped in sample `.env` files; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GROQ_API_KEY_HERE";

#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; missing or unparseable values keep their defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_key: lookup("GROQ_API_KEY"),
            base_url: lookup("GROQ_BASE_URL").unwrap_or(defaults.base_url),
            model: lookup("GROQ_MODEL").unwrap_or(defaults.model),
            temperature: parse_or(
                "GROQ_TEMPERATURE",
                lookup("GROQ_TEMPERATURE"),
                defaults.temperature,
                |t: &f64| t.is_finite() && *t >= 0.0,
            ),
            timeout_secs: parse_or(
                "GROQ_TIMEOUT_SECS",
                lookup("GROQ_TIMEOUT_SECS"),
                defaults.timeout_secs,
                |secs: &u64| *secs > 0,
            ),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The usable API key, or `Configuration` if it is absent, blank or the placeholder.
    pub fn credential(&self) -> Result<&str, InsightError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
            _ => Err(InsightError::Configuration),
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn parse_or<T: std::str::FromStr + Copy>(
    key: &str,
    raw: Option<String>,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T {
    let Some(s) = raw else {
        return default;
    };
    match s.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            log::warn!("Ignoring invalid {key}={s:?}");
            default
        }
    }
}
