//! Picks the JSON candidate out of a model reply and validates it as an [`Insight`].

use crate::core::insight::Insight;
use crate::error::InsightError;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json[ \t]*\r?\n(.*?)```").unwrap());

static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[\w+-]*[ \t]*\r?\n?(.*?)```").unwrap());

pub fn extract(raw: &str) -> Result<Insight, InsightError> {
    let candidate = candidate_text(raw).trim();

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| InsightError::MalformedResponse(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(InsightError::MalformedResponse(
            "expected a JSON object".into(),
        ));
    };

    validate(map)
}

fn candidate_text(raw: &str) -> &str {
    if let Some(inner) = fence_interior(&JSON_FENCE, raw) {
        log::debug!("Using ```json fenced block");
        return inner;
    }
    if let Some(inner) = fence_interior(&ANY_FENCE, raw) {
        log::debug!("Using untagged fenced block");
        return inner;
    }
    raw
}

fn fence_interior<'a>(re: &Regex, raw: &'a str) -> Option<&'a str> {
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn validate(map: Map<String, Value>) -> Result<Insight, InsightError> {
    let present = |name: &str| {
        map.get(name)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    };

    let missing: Vec<&'static str> = Insight::REQUIRED_FIELDS
        .into_iter()
        .filter(|name| !present(*name))
        .collect();

    if !missing.is_empty() {
        log::warn!("Model reply is missing fields: {missing:?}");
        return Err(InsightError::IncompleteResponse(missing));
    }

    serde_json::from_value(Value::Object(map))
        .map_err(|e| InsightError::MalformedResponse(e.to_string()))
}
