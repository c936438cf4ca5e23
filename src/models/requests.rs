use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to recommend careers
///
/// Every field is optional. Bodies are parsed fail-open: anything that is not
/// a JSON object, fields of the wrong type and non-string list entries all
/// degrade to empty values instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub goal: String,
}

impl RecommendRequest {
    /// Parse a raw request body
    pub fn from_json_bytes(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::debug!("Request body is not JSON, treating as empty: {}", e);
                Self::default()
            }
        }
    }

    /// Pull the known fields out of an arbitrary JSON value
    pub fn from_value(value: &Value) -> Self {
        Self {
            interests: string_list(value.get("interests")),
            strengths: string_list(value.get("strengths")),
            goal: value
                .get("goal")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
