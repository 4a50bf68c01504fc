//! Wire protocol types for tagline generation and history.

mod tone;
mod validation;

pub use tone::{Tone, UnknownTone};
pub use validation::ValidationError;

use serde::{Deserialize, Deserializer, Serialize};

/// Smallest number of taglines a request may ask for.
pub const MIN_COUNT: u32 = 1;
/// Largest number of taglines a request may ask for.
pub const MAX_COUNT: u32 = 10;
/// Count used when a request omits it.
pub const DEFAULT_COUNT: u32 = 3;

/// Request body for the generate endpoint.
///
/// `product` and `numTaglines` are accepted as aliases so older form
/// clients keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Product name; the subject of generation.
    #[serde(alias = "product")]
    pub name: String,
    /// Free-form product description.
    pub description: String,
    /// Target audience.
    pub audience: String,
    /// Requested voice.
    #[serde(default)]
    pub tone: Tone,
    /// Number of taglines to ask the model for.
    #[serde(
        default = "default_count",
        alias = "numTaglines",
        deserialize_with = "deserialize_count"
    )]
    pub count: u32,
}

impl GenerateRequest {
    /// Metadata copied onto every record produced by this request.
    pub fn metadata(&self) -> ProductMetadata {
        ProductMetadata {
            name: self.name.clone(),
            description: self.description.clone(),
            audience: self.audience.clone(),
            tone: self.tone,
        }
    }
}

fn default_count() -> u32 {
    DEFAULT_COUNT
}

/// Form inputs post numbers as strings, so accept both shapes.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountRepr {
        Number(u32),
        Text(String),
    }

    match CountRepr::deserialize(deserializer)? {
        CountRepr::Number(count) => Ok(count),
        CountRepr::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("count must be a positive integer (got {text:?})"))
        }),
    }
}

/// Product metadata shared by all taglines of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub name: String,
    pub description: String,
    pub audience: String,
    pub tone: Tone,
}

/// One persisted tagline together with the request metadata that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaglineRecord {
    /// Store-assigned, monotonically increasing id.
    pub id: i64,
    pub product_name: String,
    pub description: String,
    pub audience: String,
    pub tone: String,
    pub tagline: String,
}

/// Successful generate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub taglines: Vec<String>,
}

/// History response, newest record first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<TaglineRecord>,
}

/// Error body returned for any failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::{GenerateRequest, TaglineRecord, Tone};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_applies_defaults_for_tone_and_count() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "name": "Foo",
            "description": "d",
            "audience": "a",
        }))
        .expect("request");
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.count, 3);
    }

    #[test]
    fn request_accepts_form_aliases_and_string_count() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "product": "Foo",
            "description": "d",
            "audience": "a",
            "tone": "luxury",
            "numTaglines": "5",
        }))
        .expect("request");
        assert_eq!(request.name, "Foo");
        assert_eq!(request.tone, Tone::Luxury);
        assert_eq!(request.count, 5);
    }

    #[test]
    fn request_rejects_unknown_tone() {
        let result = serde_json::from_value::<GenerateRequest>(json!({
            "name": "Foo",
            "description": "d",
            "audience": "a",
            "tone": "sarcastic",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn request_requires_description_and_audience() {
        let result = serde_json::from_value::<GenerateRequest>(json!({ "name": "Foo" }));
        assert!(result.is_err());
    }

    #[test]
    fn record_uses_product_name_on_the_wire() {
        let record = TaglineRecord {
            id: 7,
            product_name: "Foo".to_string(),
            description: "d".to_string(),
            audience: "a".to_string(),
            tone: "funny".to_string(),
            tagline: "Catch the Foo".to_string(),
        };
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["productName"], json!("Foo"));
        assert_eq!(value["id"], json!(7));
    }
}
