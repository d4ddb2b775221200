//! Backend response shapes.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Default JSON field carrying the storyboard text.
pub const DEFAULT_RESULT_FIELD: &str = "storyboard";

/// Text shown when a JSON success body carries no usable storyboard.
pub const DEFAULT_RESULT_FALLBACK: &str = "Analysis complete";

/// How a successful `/analyze` body becomes display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Body is shown verbatim (the backend streams back `storyboard.md`)
    #[default]
    Text,
    /// Body is a JSON object; one field is shown
    Json {
        /// Field holding the storyboard text
        field: String,
        /// Shown when the field is absent, empty, zero, or not text
        fallback: String,
    },
}

impl ResponseFormat {
    /// JSON interpretation with the default field and fallback.
    pub fn json() -> Self {
        Self::Json {
            field: DEFAULT_RESULT_FIELD.to_string(),
            fallback: DEFAULT_RESULT_FALLBACK.to_string(),
        }
    }

    /// Turn a success body into display text.
    ///
    /// In JSON mode a body that does not parse, or parses to `null`, is an
    /// error. A parsed body without a usable field yields the fallback.
    pub fn extract(&self, body: &str) -> ModelResult<String> {
        match self {
            ResponseFormat::Text => Ok(body.to_string()),
            ResponseFormat::Json { field, fallback } => {
                let value: serde_json::Value = serde_json::from_str(body)
                    .map_err(|e| ModelError::MalformedBody(e.to_string()))?;
                if value.is_null() {
                    return Err(ModelError::MalformedBody("body is null".to_string()));
                }
                Ok(value
                    .get(field.as_str())
                    .and_then(display_text)
                    .unwrap_or_else(|| fallback.clone()))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Text => "text",
            ResponseFormat::Json { .. } => "json",
        }
    }
}

// Non-empty strings and non-zero numbers are shown; everything else,
// including `true`, arrays and objects, falls back.
fn display_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
        serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

impl FromStr for ResponseFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" | "markdown" => Ok(Self::Text),
            "json" => Ok(Self::json()),
            other => Err(ModelError::InvalidResponseFormat(other.to_string())),
        }
    }
}

/// Health check response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
    /// Per-service status, e.g. `scene_detection: operational`
    #[serde(default)]
    pub services: HashMap<String, String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" || self.status == "ok"
    }

    /// Names of services not reporting `operational`, sorted.
    pub fn degraded_services(&self) -> Vec<&str> {
        let mut degraded: Vec<&str> = self
            .services
            .iter()
            .filter(|(_, status)| status.as_str() != "operational")
            .map(|(name, _)| name.as_str())
            .collect();
        degraded.sort_unstable();
        degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_verbatim() {
        let body = "# Storyboard\n\n## Scene 1\n  - Description: a cat\n";
        assert_eq!(ResponseFormat::Text.extract(body).unwrap(), body);
        assert_eq!(ResponseFormat::Text.extract("").unwrap(), "");
    }

    #[test]
    fn test_json_field() {
        let format = ResponseFormat::json();
        assert_eq!(
            format.extract(r#"{"storyboard": "Storyboard ready"}"#).unwrap(),
            "Storyboard ready"
        );
        assert_eq!(format.extract(r#"{"storyboard": 3}"#).unwrap(), "3");
        assert_eq!(format.extract(r#"{"storyboard": 2.5}"#).unwrap(), "2.5");
    }

    #[test]
    fn test_json_fallbacks() {
        let format = ResponseFormat::json();
        for body in [
            r#"{"status": "ok"}"#,
            r#"{"storyboard": ""}"#,
            r#"{"storyboard": null}"#,
            r#"{"storyboard": 0}"#,
            r#"{"storyboard": false}"#,
            r#"{"storyboard": {"scenes": []}}"#,
            r#"[1, 2]"#,
            r#""just a string""#,
        ] {
            assert_eq!(format.extract(body).unwrap(), DEFAULT_RESULT_FALLBACK, "body {}", body);
        }
    }

    #[test]
    fn test_json_unparseable_or_null_body_is_error() {
        let format = ResponseFormat::json();
        for body in ["# Storyboard\n\n## Scene 1\n", "", "null", "{\"storyboard\":"] {
            let err = format.extract(body).unwrap_err();
            assert!(matches!(err, ModelError::MalformedBody(_)), "body {:?}", body);
        }
    }

    #[test]
    fn test_custom_field() {
        let format = ResponseFormat::Json {
            field: "markdown".to_string(),
            fallback: "done".to_string(),
        };
        assert_eq!(format.extract(r#"{"markdown": "x"}"#).unwrap(), "x");
        assert_eq!(format.extract(r#"{"storyboard": "x"}"#).unwrap(), "done");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("TEXT".parse::<ResponseFormat>().unwrap(), ResponseFormat::Text);
        assert_eq!("json".parse::<ResponseFormat>().unwrap(), ResponseFormat::json());
        assert!("xml".parse::<ResponseFormat>().is_err());
    }

    #[test]
    fn test_health_response() {
        let health: HealthResponse = serde_json::from_str(
            r#"{
                "status": "healthy",
                "version": "1.0.0",
                "services": {
                    "scene_detection": "operational",
                    "ai_description": "degraded",
                    "storage": "operational"
                }
            }"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version.as_deref(), Some("1.0.0"));
        assert_eq!(health.degraded_services(), vec!["ai_description"]);
    }
}
