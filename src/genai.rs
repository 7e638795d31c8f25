//! Generative Model Catalog Client
//!
//! One-shot enumeration of available model identifiers from the remote
//! catalog, filtered to models that can serve the tracker's content
//! generation features. No retry, no caching, no rate-limit handling.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::GenAiConfig;

/// Capability a model must report before the tracker can use it
pub const GENERATE_CAPABILITY: &str = "generateContent";

/// Prefix the catalog puts in front of every model identifier
const MODEL_NAME_PREFIX: &str = "models/";

/// Client for the model catalog endpoint
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration
    pub fn new(config: &GenAiConfig) -> Result<Self, CatalogError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(CatalogError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch the full model list
    ///
    /// The catalog reports failures two ways: a non-2xx status, or a
    /// top-level `error` object inside an otherwise well-formed body. Both
    /// map to [`CatalogError::Api`]; a body that is not JSON at all is a
    /// transport failure and surfaces as [`CatalogError::Http`].
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, CatalogError> {
        let url = format!("{}/v1beta/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else if e.is_connect() {
                    CatalogError::Unavailable
                } else {
                    CatalogError::Http(e)
                }
            })?;

        let body: ListModelsResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(CatalogError::Api {
                message: error.message,
            });
        }

        Ok(body.models)
    }
}

/// One catalog entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Fully qualified identifier, e.g. `models/gemini-pro`
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Capability set reported by the catalog
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether this model's capability set includes `method`
    pub fn supports(&self, method: &str) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == method)
    }

    /// Identifier with the fixed catalog prefix stripped
    pub fn short_name(&self) -> &str {
        self.name
            .strip_prefix(MODEL_NAME_PREFIX)
            .unwrap_or(&self.name)
    }
}

/// Filter a model list to entries usable for content generation
pub fn generation_capable(models: &[ModelInfo]) -> Vec<&ModelInfo> {
    models
        .iter()
        .filter(|m| m.supports(GENERATE_CAPABILITY))
        .collect()
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Errors that can occur when talking to the model catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No API key in the configuration
    #[error("model catalog API key not configured")]
    NotConfigured,

    /// Connection-level failure
    #[error("model catalog unavailable")]
    Unavailable,

    /// Request exceeded the client timeout
    #[error("request timeout")]
    Timeout,

    /// Any other transport failure, including malformed response bodies
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with an error object
    #[error("catalog error: {message}")]
    Api { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, methods: &[&str]) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            display_name: None,
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = CatalogClient::new(&GenAiConfig::default());
        assert!(matches!(result, Err(CatalogError::NotConfigured)));
    }

    #[test]
    fn test_short_name_strips_prefix() {
        let m = model("models/gemini-pro", &[]);
        assert_eq!(m.short_name(), "gemini-pro");

        let bare = model("gemini-pro", &[]);
        assert_eq!(bare.short_name(), "gemini-pro");
    }

    #[test]
    fn test_generation_capable_filters_mixed_sets() {
        let models = vec![
            model("models/gemini-pro", &["generateContent", "countTokens"]),
            model("models/embedding-001", &["embedContent"]),
            model("models/gemini-pro-vision", &["generateContent"]),
            model("models/aqa", &[]),
        ];

        let capable = generation_capable(&models);
        let names: Vec<&str> = capable.iter().map(|m| m.short_name()).collect();
        assert_eq!(names, vec!["gemini-pro", "gemini-pro-vision"]);
    }

    #[test]
    fn test_list_response_decodes_models() {
        let body = r#"{
            "models": [
                {"name": "models/gemini-pro",
                 "displayName": "Gemini Pro",
                 "supportedGenerationMethods": ["generateContent"]}
            ]
        }"#;
        let parsed: ListModelsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.error.is_none());
        assert_eq!(parsed.models.len(), 1);
        assert_eq!(parsed.models[0].display_name.as_deref(), Some("Gemini Pro"));
        assert!(parsed.models[0].supports(GENERATE_CAPABILITY));
    }

    #[test]
    fn test_list_response_decodes_top_level_error() {
        let body = r#"{"error": {"message": "API key not valid", "code": 400}}"#;
        let parsed: ListModelsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.models.is_empty());
        assert_eq!(parsed.error.unwrap().message, "API key not valid");
    }
}
