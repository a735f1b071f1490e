use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::EmbeddingSettings;
use crate::core::embedding::{embed_answers, mean_pool};
use crate::core::{InvalidInputError, QUESTION_COUNT};

/// Errors that can occur while generating embeddings
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Embedding API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Source of answer embeddings
pub enum EmbeddingProvider {
    /// Deterministic in-process feature hashing
    Local,
    /// OpenAI-compatible embeddings endpoint
    Remote(RemoteEmbedder),
}

impl EmbeddingProvider {
    pub fn from_settings(settings: &EmbeddingSettings) -> Result<Self, EmbeddingError> {
        match settings.provider.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => {
                let endpoint = settings.endpoint.clone().ok_or_else(|| {
                    EmbeddingError::Configuration("embedding.endpoint is required for the remote provider".into())
                })?;

                Ok(Self::Remote(RemoteEmbedder::new(
                    endpoint,
                    settings.api_key.clone(),
                    settings.model.clone(),
                    Duration::from_secs(settings.timeout_secs),
                )?))
            }
            other => Err(EmbeddingError::Configuration(format!(
                "unknown embedding provider: {}",
                other
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote(_) => "remote",
        }
    }

    /// Embed one user's answers into a single vector
    pub async fn embed(&self, answers: &[String]) -> Result<Vec<f32>, EmbeddingError> {
        match self {
            Self::Local => Ok(embed_answers(answers)?),
            Self::Remote(remote) => remote.embed(answers).await,
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
    #[serde(default)]
    index: Option<usize>,
}

/// Client for a remote embeddings API
///
/// Sends all answers in one request, one input per answer, and mean-pools
/// the returned vectors.
pub struct RemoteEmbedder {
    endpoint: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl RemoteEmbedder {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, EmbeddingError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            api_key,
            model,
            client,
        })
    }

    pub async fn embed(&self, answers: &[String]) -> Result<Vec<f32>, EmbeddingError> {
        if answers.len() != QUESTION_COUNT {
            return Err(InvalidInputError::wrong_length(answers.len()).into());
        }

        tracing::debug!("Requesting {} embeddings from {}", answers.len(), self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(&EmbeddingsRequest {
            model: &self.model,
            input: answers,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Embedding request failed: {} - {}", status, body);
            return Err(EmbeddingError::ApiError(format!(
                "Failed to generate embeddings: {}",
                status
            )));
        }

        let mut parsed: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(format!("Failed to parse embeddings: {}", e)))?;

        if parsed.data.len() != answers.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                answers.len(),
                parsed.data.len()
            )));
        }

        parsed.data.sort_by_key(|d| d.index);
        let vectors: Vec<Vec<f32>> = parsed.data.into_iter().map(|d| d.embedding).collect();

        let dim = vectors[0].len();
        if dim == 0 || vectors.iter().any(|v| v.len() != dim) {
            return Err(EmbeddingError::InvalidResponse(
                "embeddings have inconsistent dimensions".into(),
            ));
        }

        Ok(mean_pool(&vectors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EMBEDDING_DIM;

    fn answers() -> Vec<String> {
        (0..QUESTION_COUNT).map(|i| format!("answer {}", i)).collect()
    }

    fn settings(provider: &str, endpoint: Option<&str>) -> EmbeddingSettings {
        EmbeddingSettings {
            provider: provider.to_string(),
            endpoint: endpoint.map(str::to_string),
            api_key: None,
            model: "test-model".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_from_settings() {
        assert_eq!(
            EmbeddingProvider::from_settings(&settings("LOCAL", None)).unwrap().name(),
            "local"
        );
        assert!(matches!(
            EmbeddingProvider::from_settings(&settings("remote", None)),
            Err(EmbeddingError::Configuration(_))
        ));
        assert!(matches!(
            EmbeddingProvider::from_settings(&settings("magic", None)),
            Err(EmbeddingError::Configuration(_))
        ));
    }

    #[test]
    fn test_local_provider() {
        let provider = EmbeddingProvider::Local;
        let first = tokio_test::block_on(provider.embed(&answers())).unwrap();
        let second = tokio_test::block_on(provider.embed(&answers())).unwrap();

        assert_eq!(first.len(), EMBEDDING_DIM);
        assert_eq!(first, second);
        assert!(matches!(
            tokio_test::block_on(provider.embed(&answers()[..3].to_vec())),
            Err(EmbeddingError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_mean_pools_in_index_order() {
        let mut server = mockito::Server::new_async().await;

        // Returned out of order; index decides placement
        let data: Vec<serde_json::Value> = (0..QUESTION_COUNT)
            .rev()
            .map(|i| serde_json::json!({ "index": i, "embedding": [i as f32, 1.0] }))
            .collect();

        let mock = server
            .mock("POST", "/v1/embeddings")
            .match_header("authorization", "Bearer secret")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({ "model": "test-model" }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "data": data }).to_string())
            .create_async()
            .await;

        let embedder = RemoteEmbedder::new(
            format!("{}/v1/embeddings", server.url()),
            Some("secret".to_string()),
            "test-model".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let vector = embedder.embed(&answers()).await.unwrap();

        mock.assert_async().await;
        // mean of 0..8 is 3.5
        assert_eq!(vector, vec![3.5, 1.0]);
    }

    #[tokio::test]
    async fn test_remote_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/embeddings")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let embedder = RemoteEmbedder::new(
            format!("{}/embeddings", server.url()),
            None,
            "test-model".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert!(matches!(
            embedder.embed(&answers()).await,
            Err(EmbeddingError::ApiError(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_wrong_count() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/embeddings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": [{"embedding": [1.0]}]}"#)
            .create_async()
            .await;

        let embedder = RemoteEmbedder::new(
            format!("{}/embeddings", server.url()),
            None,
            "test-model".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert!(matches!(
            embedder.embed(&answers()).await,
            Err(EmbeddingError::InvalidResponse(_))
        ));
    }
}
