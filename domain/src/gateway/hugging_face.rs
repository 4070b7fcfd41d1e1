//! Hugging Face inference API client for emotion classification.
//!
//! Targets a multi-label text-classification model
//! (`j-hartmann/emotion-english-distilroberta-base` by default) and returns
//! the full fixed emotion vocabulary with per-label scores.

use async_trait::async_trait;
use log::*;
use serde::Serialize;

use speech_ai::traits::classification;
use speech_ai::types::classification::LabelScore;
use speech_ai::Error;

use super::transport_error;

/// Default classifier model, matching the vocabulary in
/// [`speech_ai::types::classification::EMOTION_LABELS`].
pub const DEFAULT_EMOTION_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// Hugging Face inference API client
pub struct HuggingFaceClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl HuggingFaceClient {
    /// Create a new client with the given API key, base URL, and model id
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Result<Self, Error> {
        let mut headers = reqwest::header::HeaderMap::new();

        let mut header_value =
            reqwest::header::HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                warn!("Failed to create auth header: {:?}", e);
                Error::Configuration("Invalid API key format".to_string())
            })?;
        header_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, header_value);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            model: model.to_string(),
        })
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    /// Score `text` against the model's emotion vocabulary.
    ///
    /// The inference API wraps multi-label output in an outer list (one
    /// entry per input); this client sends a single input and unwraps the
    /// first entry.
    pub async fn classify_text(&self, text: &str) -> Result<Vec<LabelScore>, Error> {
        let response = self
            .client
            .post(self.model_url())
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to call Hugging Face inference: {:?}", e);
                transport_error(e)
            })?;

        if response.status().is_success() {
            let batches: Vec<Vec<LabelScore>> = response.json().await.map_err(|e| {
                warn!("Failed to parse Hugging Face response: {:?}", e);
                Error::Deserialization("Invalid response from Hugging Face".to_string())
            })?;
            let scores = batches.into_iter().next().unwrap_or_default();
            debug!("Hugging Face returned {} emotion labels", scores.len());
            Ok(scores)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Hugging Face API ({}): {}", status, error_text);
            Err(Error::Provider(error_text))
        }
    }
}

#[async_trait]
impl classification::Provider for HuggingFaceClient {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>, Error> {
        self.classify_text(text).await
    }

    fn provider_id(&self) -> &str {
        "hugging_face"
    }

    /// A minimal inference call doubles as the credential probe: 401/403
    /// mean bad credentials, while 200 (and 503, model cold-starting) mean
    /// the key was accepted.
    async fn verify_credentials(&self) -> Result<bool, Error> {
        let response = self
            .client
            .post(self.model_url())
            .json(&ClassifyRequest { inputs: "ok" })
            .send()
            .await
            .map_err(transport_error)?;

        Ok(!matches!(
            response.status(),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN
        ))
    }
}
