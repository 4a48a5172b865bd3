use crate::config::Config;
use crate::core::data::{Envelope, Prompt};
use crate::core::traits::IdeaSource;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use std::time::Duration;

/// Posts prompts to the generation endpoint as a one-field multipart form
pub struct HttpIdeaSource {
    client: Client,
    endpoint: String,
}

impl HttpIdeaSource {
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(concat!("ideascout/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.general.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IdeaSource for HttpIdeaSource {
    async fn generate_ideas(&self, prompt: &Prompt) -> AppResult<Envelope> {
        let form = Form::new().text("prompt", prompt.as_str().to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        // the body is read as JSON whatever the status code
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;
        tracing::debug!(%status, bytes = body.len(), "generation endpoint responded");

        Envelope::from_json(&body)
    }
}
