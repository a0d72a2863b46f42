use async_trait::async_trait;
use redline_config::ServerConfig;
use redline_core::{
    Error, PreviewResponse, RedactionForm, Result, SearchResponse, UpdateRequest, UpdateResponse,
};
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;

use crate::backend::RedactionBackend;

/// Backend talking to the redaction server over HTTP
pub struct HttpBackend {
    client: reqwest::Client,
    server: ServerConfig,
}

impl HttpBackend {
    pub fn new(server: ServerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(server.user_agent.clone())
            .timeout(std::time::Duration::from_secs(server.timeout_secs))
            .build()
            .map_err(|e| Error::Other(anyhow::anyhow!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, server })
    }

    /// Decode a JSON body whatever the status code; the server reports
    /// domain errors in the payload.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();
        if !status.is_success() {
            tracing::warn!("HTTP {} from {}", status.as_u16(), url);
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("HTTP {} from {}: {}", status.as_u16(), url, e)))
    }
}

fn multipart_form(form: &RedactionForm) -> Form {
    form.fields()
        .iter()
        .fold(Form::new(), |acc, (name, value)| {
            acc.text(name.clone(), value.clone())
        })
}

#[async_trait]
impl RedactionBackend for HttpBackend {
    async fn preview(&self, form: &RedactionForm) -> Result<PreviewResponse> {
        let url = self.server.endpoint(&self.server.preview_path);
        tracing::debug!(fields = form.len(), "POST {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(multipart_form(form))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to reach {}: {}", url, e)))?;

        Self::decode(response).await
    }

    async fn update_redaction(&self, request: &UpdateRequest) -> Result<UpdateResponse> {
        let url = self.server.endpoint(&self.server.update_path);
        tracing::debug!(term = %request.term, action = %request.action, "POST {}", url);

        // `.json` sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to reach {}: {}", url, e)))?;

        Self::decode(response).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.server.endpoint(&self.server.search_path);
        tracing::debug!(query, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(Form::new().text("query", query.to_string()))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to reach {}: {}", url, e)))?;

        Self::decode(response).await
    }
}
