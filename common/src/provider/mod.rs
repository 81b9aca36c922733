use serde_json::json;

use crate::error::RelayError;
use crate::models::{JobEnvelope, JobModel, TargetFormat};
use crate::util::state::RelaySettings;

/// Narrow view of the conversion provider: create a job, wait for it. A test
/// double can stand in for the network-backed client.
#[async_trait::async_trait]
pub trait IConvertProvider: Send + Sync {
    async fn create_job(&self, target: TargetFormat) -> Result<JobModel, RelayError>;
    async fn wait_for_job(&self, job_id: &str) -> Result<JobModel, RelayError>;
}

pub struct CloudConvertClient {
    api_uri: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl CloudConvertClient {
    pub fn new(settings: &RelaySettings, client: reqwest::Client) -> Self {
        CloudConvertClient {
            api_uri: settings.api_uri.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            client,
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl IConvertProvider for CloudConvertClient {
    #[tracing::instrument(skip(self))]
    async fn create_job(&self, target: TargetFormat) -> Result<JobModel, RelayError> {
        let body = json!({
            "tasks": {
                "import": { "operation": "import/upload" },
                "convert": { "operation": "convert", "input": "import", "output_format": target.as_str() },
                "export": { "operation": "export/url", "input": "convert" }
            }
        });
        let response = self
            .authorized(self.client.post(format!("{}/jobs", self.api_uri)))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let envelope: JobEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    #[tracing::instrument(skip(self))]
    async fn wait_for_job(&self, job_id: &str) -> Result<JobModel, RelayError> {
        let response = self
            .authorized(self.client.get(format!("{}/jobs/{}/wait", self.api_uri, job_id)))
            .send()
            .await?
            .error_for_status()?;
        let envelope: JobEnvelope = response.json().await?;
        Ok(envelope.data)
    }
}
