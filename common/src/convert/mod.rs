use std::sync::Arc;

use tracing::info;

use crate::error::RelayError;
use crate::models::{SourceFile, TargetFormat};
use crate::provider::IConvertProvider;

/// Result of one conversion: the download name and the provider's streaming
/// response, handed to the caller without buffering the body.
pub struct ConvertedFile {
    pub file_name: String,
    pub download: reqwest::Response,
}

pub struct ConvertService {
    pub provider: Arc<dyn IConvertProvider>,
    pub client: reqwest::Client,
}

impl ConvertService {
    pub fn new(provider: Arc<dyn IConvertProvider>, client: reqwest::Client) -> Self {
        ConvertService { provider, client }
    }

    /// Runs the whole remote workflow for one request: create job, upload the
    /// source through the import form, wait for completion, open the export
    /// download. Strictly sequential; the first failure aborts the request and
    /// the remote job is left to the provider.
    #[tracing::instrument(skip(self, source), fields(file_name = %source.file_name))]
    pub async fn convert(&self, source: SourceFile, target: TargetFormat) -> Result<ConvertedFile, RelayError> {
        let job = self.provider.create_job(target).await?;
        info!("created conversion job '{}'", &job.id);

        let form = job
            .upload_form()
            .ok_or(RelayError::Protocol("import task returned no upload form"))?;
        self.upload(form.url.clone(), form.parameters.clone(), &source).await?;
        info!("uploaded source file for job '{}'", &job.id);

        let job = self.provider.wait_for_job(&job.id).await?;
        let file = job
            .exported_file()
            .ok_or(RelayError::Protocol("no exported file was obtained"))?;

        let download = self.client.get(&file.url).send().await?.error_for_status()?;
        info!("streaming exported file for job '{}'", &job.id);
        Ok(ConvertedFile {
            file_name: source.download_name(target),
            download,
        })
    }

    async fn upload(
        &self,
        url: String,
        parameters: std::collections::HashMap<String, String>,
        source: &SourceFile,
    ) -> Result<(), RelayError> {
        // Presigned form parameters are forwarded untouched, then the file part.
        let mut form = reqwest::multipart::Form::new();
        for (key, value) in parameters {
            form = form.text(key, value);
        }
        let part = reqwest::multipart::Part::stream(reqwest::Body::from(source.bytes.clone()))
            .file_name(source.file_name.clone())
            .mime_str(&source.mime_type)?;
        form = form.part("file", part);

        self.client.post(url).multipart(form).send().await?.error_for_status()?;
        Ok(())
    }
}
