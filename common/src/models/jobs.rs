use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const IMPORT_TASK: &str = "import";
pub const EXPORT_URL_OPERATION: &str = "export/url";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Waiting,
    Processing,
    Finished,
    Error,
}

/// Response envelope of the provider's job endpoints.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JobEnvelope {
    pub data: JobModel,
}

/// Read-only view of a provider job. The provider owns the job; the relay only
/// creates it and polls it, one job per conversion request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JobModel {
    pub id: String,
    #[serde(default)]
    pub tasks: Vec<TaskModel>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TaskModel {
    pub name: String,
    pub operation: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TaskResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<UploadForm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<ExportFile>>,
}

/// Presigned upload form returned by the import task. The parameters are
/// opaque to the relay and must be forwarded verbatim.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadForm {
    pub url: String,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub url: String,
}

impl JobModel {
    /// The import task's presigned form, if the provider returned the expected
    /// shape.
    pub fn upload_form(&self) -> Option<&UploadForm> {
        self.tasks
            .iter()
            .find(|task| task.name == IMPORT_TASK)
            .and_then(|task| task.result.as_ref())
            .and_then(|result| result.form.as_ref())
    }

    /// First output file of a finished export-url task, if any.
    pub fn exported_file(&self) -> Option<&ExportFile> {
        self.tasks
            .iter()
            .find(|task| task.operation == EXPORT_URL_OPERATION && task.status == TaskStatus::Finished)
            .and_then(|task| task.result.as_ref())
            .and_then(|result| result.files.as_ref())
            .and_then(|files| files.first())
    }
}
