use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

/// Output formats the relay accepts; everything else is rejected before any
/// provider call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Pdf,
    Docx,
    Xlsx,
}

impl TargetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Pdf => "pdf",
            TargetFormat::Docx => "docx",
            TargetFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pdf" => Ok(TargetFormat::Pdf),
            "docx" => Ok(TargetFormat::Docx),
            "xlsx" => Ok(TargetFormat::Xlsx),
            _ => Err("target must be pdf|docx|xlsx".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub bytes: Bytes,
    pub file_name: String,
    pub mime_type: String,
}

impl SourceFile {
    /// Download name for the converted result. The source extension is kept and
    /// the target extension appended, so `report.docx` converted to pdf becomes
    /// `report.docx.pdf`.
    pub fn download_name(&self, target: TargetFormat) -> String {
        format!("{}.{}", self.file_name, target)
    }
}
