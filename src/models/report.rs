use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::UploadError;

/// A parsed analysis report. The schema is opaque to this tool; the only
/// field it ever looks at is the optional `repository.repoId` identifier.
#[derive(Debug)]
pub struct ReportDocument {
    value: Value,
}

impl ReportDocument {
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let text = fs::read_to_string(path).map_err(|source| UploadError::ReadReport {
            path: path.to_path_buf(),
            source,
        })?;

        let value = serde_json::from_str(&text).map_err(|source| UploadError::ParseReport {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { value })
    }

    /// The repository id embedded in the report, when present. Absent
    /// intermediate fields resolve to None rather than an error.
    pub fn embedded_repo_id(&self) -> Option<&str> {
        self.value
            .pointer("/repository/repoId")
            .and_then(Value::as_str)
    }
}

/// Request body for the upload endpoint. `data` carries the report exactly
/// as parsed from disk; `repoId` is omitted when no id is known.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<String>,
}

impl UploadPayload {
    /// An explicit repo id wins over the one embedded in the report.
    pub fn new(report: ReportDocument, repo_id_override: Option<&str>) -> Self {
        let repo_id = repo_id_override
            .map(str::to_string)
            .or_else(|| report.embedded_repo_id().map(str::to_string));

        Self {
            data: report.value,
            repo_id,
        }
    }
}
