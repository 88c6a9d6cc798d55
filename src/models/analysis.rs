use serde::Deserialize;
use serde_json::Value;

/// Body of a successful upload response.
#[derive(Debug, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub analysis: Option<AnalysisSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub id: String,
    pub ai_score: f64,
}

impl UploadResponse {
    /// Tolerant conversion: a body of unexpected shape just means there are
    /// no analysis details to print.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
