use anyhow::anyhow;
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::api::client::PlatformClient;
use crate::error::UploadError;
use crate::models::analysis::UploadResponse;
use crate::models::report::UploadPayload;

impl PlatformClient {
    /// Send one report to the platform. A non-2xx response comes back as
    /// `UploadError::Rejected`; no retry is attempted.
    pub async fn upload_report(
        &self,
        payload: &UploadPayload,
    ) -> Result<UploadResponse, UploadError> {
        let url = format!("{}/api/analysis/upload", self.base_url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;

        interpret_response(status, content_type.as_deref(), &body)
    }
}

/// Turn one HTTP response into the upload result. The server normally
/// answers JSON; anything else (proxy error pages, login redirects) is
/// wrapped as an error body so the caller sees the raw text.
pub(crate) fn interpret_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> Result<UploadResponse, UploadError> {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    let is_html = content_type.is_some_and(|ct| ct.contains("text/html"));

    let parsed: Value = if is_json {
        serde_json::from_str(body)
            .map_err(|e| UploadError::Unexpected(anyhow!("Server returned malformed JSON: {e}")))?
    } else if body.is_empty() {
        json!({ "error": status_text(status) })
    } else {
        json!({ "error": body })
    };

    if !status.is_success() {
        let message = parsed
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| status_text(status));

        return Err(UploadError::Rejected {
            status,
            message,
            html: is_html,
        });
    }

    Ok(UploadResponse::from_value(parsed))
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}
