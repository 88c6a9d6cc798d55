use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config;

/// Everything that can end an upload attempt. Each variant is terminal:
/// the action makes a single best-effort attempt, and `main` converts the
/// variant into exit code 1.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("API key is required for upload.")]
    MissingApiKey,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Upload failed: could not read report {}: {source}", .path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload failed: report {} is not valid JSON: {source}", .path.display())]
    ParseReport {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Upload failed: {message}")]
    Rejected {
        status: StatusCode,
        message: String,
        html: bool,
    },

    #[error("Upload failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upload failed: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl UploadError {
    /// Remediation lines printed beneath the error message.
    pub fn hints(&self) -> Vec<String> {
        match self {
            UploadError::MissingApiKey => vec![
                format!(
                    "Set the {} environment variable or use the --api-key flag.",
                    config::API_KEY_ENV
                ),
                "Get an API key from https://getaiready.dev/dashboard".to_string(),
            ],
            UploadError::Rejected {
                status,
                message,
                html,
            } => {
                let mut hints = Vec::new();
                if *html {
                    hints.push(
                        "Note: received an HTML response. This often indicates a redirect \
                         (e.g. to a login page) or a server error."
                            .to_string(),
                    );
                    if message.contains("Redirecting") {
                        hints.push(
                            "Detected redirect. Check whether the API endpoint requires \
                             authentication or has changed."
                                .to_string(),
                        );
                    }
                }
                if *status == StatusCode::UNAUTHORIZED {
                    hints.push("Hint: your API key may be invalid or expired.".to_string());
                }
                hints
            }
            _ => Vec::new(),
        }
    }
}
