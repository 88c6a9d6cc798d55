use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::api::client::PlatformClient;
use crate::config;
use crate::error::UploadError;
use crate::models::report::{ReportDocument, UploadPayload};

pub async fn run(
    file: &Path,
    api_key: Option<&str>,
    repo_id: Option<&str>,
    server: Option<&str>,
) -> Result<(), UploadError> {
    let started = Instant::now();

    // 1. Resolve the report path and configuration
    let file_path = absolutize(file);
    let config = config::resolve_from_process(api_key, server);

    // 2. Validate before touching the network
    let Some(api_key) = config.api_key else {
        return Err(UploadError::MissingApiKey);
    };

    if !file_path.exists() {
        return Err(UploadError::FileNotFound(file_path));
    }

    println!("Uploading report to {}...", config.server_url);

    // 3. Read and parse the report
    println!("  Reading report from {}...", file_path.display());
    let report = ReportDocument::from_path(&file_path)?;
    println!("  Parsed report JSON.");

    // 4. One POST, no retries
    let payload = UploadPayload::new(report, repo_id);
    let client = PlatformClient::new(&config.server_url, &api_key)?;
    let result = client.upload_report(&payload).await?;

    // 5. Report the outcome
    let elapsed = started.elapsed().as_secs_f64();
    println!();
    println!("Upload successful! ({elapsed:.2}s)");
    println!("View results: {}/dashboard", config.server_url);

    if let Some(analysis) = &result.analysis {
        println!("  Analysis ID: {}", analysis.id);
        println!("  Score: {}/100", analysis.ai_score);
    }

    Ok(())
}

/// Resolve the report path against the current working directory so error
/// messages show where the file was actually looked for.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
