use anyhow::{Context, Result};

const SERVICE: &str = "aiready";

pub fn store_api_key(api_key: &str) -> Result<()> {
    keyring::Entry::new(SERVICE, "api_key")
        .context("Failed to create keyring entry for api_key")?
        .set_password(api_key)
        .context("Failed to store API key in keyring")?;

    Ok(())
}

/// Best-effort keychain lookup. A missing entry or an unavailable backend
/// resolves to None so flag/env resolution decides how to fail.
pub fn stored_api_key() -> Option<String> {
    keyring::Entry::new(SERVICE, "api_key")
        .ok()?
        .get_password()
        .ok()
}
