use anyhow::Result;

use crate::credentials;

pub fn run(api_key: &str) -> Result<()> {
    credentials::store_api_key(api_key)?;
    println!("API key stored successfully.");
    Ok(())
}
