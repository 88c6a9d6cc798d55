use std::env;

use crate::credentials;

pub const DEFAULT_SERVER_URL: &str = "https://dev.platform.getaiready.dev";
pub const API_KEY_ENV: &str = "AIREADY_API_KEY";
pub const SERVER_ENV: &str = "AIREADY_SERVER";

/// Fully resolved settings for one upload invocation. `api_key` stays
/// optional here; the upload command decides how to fail when it is absent.
#[derive(Debug)]
pub struct UploadConfig {
    pub server_url: String,
    pub api_key: Option<String>,
}

/// Resolve configuration from explicit flags, an environment lookup, and a
/// stored-key lookup, in that order. Both lookups are injected so resolution
/// can be tested without touching process globals or the keychain.
///
/// Server URL: flag, then `AIREADY_SERVER`, then the default.
/// API key: flag, then `AIREADY_API_KEY`, then the keychain entry.
/// Empty values count as absent.
pub fn resolve<E, S>(
    api_key_flag: Option<&str>,
    server_flag: Option<&str>,
    env: E,
    stored_api_key: S,
) -> UploadConfig
where
    E: Fn(&str) -> Option<String>,
    S: FnOnce() -> Option<String>,
{
    let server_url = server_flag
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| env(SERVER_ENV).and_then(non_empty))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let api_key = api_key_flag
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| env(API_KEY_ENV).and_then(non_empty))
        .or_else(|| stored_api_key().and_then(non_empty));

    UploadConfig {
        server_url,
        api_key,
    }
}

/// Resolution against the real process environment and keychain.
pub fn resolve_from_process(api_key_flag: Option<&str>, server_flag: Option<&str>) -> UploadConfig {
    resolve(
        api_key_flag,
        server_flag,
        |name| env::var(name).ok(),
        credentials::stored_api_key,
    )
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{API_KEY_ENV, DEFAULT_SERVER_URL, SERVER_ENV, resolve};

    #[test]
    fn explicit_flags_win_over_environment() {
        let mut env = HashMap::new();
        env.insert(API_KEY_ENV.to_string(), "env-key".to_string());
        env.insert(SERVER_ENV.to_string(), "https://env.example".to_string());

        let config = resolve(
            Some("flag-key"),
            Some("https://flag.example"),
            |name| env.get(name).cloned(),
            || Some("keychain-key".to_string()),
        );

        assert_eq!(config.server_url, "https://flag.example");
        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
    }

    #[test]
    fn environment_wins_over_stored_key_and_default_server() {
        let mut env = HashMap::new();
        env.insert(API_KEY_ENV.to_string(), "env-key".to_string());
        env.insert(SERVER_ENV.to_string(), "https://env.example".to_string());

        let config = resolve(
            None,
            None,
            |name| env.get(name).cloned(),
            || Some("keychain-key".to_string()),
        );

        assert_eq!(config.server_url, "https://env.example");
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn stored_key_and_default_server_apply_when_nothing_else_is_set() {
        let config = resolve(None, None, |_| None, || Some("keychain-key".to_string()));

        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.api_key.as_deref(), Some("keychain-key"));
    }

    #[test]
    fn api_key_resolves_to_none_when_every_source_is_absent() {
        let config = resolve(None, None, |_| None, || None);

        assert!(config.api_key.is_none());
    }

    #[test]
    fn empty_values_count_as_absent() {
        let mut env = HashMap::new();
        env.insert(API_KEY_ENV.to_string(), String::new());

        let config = resolve(Some(""), None, |name| env.get(name).cloned(), || None);

        assert!(config.api_key.is_none());
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn trailing_slash_is_trimmed_from_the_server_url() {
        let config = resolve(None, Some("https://flag.example/"), |_| None, || None);

        assert_eq!(config.server_url, "https://flag.example");
    }
}
