use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs, time::Duration};

// Runtime client settings (endpoints, sign-in registration, timeouts).

pub const DEFAULT_API_URL: &str = "https://api.codesquad.kr/onban";
pub const DEFAULT_AUTH_URL: &str = "http://127.0.0.1:3002";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(1500);
const DEFAULT_CONFIG_FILE: &str = "sidedish.toml";

const ENV_API_URL: &str = "SIDEDISH_API_URL";
const ENV_AUTH_URL: &str = "SIDEDISH_AUTH_URL";
const ENV_CLIENT_ID: &str = "SIDEDISH_CLIENT_ID";
const ENV_TIMEOUT_MS: &str = "SIDEDISH_TIMEOUT_MS";
const ENV_CONFIG_PATH: &str = "SIDEDISH_CONFIG";

/// Optional TOML layer; every key may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub auth_url: Option<String>,
    pub client_id: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the menu endpoints.
    pub api_url: String,
    /// Base URL of the login endpoints.
    pub auth_url: String,
    /// Sign-in provider client id; without it login cannot start.
    pub client_id: Option<String>,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Environment first, then the config file, then defaults; resolved per key.
    pub fn load() -> Self {
        let file = load_config_file(&config_file_path()).unwrap_or_default();
        Self::resolve(|key| env::var(key).ok(), file)
    }

    pub fn resolve(env: impl Fn(&str) -> Option<String>, file: ConfigFile) -> Self {
        let api_url = url_setting(env(ENV_API_URL), file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let auth_url = url_setting(env(ENV_AUTH_URL), file.auth_url)
            .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());
        let client_id = text_setting(env(ENV_CLIENT_ID), file.client_id);
        let request_timeout = env(ENV_TIMEOUT_MS)
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|millis| *millis > 0)
            .or(file.timeout_ms.filter(|millis| *millis > 0))
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self {
            api_url,
            auth_url,
            client_id,
            request_timeout,
        }
    }
}

fn text_setting(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn url_setting(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    text_setting(primary, fallback).map(|url| url.trim_end_matches('/').to_string())
}

pub fn config_file_path() -> PathBuf {
    env::var(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn load_config_file(path: &Path) -> Option<ConfigFile> {
    if !path.exists() {
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                None
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read config file");
            None
        }
    }
}
