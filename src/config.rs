use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.clashofclans.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
    pub copied_flash: Duration,
    pub message_output_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw_url = env::var("CLANWELCOME_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let api_base_url = parse_base_url(&raw_url)?;
        let api_token = non_blank(env::var("CLANWELCOME_API_TOKEN").ok())
            .or_else(|| non_blank(env::var("COC_API_TOKEN").ok()));
        let message_output_path = env::var_os("CLANWELCOME_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("welcome_message.txt"));

        Ok(Self {
            api_base_url,
            api_token,
            message_output_path,
            ..Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            api_base_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            request_timeout: Duration::from_secs(10),
            copied_flash: Duration::from_secs(2),
            message_output_path: data_dir().join("welcome_message.txt"),
            log_dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    data_dir().join("logs")
}

fn data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let base = env::var_os("LOCALAPPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        return base.join("clanwelcome");
    }

    if let Some(xdg) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("clanwelcome");
    }
    let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    home.join(".local/share/clanwelcome")
}

fn parse_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).with_context(|| format!("invalid api url {trimmed:?}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("api url must be http(s): {trimmed}");
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
