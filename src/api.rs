use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::player::PlayerProfile;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("player tag is empty")]
    MissingTag,
    #[error("no api token configured (set CLANWELCOME_API_TOKEN)")]
    MissingToken,
    #[error("invalid request url")]
    Url(#[from] url::ParseError),
    #[error("http client setup failed")]
    Client(#[source] reqwest::Error),
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    #[error("player {0} not found")]
    NotFound(String),
    #[error("access denied (check token and allowed IP)")]
    Forbidden,
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("decode player payload")]
    Decode(#[source] serde_json::Error),
}

pub struct PlayerApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PlayerApi {
    pub fn new(cfg: &Config) -> Result<Self, ApiError> {
        let client = build_client(cfg.request_timeout)?;
        Ok(Self {
            client,
            base_url: cfg.api_base_url.clone(),
            token: cfg.api_token.clone(),
        })
    }

    pub fn get_player(&self, raw_tag: &str) -> Result<PlayerProfile, ApiError> {
        let tag = normalize_tag(raw_tag).ok_or(ApiError::MissingTag)?;
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        let url = player_url(&self.base_url, &tag)?;

        tracing::info!(tag = %tag, "fetching player profile");
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(ApiError::Transport)?;

        let status = response.status();
        check_status(status, &tag)?;
        let body = response.bytes().map_err(ApiError::Transport)?;
        tracing::debug!(tag = %tag, bytes = body.len(), "player payload received");
        serde_json::from_slice::<PlayerProfile>(&body).map_err(ApiError::Decode)
    }
}

fn build_client(timeout: Duration) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("clanwelcome/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::Client)
}

/// Canonical form of a player tag: uppercase, no whitespace, leading `#`.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .trim_start_matches('#')
        .to_uppercase();
    if cleaned.is_empty() {
        return None;
    }
    Some(format!("#{cleaned}"))
}

pub fn player_url(base_url: &str, tag: &str) -> Result<Url, ApiError> {
    let encoded = utf8_percent_encode(tag, NON_ALPHANUMERIC);
    let url = Url::parse(&format!("{}/players/{encoded}", base_url.trim_end_matches('/')))?;
    Ok(url)
}

fn check_status(status: StatusCode, tag: &str) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound(tag.to_string()))
    } else if status == StatusCode::FORBIDDEN {
        Err(ApiError::Forbidden)
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tag_adds_hash_and_uppercases() {
        assert_eq!(normalize_tag("289c0p8q8").as_deref(), Some("#289C0P8Q8"));
        assert_eq!(normalize_tag("  #289C 0P8Q8 ").as_deref(), Some("#289C0P8Q8"));
        assert_eq!(normalize_tag("##abc").as_deref(), Some("#ABC"));
    }

    #[test]
    fn normalize_tag_rejects_blank_input() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("   "), None);
        assert_eq!(normalize_tag("#"), None);
    }

    #[test]
    fn player_url_percent_encodes_hash() {
        let url = player_url("https://api.clashofclans.com/v1/", "#289C0P8Q8").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.clashofclans.com/v1/players/%23289C0P8Q8"
        );
    }

    #[test]
    fn status_mapping_covers_api_errors() {
        assert!(check_status(StatusCode::OK, "#A").is_ok());
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND, "#A"),
            Err(ApiError::NotFound(tag)) if tag == "#A"
        ));
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN, "#A"),
            Err(ApiError::Forbidden)
        ));
        assert!(matches!(
            check_status(StatusCode::SERVICE_UNAVAILABLE, "#A"),
            Err(ApiError::Status(code)) if code == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[test]
    fn get_player_without_token_fails_before_network() {
        let cfg = Config::default();
        let api = PlayerApi::new(&cfg).unwrap();
        assert!(matches!(api.get_player("#ABC"), Err(ApiError::MissingToken)));
        assert!(matches!(api.get_player("  "), Err(ApiError::MissingTag)));
    }
}
