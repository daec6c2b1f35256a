//! Configuration management for the Spotify artist client.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials and endpoint URLs are
//! read here once and handed to the client as an explicit [`ApiConfig`] at
//! construction time; the client itself never performs ambient lookups.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs, timeouts)

use std::{env, path::PathBuf, time::Duration};

/// Default base URL for Spotify Web API data endpoints.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default URL of the OAuth token endpoint (client-credentials exchange).
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default bound on any single outbound HTTP call.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Default time-to-live for cached query responses, in seconds.
pub const DEFAULT_QUERY_TTL: i64 = 60;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the file under the platform-specific local data directory:
/// - Linux: `~/.local/share/sparcli/.env`
/// - macOS: `~/Library/Application Support/sparcli/.env`
/// - Windows: `%LOCALAPPDATA%/sparcli/.env`
///
/// A missing file is not an error; configuration may come entirely from the
/// process environment. Directory creation or parse failures are reported as
/// an error string.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sparcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify API client ID, or an empty string if unset.
///
/// Read from `SPOTIFY_API_CLIENT_ID`. Emptiness is deliberately not a panic:
/// missing credentials are a runtime condition the token manager reports as
/// [`crate::spotify::ApiError::MissingCredentials`].
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify API secret key, or an empty string if unset.
///
/// Read from `SPOTIFY_API_SECRET_KEY`.
///
/// # Security Note
///
/// The secret key must never appear in logs or diagnostics output.
pub fn spotify_secret_key() -> String {
    env::var("SPOTIFY_API_SECRET_KEY").unwrap_or_default()
}

/// Returns the Spotify Web API base URL.
///
/// Read from `SPOTIFY_API_URL`, defaulting to [`DEFAULT_API_URL`].
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth token exchange URL.
///
/// Read from `SPOTIFY_API_TOKEN_URL`, defaulting to [`DEFAULT_TOKEN_URL`].
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// A client ID / secret key pair for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// True when either half of the pair is empty.
    ///
    /// An incomplete pair is a permanent failure for all downstream
    /// operations until reconfigured.
    pub fn is_incomplete(&self) -> bool {
        self.client_id.is_empty() || self.secret_key.is_empty()
    }

    /// Checks the registration format Spotify hands out: both values are
    /// 32-character alphanumeric strings.
    ///
    /// The client does not enforce this; it only lets the CLI warn early
    /// about credentials that cannot possibly work.
    pub fn looks_valid(&self) -> bool {
        fn ok(s: &str) -> bool {
            s.len() == 32 && s.chars().all(|c| c.is_ascii_alphanumeric())
        }
        ok(&self.client_id) && ok(&self.secret_key)
    }
}

/// Everything the client needs to talk to the API, supplied at construction.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
    pub http_timeout: Duration,
}

impl ApiConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Call [`load_env`] first if settings live in the `.env` file.
    pub fn from_env() -> Self {
        Self {
            credentials: Credentials::new(spotify_client_id(), spotify_secret_key()),
            api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}
