//! Token acquisition for the OAuth client-credentials grant.
//!
//! [`TokenManager`] owns the process-wide bearer token: it serves the cached
//! token while it is still live, and otherwise exchanges the configured
//! client ID / secret key for a fresh one at the token endpoint. The token is
//! cached under a fixed key with a small safety margin subtracted from its
//! lifetime, so a token that would expire mid-flight is never handed out.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::Utc;
use serde_json::Value;

use crate::{
    cache::Cache,
    config::Credentials,
    spotify::ApiError,
    transport::Transport,
    types::TokenResponse,
    utils,
};

/// Fixed cache key of the single process-wide access token.
pub const ACCESS_TOKEN_KEY: &str = "spotify_api:access_token";

/// Seconds subtracted from `expires_in` when caching, to avoid presenting a
/// token that expires while a request is in flight.
const EXPIRY_MARGIN_SECS: i64 = 5;

/// Obtains and refreshes the bearer token used for all API calls.
///
/// Safe to share behind `Arc`; concurrent callers racing past an expired
/// cache entry may each perform a redundant exchange, which is harmless.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    http_timeout: Duration,
    cache: Arc<dyn Cache>,
    transport: Arc<dyn Transport>,
    last_payload: Mutex<Option<TokenResponse>>,
}

impl TokenManager {
    pub fn new(
        credentials: Credentials,
        token_url: String,
        http_timeout: Duration,
        cache: Arc<dyn Cache>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            token_url,
            http_timeout,
            cache,
            transport,
            last_payload: Mutex::new(None),
        }
    }

    /// Returns a live access token, exchanging credentials for a new one if
    /// the cached token is absent or expired.
    ///
    /// A cached, non-expired token is returned without any network call.
    /// Failures are logged here with enough context to diagnose; the secret
    /// key and the Authorization header value never reach the log.
    pub async fn access_token(&self) -> Result<String, ApiError> {
        if let Some(cached) = self.cache.get(ACCESS_TOKEN_KEY).await {
            if let Some(token) = cached.get("access_token").and_then(Value::as_str) {
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            }
        }

        if self.credentials.is_incomplete() {
            log::error!("Spotify credentials are empty");
            return Err(ApiError::MissingCredentials);
        }

        let authorization =
            utils::basic_auth_header(&self.credentials.client_id, &self.credentials.secret_key);

        let response = self
            .transport
            .post_form(
                &self.token_url,
                &authorization,
                &[("grant_type", "client_credentials")],
                self.http_timeout,
            )
            .await
            .map_err(|e| {
                log::error!("Spotify token request failed: {e}");
                ApiError::TokenRequest(e.to_string())
            })?;

        if !response.is_ok() {
            log::error!(
                "Spotify token fetch returned {}: {}",
                response.status,
                response.body
            );
            return Err(ApiError::TokenRequest(format!(
                "status {}: {}",
                response.status, response.body
            )));
        }

        let payload: TokenResponse = serde_json::from_str(&response.body).map_err(|e| {
            log::error!("Spotify token response could not be decoded: {e}");
            ApiError::TokenRequest(format!("malformed token response: {e}"))
        })?;

        if payload.access_token.is_empty() {
            log::error!("Spotify token response contained no access token");
            return Err(ApiError::TokenRequest(
                "token response contained no access token".to_string(),
            ));
        }

        // Keep the full decoded payload around for diagnostics.
        {
            let mut last = self.last_payload.lock().unwrap();
            *last = Some(payload.clone());
        }

        let expires_at =
            Utc::now() + chrono::Duration::seconds(payload.expires_in - EXPIRY_MARGIN_SECS);
        let value = serde_json::to_value(&payload)
            .map_err(|e| ApiError::TokenRequest(format!("token payload not storable: {e}")))?;
        self.cache.set(ACCESS_TOKEN_KEY, value, expires_at).await;

        Ok(payload.access_token)
    }

    /// The most recent decoded token payload obtained by this manager, if a
    /// fresh exchange has happened in this process.
    pub fn last_payload(&self) -> Option<TokenResponse> {
        self.last_payload.lock().unwrap().clone()
    }
}
