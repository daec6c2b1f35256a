//! Generic cached GET executor against the Spotify Web API.
//!
//! [`SpotifyApi`] is the service the artist operations are expressed in
//! terms of. Its [`get`](SpotifyApi::get) method resolves a query through the
//! response cache first (keyed by a deterministic fingerprint of endpoint and
//! parameters) and only then through the transport with a bearer token. Its
//! outward contract is "data or nothing": every failure is logged and
//! converted to an empty result, because the calling display code can do
//! nothing better with a typed error than render no data.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use serde_json::Value;

use crate::{
    cache::Cache,
    config::ApiConfig,
    spotify::{ApiError, TokenManager},
    transport::Transport,
    utils,
};

/// Spotify Web API client: token manager plus fingerprint-cached queries.
pub struct SpotifyApi {
    api_url: String,
    http_timeout: Duration,
    token_manager: TokenManager,
    cache: Arc<dyn Cache>,
    transport: Arc<dyn Transport>,
}

impl SpotifyApi {
    /// Builds a client from explicit configuration and collaborators.
    ///
    /// The same cache instance backs both the token slot and the response
    /// entries; the keys do not overlap.
    pub fn new(config: ApiConfig, cache: Arc<dyn Cache>, transport: Arc<dyn Transport>) -> Self {
        let token_manager = TokenManager::new(
            config.credentials,
            config.token_url,
            config.http_timeout,
            Arc::clone(&cache),
            Arc::clone(&transport),
        );
        Self {
            api_url: config.api_url,
            http_timeout: config.http_timeout,
            token_manager,
            cache,
            transport,
        }
    }

    /// The configured API base URL, e.g. `https://api.spotify.com/v1`.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.token_manager
    }

    /// Performs a cached GET against `endpoint`, returning the decoded body.
    ///
    /// With `ttl_seconds > 0`, a cached response for the same endpoint and
    /// parameter set is returned without any network call, and a fresh
    /// response is stored until `now + ttl_seconds`. `ttl_seconds == 0`
    /// bypasses the cache entirely (no read, no write) for callers that
    /// cannot tolerate staleness.
    ///
    /// Never fails outward: token failures, transport failures, non-200
    /// statuses, and undecodable bodies all yield `None` plus a log record,
    /// and never populate the cache.
    pub async fn get(
        &self,
        endpoint: &str,
        parameters: &[(String, String)],
        ttl_seconds: i64,
    ) -> Option<Value> {
        let use_cache = ttl_seconds > 0;
        let fingerprint = utils::query_fingerprint(endpoint, parameters);

        if use_cache {
            if let Some(hit) = self.cache.get(&fingerprint).await {
                return Some(hit);
            }
        }

        match self.fetch(endpoint, parameters).await {
            Ok(data) => {
                if use_cache {
                    let expires_at = Utc::now() + chrono::Duration::seconds(ttl_seconds);
                    self.cache.set(&fingerprint, data.clone(), expires_at).await;
                }
                Some(data)
            }
            Err(err @ ApiError::Query { .. }) => {
                log::error!("{err}");
                None
            }
            // Token failures were already logged at the source.
            Err(_) => None,
        }
    }

    async fn fetch(&self, endpoint: &str, parameters: &[(String, String)]) -> Result<Value, ApiError> {
        let token = self.token_manager.access_token().await?;

        let response = self
            .transport
            .get(endpoint, parameters, &token, self.http_timeout)
            .await
            .map_err(|e| ApiError::Query {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        if !response.is_ok() {
            return Err(ApiError::Query {
                endpoint: endpoint.to_string(),
                reason: format!("status {}: {}", response.status, response.body),
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Query {
            endpoint: endpoint.to_string(),
            reason: format!("undecodable body: {e}"),
        })
    }
}
