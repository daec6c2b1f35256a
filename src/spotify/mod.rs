//! # Spotify Integration Module
//!
//! This module implements the client side of the Spotify Web API surface the
//! crate covers: the client-credentials token exchange, a generic cached GET
//! executor, and the two artist read operations built on top of it.
//!
//! ## Architecture
//!
//! ```text
//! Artist Operations (search_artists, artist)
//!          ↓
//! Query Executor (SpotifyApi::get — fingerprinted response cache)
//!     ├── Token Manager (TokenManager — cached bearer token)
//!     │        ├── Token Cache (Cache trait, fixed key)
//!     │        └── HTTP Transport (Transport trait)
//!     ├── Response Cache (Cache trait, fingerprint keys)
//!     └── HTTP Transport (Transport trait)
//! ```
//!
//! ## Failure policy
//!
//! Token acquisition reports typed [`ApiError`] values. The query executor
//! converts those, together with its own transport and status failures, into
//! an empty result plus a log record: rendering callers have no useful way to
//! react to a typed error, so the outward contract is "data or nothing".
//! Nothing in this module panics or terminates the process.
//!
//! ## Concurrency
//!
//! The client is shared behind `Arc` across request-handling tasks. Callers
//! racing to refresh an expired token may each perform a redundant exchange;
//! the token endpoint is idempotent and the last writer's token is used going
//! forward, so no single-flight gate is needed.
//!
//! ## API Coverage
//!
//! - `POST /api/token` — client-credentials token exchange (Basic auth)
//! - `GET /v1/search` — artist search (`type`, `q`, `limit`)
//! - `GET /v1/artists/{id}` — artist lookup

pub mod api;
pub mod artists;
pub mod auth;

pub use api::SpotifyApi;
pub use auth::TokenManager;

use thiserror::Error;

/// Failures of the token manager and query executor.
///
/// Only [`ApiError::MissingCredentials`] and [`ApiError::TokenRequest`] cross
/// a module boundary (token manager → query executor); query failures are
/// absorbed at the executor and surface as empty results.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client ID or secret key is empty; no network call was attempted.
    #[error("Spotify credentials are empty")]
    MissingCredentials,

    /// The token exchange failed: network error, non-200 status, or a body
    /// without an access token.
    #[error("Spotify token request failed: {0}")]
    TokenRequest(String),

    /// A data query failed: network error or non-200 status.
    #[error("call to {endpoint} failed: {reason}")]
    Query { endpoint: String, reason: String },
}
