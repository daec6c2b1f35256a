//! # CLI Module
//!
//! User-facing commands for the Spotify artist client. Each command builds a
//! client from the environment configuration, delegates to the API layer, and
//! presents the outcome with the crate's colored console macros, spinners,
//! and tables.
//!
//! ## Commands
//!
//! - [`search`] - Search artists by term and list id/name rows
//! - [`show`] - Display a single artist's details by Spotify ID
//! - [`token`] - Acquire an access token and print masked diagnostics
//!
//! Failures never surface as panics: missing configuration terminates with a
//! clear message, while "no data" outcomes (empty search, unknown artist ID)
//! are warnings and a normal exit.

mod artists;
mod auth;

pub use artists::search;
pub use artists::show;
pub use auth::token;

use std::sync::Arc;

use crate::{
    cache::MemoryCache, config, error, spotify::SpotifyApi, transport::HttpTransport, warning,
};

/// Builds the API client every command runs against.
///
/// Exits with an error when credentials are missing entirely; merely
/// odd-looking credentials only earn a warning, since the API is the final
/// judge.
fn build_api() -> SpotifyApi {
    let config = config::ApiConfig::from_env();

    if config.credentials.is_incomplete() {
        error!(
            "Spotify credentials are not configured. Set SPOTIFY_API_CLIENT_ID and SPOTIFY_API_SECRET_KEY."
        );
    }
    if !config.credentials.looks_valid() {
        warning!("Credentials do not look like 32-character alphanumeric Spotify keys.");
    }

    SpotifyApi::new(
        config,
        Arc::new(MemoryCache::new()),
        Arc::new(HttpTransport::new()),
    )
}
