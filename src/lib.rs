//! Spotify Artist Client Library
//!
//! This library implements a small client for the Spotify Web API using the
//! OAuth client-credentials grant. It manages a process-wide bearer token,
//! caches decoded API responses with per-entry expiry, and exposes two read
//! operations on top of that layer: artist search and artist lookup by ID.
//!
//! # Modules
//!
//! - `cache` - Expiring key/value cache contract and in-memory implementation
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `spotify` - Spotify Web API client (token manager, query executor, artist ops)
//! - `transport` - HTTP transport contract and reqwest implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Fingerprinting and header helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sparcli::{cache::MemoryCache, config, spotify::SpotifyApi, transport::HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> sparcli::Res<()> {
//!     config::load_env().await?;
//!     let api = SpotifyApi::new(
//!         config::ApiConfig::from_env(),
//!         Arc::new(MemoryCache::new()),
//!         Arc::new(HttpTransport::new()),
//!     );
//!     let artists = api.search_artists("coldplay", 10).await;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod spotify;
pub mod transport;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object, keeping Send + Sync bounds
/// for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates in the CLI layer. The
/// macro accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the CLI layer, where an unrecoverable error should
/// terminate with exit code 1. Library code reports failures through
/// `ApiError` and the `log` facade instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a lookup that returned no data.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
