use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use sha2::{Digest, Sha256};

/// Cache-key prefix for fingerprinted query responses.
pub const QUERY_KEY_PREFIX: &str = "spotify_api:query:";

/// Derives the deterministic cache key for a query.
///
/// The fingerprint is a SHA-256 over the endpoint and the parameter pairs in
/// sorted order, so two logically identical queries always map to the same
/// key regardless of how the caller ordered its parameters. Key and value
/// bytes are separated by NUL so adjacent fields cannot run together.
pub fn query_fingerprint(endpoint: &str, parameters: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = parameters.iter().collect();
    sorted.sort();

    let mut hasher = Sha256::new();
    hasher.update(endpoint.as_bytes());
    for (key, value) in sorted {
        hasher.update([0u8]);
        hasher.update(key.as_bytes());
        hasher.update([0u8]);
        hasher.update(value.as_bytes());
    }

    format!(
        "{prefix}{digest}",
        prefix = QUERY_KEY_PREFIX,
        digest = URL_SAFE_NO_PAD.encode(hasher.finalize())
    )
}

/// Builds the `Authorization` value for the token exchange:
/// `Basic base64(client_id:secret_key)`.
pub fn basic_auth_header(client_id: &str, secret_key: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{secret_key}"))
    )
}

/// Redacts a token down to its first and last four characters for display.
///
/// Short values are fully masked. Used by the CLI's `token` command so
/// diagnostics output never exposes a usable credential.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
