use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Decoded payload of a successful client-credentials token exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<ArtistSummary>,
    pub total: Option<u64>,
}

/// One entry of a search result, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
}

/// A single artist as returned by the artist-by-id endpoint.
///
/// Only the fields the CLI displays are typed; everything else the API
/// sends is kept in `extra` so the structure stays opaque beyond what is
/// directly consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub popularity: Option<u32>,
    pub followers: Option<Followers>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
}
