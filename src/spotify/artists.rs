//! Artist read operations, expressed in terms of the cached query executor.

use crate::{
    config::DEFAULT_QUERY_TTL,
    spotify::SpotifyApi,
    types::{ArtistDetail, ArtistSummary, SearchResponse},
};

impl SpotifyApi {
    /// Searches for artists matching `term`, returning at most `count`
    /// summaries in the order the API ranked them.
    ///
    /// Any failure (auth, network, non-200, odd payload shape) yields an
    /// empty list; the cause is already in the log.
    pub async fn search_artists(&self, term: &str, count: u32) -> Vec<ArtistSummary> {
        let endpoint = format!("{}/search", self.api_url());
        let parameters = vec![
            ("type".to_string(), "artist".to_string()),
            ("q".to_string(), term.to_string()),
            ("limit".to_string(), count.to_string()),
        ];

        let Some(data) = self.get(&endpoint, &parameters, DEFAULT_QUERY_TTL).await else {
            return Vec::new();
        };

        match serde_json::from_value::<SearchResponse>(data) {
            Ok(response) => response
                .artists
                .items
                .into_iter()
                .take(count as usize)
                .collect(),
            Err(e) => {
                log::warn!("search response for '{term}' had an unexpected shape: {e}");
                Vec::new()
            }
        }
    }

    /// Looks up a single artist by its Spotify ID.
    ///
    /// Returns `None` when the artist does not exist (a 404 from the API) or
    /// when the query failed; not-found is an expected outcome, not an error.
    pub async fn artist(&self, id: &str) -> Option<ArtistDetail> {
        let endpoint = format!("{}/artists/{}", self.api_url(), id);
        let data = self.get(&endpoint, &[], DEFAULT_QUERY_TTL).await?;

        match serde_json::from_value::<ArtistDetail>(data) {
            Ok(detail) => Some(detail),
            Err(e) => {
                log::warn!("artist response for '{id}' had an unexpected shape: {e}");
                None
            }
        }
    }
}
