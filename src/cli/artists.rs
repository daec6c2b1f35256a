use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{info, success, types::ArtistTableRow, warning};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Searches artists by term and prints an id/name table.
pub async fn search(term: String, limit: u32) {
    let api = super::build_api();

    let pb = spinner("Searching artists...");
    let artists = api.search_artists(&term, limit).await;
    pb.finish_and_clear();

    if artists.is_empty() {
        warning!("No artists found for '{}'.", term);
        return;
    }

    success!("Found {} artists for '{}':", artists.len(), term);

    let table_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|a| ArtistTableRow {
            id: a.id,
            name: a.name,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

/// Displays one artist's details by Spotify ID.
pub async fn show(id: String) {
    let api = super::build_api();

    let pb = spinner("Fetching artist...");
    let artist = api.artist(&id).await;
    pb.finish_and_clear();

    match artist {
        Some(artist) => {
            success!("{}", artist.name);
            info!("ID: {}", artist.id);
            if !artist.genres.is_empty() {
                info!("Genres: {}", artist.genres.join(", "));
            }
            if let Some(popularity) = artist.popularity {
                info!("Popularity: {}", popularity);
            }
            if let Some(followers) = artist.followers {
                info!("Followers: {}", followers.total);
            }
        }
        None => warning!("No artist found for ID '{}'.", id),
    }
}
