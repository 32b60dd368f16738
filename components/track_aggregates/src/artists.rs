use serde::{Deserialize, Serialize};
use track_records::Track;

use crate::group::{group_by, mean};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistPopularity {
    pub artist: String,
    pub mean_popularity: f64,
}

/// The `n` artists with the highest mean popularity
pub fn top_artists_by_popularity(tracks: &[Track], n: usize) -> Vec<ArtistPopularity> {
    let mut artists: Vec<ArtistPopularity> = group_by(tracks, |t| t.artist.as_str())
        .into_iter()
        .filter_map(|(artist, members)| {
            let mean_popularity = mean(members.iter().map(|t| f64::from(t.popularity)))?;
            Some(ArtistPopularity {
                artist: artist.to_string(),
                mean_popularity,
            })
        })
        .collect();

    artists.sort_by(|a, b| b.mean_popularity.total_cmp(&a.mean_popularity));
    artists.truncate(n);
    artists
}
