use serde::{Deserialize, Serialize};
use track_records::{Track, TrackId};

/// Danceability against energy, one point per track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub id: TrackId,
    pub x: f64,
    pub y: f64,
    pub genre: String,
    pub label: String,
}

pub fn scatter_points(tracks: &[Track]) -> Vec<ScatterPoint> {
    tracks
        .iter()
        .map(|t| ScatterPoint {
            id: t.id.clone(),
            x: t.danceability,
            y: t.energy,
            genre: t.genre.clone(),
            label: t.display_name(),
        })
        .collect()
}
