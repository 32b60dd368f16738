use serde::{Deserialize, Serialize};

/// Sizes of the derived views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Genres stacked in the timeline
    pub timeline_genres: usize,
    /// Genres offered as filter checkboxes
    pub genre_options: usize,
    /// Artists offered to the radar, by mean popularity
    pub top_artists: usize,
    /// Artists compared on the radar at once
    pub max_radar_artists: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timeline_genres: 8,
            genre_options: 20,
            top_artists: 50,
            max_radar_artists: 4,
        }
    }
}
