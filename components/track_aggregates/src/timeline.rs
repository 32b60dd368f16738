use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use track_query::YearRange;
use track_records::Track;

use crate::genres::GenreCount;

/// One layer column of the stacked timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGenreCounts {
    pub year: i32,
    /// One entry per requested genre, in request order
    pub counts: Vec<GenreCount>,
}

impl YearGenreCounts {
    pub fn count(&self, genre: &str) -> usize {
        self.counts
            .iter()
            .find(|c| c.genre == genre)
            .map_or(0, |c| c.count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// Track counts per year and genre, dense over `years`.
///
/// Every year of the range is present and carries a count for every genre
/// in `genres`, zero when the year has no such tracks. Tracks of other
/// genres are ignored.
pub fn year_genre_series(tracks: &[Track], years: YearRange, genres: &[String]) -> Vec<YearGenreCounts> {
    let mut counts: HashMap<(i32, &str), usize> = HashMap::new();
    for track in tracks {
        if genres.iter().any(|g| *g == track.genre) {
            *counts.entry((track.year, track.genre.as_str())).or_insert(0) += 1;
        }
    }

    years
        .years()
        .map(|year| YearGenreCounts {
            year,
            counts: genres
                .iter()
                .map(|genre| GenreCount {
                    genre: genre.clone(),
                    count: counts.get(&(year, genre.as_str())).copied().unwrap_or(0),
                })
                .collect(),
        })
        .collect()
}
