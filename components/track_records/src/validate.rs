use serde::Serialize;
use tracing::info;

use crate::track::{Track, FALLBACK_GENRE};

pub const YEAR_MIN: i32 = 2000;
pub const YEAR_MAX: i32 = 2023;

/// Outcome of a validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub kept: usize,
    pub dropped: usize,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.kept + self.dropped
    }
}

/// Dataset invariant: year in range, danceability and energy are fractions,
/// and the genre is a real one rather than the fallback.
pub fn is_valid(track: &Track) -> bool {
    (YEAR_MIN..=YEAR_MAX).contains(&track.year)
        && (0.0..=1.0).contains(&track.danceability)
        && (0.0..=1.0).contains(&track.energy)
        && !track.genre.is_empty()
        && track.genre != FALLBACK_GENRE
}

/// Keep only valid tracks, in their original order. Nothing is repaired.
pub fn validate(tracks: Vec<Track>) -> Vec<Track> {
    validate_with_report(tracks).0
}

pub fn validate_with_report(tracks: Vec<Track>) -> (Vec<Track>, ValidationReport) {
    let total = tracks.len();
    let kept: Vec<Track> = tracks.into_iter().filter(is_valid).collect();
    let report = ValidationReport {
        kept: kept.len(),
        dropped: total - kept.len(),
    };

    info!(kept = report.kept, dropped = report.dropped, "validated tracks");
    (kept, report)
}
